//! Error types for link discovery.

use crate::http::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The portal page could not be fetched.
    #[error("portal page unavailable")]
    Fetch(#[from] FetchError),

    /// A section heading was not present on the page. The page layout changed.
    #[error("section marker not found: {marker:?}")]
    SectionNotFound { marker: String },

    #[error("invalid heading selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("invalid base URL {url:?}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("cannot resolve link {href:?}")]
    InvalidLink {
        href: String,
        #[source]
        source: LinkError,
    },
}

/// Why an href could not be turned into a download link.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("href climbs above the base URL")]
    EscapesBase,

    #[error(transparent)]
    Parse(#[from] url::ParseError),
}
