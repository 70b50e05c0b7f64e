//! Errors that end a sync run.

use crate::archive::ExtractError;
use crate::discover::{DiscoverError, DownloadLink};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot create destination {path}")]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("link discovery failed")]
    Discover(#[from] DiscoverError),

    /// Discovery succeeded but the section lists nothing.
    #[error("No link found")]
    NoLinks,

    #[error("extracting {link}")]
    Extract {
        link: DownloadLink,
        #[source]
        source: ExtractError,
    },
}
