//! Link discovery on the NF-e portal page.
//!
//! Fetches the portal page once and returns the download links listed in the
//! "official versions" section. A failed fetch is returned as
//! [`DiscoverError::Fetch`] rather than an empty list, so callers can tell a
//! section with no links apart from a page that could not be read.

mod error;
mod link;
mod parse;

pub use error::{DiscoverError, LinkError};
pub use link::DownloadLink;
pub use parse::parse_links;

use crate::config::Config;
use crate::http::HttpClient;
use url::Url;

/// Fetches `config.portal_url` and returns the official-section links in
/// document order.
pub fn discover_links(
    client: &HttpClient,
    config: &Config,
) -> Result<Vec<DownloadLink>, DiscoverError> {
    let base = Url::parse(&config.base_url).map_err(|source| DiscoverError::InvalidBaseUrl {
        url: config.base_url.clone(),
        source,
    })?;

    tracing::info!(url = %config.portal_url, "fetching portal page");
    let body = client.get(&config.portal_url).map_err(|e| {
        tracing::error!(url = %config.portal_url, error = %e, "portal page fetch failed");
        DiscoverError::Fetch(e)
    })?;

    let html = String::from_utf8_lossy(&body);
    let links = parse_links(&html, &config.markers, &base)?;
    tracing::info!(count = links.len(), "discovered download links");
    for link in &links {
        tracing::debug!(url = %link, "link");
    }
    Ok(links)
}
