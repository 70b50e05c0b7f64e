//! Fetch one schema bundle and unpack it.
//!
//! The ZIP body is held entirely in memory and opened from that buffer; no
//! temp file is written for the archive itself.

mod error;
mod extract;

pub use error::{ArchiveError, ExtractError};
pub use extract::{extract_zip, ExtractReport};

use crate::checksum;
use crate::discover::DownloadLink;
use crate::http::HttpClient;
use std::path::Path;

/// Outcome of one successful fetch-and-extract.
#[derive(Debug, Clone)]
pub struct ArchiveReport {
    pub link: DownloadLink,
    /// Size of the downloaded ZIP in bytes.
    pub size: u64,
    /// SHA-256 of the downloaded ZIP (lowercase hex).
    pub sha256: String,
    pub extracted: ExtractReport,
}

/// Downloads `link` and extracts it into `dest`.
///
/// A failed GET returns [`ArchiveError::Fetch`] before anything touches the
/// filesystem.
pub fn fetch_and_extract(
    client: &HttpClient,
    link: &DownloadLink,
    dest: &Path,
) -> Result<ArchiveReport, ArchiveError> {
    tracing::info!(url = %link, "downloading archive");
    let body = client.get(link.as_str())?;

    let sha256 = checksum::sha256_hex(&body);
    tracing::debug!(url = %link, bytes = body.len(), sha256 = %sha256, "archive downloaded");

    let extracted = extract_zip(&body, dest)?;
    tracing::info!(
        url = %link,
        files = extracted.files.len(),
        dest = %dest.display(),
        "archive extracted"
    );

    Ok(ArchiveReport {
        link: link.clone(),
        size: body.len() as u64,
        sha256,
        extracted,
    })
}
