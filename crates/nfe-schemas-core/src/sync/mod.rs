//! One discover-and-download pass.
//!
//! Prepares the destination, discovers the links once, then fetches and
//! extracts each link in order. A failed GET, or an archive rejected before
//! anything was written, is logged and skipped; a bad archive ends the run.

mod error;

pub use error::RunError;

use crate::archive::{self, ArchiveError, ArchiveReport, ExtractError};
use crate::config::Config;
use crate::discover::{self, DownloadLink};
use crate::http::HttpClient;
use std::fs;
use std::path::Path;

/// A link that was skipped. Nothing was written for it: either the GET
/// failed or the archive had an entry escaping the destination.
#[derive(Debug)]
pub struct SkippedLink {
    pub link: DownloadLink,
    pub error: ArchiveError,
}

/// Result of a completed pass.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of links found on the portal page.
    pub discovered: usize,
    pub archives: Vec<ArchiveReport>,
    pub failed: Vec<SkippedLink>,
}

impl RunSummary {
    pub fn files_extracted(&self) -> usize {
        self.archives.iter().map(|a| a.extracted.files.len()).sum()
    }
}

/// Per-link progress reported while the pass runs.
#[derive(Debug)]
pub enum Progress<'a> {
    Extracted(&'a ArchiveReport),
    Skipped(&'a SkippedLink),
}

/// Creates `dest` and its parents if missing. Safe to call repeatedly.
pub fn prepare_destination(dest: &Path) -> Result<(), RunError> {
    fs::create_dir_all(dest).map_err(|source| RunError::Destination {
        path: dest.to_path_buf(),
        source,
    })
}

/// Runs a full pass with the settings in `config`.
pub fn run(client: &HttpClient, config: &Config) -> Result<RunSummary, RunError> {
    run_with_progress(client, config, |_| {})
}

/// Like [`run`], calling `on_progress` after each link is processed.
pub fn run_with_progress<F>(
    client: &HttpClient,
    config: &Config,
    mut on_progress: F,
) -> Result<RunSummary, RunError>
where
    F: FnMut(Progress<'_>),
{
    let dest = config.dest_dir.as_path();
    prepare_destination(dest)?;

    let links = discover::discover_links(client, config)?;
    if links.is_empty() {
        tracing::warn!(url = %config.portal_url, "official section lists no links");
        return Err(RunError::NoLinks);
    }

    let mut summary = RunSummary {
        discovered: links.len(),
        ..RunSummary::default()
    };

    for link in links {
        match archive::fetch_and_extract(client, &link, dest) {
            Ok(report) => {
                summary.archives.push(report);
                if let Some(report) = summary.archives.last() {
                    on_progress(Progress::Extracted(report));
                }
            }
            Err(ArchiveError::Extract(source)) if !writes_nothing(&source) => {
                tracing::error!(url = %link, error = %source, "extraction failed");
                return Err(RunError::Extract { link, source });
            }
            Err(error) => {
                tracing::warn!(url = %link, error = %error, "archive skipped");
                summary.failed.push(SkippedLink { link, error });
                if let Some(failed) = summary.failed.last() {
                    on_progress(Progress::Skipped(failed));
                }
            }
        }
    }

    tracing::info!(
        discovered = summary.discovered,
        extracted = summary.archives.len(),
        failed = summary.failed.len(),
        files = summary.files_extracted(),
        "sync finished"
    );
    Ok(summary)
}

/// Unsafe entry names are caught before the first write, so the archive can
/// be skipped without leaving partial output behind.
fn writes_nothing(err: &ExtractError) -> bool {
    matches!(err, ExtractError::UnsafePath(_))
}
