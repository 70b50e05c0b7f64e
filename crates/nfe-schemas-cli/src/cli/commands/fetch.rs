//! `nfe-schemas fetch` – discover the official bundles and extract them.

use anyhow::Result;
use nfe_schemas_core::config::Config;
use nfe_schemas_core::http::HttpClient;
use nfe_schemas_core::sync::{self, Progress};

pub fn run_fetch(cfg: &Config) -> Result<()> {
    let client = HttpClient::new(cfg.http.clone());
    println!("Fetching schema links from {}", cfg.portal_url);

    let summary = sync::run_with_progress(&client, cfg, |progress| match progress {
        Progress::Extracted(report) => println!(
            "Extracted {} file(s) from {} ({} bytes, sha256 {})",
            report.extracted.files.len(),
            report.link,
            report.size,
            report.sha256
        ),
        Progress::Skipped(failed) => {
            println!("Skipped {}: {}", failed.link, failed.error)
        }
    })?;

    println!(
        "Done: {} of {} archive(s) extracted into {} ({} file(s))",
        summary.archives.len(),
        summary.discovered,
        cfg.dest_dir.display(),
        summary.files_extracted()
    );
    if !summary.failed.is_empty() {
        println!("{} archive(s) skipped; see messages above", summary.failed.len());
    }
    Ok(())
}
