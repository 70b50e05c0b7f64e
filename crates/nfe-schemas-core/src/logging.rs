//! Structured logging for the CLI.
//!
//! Logs go to `~/.local/state/nfe-schemas/nfe-schemas.log`; when that file
//! cannot be opened the CLI switches to stderr. `RUST_LOG` overrides the
//! default filter.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,nfe_schemas_core=debug,nfe_schemas=debug";

/// Installs the file subscriber and returns the log path.
pub fn init_logging() -> Result<PathBuf> {
    let path = xdg::BaseDirectories::with_prefix("nfe-schemas")?
        .place_state_file("nfe-schemas.log")
        .context("create log directory")?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    install(BoxMakeWriter::new(Mutex::new(file)))?;
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(path)
}

/// Stderr-only logging, for when [`init_logging`] fails.
pub fn init_logging_stderr() {
    let _ = install(BoxMakeWriter::new(std::io::stderr));
}

fn install(writer: BoxMakeWriter) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))
}
