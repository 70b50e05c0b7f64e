//! CLI for the NF-e schema downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use nfe_schemas_core::config::{self, Config};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_fetch, run_links};

/// Top-level CLI. With no subcommand, runs `fetch` with the configured defaults.
#[derive(Debug, Parser)]
#[command(name = "nfe-schemas", version)]
#[command(about = "Download the official NF-e XML schema bundles", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/nfe-schemas/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Discover the official schema bundles and extract them (default).
    Fetch {
        /// Directory to extract into.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
        /// Portal page to scrape for download links.
        #[arg(long, value_name = "URL")]
        portal_url: Option<String>,
    },

    /// List the download links of the official section without downloading.
    Links {
        /// Portal page to scrape for download links.
        #[arg(long, value_name = "URL")]
        portal_url: Option<String>,
    },

    /// Print a shell completion script to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Fetch {
            dest: None,
            portal_url: None,
        });

        match command {
            CliCommand::Fetch { dest, portal_url } => {
                let mut cfg = load_config(cli.config.as_deref())?;
                apply_overrides(&mut cfg, dest, portal_url);
                run_fetch(&cfg)?;
            }
            CliCommand::Links { portal_url } => {
                let mut cfg = load_config(cli.config.as_deref())?;
                apply_overrides(&mut cfg, None, portal_url);
                run_links(&cfg)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

fn apply_overrides(cfg: &mut Config, dest: Option<PathBuf>, portal_url: Option<String>) {
    if let Some(dest) = dest {
        cfg.dest_dir = dest;
    }
    if let Some(url) = portal_url {
        cfg.portal_url = url;
    }
}

#[cfg(test)]
mod tests;
