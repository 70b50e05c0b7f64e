//! `nfe-schemas links` – print the official download links (dry run).

use anyhow::{bail, Result};
use nfe_schemas_core::config::Config;
use nfe_schemas_core::discover;
use nfe_schemas_core::http::HttpClient;

pub fn run_links(cfg: &Config) -> Result<()> {
    let client = HttpClient::new(cfg.http.clone());
    let links = discover::discover_links(&client, cfg)?;
    if links.is_empty() {
        bail!("No link found");
    }
    for link in links {
        println!("{link}");
    }
    Ok(())
}
