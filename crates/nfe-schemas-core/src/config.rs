use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Portal page that lists the schema bundles.
pub const DEFAULT_PORTAL_URL: &str =
    "https://www.nfe.fazenda.gov.br/portal/listaConteudo.aspx?tipoConteudo=BMPFMBoln3w=";

/// Base URL that relative download hrefs are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://www.nfe.fazenda.gov.br/portal/";

/// Directory the archives are extracted into.
pub const DEFAULT_DEST_DIR: &str = "src/dfe/nfe/schemas/tmp";

/// Headings that delimit the "official versions" listing on the portal page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionMarkers {
    /// CSS selector matching every section heading on the page.
    pub heading_selector: String,
    /// Text of the heading that opens the section to scrape.
    pub start_title: String,
    /// Text of the heading that follows it (closes the section).
    pub end_title: String,
}

impl Default for SectionMarkers {
    fn default() -> Self {
        Self {
            heading_selector: "p.tituloSessao".to_string(),
            start_title: "VERSÕES OFICIAIS (em uso)".to_string(),
            end_title: "VERSÕES PARA TESTES (Homologação)".to_string(),
        }
    }
}

/// Transport settings for the curl handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 300,
            max_redirections: 10,
            user_agent: concat!("nfe-schemas/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/nfe-schemas/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Portal page scraped for download links.
    pub portal_url: String,
    /// Base URL prefixed to every discovered href.
    pub base_url: String,
    /// Destination directory; created if missing, shared by every archive.
    pub dest_dir: PathBuf,
    pub markers: SectionMarkers,
    pub http: HttpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portal_url: DEFAULT_PORTAL_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            dest_dir: PathBuf::from(DEFAULT_DEST_DIR),
            markers: SectionMarkers::default(),
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nfe-schemas")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Config::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. Missing keys fall back to defaults.
pub fn load_from(path: &Path) -> Result<Config> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
