use std::fmt;
use url::Url;

use super::LinkError;

/// Absolute URL of one schema bundle (a ZIP archive).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DownloadLink(Url);

impl DownloadLink {
    /// Builds the link for a trimmed `href` listed on the portal page.
    ///
    /// Relative hrefs are appended to `base` as text, so the base path is
    /// always kept: a base without a trailing `/` gets one, and a leading
    /// `/` on the href does not jump to the host root. An href with a scheme
    /// is taken as it is. A relative href that climbs above `base` with `..`
    /// is rejected.
    pub fn resolve(base: &Url, href: &str) -> Result<Self, LinkError> {
        let href = href.trim();
        if let Ok(absolute) = Url::parse(href) {
            return Ok(DownloadLink(absolute));
        }

        let mut prefix = base.as_str().to_string();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        let url = Url::parse(&format!("{}{}", prefix, href.trim_start_matches('/')))?;
        if !url.as_str().starts_with(&prefix) {
            return Err(LinkError::EscapesBase);
        }
        Ok(DownloadLink(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Url> for DownloadLink {
    fn from(url: Url) -> Self {
        DownloadLink(url)
    }
}

impl fmt::Display for DownloadLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
