//! Blocking HTTP GET over libcurl.
//!
//! Both the portal page and every archive are small enough to buffer in
//! memory, so a GET returns the whole body. Redirects are followed; anything
//! outside 2xx after the last redirect is an error.

mod error;

pub use error::FetchError;

use crate::config::HttpConfig;
use std::time::Duration;

/// Reusable request settings. Each `get` opens a fresh curl handle.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: HttpConfig,
}

impl HttpClient {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Performs a GET and returns the full response body.
    ///
    /// Runs in the current thread until the transfer completes or times out.
    pub fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let curl_err = |source: curl::Error| FetchError::Curl {
            url: url.to_string(),
            source,
        };

        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(curl_err)?;
        easy.follow_location(true).map_err(curl_err)?;
        easy.max_redirections(self.config.max_redirections)
            .map_err(curl_err)?;
        easy.connect_timeout(Duration::from_secs(self.config.connect_timeout_secs))
            .map_err(curl_err)?;
        easy.timeout(Duration::from_secs(self.config.timeout_secs))
            .map_err(curl_err)?;
        easy.useragent(&self.config.user_agent).map_err(curl_err)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(curl_err)?;
            transfer.perform().map_err(curl_err)?;
        }

        let code = easy.response_code().map_err(curl_err)?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http {
                url: url.to_string(),
                status: code,
            });
        }

        tracing::debug!(url, status = code, bytes = body.len(), "GET complete");
        Ok(body)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(HttpConfig::default())
    }
}
