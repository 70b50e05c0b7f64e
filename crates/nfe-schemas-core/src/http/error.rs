//! Transport error for a single GET.

use thiserror::Error;

/// A GET that did not produce a 2xx body: curl failed (DNS, connect, timeout,
/// TLS) or the server answered with a non-2xx status.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} failed: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
}

impl FetchError {
    /// HTTP status when the server answered; `None` for transport failures.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Curl { .. } => None,
        }
    }
}
