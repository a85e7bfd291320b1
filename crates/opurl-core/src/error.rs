//! Resolution error types.
//!
//! Every failure is terminal for the current invocation; nothing here is
//! retried or recovered from.

use thiserror::Error;

/// Underlying reason a manifest could not be fetched or decoded.
#[derive(Debug, Error)]
pub enum FetchCause {
    /// Curl reported an error (DNS, connection, timeout, malformed URL, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Body was not a JSON manifest.
    #[error("invalid manifest JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error returned by [`crate::resolver::UpdateUrlResolver`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The manifest could not be downloaded or decoded.
    #[error("Can't download {url}: {cause}")]
    Fetch {
        url: String,
        #[source]
        cause: FetchCause,
    },
    /// No entry in `sources` carries the requested name.
    #[error("No download source for {source_name}")]
    NoSource { source_name: String },
    /// The matching entry has an absent or empty `url`.
    #[error("No URL found for {source_name}")]
    MissingUrl { source_name: String },
}

impl ResolveError {
    pub fn fetch(url: &str, cause: impl Into<FetchCause>) -> Self {
        ResolveError::Fetch {
            url: url.to_string(),
            cause: cause.into(),
        }
    }
}
