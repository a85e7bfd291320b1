//! Single-shot manifest download.
//!
//! Uses the curl crate (libcurl) for one blocking GET per call: no retry,
//! no custom headers, no request body.

use crate::config::HttpConfig;
use crate::error::FetchCause;
use std::time::Duration;

/// Source of raw manifest bytes. The resolver only depends on this trait.
pub trait ManifestFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchCause>;
}

/// libcurl-backed fetcher.
///
/// Timeouts are only set when configured; otherwise libcurl defaults apply.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    connect_timeout: Option<Duration>,
    timeout: Option<Duration>,
}

impl CurlFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(http: &HttpConfig) -> Self {
        Self {
            connect_timeout: http.connect_timeout(),
            timeout: http.timeout(),
        }
    }
}

impl ManifestFetcher for CurlFetcher {
    /// Performs a GET and returns the response body.
    ///
    /// Follows redirects. Runs in the current thread.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchCause> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        if let Some(t) = self.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.timeout {
            easy.timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        // Non-HTTP schemes (file://) report status 0.
        let code = easy.response_code()?;
        if code != 0 && !(200..300).contains(&code) {
            return Err(FetchCause::Http(code));
        }

        tracing::debug!(url, code, bytes = body.len(), "manifest fetched");
        Ok(body)
    }
}
