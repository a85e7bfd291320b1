//! Resolve a download URL for a named source from a remote update manifest.
//!
//! Linear pass per call: fetch, decode, first exact-name match, return its URL.

use crate::config::ProviderConfig;
use crate::error::ResolveError;
use crate::fetch::{CurlFetcher, ManifestFetcher};
use crate::manifest::{parse_manifest, Manifest};

/// Caller inputs for one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub base_url: String,
    pub preferred_source: String,
}

impl ResolutionRequest {
    pub fn new(base_url: impl Into<String>, preferred_source: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            preferred_source: preferred_source.into(),
        }
    }

    /// Fill missing inputs from `cfg` (whose own defaults are the built-in constants).
    pub fn with_defaults(
        base_url: Option<String>,
        preferred_source: Option<String>,
        cfg: &ProviderConfig,
    ) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| cfg.base_url.clone()),
            preferred_source: preferred_source.unwrap_or_else(|| cfg.source.clone()),
        }
    }
}

/// Fetches a manifest and picks the download URL for a source label.
#[derive(Debug, Clone)]
pub struct UpdateUrlResolver<F = CurlFetcher> {
    fetcher: F,
}

impl UpdateUrlResolver<CurlFetcher> {
    /// Resolver over libcurl with the transport settings from `cfg`.
    pub fn from_config(cfg: &ProviderConfig) -> Self {
        Self::new(CurlFetcher::from_config(&cfg.http()))
    }
}

impl<F: ManifestFetcher> UpdateUrlResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Downloads and decodes the manifest at `base_url`. Single attempt.
    pub fn fetch_manifest(&self, base_url: &str) -> Result<Manifest, ResolveError> {
        let body = self
            .fetcher
            .fetch(base_url)
            .map_err(|cause| ResolveError::fetch(base_url, cause))?;
        let manifest = parse_manifest(&body).map_err(|e| ResolveError::fetch(base_url, e))?;

        match manifest.version.as_deref() {
            Some(version) => tracing::info!("Found version {}", version),
            None => tracing::info!("Found version None"),
        }
        Ok(manifest)
    }

    /// Returns the URL of the first source named exactly `preferred_source`.
    pub fn resolve_url(
        &self,
        base_url: &str,
        preferred_source: &str,
    ) -> Result<String, ResolveError> {
        tracing::info!("Preferred source is {}", preferred_source);

        let manifest = self.fetch_manifest(base_url)?;
        let source = manifest
            .find_source(preferred_source)
            .ok_or_else(|| ResolveError::NoSource {
                source_name: preferred_source.to_string(),
            })?;
        let url = source
            .usable_url()
            .ok_or_else(|| ResolveError::MissingUrl {
                source_name: preferred_source.to_string(),
            })?;

        tracing::info!("Found URL {}", url);
        Ok(url.to_string())
    }

    pub fn resolve(&self, request: &ResolutionRequest) -> Result<String, ResolveError> {
        self.resolve_url(&request.base_url, &request.preferred_source)
    }
}
