//! Adapter for the packaging-automation host.
//!
//! The host hands over a JSON-object environment; this module reads the
//! declared input variables from it, runs the resolver, and writes the `url`
//! output variable back. The resolver itself knows nothing about the host.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::ProviderConfig;
use crate::error::ResolveError;
use crate::fetch::{CurlFetcher, ManifestFetcher};
use crate::resolver::{ResolutionRequest, UpdateUrlResolver};

/// Shared variable state exchanged with the host.
pub type Env = Map<String, Value>;

pub const DESCRIPTION: &str = "Provides a download URL for the latest 1Password";

pub const BASE_URL_VAR: &str = "base_url";
pub const SOURCE_VAR: &str = "source";
pub const URL_VAR: &str = "url";

/// Declared host variable.
#[derive(Debug, Clone, Copy)]
pub struct VariableSpec {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

pub const INPUT_VARIABLES: &[VariableSpec] = &[
    VariableSpec {
        name: BASE_URL_VAR,
        required: false,
        description: "The 1Password update check URL",
    },
    VariableSpec {
        name: SOURCE_VAR,
        required: false,
        description: "Where to download the disk image. \
            Possible values are 'Amazon CloudFront', 'CacheFly' and 'AgileBits'. \
            Default is Amazon CloudFront.",
    },
];

pub const OUTPUT_VARIABLES: &[VariableSpec] = &[VariableSpec {
    name: URL_VAR,
    required: false,
    description: "URL to the latest 1Password release.",
}];

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// Input variable present but not a string.
    #[error("input variable '{name}' must be a string")]
    InvalidInput { name: String },
}

/// Host-facing processor: env in, `url` out.
#[derive(Debug, Clone)]
pub struct UrlProvider<F = CurlFetcher> {
    resolver: UpdateUrlResolver<F>,
    config: ProviderConfig,
}

impl UrlProvider<CurlFetcher> {
    pub fn from_config(config: ProviderConfig) -> Self {
        Self {
            resolver: UpdateUrlResolver::from_config(&config),
            config,
        }
    }
}

impl<F: ManifestFetcher> UrlProvider<F> {
    pub fn new(resolver: UpdateUrlResolver<F>, config: ProviderConfig) -> Self {
        Self { resolver, config }
    }

    /// Build the request from `env`, falling back to config defaults.
    pub fn request_from_env(&self, env: &Env) -> Result<ResolutionRequest, ProcessorError> {
        let base_url = string_input(env, BASE_URL_VAR)?;
        let source = string_input(env, SOURCE_VAR)?;
        Ok(ResolutionRequest::with_defaults(base_url, source, &self.config))
    }

    /// Resolve and store the result under `url`. `env` is untouched on failure.
    pub fn main(&self, env: &mut Env) -> Result<(), ProcessorError> {
        let request = self.request_from_env(env)?;
        let url = self.resolver.resolve(&request)?;
        env.insert(URL_VAR.to_string(), Value::String(url));
        Ok(())
    }
}

/// Missing and `null` both mean "use the default".
fn string_input(env: &Env, name: &str) -> Result<Option<String>, ProcessorError> {
    match env.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ProcessorError::InvalidInput {
            name: name.to_string(),
        }),
    }
}

/// Apply `KEY=VALUE` overrides to `env` as string values.
pub fn apply_overrides<'a, I>(env: &mut Env, pairs: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE, got '{}'", pair))?;
        if key.is_empty() {
            anyhow::bail!("empty variable name in '{}'", pair);
        }
        env.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(())
}
