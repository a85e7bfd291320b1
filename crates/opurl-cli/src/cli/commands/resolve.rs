//! `opurl resolve` – print the resolved download URL.

use anyhow::Result;
use opurl_core::config::ProviderConfig;
use opurl_core::resolver::{ResolutionRequest, UpdateUrlResolver};

pub fn run_resolve(
    cfg: &ProviderConfig,
    base_url: Option<String>,
    source: Option<String>,
) -> Result<()> {
    let request = ResolutionRequest::with_defaults(base_url, source, cfg);
    let url = UpdateUrlResolver::from_config(cfg).resolve(&request)?;
    println!("{url}");
    Ok(())
}
