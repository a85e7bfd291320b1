//! `opurl sources` – show the manifest's version and sources in server order.

use anyhow::Result;
use opurl_core::config::ProviderConfig;
use opurl_core::resolver::UpdateUrlResolver;

pub fn run_sources(cfg: &ProviderConfig, base_url: Option<String>) -> Result<()> {
    let base_url = base_url.unwrap_or_else(|| cfg.base_url.clone());
    let manifest = UpdateUrlResolver::from_config(cfg).fetch_manifest(&base_url)?;

    println!("Version: {}", manifest.version.as_deref().unwrap_or("-"));
    if manifest.sources.is_empty() {
        println!("No sources in manifest.");
        return Ok(());
    }
    println!("{:<20} {}", "NAME", "URL");
    for s in &manifest.sources {
        println!(
            "{:<20} {}",
            s.name.as_deref().unwrap_or("-"),
            s.usable_url().unwrap_or("-")
        );
    }
    Ok(())
}
