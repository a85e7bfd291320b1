//! `opurl process [KEY=VALUE...]` – host processor mode.
//!
//! Reads the env as a JSON object from stdin (unless stdin is a terminal),
//! applies overrides, runs the provider and writes the updated env to stdout.

use anyhow::{Context, Result};
use opurl_core::config::ProviderConfig;
use opurl_core::processor::{apply_overrides, Env, UrlProvider};
use std::io::{self, IsTerminal, Read};

pub fn run_process(cfg: ProviderConfig, vars: &[String]) -> Result<()> {
    let mut env = if io::stdin().is_terminal() {
        Env::new()
    } else {
        read_env(io::stdin().lock())?
    };
    apply_overrides(&mut env, vars.iter().map(String::as_str))?;

    UrlProvider::from_config(cfg).main(&mut env)?;

    let out = serde_json::to_string_pretty(&env)?;
    println!("{out}");
    Ok(())
}

/// Empty input is an empty env; anything else must be a JSON object.
fn read_env(mut reader: impl Read) -> Result<Env> {
    let mut data = String::new();
    reader
        .read_to_string(&mut data)
        .context("read env from stdin")?;
    if data.trim().is_empty() {
        return Ok(Env::new());
    }
    serde_json::from_str(&data).context("parse env from stdin: expected a JSON object")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_env_empty_input() {
        assert!(read_env("  \n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn read_env_object() {
        let env = read_env(r#"{"source":"CacheFly","RECIPE_DIR":"/r"}"#.as_bytes()).unwrap();
        assert_eq!(env.get("source").and_then(|v| v.as_str()), Some("CacheFly"));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn read_env_rejects_non_object() {
        assert!(read_env("[1,2]".as_bytes()).is_err());
        assert!(read_env("source=CacheFly".as_bytes()).is_err());
    }
}
