//! CLI for the opurl update-manifest URL provider.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use opurl_core::config::{self, ProviderConfig};

use commands::{run_completions, run_info, run_man, run_process, run_resolve, run_sources};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "opurl")]
#[command(about = "Resolve a download URL from a vendor update manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the download URL for a source.
    Resolve {
        /// Update-check URL (defaults to the configured endpoint).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Source name to select, matched exactly (e.g. "CacheFly").
        #[arg(long, value_name = "NAME")]
        source: Option<String>,
    },

    /// Run as a host processor: JSON env on stdin, updated env on stdout.
    Process {
        /// Variable overrides applied on top of the stdin env.
        #[arg(value_name = "KEY=VALUE")]
        vars: Vec<String>,
    },

    /// List the version and download sources in the manifest.
    Sources {
        /// Update-check URL (defaults to the configured endpoint).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Describe the processor and its input/output variables.
    Info,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve { base_url, source } => {
                run_resolve(&load_config()?, base_url, source)?
            }
            CliCommand::Process { vars } => run_process(load_config()?, &vars)?,
            CliCommand::Sources { base_url } => run_sources(&load_config()?, base_url)?,
            CliCommand::Info => run_info()?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// Only commands that talk to the network need the config file.
fn load_config() -> Result<ProviderConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
