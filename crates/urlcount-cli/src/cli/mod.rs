//! CLI for urlcount.

mod commands;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use urlcount_core::config;

use commands::{run_completions, run_demo, run_normalize, run_per_tld, run_unique};
pub use source::UrlSource;

/// Top-level CLI for urlcount.
#[derive(Debug, Parser)]
#[command(name = "urlcount")]
#[command(about = "urlcount: count unique URLs by scheme and host", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Count distinct scheme://host keys.
    Unique {
        #[command(flatten)]
        source: UrlSource,
    },

    /// Count URLs per top-level domain (every occurrence counts).
    PerTld {
        #[command(flatten)]
        source: UrlSource,

        /// Print a JSON object instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },

    /// Print the scheme://host key of each URL.
    Normalize {
        #[command(flatten)]
        source: UrlSource,
    },

    /// Run the built-in example inputs and print their results.
    Demo,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Unique { source } => run_unique(&source, &cfg)?,
            CliCommand::PerTld { source, json } => run_per_tld(&source, json, &cfg)?,
            CliCommand::Normalize { source } => run_normalize(&source, &cfg)?,
            CliCommand::Demo => run_demo()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
