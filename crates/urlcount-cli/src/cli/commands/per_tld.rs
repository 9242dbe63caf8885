//! `urlcount per-tld` – count URLs per top-level domain.

use anyhow::Result;
use urlcount_core::config::{OutputFormat, UrlCountConfig};
use urlcount_core::{tally_per_top_level_domain, TldCounts};

use super::report_skipped;
use crate::cli::UrlSource;

pub fn run_per_tld(source: &UrlSource, json: bool, cfg: &UrlCountConfig) -> Result<()> {
    let urls = source.load()?;
    let tally = tally_per_top_level_domain(&urls, source.policy(cfg))?;
    tracing::info!(inputs = urls.len(), domains = tally.value.len(), "per-tld");

    let format = if json { OutputFormat::Json } else { cfg.output };
    print!("{}", render_counts(&tally.value, format)?);
    report_skipped(tally.skipped);
    Ok(())
}

/// Renders counts sorted by domain, newline-terminated.
pub(crate) fn render_counts(counts: &TldCounts, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(counts)?)),
        OutputFormat::Text => Ok(counts
            .iter()
            .map(|(domain, n)| format!("{domain}\t{n}\n"))
            .collect()),
    }
}
