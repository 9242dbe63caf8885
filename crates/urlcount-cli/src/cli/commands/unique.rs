//! `urlcount unique` – count distinct scheme://host keys.

use anyhow::Result;
use urlcount_core::config::UrlCountConfig;
use urlcount_core::tally_unique_urls;

use super::report_skipped;
use crate::cli::UrlSource;

pub fn run_unique(source: &UrlSource, cfg: &UrlCountConfig) -> Result<()> {
    let urls = source.load()?;
    let tally = tally_unique_urls(&urls, source.policy(cfg))?;
    tracing::info!(inputs = urls.len(), unique = tally.value, "unique");
    println!("{}", tally.value);
    report_skipped(tally.skipped);
    Ok(())
}
