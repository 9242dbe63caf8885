//! `urlcount normalize` – print the scheme://host key of each URL.

use anyhow::Result;
use urlcount_core::config::UrlCountConfig;
use urlcount_core::{normalize_url, InvalidUrlPolicy};

use super::report_skipped;
use crate::cli::UrlSource;

pub fn run_normalize(source: &UrlSource, cfg: &UrlCountConfig) -> Result<()> {
    let urls = source.load()?;
    let policy = source.policy(cfg);
    let mut skipped = 0;
    for url in &urls {
        match normalize_url(url) {
            Ok(key) => println!("{key}"),
            Err(err) if policy == InvalidUrlPolicy::Skip => {
                tracing::warn!("skipping input: {}", err);
                skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
    report_skipped(skipped);
    Ok(())
}
