//! `urlcount demo` – run the documented example inputs.

use anyhow::Result;
use urlcount_core::{count_unique_urls, count_unique_urls_per_top_level_domain, InvalidUrlPolicy};

const UNIQUE_EXAMPLES: &[&[&str]] = &[
    &["https://example.com", "https://example.com/"],
    &["https://example.com", "http://example.com"],
    &["https://example.com?", "https://example.com"],
    &["https://example.com?a=1&b=2", "https://example.com?b=2&a=1"],
];

const PER_TLD_EXAMPLES: &[&[&str]] = &[
    &["https://example.com"],
    &["https://example.com", "https://subdomain.example.com"],
];

/// One line per example: the inputs and their result.
pub(crate) fn demo_lines() -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(UNIQUE_EXAMPLES.len() + PER_TLD_EXAMPLES.len());
    for urls in UNIQUE_EXAMPLES {
        let n = count_unique_urls(*urls, InvalidUrlPolicy::Abort)?;
        lines.push(format!("unique  {urls:?} => {n}"));
    }
    for urls in PER_TLD_EXAMPLES {
        let counts = count_unique_urls_per_top_level_domain(*urls, InvalidUrlPolicy::Abort)?;
        lines.push(format!("per-tld {urls:?} => {counts:?}"));
    }
    Ok(lines)
}

pub fn run_demo() -> Result<()> {
    for line in demo_lines()? {
        println!("{line}");
    }
    Ok(())
}
