use std::collections::BTreeMap;

use crate::error::UrlError;

use super::tally::for_each_key;
use super::{InvalidUrlPolicy, Tally};

/// Occurrence count per top-level domain, sorted by domain.
pub type TldCounts = BTreeMap<String, usize>;

/// Counts URLs per top-level domain.
///
/// Every occurrence counts, exact duplicates included. Domains not present in
/// the input have no entry. Empty input yields an empty map.
///
/// # Examples
///
/// - `["https://example.com"]` → `{"example.com": 1}`
/// - `["https://example.com", "https://subdomain.example.com"]` → `{"example.com": 2}`
pub fn count_unique_urls_per_top_level_domain<I>(
    urls: I,
    policy: InvalidUrlPolicy,
) -> Result<TldCounts, UrlError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tally_per_top_level_domain(urls, policy).map(|t| t.value)
}

/// Like [`count_unique_urls_per_top_level_domain`], also reporting how many
/// inputs were skipped.
pub fn tally_per_top_level_domain<I>(
    urls: I,
    policy: InvalidUrlPolicy,
) -> Result<Tally<TldCounts>, UrlError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts = TldCounts::new();
    let skipped = for_each_key(urls, policy, |key| {
        *counts.entry(key.top_level_domain()).or_insert(0) += 1;
    })?;
    tracing::debug!(domains = counts.len(), skipped, "counted urls per domain");
    Ok(Tally {
        value: counts,
        skipped,
    })
}
