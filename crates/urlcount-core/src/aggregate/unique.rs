use std::collections::HashSet;

use crate::error::UrlError;

use super::tally::for_each_key;
use super::{InvalidUrlPolicy, Tally};

/// Counts distinct `scheme://host` keys in `urls`.
///
/// Duplicates collapse and input order does not matter. Empty input yields 0.
///
/// # Examples
///
/// - `["https://example.com", "https://example.com/"]` → 1
/// - `["https://example.com", "http://example.com"]` → 2
pub fn count_unique_urls<I>(urls: I, policy: InvalidUrlPolicy) -> Result<usize, UrlError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tally_unique_urls(urls, policy).map(|t| t.value)
}

/// Like [`count_unique_urls`], also reporting how many inputs were skipped.
pub fn tally_unique_urls<I>(urls: I, policy: InvalidUrlPolicy) -> Result<Tally<usize>, UrlError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let skipped = for_each_key(urls, policy, |key| {
        seen.insert(key);
    })?;
    tracing::debug!(unique = seen.len(), skipped, "counted unique urls");
    Ok(Tally {
        value: seen.len(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(urls: &[&str]) -> usize {
        count_unique_urls(urls, InvalidUrlPolicy::Abort).unwrap()
    }

    #[test]
    fn documented_examples() {
        assert_eq!(count(&["https://example.com"]), 1);
        assert_eq!(count(&["https://example.com", "https://example.com/"]), 1);
        assert_eq!(count(&["https://example.com", "http://example.com"]), 2);
        assert_eq!(count(&["https://example.com?", "https://example.com"]), 1);
        assert_eq!(
            count(&["https://example.com?a=1&b=2", "https://example.com?b=2&a=1"]),
            1
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(count(&[]), 0);
    }

    #[test]
    fn subdomains_are_distinct() {
        assert_eq!(
            count(&["https://example.com", "https://sub.example.com"]),
            2
        );
    }

    #[test]
    fn owned_strings_accepted() {
        let urls = vec![
            "https://a.com/x".to_string(),
            "https://a.com/y".to_string(),
        ];
        assert_eq!(count_unique_urls(&urls, InvalidUrlPolicy::Abort).unwrap(), 1);
    }

    #[test]
    fn invalid_aborts_or_skips() {
        let urls = ["https://a.com", "nope", "https://a.com/"];
        assert!(count_unique_urls(urls, InvalidUrlPolicy::Abort).is_err());
        assert_eq!(
            tally_unique_urls(urls, InvalidUrlPolicy::Skip).unwrap(),
            Tally {
                value: 1,
                skipped: 1
            }
        );
    }
}
