//! Integration tests: public counting API over realistic URL batches.

use urlcount_core::{
    count_unique_urls, count_unique_urls_per_top_level_domain, normalize_url,
    tally_per_top_level_domain, tally_unique_urls, InvalidUrlPolicy, UrlError,
};

const BATCH: &[&str] = &[
    "https://example.com",
    "https://example.com/",
    "http://example.com",
    "https://example.com?a=1&b=2",
    "https://example.com?b=2&a=1",
    "https://subdomain.example.com/path#frag",
    "https://other.com/a/b",
    "https://www.other.com",
];

#[test]
fn unique_count_over_mixed_batch() {
    // https://example.com, http://example.com, https://subdomain.example.com,
    // https://other.com, https://www.other.com
    assert_eq!(count_unique_urls(BATCH, InvalidUrlPolicy::Abort).unwrap(), 5);
}

#[test]
fn unique_count_is_order_independent() {
    let forward = count_unique_urls(BATCH, InvalidUrlPolicy::Abort).unwrap();

    let mut reversed: Vec<&str> = BATCH.to_vec();
    reversed.reverse();
    assert_eq!(
        count_unique_urls(&reversed, InvalidUrlPolicy::Abort).unwrap(),
        forward
    );

    for shift in 1..BATCH.len() {
        let mut rotated: Vec<&str> = BATCH.to_vec();
        rotated.rotate_left(shift);
        assert_eq!(
            count_unique_urls(&rotated, InvalidUrlPolicy::Abort).unwrap(),
            forward
        );
    }
}

#[test]
fn per_domain_counts_every_occurrence() {
    let counts = count_unique_urls_per_top_level_domain(BATCH, InvalidUrlPolicy::Abort).unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["example.com"], 6);
    assert_eq!(counts["other.com"], 2);
    assert!(!counts.contains_key("subdomain.example.com"));
}

#[test]
fn per_domain_total_matches_input_length() {
    let counts = count_unique_urls_per_top_level_domain(BATCH, InvalidUrlPolicy::Abort).unwrap();
    assert_eq!(counts.values().sum::<usize>(), BATCH.len());
}

#[test]
fn normalization_is_idempotent_across_batch() {
    for url in BATCH {
        let once = normalize_url(url).unwrap();
        assert_eq!(normalize_url(&once).unwrap(), once);
    }
}

#[test]
fn empty_inputs() {
    let none: [&str; 0] = [];
    assert_eq!(count_unique_urls(none, InvalidUrlPolicy::Abort).unwrap(), 0);
    assert!(count_unique_urls_per_top_level_domain(none, InvalidUrlPolicy::Abort)
        .unwrap()
        .is_empty());
}

#[test]
fn invalid_input_policies() {
    let batch = ["https://example.com", "mailto:someone@example.com", "example.com"];

    assert_eq!(
        count_unique_urls(batch, InvalidUrlPolicy::Abort),
        Err(UrlError::InvalidUrl("mailto:someone@example.com".to_string()))
    );

    let unique = tally_unique_urls(batch, InvalidUrlPolicy::Skip).unwrap();
    assert_eq!((unique.value, unique.skipped), (1, 2));

    let per_domain = tally_per_top_level_domain(batch, InvalidUrlPolicy::Skip).unwrap();
    assert_eq!(per_domain.value.get("example.com"), Some(&1));
    assert_eq!(per_domain.skipped, 2);
}
