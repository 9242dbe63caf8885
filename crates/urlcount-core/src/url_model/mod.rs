//! URL modeling: reduce raw URL strings to `scheme://host` keys and derive
//! the simplified top-level domain used for per-domain counts.
//!
//! This is a deliberately minimal normalization. There is no percent-decoding,
//! case folding, default-port removal or public-suffix lookup.

mod key;
mod tld;

pub use key::UrlKey;
pub use tld::{top_level_domain, TLD_SUFFIX};

use crate::error::UrlError;

/// Normalizes `url` to its `scheme://host` form.
///
/// # Examples
///
/// - `normalize_url("https://example.com/a?b=1#c")` → `"https://example.com"`
/// - `normalize_url("example.com")` → `Err(UrlError::InvalidUrl(..))`
pub fn normalize_url(url: &str) -> Result<String, UrlError> {
    UrlKey::parse(url).map(|key| key.to_string())
}
