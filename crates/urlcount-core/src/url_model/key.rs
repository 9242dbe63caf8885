use std::fmt;

use crate::error::UrlError;

/// Separator between scheme and authority.
const SCHEME_SEPARATOR: &str = "://";

/// Delimiters that end the host, applied one after another in this order.
const HOST_TERMINATORS: [char; 3] = ['/', '#', '?'];

/// Uniqueness key for a URL: scheme and host, with path, query and fragment
/// discarded.
///
/// Two URLs that differ only after the host (including query parameter order)
/// map to the same key. Scheme and host are kept byte-for-byte.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct UrlKey {
    pub scheme: String,
    pub host: String,
}

impl UrlKey {
    /// Split a raw URL into its key.
    ///
    /// The scheme is everything before the first `"://"`. The host is the rest,
    /// truncated at the first `/`, then the first `#`, then the first `?`.
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let (scheme, rest) = url
            .split_once(SCHEME_SEPARATOR)
            .ok_or_else(|| UrlError::InvalidUrl(url.to_string()))?;

        let host = HOST_TERMINATORS
            .iter()
            .fold(rest, |host, &delim| truncate_at(host, delim));

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
        })
    }

    /// Simplified top-level domain of this key's host.
    pub fn top_level_domain(&self) -> String {
        super::top_level_domain(&self.host)
    }
}

impl fmt::Display for UrlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.scheme, SCHEME_SEPARATOR, self.host)
    }
}

fn truncate_at(s: &str, delim: char) -> &str {
    s.find(delim).map_or(s, |idx| &s[..idx])
}
