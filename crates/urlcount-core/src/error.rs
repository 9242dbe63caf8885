//! Error type for URL normalization.

use thiserror::Error;

/// Failure to extract a `scheme://host` key from an input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The input has no `"://"` separator, so there is no scheme to split off.
    #[error("invalid URL (missing \"://\"): {0:?}")]
    InvalidUrl(String),
}
