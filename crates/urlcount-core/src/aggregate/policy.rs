use serde::{Deserialize, Serialize};

/// What to do with an input that cannot be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidUrlPolicy {
    /// Fail the whole batch on the first invalid URL.
    #[default]
    Abort,
    /// Drop invalid URLs, log them, and keep counting.
    Skip,
}
