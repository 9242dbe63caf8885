//! Simplified top-level domain derivation.

/// The only suffix recognised as a top-level domain.
pub const TLD_SUFFIX: &str = ".com";

/// Derives the top-level domain key of `host`.
///
/// A trailing ".com" is stripped if present, the remainder is split on `.`,
/// and the last label gets ".com" appended. Hosts with any other suffix still
/// end up with ".com" appended to their last label; there is no public-suffix
/// handling.
///
/// - `"example.com"` → `"example.com"`
/// - `"sub.example.com"` → `"example.com"`
/// - `"example.org"` → `"org.com"`
pub fn top_level_domain(host: &str) -> String {
    let stem = host.strip_suffix(TLD_SUFFIX).unwrap_or(host);
    let label = stem.rsplit('.').next().unwrap_or(stem);
    format!("{label}{TLD_SUFFIX}")
}
