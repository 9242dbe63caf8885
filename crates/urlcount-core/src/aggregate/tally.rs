use crate::error::UrlError;
use crate::url_model::UrlKey;

use super::InvalidUrlPolicy;

/// Aggregation result together with the number of inputs dropped as invalid.
///
/// `skipped` is always 0 under [`InvalidUrlPolicy::Abort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<T> {
    pub value: T,
    pub skipped: usize,
}

/// Parses each URL in order and feeds its key to `visit`, applying `policy`
/// to invalid inputs. Returns the number of skipped inputs.
pub(super) fn for_each_key<I>(
    urls: I,
    policy: InvalidUrlPolicy,
    mut visit: impl FnMut(UrlKey),
) -> Result<usize, UrlError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut skipped = 0;
    for url in urls {
        match UrlKey::parse(url.as_ref()) {
            Ok(key) => visit(key),
            Err(err) => match policy {
                InvalidUrlPolicy::Abort => return Err(err),
                InvalidUrlPolicy::Skip => {
                    tracing::warn!("skipping input: {}", err);
                    skipped += 1;
                }
            },
        }
    }
    Ok(skipped)
}
