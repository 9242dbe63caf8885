//! Counting of normalized URLs.
//!
//! Every operation takes an ordered sequence of raw URL strings and an
//! [`InvalidUrlPolicy`] deciding what happens to inputs without `"://"`.
//! Accumulators are local to each call.

mod per_tld;
mod policy;
mod tally;
mod unique;

pub use per_tld::{count_unique_urls_per_top_level_domain, tally_per_top_level_domain, TldCounts};
pub use policy::InvalidUrlPolicy;
pub use tally::Tally;
pub use unique::{count_unique_urls, tally_unique_urls};
