pub mod config;
pub mod error;
pub mod input;
pub mod logging;

pub mod aggregate;
pub mod url_model;

pub use aggregate::{
    count_unique_urls, count_unique_urls_per_top_level_domain, tally_per_top_level_domain,
    tally_unique_urls, InvalidUrlPolicy, Tally, TldCounts,
};
pub use error::UrlError;
pub use url_model::{normalize_url, top_level_domain, UrlKey};
