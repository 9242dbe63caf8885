//! CLI command handlers. Each command is in its own file.

mod completions;
mod demo;
mod normalize;
mod per_tld;
mod unique;

pub use completions::run_completions;
pub use demo::run_demo;
pub use normalize::run_normalize;
pub use per_tld::run_per_tld;
pub use unique::run_unique;

fn report_skipped(skipped: usize) {
    if skipped > 0 {
        eprintln!("skipped {skipped} invalid URL(s)");
    }
}
