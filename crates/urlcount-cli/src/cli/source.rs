//! Where a command reads its URLs from.

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use urlcount_core::config::UrlCountConfig;
use urlcount_core::input::read_urls;
use urlcount_core::InvalidUrlPolicy;

/// URL input shared by the counting commands.
///
/// Positional URLs and `--file` are mutually exclusive; with neither, URLs are
/// read from stdin.
#[derive(Debug, Args)]
pub struct UrlSource {
    /// URLs to process.
    pub urls: Vec<String>,

    /// Read URLs from a file, one per line ("-" for stdin).
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with = "urls")]
    pub file: Option<PathBuf>,

    /// Skip URLs without "://" instead of failing the whole batch.
    #[arg(long)]
    pub skip_invalid: bool,
}

impl UrlSource {
    pub fn load(&self) -> Result<Vec<String>> {
        self.load_from(io::stdin().lock())
    }

    /// Like [`UrlSource::load`], reading `stdin` when no URLs or file are given
    /// or the file is "-".
    pub fn load_from<R: BufRead>(&self, stdin: R) -> Result<Vec<String>> {
        if !self.urls.is_empty() {
            return Ok(self.urls.clone());
        }
        match self.file.as_deref() {
            Some(path) if path != Path::new("-") => {
                let file =
                    File::open(path).with_context(|| format!("open {}", path.display()))?;
                read_urls(BufReader::new(file))
                    .with_context(|| format!("read {}", path.display()))
            }
            _ => read_urls(stdin).context("read stdin"),
        }
    }

    /// `--skip-invalid` overrides the configured policy.
    pub fn policy(&self, cfg: &UrlCountConfig) -> InvalidUrlPolicy {
        if self.skip_invalid {
            InvalidUrlPolicy::Skip
        } else {
            cfg.invalid_url_policy
        }
    }
}
