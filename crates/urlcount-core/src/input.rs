//! Reading URL lists from files and stdin.

use std::io::{self, BufRead};

/// Collects one URL per line from `reader`.
///
/// Lines are trimmed and blank lines are dropped; nothing else is validated.
pub fn read_urls<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_skips_blank_lines() {
        let data = "https://a.com\n\n  https://b.com/x  \r\n\t\nnot-a-url\n";
        let urls = read_urls(data.as_bytes()).unwrap();
        assert_eq!(urls, vec!["https://a.com", "https://b.com/x", "not-a-url"]);
    }

    #[test]
    fn empty_reader() {
        assert!(read_urls(&b""[..]).unwrap().is_empty());
    }
}
