//! Motivational quotes shown under the image.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

/// Default quote file, relative to the working directory.
pub const QUOTES_FILE: &str = "mottos.json";

/// Shown when no quotes can be loaded.
pub const FALLBACK_QUOTE: &str = "可爱的小太阳今天也要为你驱散阴霾！";

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Quote list is empty")]
    Empty,
}

#[derive(Deserialize)]
struct QuoteFile {
    quotes: Vec<String>,
}

/// A non-empty list of quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteList(Vec<String>);

impl QuoteList {
    /// Build a list, or `None` if `quotes` is empty.
    pub fn new(quotes: Vec<String>) -> Option<Self> {
        if quotes.is_empty() {
            None
        } else {
            Some(Self(quotes))
        }
    }

    /// The single-quote fallback list.
    pub fn fallback() -> Self {
        Self(vec![FALLBACK_QUOTE.to_string()])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A quote list is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, quote: &str) -> bool {
        self.0.iter().any(|q| q == quote)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Pick one quote uniformly at random. Repeats are allowed.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.0.choose(rng).map(String::as_str).unwrap_or(FALLBACK_QUOTE)
    }
}

/// Reads the quote list from disk.
#[derive(Debug, Clone)]
pub struct QuoteSource {
    path: PathBuf,
}

impl Default for QuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSource {
    /// Source at the default location (`mottos.json`).
    pub fn new() -> Self {
        Self::at(PathBuf::from(QUOTES_FILE))
    }

    /// Source at a specific path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the quotes, falling back to a single built-in quote.
    pub fn load(&self) -> QuoteList {
        match self.try_load() {
            Ok(quotes) => {
                tracing::debug!(count = quotes.len(), "Loaded quotes");
                quotes
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to load quotes, using fallback");
                QuoteList::fallback()
            }
        }
    }

    fn try_load(&self) -> Result<QuoteList, QuoteError> {
        let json = std::fs::read_to_string(&self.path)?;
        let file: QuoteFile = serde_json::from_str(&json)?;
        QuoteList::new(file.quotes).ok_or(QuoteError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn write_quotes(contents: &str) -> (TempDir, QuoteSource) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mottos.json");
        std::fs::write(&path, contents).unwrap();
        (temp_dir, QuoteSource::at(path))
    }

    #[test]
    fn test_load_reads_quote_list() {
        let (_temp, source) = write_quotes(r#"{"quotes": ["one", "two", "three"]}"#);

        let quotes = source.load();

        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes.as_slice()[1], "two");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let source = QuoteSource::at(temp_dir.path().join("nope.json"));

        assert_eq!(source.load(), QuoteList::fallback());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let (_temp, source) = write_quotes(r#"{"mottos": ["wrong key"]}"#);
        assert_eq!(source.load(), QuoteList::fallback());
    }

    #[test]
    fn test_load_empty_list_falls_back() {
        let (_temp, source) = write_quotes(r#"{"quotes": []}"#);

        let quotes = source.load();

        assert_eq!(quotes.len(), 1);
        assert!(quotes.contains(FALLBACK_QUOTE));
    }

    #[test]
    fn test_quote_list_rejects_empty() {
        assert!(QuoteList::new(Vec::new()).is_none());
    }

    #[test]
    fn test_choose_returns_member() {
        let quotes = QuoteList::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(quotes.contains(quotes.choose(&mut rng)));
        }
    }
}
