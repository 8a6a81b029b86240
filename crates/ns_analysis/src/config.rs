use ns_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::stopwords::StopWords;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Subjects treated as government-related for the word-frequency ranking.
pub const DEFAULT_GOVERNMENT_CATEGORIES: &[&str] = &["politics", "government"];

/// Tunables for the word-frequency analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many ranked words to return.
    pub top_n: usize,
    /// Tokens with fewer characters are ignored.
    pub min_word_len: usize,
    /// Drop words listed in [`crate::stopwords::DEFAULT_STOP_WORDS`].
    pub use_stop_words: bool,
    /// Exact subject values whose fake articles feed the ranking.
    pub government_categories: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            use_stop_words: true,
            government_categories: DEFAULT_GOVERNMENT_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    pub fn with_stop_words(mut self, enabled: bool) -> Self {
        self.use_stop_words = enabled;
        self
    }

    pub fn with_government_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.government_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::InvalidTopN);
        }
        if self.government_categories.is_empty() {
            return Err(Error::Config(
                "at least one government category is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn stop_words(&self) -> StopWords {
        if self.use_stop_words {
            StopWords::english()
        } else {
            StopWords::none()
        }
    }

    pub fn is_government_subject(&self, subject: &str) -> bool {
        self.government_categories.iter().any(|c| c == subject)
    }
}
