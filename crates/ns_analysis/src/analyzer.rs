use ns_core::{ArticleRecord, RecordStore, Result};

use crate::analysis::{self, MonthlyHistogram, WordCount};
use crate::config::AnalysisConfig;
use crate::{search, sort};

/// Owns the loaded articles and runs every query against them.
///
/// Each query is a pure function of the current records and the config; the
/// analyzer keeps no other state between calls.
#[derive(Debug, Clone, Default)]
pub struct NewsAnalyzer {
    store: RecordStore,
    config: AnalysisConfig,
}

impl NewsAnalyzer {
    pub fn new(store: RecordStore, config: AnalysisConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Replace the loaded articles with a freshly built collection.
    pub fn reload<F>(&mut self, collection: impl Into<String>, load: F) -> Result<usize>
    where
        F: FnOnce() -> Result<Vec<ArticleRecord>>,
    {
        self.store.reload_with(collection, load)
    }

    pub fn total(&self) -> usize {
        self.store.len()
    }

    pub fn head(&self, n: usize) -> &[ArticleRecord] {
        self.store.head(n)
    }

    /// Reorder the loaded articles by year. Returns the number of articles.
    pub fn sort_by_year(&mut self) -> usize {
        sort::sort_by_year(self.store.records_mut());
        self.store.len()
    }

    pub fn find_by_year_and_category(&self, year: i32, category: &str) -> Result<Vec<&ArticleRecord>> {
        search::find_by_year_and_category(self.store.records(), year, category)
    }

    pub fn find_by_keyword(&self, keyword: &str) -> Result<Vec<&ArticleRecord>> {
        search::find_by_keyword(self.store.records(), keyword)
    }

    pub fn count_fake_political_by_month(&self, year: i32) -> Result<MonthlyHistogram> {
        analysis::count_fake_political_by_month(self.store.records(), year)
    }

    pub fn most_frequent_words(&self) -> Result<Vec<WordCount>> {
        analysis::most_frequent_words(self.store.records(), &self.config)
    }
}
