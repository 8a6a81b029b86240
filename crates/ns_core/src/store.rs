use crate::types::ArticleRecord;
use crate::Result;
use tracing::info;

/// The currently loaded collection of articles.
///
/// Records are only ever replaced as a whole or reordered in place. The store
/// is not synchronized: callers must not reorder it while another borrow reads
/// from it, which the borrow checker enforces for plain `&`/`&mut` access.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    collection: String,
    articles: Vec<ArticleRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(collection: impl Into<String>, articles: Vec<ArticleRecord>) -> Self {
        Self {
            collection: collection.into(),
            articles,
        }
    }

    /// Name of the dataset the records came from.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.articles
    }

    /// Mutable view for in-place reordering. The slice cannot grow or shrink.
    pub fn records_mut(&mut self) -> &mut [ArticleRecord] {
        &mut self.articles
    }

    pub fn get(&self, index: usize) -> Option<&ArticleRecord> {
        self.articles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArticleRecord> {
        self.articles.iter()
    }

    /// The first `n` records in current order.
    pub fn head(&self, n: usize) -> &[ArticleRecord] {
        &self.articles[..n.min(self.articles.len())]
    }

    /// Swap in a fully built collection, returning the previous records.
    pub fn replace(
        &mut self,
        collection: impl Into<String>,
        articles: Vec<ArticleRecord>,
    ) -> Vec<ArticleRecord> {
        self.collection = collection.into();
        info!("📚 Loaded {} articles into {}", articles.len(), self.collection);
        std::mem::replace(&mut self.articles, articles)
    }

    /// Build a new collection with `load` and swap it in only if loading
    /// succeeded. On error the current records stay untouched.
    pub fn reload_with<F>(&mut self, collection: impl Into<String>, load: F) -> Result<usize>
    where
        F: FnOnce() -> Result<Vec<ArticleRecord>>,
    {
        let articles = load()?;
        let count = articles.len();
        self.replace(collection, articles);
        Ok(count)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a ArticleRecord;
    type IntoIter = std::slice::Iter<'a, ArticleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Label};

    fn article(title: &str) -> ArticleRecord {
        ArticleRecord::new(title, "body", "politics", "2016-01-01", Label::Real)
    }

    #[test]
    fn test_replace_swaps_whole_collection() {
        let mut store = RecordStore::from_records("first.csv", vec![article("a"), article("b")]);
        let previous = store.replace("second.csv", vec![article("c")]);

        assert_eq!(previous.len(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.collection(), "second.csv");
        assert_eq!(store.get(0).map(|a| a.title.as_str()), Some("c"));
    }

    #[test]
    fn test_failed_reload_keeps_current_records() {
        let mut store = RecordStore::from_records("first.csv", vec![article("a")]);
        let result = store.reload_with("broken.csv", || Err(Error::Dataset("no rows".to_string())));

        assert!(result.is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.collection(), "first.csv");
    }

    #[test]
    fn test_head_is_bounded() {
        let store = RecordStore::from_records("x", vec![article("a"), article("b")]);
        assert_eq!(store.head(5).len(), 2);
        assert_eq!(store.head(1).len(), 1);
        assert!(RecordStore::new().head(5).is_empty());
    }
}
