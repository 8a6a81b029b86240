use ns_core::ArticleRecord;

/// Sort key: parsed years ascending, unparsable dates after every year.
fn year_key(article: &ArticleRecord) -> (bool, i32) {
    let year = article.year();
    (year.is_none(), year.unwrap_or_default())
}

/// Reorder `articles` by publication year, in place.
///
/// The sort is stable, so articles from the same year keep their relative
/// order. Articles whose date cannot be parsed are moved to the end, also in
/// their original relative order.
pub fn sort_by_year(articles: &mut [ArticleRecord]) {
    // Caches one parsed year per record; stable on equal keys.
    articles.sort_by_cached_key(year_key);
}

/// Like [`sort_by_year`] but leaves the input untouched.
pub fn sorted_by_year(articles: &[ArticleRecord]) -> Vec<ArticleRecord> {
    let mut sorted = articles.to_vec();
    sort_by_year(&mut sorted);
    sorted
}
