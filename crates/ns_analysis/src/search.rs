use ns_core::date::is_valid_year;
use ns_core::{ArticleRecord, Category, Error, Result};
use tracing::debug;

pub(crate) fn validate_year(year: i32) -> Result<()> {
    if is_valid_year(year) {
        Ok(())
    } else {
        Err(Error::InvalidYear(year))
    }
}

/// Articles published in `year` whose subject is `category`, in input order.
///
/// `category` is looked up case-insensitively among the known categories and
/// then compared exactly against each article's subject. An unknown category
/// or a year outside `1000..=9999` is rejected before any article is scanned.
pub fn find_by_year_and_category<'a>(
    articles: &'a [ArticleRecord],
    year: i32,
    category: &str,
) -> Result<Vec<&'a ArticleRecord>> {
    validate_year(year)?;
    let category: Category = category.parse()?;
    Ok(filter_by_year_and_category(articles, year, category))
}

/// Typed form of [`find_by_year_and_category`] for already validated input.
pub fn filter_by_year_and_category(
    articles: &[ArticleRecord],
    year: i32,
    category: Category,
) -> Vec<&ArticleRecord> {
    let matches: Vec<_> = articles
        .iter()
        .filter(|article| article.in_category(category))
        .filter(|article| article.year() == Some(year))
        .collect();
    debug!("🔍 {} articles match {} in {}", matches.len(), category, year);
    matches
}

/// Articles whose title or body contains `keyword`, ignoring case.
///
/// The keyword is matched literally, punctuation and inner whitespace
/// included. A blank keyword is rejected. Case folding is plain
/// `to_lowercase` on both sides, so multi-character foldings such as `ß`
/// against `SS` do not match.
pub fn find_by_keyword<'a>(
    articles: &'a [ArticleRecord],
    keyword: &str,
) -> Result<Vec<&'a ArticleRecord>> {
    if keyword.trim().is_empty() {
        return Err(Error::EmptyKeyword);
    }
    let needle = keyword.to_lowercase();

    let matches: Vec<_> = articles
        .iter()
        .filter(|article| {
            article.title.to_lowercase().contains(&needle)
                || article.body.to_lowercase().contains(&needle)
        })
        .collect();
    debug!("🔍 {} articles contain {:?}", matches.len(), keyword);
    Ok(matches)
}
