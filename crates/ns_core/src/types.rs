use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::date::{self, PublicationDate};
use crate::Error;

/// Ground-truth classification of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    pub fn is_fake(self) -> bool {
        self == Label::Fake
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Real => "real",
            Label::Fake => "fake",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = Error;

    /// Accepts `fake`/`real`, `false`/`true` and `0`/`1`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fake" | "false" | "0" => Ok(Label::Fake),
            "real" | "true" | "1" => Ok(Label::Real),
            other => Err(Error::Dataset(format!("Unrecognized label: {}", other))),
        }
    }
}

/// The fixed set of subject categories a dataset is expected to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Politics,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Politics,
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    /// Canonical name, which is also the exact `subject` value it matches.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Politics => "politics",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// One labeled news article as admitted by ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub body: String,
    pub subject: String,
    pub published: String,
    pub label: Label,
}

impl ArticleRecord {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        subject: impl Into<String>,
        published: impl Into<String>,
        label: Label,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            subject: subject.into(),
            published: published.into(),
            label,
        }
    }

    pub fn publication_date(&self) -> Option<PublicationDate> {
        date::parse_publication_date(&self.published)
    }

    /// Year of publication, or `None` when the date cannot be parsed.
    pub fn year(&self) -> Option<i32> {
        date::extract_year(&self.published)
    }

    /// Exact, case-sensitive comparison against the subject field.
    pub fn has_subject(&self, subject: &str) -> bool {
        self.subject == subject
    }

    pub fn in_category(&self, category: Category) -> bool {
        self.has_subject(category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!("FAKE".parse::<Label>().unwrap(), Label::Fake);
        assert_eq!(" real ".parse::<Label>().unwrap(), Label::Real);
        assert_eq!("0".parse::<Label>().unwrap(), Label::Fake);
        assert_eq!("true".parse::<Label>().unwrap(), Label::Real);
        assert!("maybe".parse::<Label>().is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Politics".parse::<Category>().unwrap(), Category::Politics);
        assert_eq!("sports".parse::<Category>().unwrap(), Category::Sports);
        assert!(matches!(
            "worldnews".parse::<Category>(),
            Err(Error::UnknownCategory(name)) if name == "worldnews"
        ));
    }

    #[test]
    fn test_subject_match_is_case_sensitive() {
        let article = ArticleRecord::new("t", "b", "Politics", "2016-01-01", Label::Fake);
        assert!(!article.in_category(Category::Politics));
        assert!(article.has_subject("Politics"));
    }

    #[test]
    fn test_record_year() {
        let article = ArticleRecord::new("t", "b", "politics", "March 3, 2016", Label::Fake);
        assert_eq!(article.year(), Some(2016));

        let broken = ArticleRecord::new("t", "b", "politics", "https://example.com", Label::Fake);
        assert_eq!(broken.year(), None);
    }
}
