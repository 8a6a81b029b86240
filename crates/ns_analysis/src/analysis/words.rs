use ns_core::{ArticleRecord, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::stopwords::StopWords;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Lower-cased runs of alphabetic characters in `text`.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Accumulates word counts across documents.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    counts: HashMap<String, usize>,
    min_word_len: usize,
    stop_words: StopWords,
}

impl WordCounter {
    pub fn new(min_word_len: usize, stop_words: StopWords) -> Self {
        Self {
            counts: HashMap::new(),
            min_word_len,
            stop_words,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.min_word_len, config.stop_words())
    }

    pub fn add_text(&mut self, text: &str) {
        for token in tokenize(text) {
            if token.chars().count() < self.min_word_len || self.stop_words.contains(&token) {
                continue;
            }
            *self.counts.entry(token).or_insert(0) += 1;
        }
    }

    /// Fold another counter's totals into this one.
    pub fn merge(&mut self, other: WordCounter) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// The `top_n` most frequent words, by count descending then word ascending.
    pub fn ranked(&self, top_n: usize) -> Vec<WordCount> {
        let mut ranked: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        ranked.truncate(top_n);
        ranked
    }
}

/// Rank the words used in the bodies of fake articles whose subject is one of
/// `config.government_categories`.
pub fn most_frequent_words(
    articles: &[ArticleRecord],
    config: &AnalysisConfig,
) -> Result<Vec<WordCount>> {
    config.validate()?;
    let mut counter = WordCounter::from_config(config);
    let mut matched = 0usize;

    for article in articles
        .iter()
        .filter(|a| a.label.is_fake() && config.is_government_subject(&a.subject))
    {
        counter.add_text(&article.body);
        matched += 1;
    }

    debug!(
        "📊 Counted {} distinct words across {} fake government articles",
        counter.distinct_words(),
        matched
    );
    Ok(counter.ranked(config.top_n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::{Error, Label};

    fn article(subject: &str, body: &str, label: Label) -> ArticleRecord {
        ArticleRecord::new("title", body, subject, "2016-01-01", label)
    }

    fn pairs(words: &[WordCount]) -> Vec<(&str, usize)> {
        words.iter().map(|w| (w.word.as_str(), w.count)).collect()
    }

    #[test]
    fn test_tokenize_splits_on_non_letters() {
        let tokens: Vec<String> = tokenize("Don't PANIC: it's 2016, e-mail!").collect();
        assert_eq!(tokens, vec!["don", "t", "panic", "it", "s", "e", "mail"]);
    }

    #[test]
    fn test_ranks_by_count_then_alphabetically() {
        let articles = vec![
            article("politics", "Senate budget senate. Budget vote; senate!", Label::Fake),
            article("government", "vote vote", Label::Fake),
            article("politics", "ignored because real senate senate", Label::Real),
            article("sports", "ignored because sports senate", Label::Fake),
        ];
        let config = AnalysisConfig::default();
        let words = most_frequent_words(&articles, &config).unwrap();

        assert_eq!(pairs(&words), vec![("senate", 3), ("vote", 3), ("budget", 2)]);
    }

    #[test]
    fn test_min_length_and_stop_words() {
        let articles = vec![article("politics", "The tax and the law and an ox", Label::Fake)];

        let config = AnalysisConfig::default();
        let words = most_frequent_words(&articles, &config).unwrap();
        assert_eq!(pairs(&words), vec![("law", 1), ("tax", 1)]);

        let config = AnalysisConfig::default().with_stop_words(false).with_min_word_len(2);
        let words = most_frequent_words(&articles, &config).unwrap();
        assert_eq!(
            pairs(&words),
            vec![("and", 2), ("the", 2), ("an", 1), ("law", 1), ("ox", 1), ("tax", 1)]
        );
    }

    #[test]
    fn test_top_n_truncates() {
        let articles = vec![article("politics", "alpha beta gamma delta", Label::Fake)];
        let config = AnalysisConfig::default().with_top_n(2);
        let words = most_frequent_words(&articles, &config).unwrap();
        assert_eq!(pairs(&words), vec![("alpha", 1), ("beta", 1)]);
    }

    #[test]
    fn test_zero_top_n_is_rejected() {
        let config = AnalysisConfig::default().with_top_n(0);
        assert!(matches!(most_frequent_words(&[], &config), Err(Error::InvalidTopN)));
    }

    #[test]
    fn test_merged_counters_rank_like_one_pass() {
        let texts = ["senate vote budget", "vote recount", "senate senate"];
        let mut whole = WordCounter::new(3, StopWords::english());
        let mut left = WordCounter::new(3, StopWords::english());
        let mut right = WordCounter::new(3, StopWords::english());
        for (i, text) in texts.iter().enumerate() {
            whole.add_text(text);
            if i % 2 == 0 {
                left.add_text(text);
            } else {
                right.add_text(text);
            }
        }
        left.merge(right);
        assert_eq!(left.ranked(10), whole.ranked(10));
    }
}
