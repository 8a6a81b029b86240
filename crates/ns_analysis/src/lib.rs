pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod search;
pub mod sort;
pub mod stopwords;
pub mod timing;

pub use analysis::{count_fake_political_by_month, most_frequent_words, MonthlyHistogram, WordCount};
pub use analyzer::NewsAnalyzer;
pub use config::AnalysisConfig;
pub use search::{filter_by_year_and_category, find_by_keyword, find_by_year_and_category};
pub use sort::{sort_by_year, sorted_by_year};
pub use timing::{timed, Timed};
