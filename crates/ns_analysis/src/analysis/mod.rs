pub mod monthly;
pub mod words;

pub use monthly::{count_fake_political_by_month, MonthlyHistogram, MONTH_NAMES};
pub use words::{most_frequent_words, tokenize, WordCount, WordCounter};
