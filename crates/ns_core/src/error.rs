use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Keyword must not be empty")]
    EmptyKeyword,

    #[error("Invalid year: {0} (expected a 4-digit year)")]
    InvalidYear(i32),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Number of words to rank must be at least 1")]
    InvalidTopN,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error stems from the caller passing bad arguments, as
    /// opposed to a failure while reading data.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyKeyword | Error::InvalidYear(_) | Error::UnknownCategory(_) | Error::InvalidTopN
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_classified() {
        assert!(Error::EmptyKeyword.is_input_error());
        assert!(Error::InvalidYear(-4).is_input_error());
        assert!(Error::UnknownCategory("worldnews".to_string()).is_input_error());
        assert!(!Error::Dataset("broken".to_string()).is_input_error());
        assert_eq!(Error::InvalidYear(16).to_string(), "Invalid year: 16 (expected a 4-digit year)");
    }
}
