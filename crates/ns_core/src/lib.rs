pub mod date;
pub mod error;
pub mod store;
pub mod types;

pub use date::{extract_month, extract_year, parse_publication_date, PublicationDate};
pub use error::{Error, Result};
pub use store::RecordStore;
pub use types::{ArticleRecord, Category, Label};
