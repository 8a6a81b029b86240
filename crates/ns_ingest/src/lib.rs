pub mod datasets;
pub mod loader;

pub use datasets::{list_datasets, select_dataset};
pub use loader::{label_from_file_name, load_csv, load_datasets, load_from_reader, LoadReport};
