//! CSV dataset loading.
//!
//! Expected headers are `title`, `text`, `subject` and `date`, plus an
//! optional `label`. Datasets split by label (a `Fake.csv` next to a
//! `True.csv`) carry no label column; the label is then taken from the file
//! name.

use csv::{ReaderBuilder, StringRecord};
use ns_core::{ArticleRecord, Error, Label, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 4] = ["title", "text", "subject", "date"];

#[derive(Debug, Deserialize)]
struct CsvRow {
    title: String,
    text: String,
    subject: String,
    date: String,
    #[serde(default)]
    label: Option<String>,
}

/// Outcome of loading one or more files.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub records: Vec<ArticleRecord>,
    /// Rows that failed to decode or validate.
    pub dropped: usize,
}

impl LoadReport {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn extend(&mut self, other: LoadReport) {
        self.records.extend(other.records);
        self.dropped += other.dropped;
    }
}

/// Label implied by a file name such as `Fake.csv` or `True.csv`.
pub fn label_from_file_name(path: &Path) -> Option<Label> {
    let stem = path.file_stem()?.to_str()?.to_ascii_lowercase();
    if stem.starts_with("fake") {
        Some(Label::Fake)
    } else if stem.starts_with("true") || stem.starts_with("real") {
        Some(Label::Real)
    } else {
        None
    }
}

/// Load every valid article from the CSV file at `path`.
pub fn load_csv(path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = load_from_reader(file, label_from_file_name(path))
        .map_err(|e| match e {
            Error::Dataset(msg) => Error::Dataset(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
    info!(
        "📥 Loaded {} articles from {} ({} rows dropped)",
        report.len(),
        path.display(),
        report.dropped
    );
    Ok(report)
}

/// Load several files into one collection, in the given order.
pub fn load_datasets<P: AsRef<Path>>(paths: &[P]) -> Result<LoadReport> {
    let mut combined = LoadReport::default();
    for path in paths {
        combined.extend(load_csv(path)?);
    }
    Ok(combined)
}

/// Load articles from CSV data. `fallback_label` applies when the data has no
/// `label` column.
pub fn load_from_reader<R: Read>(reader: R, fallback_label: Option<Label>) -> Result<LoadReport> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = normalized_headers(reader.headers()?);
    let missing = REQUIRED_COLUMNS
        .iter()
        .copied()
        .find(|column| !headers.iter().any(|h| h == *column));
    if let Some(missing) = missing {
        return Err(Error::Dataset(format!("missing column: {}", missing)));
    }
    let has_label = headers.iter().any(|h| h == "label");
    if !has_label && fallback_label.is_none() {
        return Err(Error::Dataset(
            "no label column and the label cannot be inferred from the file name".to_string(),
        ));
    }
    reader.set_headers(headers);

    let mut report = LoadReport::default();
    for (line, row) in reader.deserialize::<CsvRow>().enumerate() {
        match row.map_err(Error::from).and_then(|row| validate(row, fallback_label)) {
            Ok(article) => report.records.push(article),
            Err(e) => {
                debug!("⏭️ Dropping row {}: {}", line + 2, e);
                report.dropped += 1;
            }
        }
    }
    Ok(report)
}

fn normalized_headers(headers: &StringRecord) -> StringRecord {
    headers.iter().map(|h| h.trim().to_ascii_lowercase()).collect()
}

fn validate(row: CsvRow, fallback_label: Option<Label>) -> Result<ArticleRecord> {
    let title = row.title.trim();
    let text = row.text.trim();
    let subject = row.subject.trim();
    let date = row.date.trim();

    for (name, value) in [("title", title), ("text", text), ("subject", subject), ("date", date)] {
        if value.is_empty() {
            return Err(Error::Dataset(format!("empty {}", name)));
        }
    }

    let label = match row.label.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        Some(label) => label.parse()?,
        None => fallback_label.ok_or_else(|| Error::Dataset("missing label".to_string()))?,
    };

    Ok(ArticleRecord::new(title, text, subject, date, label))
}
