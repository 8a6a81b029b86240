use ns_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Regular `*.csv` files directly under `dir`, sorted by file name so the
/// numbering shown to users is stable across runs.
pub fn list_datasets(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::Dataset(format!("not a directory: {}", dir.display())));
    }

    let mut datasets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if entry.file_type()?.is_file() && is_csv {
            datasets.push(path);
        }
    }
    datasets.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(datasets)
}

/// Pick the dataset shown as number `choice` (1-based) by [`list_datasets`].
pub fn select_dataset(dir: impl AsRef<Path>, choice: usize) -> Result<PathBuf> {
    let datasets = list_datasets(dir)?;
    choice
        .checked_sub(1)
        .and_then(|index| datasets.get(index).cloned())
        .ok_or_else(|| {
            Error::Dataset(format!(
                "invalid dataset choice {} (expected 1-{})",
                choice,
                datasets.len()
            ))
        })
}
