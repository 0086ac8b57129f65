// src/dataset/loader.rs

use crate::dataset::sample::synthetic_table;
use crate::dataset::table::{parse_date, Cell, Table};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Columns interpreted as dates when the export carries all of them.
pub const DATE_COLUMNS: [&str; 4] = ["first_review", "host_since", "last_review", "available_date"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, LoadError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Read a listings CSV from `path`.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path)?;
    read_table(file)
}

/// Parse a listings CSV.
///
/// Column types are inferred per column: numeric when every non-empty cell parses
/// as a number, text otherwise. Empty cells become nulls. Malformed records are
/// skipped with a warning.
pub fn read_table<R: Read>(reader: R) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let width = headers.len();

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for (line, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let mut row: Vec<String> = record.iter().map(str::to_string).collect();
                row.resize(width, String::new());
                raw_rows.push(row);
            }
            Err(e) => {
                // +2 for 1-based lines and the header row
                tracing::warn!("Skipping malformed dataset row {}: {}", line + 2, e);
            }
        }
    }

    let parse_dates = DATE_COLUMNS
        .iter()
        .all(|c| headers.iter().any(|h| h == c));
    if !parse_dates {
        tracing::debug!("date columns incomplete, loading without date interpretation");
    }

    let kinds: Vec<ColumnKind> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if parse_dates && DATE_COLUMNS.contains(&name.as_str()) {
                ColumnKind::Date
            } else {
                infer_kind(raw_rows.iter().map(|r| r[i].as_str()))
            }
        })
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|raw| {
            raw.into_iter()
                .zip(&kinds)
                .map(|(value, kind)| to_cell(value, *kind))
                .collect()
        })
        .collect();

    Ok(Table::from_rows(headers, rows))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Number,
    Text,
    Date,
}

fn infer_kind<'a>(values: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut seen = false;
    for v in values.filter(|v| !v.is_empty()) {
        seen = true;
        if v.parse::<f64>().is_err() {
            return ColumnKind::Text;
        }
    }
    if seen {
        ColumnKind::Number
    } else {
        ColumnKind::Text
    }
}

fn to_cell(value: String, kind: ColumnKind) -> Cell {
    if value.is_empty() {
        return Cell::Null;
    }
    match kind {
        ColumnKind::Number => value
            .parse::<f64>()
            .map(Cell::Number)
            .unwrap_or(Cell::Text(value)),
        ColumnKind::Date => match parse_date(&value) {
            Some(d) => Cell::Date(d),
            None => Cell::Text(value),
        },
        ColumnKind::Text => Cell::Text(value),
    }
}

/// Where a cached dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    File,
    Synthetic,
}

#[derive(Debug)]
pub struct Dataset {
    pub table: Table,
    pub source: DataSource,
}

/// Process-wide memo of loaded datasets, keyed by path.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading it on first use.
    /// A missing file yields the synthetic sample table instead of an error.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Dataset>, LoadError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(hit) = entries.get(path) {
            return Ok(Arc::clone(hit));
        }

        let dataset = match load_table(path) {
            Ok(table) => {
                tracing::info!(
                    "Loaded dataset {} ({} rows, {} columns)",
                    path.display(),
                    table.len(),
                    table.columns().len()
                );
                Dataset {
                    table,
                    source: DataSource::File,
                }
            }
            Err(e) if e.is_missing_file() => {
                tracing::warn!(
                    "Dataset file not found at {}, using synthetic sample",
                    path.display()
                );
                Dataset {
                    table: synthetic_table(&mut rand::thread_rng()),
                    source: DataSource::Synthetic,
                }
            }
            Err(e) => return Err(e),
        };

        let dataset = Arc::new(dataset);
        entries.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }
}
