use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{CellValue, QcRow, QcTable, GROUP_COLUMN};

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading the QC table. All of these are
/// fatal: the application refuses to start without a usable dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV has no '{}' column", GROUP_COLUMN)]
    NoGroupColumn,
    #[error("CSV contains no data rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the QC table from a CSV file.
///
/// Expected layout: a header row with column names, one sample per row.
/// A `Broad Tissue` column must be present; cell types are inferred
/// (numbers, text, empty → null) and any column whose non-null cells are all
/// numeric becomes a candidate QC metric axis.
pub fn load_csv(path: &Path) -> Result<QcTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let table = read_csv(file)?;
    log::info!(
        "Loaded {} samples, numeric columns {:?}, tissues {:?}",
        table.len(),
        table.numeric_columns,
        table.group_values
    );
    Ok(table)
}

/// Parse CSV from any reader. Split out from [`load_csv`] so tests can feed
/// in-memory data.
pub fn read_csv<R: Read>(reader: R) -> Result<QcTable, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();

    if !headers.iter().any(|h| h == GROUP_COLUMN) {
        return Err(LoadError::NoGroupColumn);
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let cells: BTreeMap<String, CellValue> = headers
            .iter()
            .zip(record.iter())
            .map(|(col, raw)| (col.clone(), infer_cell(raw)))
            .collect();
        rows.push(QcRow { cells });
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(QcTable::from_rows(rows, headers))
}

/// Infer the type of a raw CSV cell.
fn infer_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Number(f);
    }
    CellValue::Text(trimmed.to_string())
}
