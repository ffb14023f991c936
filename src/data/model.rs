use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Name of the categorical column used to group, filter and colour samples.
pub const GROUP_COLUMN: &str = "Broad Tissue";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the QC table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell. CSV cells are inferred on load: anything
/// that parses as `f64` becomes `Number`, empty cells become `Null`, the rest
/// stay `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Null,
}

// -- Manual Eq/Ord so CellValue can live in BTreeSet / BTreeMap keys --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Number(_) => 1,
                Text(_) => 2,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Number(a), Number(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the cell as an `f64` for plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// QcRow – one sample (one CSV row)
// ---------------------------------------------------------------------------

/// A single sample: column_name → cell value.
#[derive(Debug, Clone)]
pub struct QcRow {
    pub cells: BTreeMap<String, CellValue>,
}

impl QcRow {
    /// Numeric value of a column, `None` if absent or non-numeric.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.cells.get(column).and_then(CellValue::as_f64)
    }

    /// Group label of this row (display form of the group column's cell).
    pub fn group(&self) -> Option<String> {
        self.cells.get(GROUP_COLUMN).map(|v| v.to_string())
    }
}

// ---------------------------------------------------------------------------
// QcTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table plus the two column facts the UI needs, computed
/// once at load and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct QcTable {
    /// All samples (rows), in file order.
    pub rows: Vec<QcRow>,
    /// Column names in header order.
    pub column_names: Vec<String>,
    /// Columns whose every non-null cell is numeric, in header order.
    /// Domain of the X/Y axis selectors.
    pub numeric_columns: Vec<String>,
    /// Sorted distinct values of [`GROUP_COLUMN`]. Domain of the tissue
    /// filter and the fixed colour order for every render.
    pub group_values: Vec<String>,
}

impl QcTable {
    /// Build the table and derive the numeric-column and group-value facts.
    pub fn from_rows(rows: Vec<QcRow>, column_names: Vec<String>) -> Self {
        let numeric_columns: Vec<String> = column_names
            .iter()
            .filter(|col| {
                let mut any_number = false;
                for row in &rows {
                    match row.cells.get(*col) {
                        Some(CellValue::Number(_)) => any_number = true,
                        Some(CellValue::Null) | None => {}
                        Some(_) => return false,
                    }
                }
                any_number
            })
            .cloned()
            .collect();

        let group_values: Vec<String> = rows
            .iter()
            .filter_map(QcRow::group)
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        QcTable {
            rows,
            column_names,
            numeric_columns,
            group_values,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn row(pairs: &[(&str, CellValue)]) -> QcRow {
        QcRow {
            cells: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    /// Small table shared by the data-layer tests: three tissues, two QC
    /// metrics, one identifier column.
    pub(crate) fn demo_table() -> QcTable {
        let rows = vec![
            row(&[
                ("SampleID", CellValue::Text("S1".into())),
                (GROUP_COLUMN, CellValue::Text("Liver".into())),
                ("ReadsMapped", CellValue::Number(1.0e6)),
                ("MappingRate", CellValue::Number(0.91)),
            ]),
            row(&[
                ("SampleID", CellValue::Text("S2".into())),
                (GROUP_COLUMN, CellValue::Text("Blood".into())),
                ("ReadsMapped", CellValue::Number(2.0e6)),
                ("MappingRate", CellValue::Number(0.88)),
            ]),
            row(&[
                ("SampleID", CellValue::Text("S3".into())),
                (GROUP_COLUMN, CellValue::Text("Brain".into())),
                ("ReadsMapped", CellValue::Number(1.5e6)),
                ("MappingRate", CellValue::Number(0.95)),
            ]),
            row(&[
                ("SampleID", CellValue::Text("S4".into())),
                (GROUP_COLUMN, CellValue::Text("Blood".into())),
                ("ReadsMapped", CellValue::Number(0.8e6)),
                ("MappingRate", CellValue::Number(0.79)),
            ]),
        ];
        let columns = vec![
            "SampleID".to_string(),
            GROUP_COLUMN.to_string(),
            "ReadsMapped".to_string(),
            "MappingRate".to_string(),
        ];
        QcTable::from_rows(rows, columns)
    }

    #[test]
    fn numeric_columns_exclude_text_columns() {
        let table = demo_table();
        assert_eq!(table.numeric_columns, vec!["ReadsMapped", "MappingRate"]);
    }

    #[test]
    fn group_values_are_sorted_and_distinct() {
        let table = demo_table();
        assert_eq!(table.group_values, vec!["Blood", "Brain", "Liver"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn null_cells_do_not_disqualify_a_numeric_column() {
        let rows = vec![
            row(&[("Metric", CellValue::Number(1.0))]),
            row(&[("Metric", CellValue::Null)]),
        ];
        let table = QcTable::from_rows(rows, vec!["Metric".to_string()]);
        assert_eq!(table.numeric_columns, vec!["Metric"]);
    }

    #[test]
    fn all_null_column_is_not_numeric() {
        let rows = vec![row(&[("Empty", CellValue::Null)])];
        let table = QcTable::from_rows(rows, vec!["Empty".to_string()]);
        assert!(table.numeric_columns.is_empty());
        assert!(!table.is_empty());
    }
}
