use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Untyped tabular data as it comes out of the loader: column names from the
/// header row plus row-major string cells. No typing has been applied yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Why a raw table was rejected before analysis.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("the data must have exactly 2 columns, found {0}")]
    ColumnCount(usize),
    #[error("the second column must be numeric, but row {row} contains {value:?}")]
    NonNumeric { row: usize, value: String },
}

/// A single category with its observed frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRow {
    pub label: String,
    pub frequency: f64,
}

/// A validated two-column table: category labels and numeric frequencies in
/// source order, plus the source column names for display.
///
/// Built once per analysis request and never mutated afterwards. Duplicate
/// labels are allowed and kept as distinct rows.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTable {
    pub label_column: String,
    pub value_column: String,
    pub rows: Vec<InputRow>,
}

impl InputTable {
    /// Validate a raw table: exactly two columns, second column uniformly
    /// numeric. Row order is preserved.
    ///
    /// `row` in the error is 1-based and counts data rows (the header is
    /// row 0 of the source but carries no values).
    pub fn from_raw(raw: &RawTable) -> Result<Self, TableError> {
        if raw.columns.len() != 2 {
            return Err(TableError::ColumnCount(raw.columns.len()));
        }

        let mut rows = Vec::with_capacity(raw.rows.len());
        for (i, cells) in raw.rows.iter().enumerate() {
            if cells.len() != 2 {
                return Err(TableError::ColumnCount(cells.len()));
            }
            let value = cells[1].trim();
            let frequency: f64 = value.parse().map_err(|_| TableError::NonNumeric {
                row: i + 1,
                value: value.to_string(),
            })?;
            // "NaN" and "inf" parse as f64 but are meaningless frequencies.
            if !frequency.is_finite() {
                return Err(TableError::NonNumeric {
                    row: i + 1,
                    value: value.to_string(),
                });
            }
            rows.push(InputRow {
                label: cells[0].trim().to_string(),
                frequency,
            });
        }

        Ok(Self {
            label_column: raw.columns[0].clone(),
            value_column: raw.columns[1].clone(),
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(columns: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn accepts_two_numeric_columns() {
        let table = InputTable::from_raw(&raw(
            &["Class", "Count"],
            &[&["Saber", "45"], &["Archer", "39"]],
        ))
        .unwrap();

        assert_eq!(table.label_column, "Class");
        assert_eq!(table.value_column, "Count");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0].label, "Saber");
        assert_eq!(table.rows[0].frequency, 45.0);
    }

    #[test]
    fn trims_whitespace_and_parses_floats() {
        let table =
            InputTable::from_raw(&raw(&["k", "v"], &[&[" a ", " 1.5 "], &["b", "-2"]])).unwrap();
        assert_eq!(table.rows[0].label, "a");
        assert_eq!(table.rows[0].frequency, 1.5);
        assert_eq!(table.rows[1].frequency, -2.0);
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = InputTable::from_raw(&raw(&["a", "b", "c"], &[])).unwrap_err();
        assert_eq!(err, TableError::ColumnCount(3));

        let err = InputTable::from_raw(&raw(&["only"], &[])).unwrap_err();
        assert_eq!(err, TableError::ColumnCount(1));
    }

    #[test]
    fn rejects_ragged_data_row() {
        let err =
            InputTable::from_raw(&raw(&["k", "v"], &[&["a", "1"], &["b"]])).unwrap_err();
        assert_eq!(err, TableError::ColumnCount(1));
    }

    #[test]
    fn rejects_non_numeric_value_with_row_number() {
        let err = InputTable::from_raw(&raw(
            &["k", "v"],
            &[&["a", "1"], &["b", "many"]],
        ))
        .unwrap_err();
        assert_eq!(
            err,
            TableError::NonNumeric {
                row: 2,
                value: "many".to_string()
            }
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        for bad in ["NaN", "inf", "-inf"] {
            let err =
                InputTable::from_raw(&raw(&["k", "v"], &[&["a", bad]])).unwrap_err();
            assert!(matches!(err, TableError::NonNumeric { row: 1, .. }), "{bad}");
        }
    }

    #[test]
    fn keeps_duplicate_labels_distinct() {
        let table = InputTable::from_raw(&raw(
            &["k", "v"],
            &[&["x", "1"], &["x", "2"]],
        ))
        .unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0].label, table.rows[1].label);
        assert_ne!(table.rows[0].frequency, table.rows[1].frequency);
    }
}
