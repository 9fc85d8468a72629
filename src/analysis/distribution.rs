use serde::Serialize;
use thiserror::Error;

use crate::data::table::InputTable;

/// Degenerate inputs the analyzer refuses to compute on. A zero total would
/// make every relative frequency an undefined ratio, so it is rejected
/// outright instead of propagating NaN into the views.
#[derive(Debug, Error, PartialEq)]
pub enum DistributionError {
    #[error("the table has no data rows")]
    Empty,
    #[error("the frequency column sums to zero, so relative frequencies are undefined")]
    ZeroTotal,
}

/// One input row augmented with its derived distribution fields.
///
/// The `*_label` strings are the human-readable derivations shown in the
/// results table; the numeric fields keep full f64 precision for charting.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedRow {
    pub label: String,
    pub frequency: f64,
    pub pdf_value: f64,
    pub pdf_label: String,
    pub cdf_value: f64,
    pub cdf_label: String,
    pub percentage: f64,
}

/// A complete analysis: the augmented rows in input order plus the source
/// column names and the frequency total.
#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    pub label_column: String,
    pub value_column: String,
    pub total: f64,
    pub rows: Vec<AnalyzedRow>,
}

impl Distribution {
    /// Derive PDF, CDF and percentage for every row of a validated table.
    ///
    /// Pure computation: no I/O, no shared state. Row order is preserved
    /// (it defines the categorical axis order of all views) and duplicate
    /// labels stay distinct.
    pub fn analyze(table: &InputTable) -> Result<Self, DistributionError> {
        if table.rows.is_empty() {
            return Err(DistributionError::Empty);
        }

        let total: f64 = table.rows.iter().map(|r| r.frequency).sum();
        if total == 0.0 {
            return Err(DistributionError::ZeroTotal);
        }

        let mut rows = Vec::with_capacity(table.rows.len());
        let mut running = 0.0_f64;
        for r in &table.rows {
            let pdf = r.frequency / total;
            let prev = running;
            running += pdf;
            rows.push(AnalyzedRow {
                label: r.label.clone(),
                frequency: r.frequency,
                pdf_value: pdf,
                // f64 Display renders integral values without a decimal
                // point, so 45.0/118.0 shows as "45/118".
                pdf_label: format!("{}/{} = {:.4}", r.frequency, total, pdf),
                cdf_value: running,
                cdf_label: cdf_label(prev, pdf, running),
                percentage: pdf * 100.0,
            });
        }

        Ok(Self {
            label_column: table.label_column.clone(),
            value_column: table.value_column.clone(),
            total,
            rows,
        })
    }
}

/// Derivation string for one CDF entry. While the running total is still
/// exactly zero the leading "0.0000 + " term is omitted, so the first
/// nonzero contribution reads as "X = X".
fn cdf_label(prev: f64, pdf: f64, running: f64) -> String {
    if prev == 0.0 {
        format!("{pdf:.4} = {running:.4}")
    } else {
        format!("{prev:.4} + {pdf:.4} = {running:.4}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::InputRow;

    const TOL: f64 = 1e-9;

    fn table(rows: &[(&str, f64)]) -> InputTable {
        InputTable {
            label_column: "Class".to_string(),
            value_column: "Count".to_string(),
            rows: rows
                .iter()
                .map(|(label, frequency)| InputRow {
                    label: label.to_string(),
                    frequency: *frequency,
                })
                .collect(),
        }
    }

    fn servants() -> InputTable {
        table(&[("Saber", 45.0), ("Archer", 39.0), ("Lancer", 34.0)])
    }

    #[test]
    fn computes_known_distribution() {
        let dist = Distribution::analyze(&servants()).unwrap();

        assert_eq!(dist.total, 118.0);
        assert_eq!(dist.rows.len(), 3);

        let pdf: Vec<f64> = dist.rows.iter().map(|r| r.pdf_value).collect();
        let cdf: Vec<f64> = dist.rows.iter().map(|r| r.cdf_value).collect();

        assert!((pdf[0] - 45.0 / 118.0).abs() < TOL);
        assert!((pdf[1] - 39.0 / 118.0).abs() < TOL);
        assert!((pdf[2] - 34.0 / 118.0).abs() < TOL);
        assert!((cdf[0] - 0.3814).abs() < 1e-4);
        assert!((cdf[1] - 0.7119).abs() < 1e-4);
        assert!((cdf[2] - 1.0).abs() < TOL);
    }

    #[test]
    fn pdf_values_sum_to_one() {
        let dist = Distribution::analyze(&servants()).unwrap();
        let sum: f64 = dist.rows.iter().map(|r| r.pdf_value).sum();
        assert!((sum - 1.0).abs() < TOL);
    }

    #[test]
    fn cdf_is_non_decreasing_and_ends_at_one() {
        let dist = Distribution::analyze(&servants()).unwrap();
        for pair in dist.rows.windows(2) {
            assert!(pair[1].cdf_value >= pair[0].cdf_value);
        }
        assert!((dist.rows.last().unwrap().cdf_value - 1.0).abs() < TOL);
    }

    #[test]
    fn percentage_is_pdf_times_hundred() {
        let dist = Distribution::analyze(&servants()).unwrap();
        for row in &dist.rows {
            assert_eq!(row.percentage, row.pdf_value * 100.0);
        }
        assert!((dist.rows[0].percentage - 38.14).abs() < 0.005);
        assert!((dist.rows[1].percentage - 33.05).abs() < 0.005);
        assert!((dist.rows[2].percentage - 28.81).abs() < 0.005);
    }

    #[test]
    fn preserves_input_order_without_sorting() {
        let dist =
            Distribution::analyze(&table(&[("b", 1.0), ("a", 3.0), ("c", 2.0)])).unwrap();
        let labels: Vec<&str> = dist.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn formats_derivation_labels() {
        let dist = Distribution::analyze(&servants()).unwrap();

        assert_eq!(dist.rows[0].pdf_label, "45/118 = 0.3814");
        assert_eq!(dist.rows[1].pdf_label, "39/118 = 0.3305");

        // First contribution has no " + " prefix; later rows do.
        assert_eq!(dist.rows[0].cdf_label, "0.3814 = 0.3814");
        assert!(!dist.rows[0].cdf_label.contains(" + "));
        assert_eq!(dist.rows[1].cdf_label, "0.3814 + 0.3305 = 0.7119");
        assert!(dist.rows[2].cdf_label.contains(" + "));
    }

    #[test]
    fn fractional_frequencies_keep_their_display_form() {
        let dist = Distribution::analyze(&table(&[("a", 1.5), ("b", 0.5)])).unwrap();
        assert_eq!(dist.rows[0].pdf_label, "1.5/2 = 0.7500");
    }

    #[test]
    fn leading_zero_frequency_defers_the_plus_form() {
        let dist =
            Distribution::analyze(&table(&[("a", 0.0), ("b", 2.0), ("c", 2.0)])).unwrap();
        // The running total before row 2 is still 0, so it keeps the short form.
        assert_eq!(dist.rows[0].cdf_label, "0.0000 = 0.0000");
        assert_eq!(dist.rows[1].cdf_label, "0.5000 = 0.5000");
        assert_eq!(dist.rows[2].cdf_label, "0.5000 + 0.5000 = 1.0000");
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(
            Distribution::analyze(&table(&[])).unwrap_err(),
            DistributionError::Empty
        );
    }

    #[test]
    fn rejects_zero_total() {
        assert_eq!(
            Distribution::analyze(&table(&[("a", 0.0), ("b", 0.0)])).unwrap_err(),
            DistributionError::ZeroTotal
        );
        // Mixed signs cancelling to zero are just as undefined.
        assert_eq!(
            Distribution::analyze(&table(&[("a", 3.0), ("b", -3.0)])).unwrap_err(),
            DistributionError::ZeroTotal
        );
    }

    #[test]
    fn duplicate_labels_stay_distinct_rows() {
        let dist = Distribution::analyze(&table(&[("x", 1.0), ("x", 3.0)])).unwrap();
        assert_eq!(dist.rows.len(), 2);
        assert!((dist.rows[0].pdf_value - 0.25).abs() < TOL);
        assert!((dist.rows[1].pdf_value - 0.75).abs() < TOL);
    }

    #[test]
    fn cdf_label_helper_switches_forms() {
        assert_eq!(cdf_label(0.0, 0.25, 0.25), "0.2500 = 0.2500");
        assert_eq!(cdf_label(0.25, 0.5, 0.75), "0.2500 + 0.5000 = 0.7500");
    }
}
