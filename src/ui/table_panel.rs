use egui_extras::{Column, TableBuilder};

use crate::analysis::distribution::Distribution;

/// Results table: one row per input row, in input order. The label column
/// keeps its source name; the derived columns show the derivation strings
/// produced by the analyzer.
pub fn show_results_table(dist: &Distribution, ui: &mut egui::Ui) {
    let headers = [
        dist.label_column.as_str(),
        "Frequency",
        "PDF",
        "CDF",
        "Percentage",
    ];

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(120.0))
        .columns(Column::auto().at_least(90.0), 1)
        .columns(Column::remainder().at_least(150.0), 2)
        .columns(Column::auto().at_least(90.0), 1)
        .header(20.0, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, dist.rows.len(), |mut row| {
                let r = &dist.rows[row.index()];
                row.col(|ui| {
                    ui.label(&r.label);
                });
                row.col(|ui| {
                    // Integral frequencies render without a decimal point.
                    ui.label(format!("{}", r.frequency));
                });
                row.col(|ui| {
                    ui.label(egui::RichText::new(&r.pdf_label).monospace());
                });
                row.col(|ui| {
                    ui.label(egui::RichText::new(&r.cdf_label).monospace());
                });
                row.col(|ui| {
                    ui.label(format!("{:.4}", r.percentage));
                });
            });
        });
}
