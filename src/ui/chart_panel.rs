use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::analysis::distribution::Distribution;
use crate::state::theme::Theme;

/// Render the three charts below the table: frequency bars, PDF line and
/// CDF line. All share the same categorical x-axis: x = row index, labeled
/// with the category names in input order.
pub fn show_charts(dist: &Distribution, theme: Theme, ui: &mut egui::Ui) {
    let labels: Vec<String> = dist.rows.iter().map(|r| r.label.clone()).collect();

    ui.heading("Frequency");
    frequency_chart(dist, &labels, theme, ui);
    ui.add_space(8.0);

    ui.heading("PDF");
    line_chart(
        "pdf_plot",
        dist.rows.iter().map(|r| r.pdf_value).collect(),
        &labels,
        "PDF",
        theme.pdf_stroke(),
        ui,
    );
    ui.add_space(8.0);

    ui.heading("CDF");
    line_chart(
        "cdf_plot",
        dist.rows.iter().map(|r| r.cdf_value).collect(),
        &labels,
        "CDF",
        theme.cdf_stroke(),
        ui,
    );
}

fn frequency_chart(dist: &Distribution, labels: &[String], theme: Theme, ui: &mut egui::Ui) {
    let bars: Vec<Bar> = dist
        .rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.frequency)
                .width(0.6)
                .name(&r.label)
                .fill(theme.bar_fill())
        })
        .collect();
    let chart = BarChart::new(bars).name(&dist.value_column);

    let n = dist.rows.len();
    categorical_plot("frequency_plot", labels, 360.0)
        .include_x(-0.5)
        .include_x(n as f64 - 0.5)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn line_chart(
    id: &str,
    values: Vec<f64>,
    labels: &[String],
    series_name: &str,
    color: egui::Color32,
    ui: &mut egui::Ui,
) {
    let points: Vec<[f64; 2]> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect();

    let line = Line::new(PlotPoints::from(points.clone()))
        .color(color)
        .width(2.0)
        .name(series_name);
    let markers = Points::new(PlotPoints::from(points))
        .color(color)
        .radius(3.5)
        .name(series_name);

    categorical_plot(id, labels, 280.0)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
            plot_ui.points(markers);
        });
}

/// Common plot settings: fixed view, integer x-marks labeled with the
/// category names, hover text naming the category.
fn categorical_plot<'a>(id: &'a str, labels: &[String], height: f32) -> Plot<'a> {
    let axis_labels = labels.to_vec();
    let hover_labels = labels.to_vec();

    Plot::new(id)
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > 1e-6 || index < 0.0 {
                return String::new();
            }
            axis_labels
                .get(index as usize)
                .cloned()
                .unwrap_or_default()
        })
        .label_formatter(move |name, value| {
            let index = value.x.round();
            let category = if index >= 0.0 && (value.x - index).abs() < 0.5 {
                hover_labels.get(index as usize).map(String::as_str)
            } else {
                None
            };
            match category {
                Some(label) => format!("{label}\n{name}: {:.4}", value.y),
                None => format!("{name}: {:.4}", value.y),
            }
        })
}
