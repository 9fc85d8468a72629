use std::io::Write;
use std::path::Path;

use eframe::egui;

use crate::analysis::distribution::Distribution;
use crate::data::loader;
use crate::data::table::{InputTable, RawTable};
use crate::state::analysis_state::AnalysisState;
use crate::ui::chart_panel;
use crate::ui::input_panel::{self, InputAction};
use crate::ui::table_panel;

pub const VERSION: &str = "0.1.0";

/// The main Distalyzer application.
pub struct DistalyzerApp {
    pub state: AnalysisState,
    /// Whether to show the About window (hidden menu).
    pub show_about: bool,
}

impl DistalyzerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AnalysisState::new();

        // --- Global UI style improvements ---
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(14.5),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(20.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            egui::FontId::monospace(13.5),
        );

        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);

        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        Self {
            state,
            show_about: false,
        }
    }

    /// Open a native file dialog and analyze the chosen file.
    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Data Files", &["csv", "json"])
            .add_filter("All Files", &["*"])
            .pick_file()
        {
            self.analyze_file(&path);
        }
    }

    /// Run one analysis request over a file. The dataset is a handful of
    /// rows, so the whole pipeline runs synchronously on the UI thread.
    fn analyze_file(&mut self, path: &Path) {
        let source_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();

        let raw = match loader::load_file(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("failed to load {:?}: {e}", path);
                self.state.set_error(e.to_string());
                return;
            }
        };
        self.analyze_raw(source_name, raw);
    }

    /// Run one analysis request over the pasted-text buffer.
    fn analyze_pasted(&mut self) {
        let delimiter = self.state.paste_delimiter.byte();
        let raw = match loader::parse_delimited(&self.state.pasted_text, delimiter) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("failed to parse pasted text: {e}");
                self.state.set_error(e.to_string());
                return;
            }
        };
        self.analyze_raw("pasted text".to_string(), raw);
    }

    /// Validation plus analysis, shared by both input methods. Any failure
    /// is terminal for the request: the previous result is dropped and a
    /// single message is shown.
    fn analyze_raw(&mut self, source_name: String, raw: RawTable) {
        let table = match InputTable::from_raw(&raw) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("rejected {source_name}: {e}");
                self.state.set_error(e.to_string());
                return;
            }
        };

        match Distribution::analyze(&table) {
            Ok(dist) => {
                tracing::info!(
                    "analyzed {source_name}: {} rows, total {}",
                    dist.rows.len(),
                    dist.total
                );
                self.state.set_result(source_name, dist);
            }
            Err(e) => {
                tracing::error!("rejected {source_name}: {e}");
                self.state.set_error(e.to_string());
            }
        }
    }

    /// Export the current result to a CSV file via a save dialog.
    fn export_csv(&self) {
        let dist = match &self.state.result {
            Some(d) => d,
            None => return,
        };

        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("distribution.csv")
            .add_filter("CSV Files", &["csv"])
            .save_file()
        {
            if let Ok(mut file) = std::fs::File::create(&path) {
                let _ = writeln!(
                    file,
                    "{},Frequency,PDF,CDF,Percentage",
                    dist.label_column
                );
                for r in &dist.rows {
                    let _ = writeln!(
                        file,
                        "{},{},{:.6},{:.6},{:.4}",
                        r.label, r.frequency, r.pdf_value, r.cdf_value, r.percentage
                    );
                }
                tracing::info!("Exported CSV to {:?}", path);
            }
        }
    }

    /// Export the current result as pretty-printed JSON via a save dialog.
    fn export_json(&mut self) {
        let dist = match &self.state.result {
            Some(d) => d,
            None => return,
        };

        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("distribution.json")
            .add_filter("JSON Files", &["json"])
            .save_file()
        {
            match serde_json::to_string_pretty(dist) {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        tracing::error!("Failed to write JSON export: {e}");
                        self.state.error_message =
                            Some(format!("Failed to write JSON export: {e}"));
                    } else {
                        tracing::info!("Exported JSON to {:?}", path);
                    }
                }
                Err(e) => tracing::error!("Failed to serialize result: {e}"),
            }
        }
    }
}

impl eframe::App for DistalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ------------------------------------------------------------------
        // 1. Handle dropped files (collect paths first to avoid borrow issues)
        // ------------------------------------------------------------------
        let mut dropped_paths: Vec<std::path::PathBuf> = Vec::new();
        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    let ext = path
                        .extension()
                        .and_then(|e| e.to_str())
                        .map(|e| e.to_lowercase())
                        .unwrap_or_default();
                    if ext == "csv" || ext == "json" {
                        dropped_paths.push(path.clone());
                    }
                }
            }
        });

        // Files are analyzed one at a time; the last drop wins.
        for path in dropped_paths {
            self.analyze_file(&path);
        }

        // ------------------------------------------------------------------
        // 2. Header panel
        // ------------------------------------------------------------------
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let heading_response = ui.heading("Distalyzer");
                    heading_response.context_menu(|ui| {
                        if ui.button("About Distalyzer").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(self.state.theme.label())
                            .on_hover_text("Toggle dark/light theme")
                            .clicked()
                        {
                            self.state.theme = self.state.theme.toggle();
                            ctx.set_visuals(self.state.theme.visuals());
                        }

                        let has_result = self.state.result.is_some();
                        if ui
                            .add_enabled(has_result, egui::Button::new("Export JSON"))
                            .clicked()
                        {
                            self.export_json();
                        }
                        if ui
                            .add_enabled(has_result, egui::Button::new("Export CSV"))
                            .clicked()
                        {
                            self.export_csv();
                        }
                    });
                });
            });

        // ------------------------------------------------------------------
        // 3. Main content
        // ------------------------------------------------------------------
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    input_panel::show_help(&self.state, ui);
                    ui.add_space(6.0);

                    match input_panel::show_input_panel(&mut self.state, ui) {
                        InputAction::None => {}
                        InputAction::OpenFileDialog => self.open_file_dialog(),
                        InputAction::AnalyzePasted => self.analyze_pasted(),
                        InputAction::ClearResults => {
                            self.state.result = None;
                            self.state.source_name = None;
                            self.state.error_message = None;
                        }
                    }

                    if let Some(message) = &self.state.error_message {
                        ui.add_space(6.0);
                        egui::Frame::group(ui.style())
                            .inner_margin(egui::Margin::same(10))
                            .show(ui, |ui| {
                                ui.colored_label(
                                    egui::Color32::from_rgb(220, 60, 60),
                                    message,
                                );
                            });
                    }

                    if let Some(dist) = &self.state.result {
                        ui.add_space(10.0);
                        ui.separator();

                        ui.horizontal(|ui| {
                            ui.heading("Data table");
                            if let Some(name) = &self.state.source_name {
                                ui.label(egui::RichText::new(format!("({name})")).weak());
                            }
                        });
                        table_panel::show_results_table(dist, ui);

                        ui.add_space(12.0);
                        chart_panel::show_charts(dist, self.state.theme, ui);
                    }
                });
        });

        // ------------------------------------------------------------------
        // 4. About window
        // ------------------------------------------------------------------
        if self.show_about {
            egui::Window::new("About Distalyzer")
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_about)
                .show(ctx, |ui| {
                    ui.label(format!("Distalyzer v{VERSION}"));
                    ui.label("Distribution analysis for two-column frequency data.");
                });
        }
    }
}
