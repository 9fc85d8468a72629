use crate::state::analysis_state::{AnalysisState, InputMethod, PasteDelimiter};

/// Actions the input panel can request from the parent app.
pub enum InputAction {
    None,
    /// Open the native file picker and analyze the chosen file.
    OpenFileDialog,
    /// Analyze the current pasted-text buffer.
    AnalyzePasted,
    /// Drop the current result and error.
    ClearResults,
}

const CSV_SAMPLE: &str = "Class,Servant Count\nSaber,45\nArcher,39\nLancer,34";
const JSON_SAMPLE: &str = "[\n  {\"Class\": \"Saber\", \"Servant Count\": 45},\n  {\"Class\": \"Archer\", \"Servant Count\": 39},\n  {\"Class\": \"Lancer\", \"Servant Count\": 34}\n]";

/// Intro text plus the format requirements, collapsed by default once a
/// result is on screen.
pub fn show_help(state: &AnalysisState, ui: &mut egui::Ui) {
    ui.label(
        "Analyze the distribution of a frequency dataset: PDF, CDF and \
         percentage share, as a table and three charts.",
    );
    ui.add_space(4.0);

    egui::CollapsingHeader::new("Required data format")
        .default_open(state.result.is_none())
        .show(ui, |ui| {
            ui.label("• Exactly 2 columns: a text label and a numeric value.");
            ui.label("• The first row holds the column names.");
            ui.label("• Accepted sources: a CSV or JSON file, or pasted delimited text.");
            ui.add_space(6.0);

            ui.columns(2, |cols| {
                cols[0].label(egui::RichText::new("CSV example").strong());
                cols[0].label(egui::RichText::new(CSV_SAMPLE).monospace());
                cols[1].label(egui::RichText::new("JSON example").strong());
                cols[1].label(egui::RichText::new(JSON_SAMPLE).monospace());
            });
        });
}

/// Render the input-method selector and its controls.
/// Returns an action if the user asked for one.
pub fn show_input_panel(state: &mut AnalysisState, ui: &mut egui::Ui) -> InputAction {
    let mut action = InputAction::None;

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Data source:").strong());
                for method in [InputMethod::FileUpload, InputMethod::PasteText] {
                    ui.radio_value(&mut state.input_method, method, method.label());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.result.is_some() || state.error_message.is_some() {
                        if ui.button("Clear").on_hover_text("Discard the current analysis").clicked() {
                            action = InputAction::ClearResults;
                        }
                    }
                });
            });

            ui.add_space(4.0);

            match state.input_method {
                InputMethod::FileUpload => {
                    ui.horizontal(|ui| {
                        if ui
                            .button("Open CSV or JSON file...")
                            .on_hover_text("You can also drop a file onto the window")
                            .clicked()
                        {
                            action = InputAction::OpenFileDialog;
                        }
                        if let Some(name) = &state.source_name {
                            ui.label(egui::RichText::new(name).weak());
                        }
                    });
                }
                InputMethod::PasteText => {
                    ui.horizontal(|ui| {
                        ui.label("Delimiter:");
                        egui::ComboBox::from_id_salt("paste_delimiter")
                            .selected_text(state.paste_delimiter.label())
                            .show_ui(ui, |ui| {
                                for delim in PasteDelimiter::ALL {
                                    ui.selectable_value(
                                        &mut state.paste_delimiter,
                                        delim,
                                        delim.label(),
                                    );
                                }
                            });
                    });

                    ui.add(
                        egui::TextEdit::multiline(&mut state.pasted_text)
                            .hint_text(CSV_SAMPLE)
                            .font(egui::TextStyle::Monospace)
                            .desired_rows(6)
                            .desired_width(f32::INFINITY),
                    );

                    let can_analyze = !state.pasted_text.trim().is_empty();
                    if ui
                        .add_enabled(can_analyze, egui::Button::new("Analyze"))
                        .clicked()
                    {
                        action = InputAction::AnalyzePasted;
                    }
                }
            }
        });

    action
}
