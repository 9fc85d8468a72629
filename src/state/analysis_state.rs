use crate::analysis::distribution::Distribution;
use crate::state::theme::Theme;

/// How the user supplies the source data. Explicit state rather than
/// whatever widget happens to hold a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    FileUpload,
    PasteText,
}

impl InputMethod {
    pub fn label(&self) -> &'static str {
        match self {
            InputMethod::FileUpload => "Upload a file",
            InputMethod::PasteText => "Paste text",
        }
    }
}

/// Delimiter choice for pasted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteDelimiter {
    Comma,
    Semicolon,
    Tab,
}

impl PasteDelimiter {
    pub const ALL: [PasteDelimiter; 3] = [
        PasteDelimiter::Comma,
        PasteDelimiter::Semicolon,
        PasteDelimiter::Tab,
    ];

    pub fn byte(&self) -> u8 {
        match self {
            PasteDelimiter::Comma => b',',
            PasteDelimiter::Semicolon => b';',
            PasteDelimiter::Tab => b'\t',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasteDelimiter::Comma => "Comma (,)",
            PasteDelimiter::Semicolon => "Semicolon (;)",
            PasteDelimiter::Tab => "Tab",
        }
    }
}

/// Everything the current analysis request carries: the chosen input
/// method, its buffers, and either a result or an error message. One
/// request at a time; a new analysis replaces both fields.
pub struct AnalysisState {
    pub input_method: InputMethod,
    pub pasted_text: String,
    pub paste_delimiter: PasteDelimiter,
    /// File name or "pasted text", shown above the results.
    pub source_name: Option<String>,
    pub result: Option<Distribution>,
    pub error_message: Option<String>,
    pub theme: Theme,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self {
            input_method: InputMethod::FileUpload,
            pasted_text: String::new(),
            paste_delimiter: PasteDelimiter::Comma,
            source_name: None,
            result: None,
            error_message: None,
            theme: Theme::default(),
        }
    }

    /// Store a fresh result, clearing any stale error.
    pub fn set_result(&mut self, source_name: String, result: Distribution) {
        self.source_name = Some(source_name);
        self.result = Some(result);
        self.error_message = None;
    }

    /// Store a terminal error for this request. Partial results are never
    /// kept around.
    pub fn set_error(&mut self, message: String) {
        self.result = None;
        self.source_name = None;
        self.error_message = Some(message);
    }
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::{InputRow, InputTable};

    fn some_result() -> Distribution {
        let table = InputTable {
            label_column: "k".to_string(),
            value_column: "v".to_string(),
            rows: vec![InputRow {
                label: "a".to_string(),
                frequency: 1.0,
            }],
        };
        Distribution::analyze(&table).unwrap()
    }

    #[test]
    fn a_new_result_clears_the_previous_error() {
        let mut state = AnalysisState::new();
        state.set_error("boom".to_string());
        assert!(state.result.is_none());

        state.set_result("data.csv".to_string(), some_result());
        assert!(state.error_message.is_none());
        assert_eq!(state.source_name.as_deref(), Some("data.csv"));
        assert!(state.result.is_some());
    }

    #[test]
    fn an_error_clears_the_previous_result() {
        let mut state = AnalysisState::new();
        state.set_result("data.csv".to_string(), some_result());

        state.set_error("bad column".to_string());
        assert!(state.result.is_none());
        assert!(state.source_name.is_none());
        assert_eq!(state.error_message.as_deref(), Some("bad column"));
    }
}
