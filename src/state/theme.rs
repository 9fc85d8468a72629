use egui::{Color32, Visuals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    /// Fill color for the frequency bars.
    pub fn bar_fill(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(110, 170, 230),
            Theme::Light => Color32::from_rgb(60, 120, 190),
        }
    }

    /// Stroke color for the PDF line (orange family, per the classic look).
    pub fn pdf_stroke(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(255, 180, 70),
            Theme::Light => Color32::from_rgb(230, 130, 20),
        }
    }

    /// Stroke color for the CDF line (blue family).
    pub fn cdf_stroke(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(100, 150, 255),
            Theme::Light => Color32::from_rgb(40, 80, 200),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}
