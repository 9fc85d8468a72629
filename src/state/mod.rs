pub mod analysis_state;
pub mod theme;
