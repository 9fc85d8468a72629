pub mod chart_panel;
pub mod input_panel;
pub mod table_panel;
