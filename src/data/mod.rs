pub mod loader;
pub mod table;
