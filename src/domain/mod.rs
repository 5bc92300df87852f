pub mod error;
pub mod export_config;
pub mod section;
pub mod technology;

// CSV export module
pub mod csv;
