// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types and value objects for CSV export
// No I/O, no async

mod csv_row;
mod csv_value;
mod downloaded_file;

pub use csv_row::CsvRow;
pub use csv_value::CsvValue;
pub use downloaded_file::{DownloadedFile, CSV_MEDIA_TYPE};
