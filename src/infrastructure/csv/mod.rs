// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV serialization for downloads

mod csv_writer;

pub use csv_writer::{
    build_csv_content, derive_headers, flatten_text, normalize_field, normalize_value, CsvWriter,
};
