pub mod section_export;
