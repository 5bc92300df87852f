pub mod config;
pub mod csv;
pub mod download;
pub mod storage;
