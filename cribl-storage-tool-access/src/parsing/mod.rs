//! Bucket-file parsing

pub mod bucket_file;

pub use bucket_file::{load_bucket_file, parse_bucket_names};
