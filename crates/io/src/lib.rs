//! `railpal-io` — export of reconciliation results.

pub mod csv;

pub use crate::csv::{export_to_path, to_delimited_text, DEFAULT_EXPORT_FILENAME, RESULT_HEADER};
