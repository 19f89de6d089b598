//! `railpal-extract` — turn raw recognized text into structured records.
//!
//! Pure extraction crate: receives OCR output as a string, returns record
//! sequences. No display, no HTTP, no store — unit-testable on raw strings
//! alone.

pub mod normalize;

pub use normalize::{parse_inventory, parse_work_orders};
