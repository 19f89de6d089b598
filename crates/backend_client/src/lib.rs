//! RailPal backend API client — shared between commands.
//!
//! This crate is the single source of truth for the backend wire contract:
//! OCR recognition and checkout session creation. Blocking reqwest client,
//! no async runtime required. No retries: a failed recognition aborts the
//! upload, a failed checkout is reported and dropped.

mod client;

pub use client::{BackendClient, BackendError, API_BASE};
