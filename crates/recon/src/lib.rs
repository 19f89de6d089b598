//! `railpal-recon` — session store and reconciliation engine.
//!
//! Pure engine crate: receives already-extracted records, owns the
//! session-scoped store, and produces match results. No CLI, OCR, or
//! export dependencies.

pub mod engine;
pub mod session;
pub mod store;

pub use engine::{build_report, compute_summary, reconcile, ReconMeta, ReconReport, ReconSummary};
pub use session::{ReconciliationSession, SessionError, UploadChannel, UploadPermit};
pub use store::{RecordStore, UpsertOutcome};
