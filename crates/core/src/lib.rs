//! `railpal-core` — record types shared across the workspace.
//!
//! No I/O, no parsing, no HTTP. Every other crate depends on these types.

pub mod record;

pub use record::{InventoryRecord, MatchResult, WorkOrderRecord};
