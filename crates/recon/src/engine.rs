use std::collections::HashMap;

use serde::Serialize;

use railpal_core::{InventoryRecord, MatchResult, WorkOrderRecord};

/// Join the inventory snapshot against the work-order store.
///
/// One result per inventory record, in inventory order — no reordering or
/// grouping. Matching is exact string equality on the normalized car number.
/// Unmatched cars come back with an empty spot and `matched: false`.
pub fn reconcile(
    inventory: &[InventoryRecord],
    work_orders: &[WorkOrderRecord],
) -> Vec<MatchResult> {
    // Store invariant: at most one work order per car. Keep the first if the
    // input ever violates that.
    let mut by_car: HashMap<&str, &WorkOrderRecord> = HashMap::new();
    for order in work_orders {
        by_car.entry(order.car.as_str()).or_insert(order);
    }

    inventory
        .iter()
        .map(|item| match by_car.get(item.car.as_str()) {
            Some(order) => MatchResult {
                car: item.car.clone(),
                spot: order.spot.clone(),
                matched: true,
            },
            None => MatchResult {
                car: item.car.clone(),
                spot: String::new(),
                matched: false,
            },
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Summary + report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Compute summary counts from match results.
pub fn compute_summary(results: &[MatchResult]) -> ReconSummary {
    let matched = results.iter().filter(|r| r.matched).count();
    ReconSummary {
        total: results.len(),
        matched,
        unmatched: results.len() - matched,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub engine_version: String,
    pub run_at: String,
}

/// Serializable output of one reconciliation run, for JSON consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ReconReport {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub results: Vec<MatchResult>,
}

pub fn build_report(results: Vec<MatchResult>) -> ReconReport {
    ReconReport {
        meta: ReconMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary: compute_summary(&results),
        results,
    }
}
