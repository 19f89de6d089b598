use railpal_core::{InventoryRecord, WorkOrderRecord};

/// Session-scoped record store.
///
/// Work orders accumulate across uploads via [`upsert_work_orders`] and keep
/// first-seen order; inventory is a snapshot replaced wholesale by each new
/// scan. All state dies with the session — nothing is persisted.
///
/// [`upsert_work_orders`]: RecordStore::upsert_work_orders
#[derive(Debug, Default)]
pub struct RecordStore {
    work_orders: Vec<WorkOrderRecord>,
    inventory: Vec<InventoryRecord>,
}

/// Counts from one upsert batch, for status output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// Records appended for cars not previously in the store.
    pub inserted: usize,
    /// Existing records whose spot changed.
    pub updated: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a batch of freshly parsed work orders into the store.
    ///
    /// One record per car number: an incoming car already in the store
    /// updates the existing record in place, and a blank incoming spot never
    /// erases a previously known spot. Idempotent under repeated input.
    pub fn upsert_work_orders(&mut self, incoming: Vec<WorkOrderRecord>) -> UpsertOutcome {
        let mut outcome = UpsertOutcome::default();

        for record in incoming {
            match self.work_orders.iter_mut().find(|o| o.car == record.car) {
                Some(existing) => {
                    if !record.spot.is_empty() && existing.spot != record.spot {
                        existing.spot = record.spot;
                        outcome.updated += 1;
                    }
                }
                None => {
                    self.work_orders.push(record);
                    outcome.inserted += 1;
                }
            }
        }

        outcome
    }

    /// Discard the prior inventory and store the new snapshot as-is.
    pub fn replace_inventory(&mut self, records: Vec<InventoryRecord>) {
        self.inventory = records;
    }

    /// Work orders in first-seen order.
    pub fn work_orders(&self) -> &[WorkOrderRecord] {
        &self.work_orders
    }

    /// Current inventory snapshot in parse order.
    pub fn inventory(&self) -> &[InventoryRecord] {
        &self.inventory
    }
}
