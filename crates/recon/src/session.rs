//! Reconciliation session: one store, two upload channels.
//!
//! A session owns its [`RecordStore`] for the lifetime of one reconciliation
//! workflow and is discarded when that workflow ends. Each upload channel
//! (work orders, inventory) allows at most one recognition call in flight at
//! a time; the two channels are independent and may run in parallel with
//! each other.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use railpal_core::MatchResult;

use crate::engine::reconcile;
use crate::store::RecordStore;

/// The two independent upload channels feeding a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadChannel {
    WorkOrders,
    Inventory,
}

impl UploadChannel {
    fn index(self) -> usize {
        match self {
            UploadChannel::WorkOrders => 0,
            UploadChannel::Inventory => 1,
        }
    }
}

impl fmt::Display for UploadChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadChannel::WorkOrders => write!(f, "work-order"),
            UploadChannel::Inventory => write!(f, "inventory"),
        }
    }
}

#[derive(Debug)]
pub enum SessionError {
    /// A recognition call is already in flight on this channel.
    UploadInFlight(UploadChannel),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UploadInFlight(channel) => {
                write!(f, "an upload is already in flight on the {channel} channel")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Single-flight flags, one per channel. Shareable across threads.
#[derive(Debug, Default)]
struct ChannelGuard {
    in_flight: [AtomicBool; 2],
}

impl ChannelGuard {
    fn try_acquire(&self, channel: UploadChannel) -> bool {
        !self.in_flight[channel.index()].swap(true, Ordering::Acquire)
    }

    fn release(&self, channel: UploadChannel) {
        self.in_flight[channel.index()].store(false, Ordering::Release);
    }
}

/// Permission to run one recognition call on a channel. Releases the channel
/// when dropped.
#[derive(Debug)]
pub struct UploadPermit<'a> {
    guard: &'a ChannelGuard,
    channel: UploadChannel,
}

impl Drop for UploadPermit<'_> {
    fn drop(&mut self) {
        self.guard.release(self.channel);
    }
}

/// One reconciliation session: the store plus its upload-channel guards.
#[derive(Debug, Default)]
pub struct ReconciliationSession {
    store: RecordStore,
    channels: ChannelGuard,
}

impl ReconciliationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a channel for one upload. Fails if that channel already has a
    /// recognition call in flight; the other channel is unaffected.
    pub fn begin_upload(&self, channel: UploadChannel) -> Result<UploadPermit<'_>, SessionError> {
        if self.channels.try_acquire(channel) {
            Ok(UploadPermit {
                guard: &self.channels,
                channel,
            })
        } else {
            Err(SessionError::UploadInFlight(channel))
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Join the current inventory snapshot against the work-order store.
    pub fn reconcile(&self) -> Vec<MatchResult> {
        reconcile(self.store.inventory(), self.store.work_orders())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railpal_core::{InventoryRecord, WorkOrderRecord};

    #[test]
    fn second_upload_on_same_channel_is_rejected() {
        let session = ReconciliationSession::new();
        let permit = session.begin_upload(UploadChannel::WorkOrders).unwrap();

        let err = session.begin_upload(UploadChannel::WorkOrders).unwrap_err();
        assert!(matches!(err, SessionError::UploadInFlight(UploadChannel::WorkOrders)));
        assert!(err.to_string().contains("work-order"));

        drop(permit);
    }

    #[test]
    fn channels_are_independent() {
        let session = ReconciliationSession::new();
        let _work = session.begin_upload(UploadChannel::WorkOrders).unwrap();
        // Inventory channel still free while a work-order upload is in flight.
        let _inv = session.begin_upload(UploadChannel::Inventory).unwrap();
    }

    #[test]
    fn dropping_the_permit_frees_the_channel() {
        let session = ReconciliationSession::new();
        {
            let _permit = session.begin_upload(UploadChannel::Inventory).unwrap();
        }
        assert!(session.begin_upload(UploadChannel::Inventory).is_ok());
    }

    #[test]
    fn session_reconciles_its_own_store() {
        let mut session = ReconciliationSession::new();
        session.store_mut().upsert_work_orders(vec![WorkOrderRecord {
            car: "A1234".into(),
            spot: "1-1".into(),
        }]);
        session.store_mut().replace_inventory(vec![
            InventoryRecord { car: "A1234".into(), raw: "A1234".into() },
            InventoryRecord { car: "B5678".into(), raw: "B5678".into() },
        ]);

        let results = session.reconcile();
        assert_eq!(results.len(), 2);
        assert!(results[0].matched);
        assert!(!results[1].matched);
    }
}
