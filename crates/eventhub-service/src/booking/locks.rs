//! Per-event exclusive locks.
//!
//! Admission attempts for the same event queue on one `tokio` mutex;
//! attempts for different events never contend. An entry lives in the map
//! only while someone holds or waits for it.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio::time::error::Elapsed;

use eventhub_core::types::EventId;

/// Registry of per-event mutexes.
#[derive(Debug, Default)]
pub struct EventLocks {
    slots: DashMap<EventId, Arc<Mutex<()>>>,
}

/// Holds the slot for one event until dropped.
#[derive(Debug)]
pub struct EventLockGuard<'a> {
    // Field order matters: the mutex guard must drop before the slot
    // reference so that the slot sees the final strong count.
    _guard: OwnedMutexGuard<()>,
    _slot: SlotRef<'a>,
}

#[derive(Debug)]
struct SlotRef<'a> {
    locks: &'a EventLocks,
    event_id: EventId,
    mutex: Option<Arc<Mutex<()>>>,
}

impl Drop for SlotRef<'_> {
    fn drop(&mut self) {
        drop(self.mutex.take());
        self.locks
            .slots
            .remove_if(&self.event_id, |_, m| Arc::strong_count(m) == 1);
    }
}

impl EventLocks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits up to `timeout` for exclusive access to `event_id`.
    ///
    /// Abandoning the returned future (or timing out) releases the slot.
    pub async fn acquire(
        &self,
        event_id: EventId,
        timeout: Duration,
    ) -> Result<EventLockGuard<'_>, Elapsed> {
        let mutex = Arc::clone(&self.slots.entry(event_id).or_default());
        let slot = SlotRef {
            locks: self,
            event_id,
            mutex: Some(Arc::clone(&mutex)),
        };
        let guard = tokio::time::timeout(timeout, mutex.lock_owned()).await?;
        Ok(EventLockGuard {
            _guard: guard,
            _slot: slot,
        })
    }

    /// Number of events currently locked or awaited.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no event is locked or awaited.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
