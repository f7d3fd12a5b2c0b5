//! Fetch Sequencing
//!
//! Guard against stale responses overwriting newer state. A view that can
//! re-fetch while a prior request is still in flight (e.g. the detail page
//! when its route id changes) takes a ticket per fetch and applies a result
//! only while that ticket is still the latest one issued.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic per-view fetch sequence.
///
/// Cloning shares the counter, so a component can move clones into each
/// spawned future.
#[derive(Clone, Default)]
pub struct FetchSeq(Arc<AtomicU64>);

impl FetchSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating all earlier tickets.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` still belongs to the most recently started fetch.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}
