use chrono::{NaiveDateTime, Timelike};
use std::collections::HashMap;
use tracing::debug;

use crate::domain::models::slot::ReservedSlot;

/// Reserved slots for the currently selected merchant.
///
/// Rebuilt from the authoritative per-merchant mapping on every merchant
/// change. An unknown merchant or no selection yields an empty index rather
/// than an error, so the calendar always renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityIndex {
    slots: Vec<ReservedSlot>,
}

impl AvailabilityIndex {
    pub fn build(
        by_merchant: &HashMap<String, Vec<ReservedSlot>>,
        merchant_id: Option<&str>,
    ) -> Self {
        let slots = merchant_id
            .and_then(|id| by_merchant.get(id))
            .cloned()
            .unwrap_or_default();

        debug!(
            "Availability index built for {:?}: {} reserved slots",
            merchant_id,
            slots.len()
        );
        Self { slots }
    }

    /// Source order is preserved from the props payload.
    pub fn slots(&self) -> &[ReservedSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Occupancy check at minute resolution, used by grid rendering to flag a
    /// cell that already holds a reservation. Seconds are ignored here; the
    /// collision check in `validation` compares full timestamps instead.
    pub fn covers_minute(&self, at: NaiveDateTime) -> bool {
        let at = truncate_to_minute(at);
        self.slots
            .iter()
            .any(|slot| truncate_to_minute(slot.starts_at) == at)
    }
}

fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}
