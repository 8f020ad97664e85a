use chrono::{Duration, NaiveDateTime};
use thiserror::Error;
use tracing::warn;

use crate::domain::services::availability::AvailabilityIndex;

/// Minimum separation between two bookings for the same merchant, in minutes.
/// Matches the fixed one-hour appointment length used across the CRM.
pub const COLLISION_WINDOW_MIN: i64 = 60;

/// Why a candidate slot cannot be booked. Both variants are user-facing and
/// final: the caller shows the message and asks for a different pick, nothing
/// is retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRejection {
    #[error("Cannot book an appointment in the past")]
    PastDate,
    #[error("This slot is within an hour of an existing appointment")]
    SlotTaken,
}

/// Decides whether a candidate timestamp may be committed against the given
/// merchant availability. `now` comes from the caller's clock; a candidate at
/// the exact current instant is still bookable.
pub fn validate_slot(
    candidate: NaiveDateTime,
    now: NaiveDateTime,
    index: &AvailabilityIndex,
) -> Result<(), SlotRejection> {
    if candidate < now {
        warn!("Slot rejected: {} is in the past", candidate);
        return Err(SlotRejection::PastDate);
    }

    let window = Duration::minutes(COLLISION_WINDOW_MIN);
    for slot in index.slots() {
        // Full-precision comparison; a gap of exactly the window is allowed.
        let gap = (candidate - slot.starts_at).abs();
        if gap < window {
            warn!(
                "Slot rejected: {} collides with reservation at {}",
                candidate, slot.starts_at
            );
            return Err(SlotRejection::SlotTaken);
        }
    }

    Ok(())
}
