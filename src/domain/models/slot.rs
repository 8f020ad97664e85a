use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One existing appointment for a merchant.
///
/// Timestamps are merchant-local calendar time; no timezone conversion is
/// applied anywhere in the crate. Slots are immutable once received from the
/// page props. Duplicates are allowed and simply render as redundant busy
/// blocks.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReservedSlot {
    pub starts_at: NaiveDateTime,
    pub note: Option<String>,
}

impl ReservedSlot {
    pub fn new(starts_at: NaiveDateTime) -> Self {
        Self {
            starts_at,
            note: None,
        }
    }

    pub fn with_note(starts_at: NaiveDateTime, note: impl Into<String>) -> Self {
        Self {
            starts_at,
            note: Some(note.into()),
        }
    }
}

/// A user-proposed appointment time, tied to the merchant it was validated
/// against. Transient: replaced on every new pick, cleared on merchant change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSlot {
    pub merchant_id: String,
    pub starts_at: NaiveDateTime,
}
