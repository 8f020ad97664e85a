//! Server props boundary: the raw page payload and its conversion into
//! domain types.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::models::merchant::Merchant;
use crate::domain::models::slot::ReservedSlot;
use crate::error::ScheduleError;

/// Raw reserved-slot record exactly as the server serializes it.
#[derive(Debug, Deserialize, Clone)]
pub struct ReservedSlotRecord {
    pub date_rdv: String,
    pub details: Option<String>,
}

/// The booking page payload, delivered once per page load: the per-merchant
/// reserved slots and the merchant directory for the selection control.
#[derive(Debug, Deserialize, Clone)]
pub struct BookingPageProps {
    #[serde(default)]
    pub rdvs_by_merchant: HashMap<String, Vec<ReservedSlotRecord>>,
    #[serde(default)]
    pub merchants: Vec<Merchant>,
}

impl BookingPageProps {
    pub fn from_json(raw: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Converts the raw records into the domain mapping consumed by the
    /// availability index. Any unparsable timestamp aborts the conversion;
    /// a payload that bad is a server bug, not something to render around.
    pub fn reserved_slots(&self) -> Result<HashMap<String, Vec<ReservedSlot>>, ScheduleError> {
        let mut by_merchant = HashMap::with_capacity(self.rdvs_by_merchant.len());

        for (merchant_id, records) in &self.rdvs_by_merchant {
            let mut slots = Vec::with_capacity(records.len());
            for record in records {
                slots.push(ReservedSlot {
                    starts_at: parse_local_timestamp(&record.date_rdv)?,
                    note: record.details.clone(),
                });
            }
            by_merchant.insert(merchant_id.clone(), slots);
        }

        Ok(by_merchant)
    }
}

/// Parses the timestamp formats the server actually emits: datetime-local
/// form values without seconds, DB rows with seconds (and an optional
/// fraction), and the space-separated SQL form.
fn parse_local_timestamp(raw: &str) -> Result<NaiveDateTime, ScheduleError> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

    for format in FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(ts);
        }
    }

    Err(ScheduleError::InvalidTimestamp(raw.to_string()))
}
