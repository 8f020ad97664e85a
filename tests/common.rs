use chrono::NaiveDateTime;
use rdv_core::domain::models::slot::ReservedSlot;
use rdv_core::domain::ports::Clock;
use std::collections::HashMap;

/// Deterministic clock for past-date checks.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").expect("bad fixture timestamp")
}

pub fn ts_sec(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").expect("bad fixture timestamp")
}

pub fn reserved(raw: &str) -> ReservedSlot {
    ReservedSlot::new(ts(raw))
}

pub fn reserved_map(
    entries: Vec<(&str, Vec<ReservedSlot>)>,
) -> HashMap<String, Vec<ReservedSlot>> {
    entries
        .into_iter()
        .map(|(id, slots)| (id.to_string(), slots))
        .collect()
}
