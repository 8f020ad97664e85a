use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

use crate::config::ScheduleConfig;
use crate::domain::models::calendar::{CalendarEvent, StyleTag};
use crate::domain::models::slot::ReservedSlot;
use crate::domain::services::availability::AvailabilityIndex;
use crate::domain::services::validation::COLLISION_WINDOW_MIN;

/// Visual length of a busy block on the calendar grid, in minutes.
pub const DISPLAY_DURATION_MIN: i64 = 60;

/// Fallback label for reservations that carry no note.
pub const BUSY_LABEL: &str = "Reserved";

/// Turns reserved slots into renderable busy blocks. Pure: the same input
/// always yields structurally equal events, and duplicates in the source stay
/// duplicated in the output.
pub fn project_events(slots: &[ReservedSlot], display_duration_min: i64) -> Vec<CalendarEvent> {
    slots
        .iter()
        .map(|slot| CalendarEvent {
            start: slot.starts_at,
            end: slot.starts_at + Duration::minutes(display_duration_min),
            label: slot
                .note
                .clone()
                .unwrap_or_else(|| BUSY_LABEL.to_string()),
            style: StyleTag::Busy,
        })
        .collect()
}

/// Bookable start times for one day: steps of the configured interval inside
/// the day's opening windows, minus starts already past and starts within the
/// collision window of an existing reservation. Sorted and deduplicated, so
/// overlapping windows do not produce repeated entries.
pub fn open_slots(
    date: NaiveDate,
    config: &ScheduleConfig,
    index: &AvailabilityIndex,
    now: NaiveDateTime,
) -> Vec<NaiveDateTime> {
    let windows = match config.hours.windows_for(date.weekday()) {
        Some(windows) => windows,
        None => return Vec::new(),
    };

    if config.slot_interval_min <= 0 {
        return Vec::new();
    }

    let collision = Duration::minutes(COLLISION_WINDOW_MIN);
    let appointment = Duration::minutes(DISPLAY_DURATION_MIN);
    let mut starts = Vec::new();

    for window in windows {
        if let (Ok(start), Ok(end)) = (
            NaiveTime::parse_from_str(&window.start, "%H:%M"),
            NaiveTime::parse_from_str(&window.end, "%H:%M"),
        ) {
            let mut window_end = date.and_time(end);
            // A 23:59 end means "until end of day"; let the last hour fit.
            if end == NaiveTime::from_hms_opt(23, 59, 0).unwrap() {
                window_end += Duration::minutes(1);
            }

            let mut cursor = date.and_time(start);
            while cursor + appointment <= window_end {
                let taken = index
                    .slots()
                    .iter()
                    .any(|slot| (cursor - slot.starts_at).abs() < collision);

                if cursor >= now && !taken {
                    starts.push(cursor);
                }
                cursor += Duration::minutes(config.slot_interval_min);
            }
        }
    }

    starts.sort();
    starts.dedup();
    starts
}

/// Generates an iCalendar (.ics) document for the merchant's busy blocks.
/// Times are emitted as floating local times, matching the merchant-local
/// timestamps used everywhere else.
pub fn export_ics(merchant_name: &str, events: &[CalendarEvent]) -> String {
    let mut calendar = Calendar::new();

    for event in events {
        let ical_event = IcalEvent::new()
            .summary(&event.label)
            .location(merchant_name)
            .starts(event.start)
            .ends(event.end)
            .uid(&format!(
                "{}@{}",
                event.start.format("%Y%m%dT%H%M%S"),
                merchant_name.replace(' ', "-")
            ))
            .done();

        calendar.push(ical_event);
    }

    calendar.to_string()
}
