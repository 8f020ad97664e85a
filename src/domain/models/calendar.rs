use chrono::NaiveDateTime;
use serde::Serialize;

/// Styling hook carried by a calendar event. The UI adapter maps each tag to
/// its widget-native color class; the core never deals in CSS.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    Busy,
}

/// Renderable busy block for a generic calendar widget.
///
/// Always rebuilt from the reserved-slot source, never mutated in place, and
/// carries no generated ids so two derivations from the same input compare
/// equal.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: String,
    pub style: StyleTag,
}
