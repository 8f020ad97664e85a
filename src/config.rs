use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One opening window within a day, `"HH:MM"` bounds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OpeningWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WeekHours {
    pub monday: Option<Vec<OpeningWindow>>,
    pub tuesday: Option<Vec<OpeningWindow>>,
    pub wednesday: Option<Vec<OpeningWindow>>,
    pub thursday: Option<Vec<OpeningWindow>>,
    pub friday: Option<Vec<OpeningWindow>>,
    pub saturday: Option<Vec<OpeningWindow>>,
    pub sunday: Option<Vec<OpeningWindow>>,
}

impl WeekHours {
    pub fn windows_for(&self, weekday: Weekday) -> Option<&[OpeningWindow]> {
        let day = match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        };
        day.as_deref()
    }
}

/// Schedule configuration delivered with the page props: the opening hours
/// shown on the booking calendar and the step between proposed start times.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleConfig {
    pub slot_interval_min: i64,
    pub hours: WeekHours,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let business_day = || {
            Some(vec![OpeningWindow {
                start: "09:00".to_string(),
                end: "18:00".to_string(),
            }])
        };

        Self {
            slot_interval_min: 60,
            hours: WeekHours {
                monday: business_day(),
                tuesday: business_day(),
                wednesday: business_day(),
                thursday: business_day(),
                friday: business_day(),
                saturday: None,
                sunday: None,
            },
        }
    }
}

impl ScheduleConfig {
    /// Parses the schedule payload from the page props. A malformed payload
    /// falls back to the default hours so the booking page still renders.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            warn!("Malformed schedule config, using defaults: {}", err);
            Self::default()
        })
    }
}
