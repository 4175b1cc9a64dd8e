//! Shift listing record
//!
//! Owned by the scheduling data layer; the app only displays it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How urgently a shift needs to be filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShiftUrgency {
    #[default]
    Normal,
    Urgent,
}

/// An open shift offered to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub facility: String,
    pub role: String,
    pub department: String,
    #[serde(default)]
    pub urgency: ShiftUrgency,
    /// Recommendation score as a percentage
    #[serde(default)]
    pub match_score: Option<u32>,
    pub date: NaiveDate,
    /// Shown verbatim, e.g. "7:00 AM - 7:00 PM"
    pub time_range: String,
    /// Dollars per hour
    pub pay_rate: f64,
    /// Miles from the user
    pub distance: f64,
    #[serde(default)]
    pub shift_notes: Option<String>,
}

impl Shift {
    pub fn is_urgent(&self) -> bool {
        self.urgency == ShiftUrgency::Urgent
    }

    /// Notes worth showing: present and non-empty
    pub fn visible_notes(&self) -> Option<&str> {
        self.shift_notes.as_deref().filter(|notes| !notes.is_empty())
    }
}
