//! Conversation model for the chat list

use std::fmt::Display;

use chrono::{DateTime, Datelike, FixedOffset, TimeZone};
use serde::Serialize;
use serde_json::{json, Value};

use crate::decode::{serialize_timestamp, Fields};
use crate::error::Result;
use crate::format;

/// Conversations older than this many whole days show a date instead of a weekday
const WEEKDAY_WINDOW_DAYS: i64 = 7;

/// A direct or group conversation as listed in the inbox
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub name: String,
    /// Free-form role label, e.g. "Charge Nurse"
    pub role: String,
    pub facility: Option<String>,
    /// Preview of the most recent message
    pub last_message: String,
    /// Time of last activity
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<FixedOffset>,
    pub unread_count: u32,
    pub is_group: bool,
    /// Avatar URL or initials token
    pub avatar: String,
    /// Member count, only meaningful for groups
    pub participants: Option<u32>,
}

impl Conversation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        last_message: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            facility: None,
            last_message: last_message.into(),
            timestamp,
            unread_count: 0,
            is_group: false,
            avatar: avatar.into(),
            participants: None,
        }
    }

    pub fn with_facility(mut self, facility: impl Into<String>) -> Self {
        self.facility = Some(facility.into());
        self
    }

    pub fn with_unread_count(mut self, unread_count: u32) -> Self {
        self.unread_count = unread_count;
        self
    }

    pub fn as_group(mut self, participants: u32) -> Self {
        self.is_group = true;
        self.participants = Some(participants);
        self
    }

    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }

    /// Secondary line for list rows: role, plus facility when known
    pub fn subtitle(&self) -> String {
        match &self.facility {
            Some(facility) => format!("{} · {}", self.role, facility),
            None => self.role.clone(),
        }
    }

    /// Relative label for the last activity, evaluated against `now`
    ///
    /// Same calendar day (in `now`'s zone) gives `HH:MM`, less than a week
    /// ago gives the weekday, anything older gives `D/M`.
    pub fn time_string<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        let local = self.timestamp.with_timezone(&now.timezone());
        let age = now.clone().signed_duration_since(local.clone());

        if local.date_naive() == now.date_naive() {
            format::clock_time(&local)
        } else if age.num_days() < WEEKDAY_WINDOW_DAYS {
            format::weekday_abbrev(local.weekday()).to_string()
        } else {
            format::day_month(local.date_naive())
        }
    }

    pub fn to_json(&self) -> Value {
        json!(self)
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::new(value)?;
        Ok(Self {
            id: fields.string("id")?,
            name: fields.string("name")?,
            role: fields.string("role")?,
            facility: fields.string_opt("facility")?,
            last_message: fields.string("lastMessage")?,
            timestamp: fields.timestamp("timestamp")?,
            unread_count: fields.count_or("unreadCount", 0)?,
            is_group: fields.boolean_or("isGroup", false)?,
            avatar: fields.string("avatar")?,
            participants: fields.count_opt("participants")?,
        })
    }

    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_json(&serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use chrono::Utc;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn make_conversation(timestamp: DateTime<Utc>) -> Conversation {
        Conversation::new(
            "c-1",
            "Priya Shah",
            "Charge Nurse",
            "See you at 7",
            timestamp.fixed_offset(),
            "PS",
        )
    }

    #[test]
    fn test_defaults() {
        let conv = make_conversation(utc(2024, 3, 15, 8, 30));
        assert_eq!(conv.unread_count, 0);
        assert!(!conv.is_group);
        assert!(!conv.has_unread());
        assert_eq!(conv.facility, None);
        assert_eq!(conv.participants, None);
    }

    #[test]
    fn test_time_string_same_day() {
        let now = utc(2024, 3, 15, 10, 0);
        let conv = make_conversation(utc(2024, 3, 15, 8, 30));
        assert_eq!(conv.time_string(&now), "08:30");
    }

    #[test]
    fn test_time_string_within_week() {
        let now = utc(2024, 3, 15, 10, 0);
        // 2024-03-12 is a Tuesday
        let conv = make_conversation(utc(2024, 3, 12, 8, 30));
        assert_eq!(conv.time_string(&now), "Tue");
    }

    #[test]
    fn test_time_string_older() {
        let now = utc(2024, 3, 15, 10, 0);
        let conv = make_conversation(utc(2024, 2, 1, 8, 30));
        assert_eq!(conv.time_string(&now), "1/2");
    }

    #[test]
    fn test_time_string_week_boundary() {
        let now = utc(2024, 3, 15, 10, 0);

        // 6 days 23 hours ago still counts as within the week
        let conv = make_conversation(utc(2024, 3, 8, 11, 0));
        assert_eq!(conv.time_string(&now), "Fri");

        // exactly 7 days ago does not
        let conv = make_conversation(utc(2024, 3, 8, 10, 0));
        assert_eq!(conv.time_string(&now), "8/3");
    }

    #[test]
    fn test_time_string_future_timestamp() {
        // 2024-03-20 is a Wednesday, five days after `now`
        let now = utc(2024, 3, 15, 10, 0);
        let conv = make_conversation(utc(2024, 3, 20, 8, 0));
        assert_eq!(conv.time_string(&now), "Wed");
    }

    #[test]
    fn test_time_string_depends_on_now() {
        let conv = make_conversation(utc(2024, 3, 15, 8, 30));
        assert_eq!(conv.time_string(&utc(2024, 3, 15, 23, 0)), "08:30");
        assert_eq!(conv.time_string(&utc(2024, 3, 16, 9, 0)), "Fri");
        assert_eq!(conv.time_string(&utc(2024, 4, 1, 9, 0)), "15/3");
    }

    #[test]
    fn test_time_string_uses_now_zone() {
        // 23:30 UTC on the 14th is 01:30 on the 15th at UTC+2
        let conv = make_conversation(utc(2024, 3, 14, 23, 30));
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(conv.time_string(&now), "01:30");
    }

    #[test]
    fn test_subtitle() {
        let conv = make_conversation(utc(2024, 3, 15, 8, 30));
        assert_eq!(conv.subtitle(), "Charge Nurse");
        let conv = conv.with_facility("Mercy General");
        assert_eq!(conv.subtitle(), "Charge Nurse · Mercy General");
    }

    #[test]
    fn test_roundtrip() {
        let direct = make_conversation(utc(2024, 3, 15, 8, 30));
        assert_eq!(Conversation::from_json(&direct.to_json()).unwrap(), direct);

        let group = make_conversation(utc(2024, 3, 15, 8, 30))
            .with_facility("Mercy General")
            .with_unread_count(4)
            .as_group(12);
        assert_eq!(Conversation::from_json(&group.to_json()).unwrap(), group);
        assert_eq!(
            Conversation::from_json_str(&group.to_json_string()).unwrap(),
            group
        );
    }

    #[test]
    fn test_wire_nulls() {
        let value = make_conversation(utc(2024, 3, 15, 8, 30)).to_json();
        assert!(value["facility"].is_null());
        assert!(value["participants"].is_null());
        assert_eq!(value["unreadCount"], 0);
        assert_eq!(value["isGroup"], false);
        assert_eq!(value["lastMessage"], "See you at 7");
    }

    #[test]
    fn test_decode_missing_field() {
        let mut value = make_conversation(utc(2024, 3, 15, 8, 30)).to_json();
        value.as_object_mut().unwrap().remove("avatar");

        assert!(matches!(
            Conversation::from_json(&value),
            Err(DecodeError::MissingField("avatar"))
        ));
    }

    #[test]
    fn test_decode_malformed_timestamp() {
        let mut value = make_conversation(utc(2024, 3, 15, 8, 30)).to_json();
        value["timestamp"] = json!("not a date");

        assert!(matches!(
            Conversation::from_json(&value),
            Err(DecodeError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn test_decode_defaults_when_absent() {
        let value = json!({
            "id": "c-9",
            "name": "Night Shift",
            "role": "Team",
            "lastMessage": "Huddle at 19:00",
            "timestamp": "2024-03-15T08:30:00Z",
            "avatar": "NS",
        });

        let conv = Conversation::from_json(&value).unwrap();
        assert_eq!(conv.unread_count, 0);
        assert!(!conv.is_group);
        assert_eq!(conv.participants, None);
    }
}
