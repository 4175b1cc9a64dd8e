//! JSON value decoding utilities
//!
//! Provides error-safe field access for the wire shape of the models.
//! A `null` field is treated the same as an absent one.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Serializer;
use serde_json::{Map, Value};

use crate::error::{DecodeError, Result};

/// ISO-8601 layouts carrying an offset (`Z`, `+02`, `+0200` or `+02:00`)
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
];

/// ISO-8601 layouts without an offset
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
];

/// Parse a timestamp from an ISO-8601 string
///
/// Strings with an offset keep it. Strings without one
/// (`2024-03-15T14:05:00.000`) are read as UTC, and a bare date is
/// midnight UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    if let Some(dt) = ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Ok(dt);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| {
            tracing::debug!(raw = %s, "Rejected malformed timestamp");
            DecodeError::MalformedTimestamp(s.to_string())
        })
}

/// Format a timestamp for the wire (RFC 3339, sub-second digits only when present)
pub fn encode_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339()
}

/// Serde hook writing a timestamp in its wire form
pub fn serialize_timestamp<S: Serializer>(
    dt: &DateTime<FixedOffset>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode_timestamp(dt))
}

/// Typed field reader over a JSON object
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(DecodeError::NotAnObject),
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    fn require(&self, name: &'static str) -> Result<&'a Value> {
        self.get(name).ok_or_else(|| {
            tracing::debug!(field = name, "Missing required field");
            DecodeError::MissingField(name)
        })
    }

    /// Required string field
    pub fn string(&self, name: &'static str) -> Result<String> {
        as_str(name, self.require(name)?).map(str::to_string)
    }

    /// Optional string field
    pub fn string_opt(&self, name: &'static str) -> Result<Option<String>> {
        self.get(name)
            .map(|v| as_str(name, v).map(str::to_string))
            .transpose()
    }

    /// Required boolean field
    pub fn boolean(&self, name: &'static str) -> Result<bool> {
        as_bool(name, self.require(name)?)
    }

    /// Boolean field falling back to `default` when absent
    pub fn boolean_or(&self, name: &'static str, default: bool) -> Result<bool> {
        self.get(name)
            .map(|v| as_bool(name, v))
            .unwrap_or(Ok(default))
    }

    /// Count field falling back to `default` when absent
    pub fn count_or(&self, name: &'static str, default: u32) -> Result<u32> {
        Ok(self.count_opt(name)?.unwrap_or(default))
    }

    /// Optional count field
    pub fn count_opt(&self, name: &'static str) -> Result<Option<u32>> {
        self.get(name).map(|v| as_count(name, v)).transpose()
    }

    /// Required ISO-8601 timestamp field
    pub fn timestamp(&self, name: &'static str) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(as_str(name, self.require(name)?)?)
    }

    /// Optional string tag, mapped through `parse`
    pub fn tag_or<T>(
        &self,
        name: &'static str,
        default: T,
        parse: impl FnOnce(&str) -> Result<T>,
    ) -> Result<T> {
        match self.get(name) {
            Some(v) => parse(as_str(name, v)?),
            None => Ok(default),
        }
    }
}

fn invalid(field: &'static str, expected: &'static str) -> DecodeError {
    tracing::debug!(field, expected, "Field has wrong JSON type");
    DecodeError::InvalidField { field, expected }
}

fn as_str<'v>(field: &'static str, value: &'v Value) -> Result<&'v str> {
    value.as_str().ok_or_else(|| invalid(field, "string"))
}

fn as_bool(field: &'static str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| invalid(field, "boolean"))
}

fn as_count(field: &'static str, value: &Value) -> Result<u32> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| invalid(field, "non-negative integer"))
}
