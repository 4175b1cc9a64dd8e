//! Message model for conversation threads

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::decode::{serialize_timestamp, Fields};
use crate::error::{DecodeError, Result};
use crate::format;

/// Kind of message content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    #[default]
    Text,
    Image,
    Document,
    /// Generated by the app, not typed by a person
    System,
}

impl MessageType {
    /// Wire tag for this message type
    pub fn as_tag(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Image => "image",
            MessageType::Document => "document",
            MessageType::System => "system",
        }
    }

    /// Parse a wire tag
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "text" => Ok(MessageType::Text),
            "image" => Ok(MessageType::Image),
            "document" => Ok(MessageType::Document),
            "system" => Ok(MessageType::System),
            other => {
                tracing::debug!(tag = %other, "Unknown message type tag");
                Err(DecodeError::UnknownEnumTag(other.to_string()))
            }
        }
    }
}

impl Serialize for MessageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender_id: String,
    pub sender_name: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<FixedOffset>,
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Authored by the local user
    pub is_own: bool,
    pub attachment_url: Option<String>,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        sender_id: impl Into<String>,
        sender_name: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
        is_own: bool,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender_id: sender_id.into(),
            sender_name: sender_name.into(),
            timestamp,
            kind: MessageType::Text,
            is_own,
            attachment_url: None,
        }
    }

    pub fn with_kind(mut self, kind: MessageType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_attachment(mut self, url: impl Into<String>) -> Self {
        self.attachment_url = Some(url.into());
        self
    }

    /// `HH:MM` in the offset the message was recorded with
    pub fn time_string(&self) -> String {
        format::clock_time(&self.timestamp)
    }

    /// `HH:MM` in the given zone
    pub fn time_string_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display,
    {
        format::clock_time(&self.timestamp.with_timezone(tz))
    }

    pub fn to_json(&self) -> Value {
        json!(self)
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::new(value)?;
        Ok(Self {
            id: fields.string("id")?,
            content: fields.string("content")?,
            sender_id: fields.string("senderId")?,
            sender_name: fields.string("senderName")?,
            timestamp: fields.timestamp("timestamp")?,
            kind: fields.tag_or("type", MessageType::default(), MessageType::from_tag)?,
            is_own: fields.boolean("isOwn")?,
            attachment_url: fields.string_opt("attachmentUrl")?,
        })
    }

    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_json(&serde_json::from_str(s)?)
    }
}
