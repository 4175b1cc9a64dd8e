//! Preview commands
//!
//! Each command reads a JSON fixture (a single object or an array), decodes
//! it through the core models and renders it as text.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use shiftboard_core::{CardAction, Conversation, Message, Shift, ShiftCard};

use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::render;

pub const USAGE: &str = "shiftboard <conversations|messages|shifts> <file.json>\n       shiftboard claim <file.json> <index>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Conversations,
    Messages,
    Shifts,
    /// Activate the claim action of one card
    Claim(usize),
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "conversations" => Ok(Command::Conversations),
            "messages" => Ok(Command::Messages),
            "shifts" => Ok(Command::Shifts),
            other => Err(Error::Usage(format!("unknown command '{}'", other))),
        }
    }
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub path: String,
}

impl Invocation {
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut args = args.into_iter();
        let command = args
            .next()
            .ok_or_else(|| Error::Usage(USAGE.to_string()))?;
        let path = args
            .next()
            .ok_or_else(|| Error::Usage(USAGE.to_string()))?;

        let command = if command == "claim" {
            let index = args
                .next()
                .ok_or_else(|| Error::Usage(USAGE.to_string()))?;
            let index = index
                .parse()
                .map_err(|_| Error::Usage(format!("invalid card index '{}'", index)))?;
            Command::Claim(index)
        } else {
            command.parse()?
        };

        Ok(Self { command, path })
    }
}

fn items(input: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(input)? {
        Value::Array(items) => Ok(items),
        single => Ok(vec![single]),
    }
}

fn decode_all<T>(
    input: &str,
    decode: impl Fn(&Value) -> shiftboard_core::Result<T>,
) -> Result<Vec<T>> {
    items(input)?
        .iter()
        .map(|item| decode(item).map_err(Error::from))
        .collect()
}

fn shifts(input: &str) -> Result<Vec<Shift>> {
    items(input)?
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Error::from))
        .collect()
}

fn card<'a>(shift: &'a Shift, display: &DisplayConfig) -> ShiftCard<'a> {
    let facility = shift.facility.clone();
    let date = shift.date;
    ShiftCard::new(shift)
        .show_claim_button(display.show_claim_button)
        .on_claim(move || tracing::info!(%facility, %date, "Claim requested"))
        .on_view_details({
            let facility = shift.facility.clone();
            move || tracing::info!(%facility, "Details requested")
        })
}

/// Run a command over fixture text, returning the rendered output
pub fn run(
    command: Command,
    input: &str,
    display: &DisplayConfig,
    now: &DateTime<FixedOffset>,
) -> Result<String> {
    let zone = display.zone()?;

    // Cards are separated by a blank line, everything else by a newline
    let (blocks, separator): (Vec<String>, &str) = match command {
        Command::Conversations => (
            decode_all(input, Conversation::from_json)?
                .iter()
                .map(|conversation| render::conversation_row(conversation, now))
                .collect(),
            "\n",
        ),
        Command::Messages => (
            decode_all(input, Message::from_json)?
                .iter()
                .map(|message| render::message_line(message, &zone))
                .collect(),
            "\n",
        ),
        Command::Shifts => (
            shifts(input)?
                .iter()
                .map(|shift| render::card_lines(&card(shift, display).build()).join("\n"))
                .collect(),
            "\n\n",
        ),
        Command::Claim(index) => {
            let shifts = shifts(input)?;
            let shift = shifts
                .get(index)
                .ok_or_else(|| Error::NotFound(format!("no shift at index {}", index)))?;
            card(shift, display).activate(CardAction::Claim);
            (
                vec![format!(
                    "Claimed {} - {} at {}",
                    shift.role, shift.department, shift.facility
                )],
                "\n",
            )
        }
    };

    tracing::debug!(?command, blocks = blocks.len(), "Rendered preview");
    Ok(blocks.join(separator))
}
