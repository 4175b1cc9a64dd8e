//! Plain-text rendering of view models

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use shiftboard_core::{
    Button, ButtonStyle, CardAction, CardView, Conversation, DetailItem, Fragment, Icon, Message,
    MessageType,
};

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Star => "★",
        Icon::Calendar => "📅",
        Icon::Clock => "🕒",
        Icon::Money => "$",
        Icon::Location => "📍",
        Icon::ArrowForward => "→",
    }
}

fn detail(item: &DetailItem) -> String {
    // Money icon already reads as "$" in the text
    let text = if item.highlighted {
        format!("*{}*", item.text)
    } else {
        item.text.clone()
    };
    match item.icon {
        Icon::Money => text,
        icon => format!("{} {}", icon_glyph(icon), text),
    }
}

fn button(button: &Button) -> String {
    let label = match button.trailing_icon {
        Some(icon) => format!("{} {}", button.label, icon_glyph(icon)),
        None => button.label.to_string(),
    };
    match button.style {
        ButtonStyle::Outlined => format!("( {} )", label),
        ButtonStyle::Filled => format!("[ {} ]", label),
    }
}

/// Render a card description as text lines
pub fn card_lines(view: &CardView) -> Vec<String> {
    let mut title = String::new();
    let mut subtitle = String::new();
    let mut badges = Vec::new();
    let mut body = Vec::new();

    for fragment in &view.fragments {
        match fragment {
            Fragment::Header {
                facility,
                subtitle: sub,
            } => {
                title = facility.clone();
                subtitle = sub.clone();
            }
            Fragment::UrgentBadge { label } => badges.push(format!("<{}>", label)),
            Fragment::MatchBadge { icon, label } => {
                badges.push(format!("{} {}", icon_glyph(*icon), label))
            }
            Fragment::Schedule { date, time } => {
                body.push(format!("{}    {}", detail(date), detail(time)))
            }
            Fragment::PayAndDistance { pay, distance } => {
                body.push(format!("{}    {}", detail(pay), detail(distance)))
            }
            Fragment::Notes(notes) => body.push(format!("• {}", notes)),
            Fragment::Actions(buttons) => body.push(
                buttons
                    .iter()
                    .map(button)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }

    let mut header = title;
    if !badges.is_empty() {
        header.push_str("  ");
        header.push_str(&badges.join(" "));
    }

    let mut lines = vec![header, subtitle];
    lines.extend(body);
    if view.tap == Some(CardAction::ViewDetails) {
        lines.push("(tap for details)".to_string());
    }
    lines
}

/// One inbox row: name, time label, unread count, then the preview
pub fn conversation_row<Tz: TimeZone>(conversation: &Conversation, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let mut name = conversation.name.clone();
    if let Some(participants) = conversation.participants.filter(|_| conversation.is_group) {
        name.push_str(&format!(" ({})", participants));
    }

    let unread = if conversation.has_unread() {
        format!(" [{}]", conversation.unread_count)
    } else {
        String::new()
    };

    format!(
        "{} · {}  {}{}\n  {}",
        name,
        conversation.subtitle(),
        conversation.time_string(now),
        unread,
        conversation.last_message
    )
}

/// One thread line: clock time, sender, content
pub fn message_line<Tz: TimeZone>(message: &Message, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    let time = message.time_string_in(tz);
    if message.kind == MessageType::System {
        return format!("{}  -- {} --", time, message.content);
    }

    let sender = if message.is_own {
        "You"
    } else {
        message.sender_name.as_str()
    };
    let mut line = format!("{}  {}: {}", time, sender, message.content);
    if message.kind != MessageType::Text {
        let url = message.attachment_url.as_deref().unwrap_or("no attachment");
        line.push_str(&format!(" [{}: {}]", message.kind, url));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use shiftboard_core::{Shift, ShiftCard, ShiftUrgency};

    fn make_shift() -> Shift {
        Shift {
            facility: "Mercy General".to_string(),
            role: "RN".to_string(),
            department: "ICU".to_string(),
            urgency: ShiftUrgency::Urgent,
            match_score: Some(0),
            date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            time_range: "7:00 AM - 7:00 PM".to_string(),
            pay_rate: 24.6,
            distance: 4.2,
            shift_notes: Some("Float to CCU if census drops".to_string()),
        }
    }

    #[test]
    fn test_card_lines() {
        let shift = make_shift();
        let view = ShiftCard::new(&shift).on_view_details(|| {}).build();
        let lines = card_lines(&view);

        assert_eq!(lines[0], "Mercy General  <Urgent> ★ 0%");
        assert_eq!(lines[1], "RN - ICU");
        assert_eq!(lines[2], "📅 Mar 18, 2024    🕒 7:00 AM - 7:00 PM");
        assert_eq!(lines[3], "*$25/hr*    📍 4.2 mi");
        assert_eq!(lines[4], "• Float to CCU if census drops");
        assert_eq!(lines[5], "( View Details ) [ Claim Shift → ]");
        assert_eq!(lines[6], "(tap for details)");
    }

    #[test]
    fn test_card_lines_without_actions() {
        let mut shift = make_shift();
        shift.urgency = ShiftUrgency::Normal;
        shift.match_score = None;
        shift.shift_notes = None;
        let view = ShiftCard::new(&shift).show_claim_button(false).build();

        assert_eq!(
            card_lines(&view),
            vec![
                "Mercy General".to_string(),
                "RN - ICU".to_string(),
                "📅 Mar 18, 2024    🕒 7:00 AM - 7:00 PM".to_string(),
                "*$25/hr*    📍 4.2 mi".to_string(),
            ]
        );
    }

    #[test]
    fn test_conversation_row() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
        let conv = Conversation::new(
            "c-1",
            "3 West",
            "Unit",
            "Huddle moved",
            ts.fixed_offset(),
            "3W",
        )
        .with_facility("Mercy General")
        .with_unread_count(2)
        .as_group(14);

        assert_eq!(
            conversation_row(&conv, &now),
            "3 West (14) · Unit · Mercy General  08:30 [2]\n  Huddle moved"
        );
    }

    #[test]
    fn test_message_lines() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 5, 0).unwrap().fixed_offset();
        let own = Message::new("m-1", "On my way", "me", "Alex", ts, true);
        assert_eq!(message_line(&own, &Utc), "14:05  You: On my way");

        let doc = Message::new("m-2", "Updated schedule", "u-2", "Dana", ts, false)
            .with_kind(MessageType::Document)
            .with_attachment("https://files.example.com/march.pdf");
        assert_eq!(
            message_line(&doc, &Utc),
            "14:05  Dana: Updated schedule [document: https://files.example.com/march.pdf]"
        );

        let system = Message::new("m-3", "Dana joined", "system", "", ts, false)
            .with_kind(MessageType::System);
        assert_eq!(message_line(&system, &Utc), "14:05  -- Dana joined --");
    }
}
