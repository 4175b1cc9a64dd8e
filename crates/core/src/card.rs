//! Shift card view model
//!
//! Projects a [`Shift`] plus the caller's capabilities into a flat, ordered
//! description of what the card shows. Rendering the description is left to
//! the front end.

use crate::format;
use crate::models::Shift;

/// Invocable effect handed to the card (navigate, claim, ...)
pub type Capability = Box<dyn Fn()>;

/// Actions the card can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    Claim,
    ViewDetails,
}

/// Icons referenced by card fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Star,
    Calendar,
    Clock,
    Money,
    Location,
    ArrowForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Outlined,
    Filled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: CardAction,
    pub style: ButtonStyle,
    pub trailing_icon: Option<Icon>,
}

/// Icon plus text cell in the details grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailItem {
    pub icon: Icon,
    pub text: String,
    pub highlighted: bool,
}

impl DetailItem {
    fn new(icon: Icon, text: String) -> Self {
        Self {
            icon,
            text,
            highlighted: false,
        }
    }

    fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

/// One visible piece of the card, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Header { facility: String, subtitle: String },
    UrgentBadge { label: &'static str },
    MatchBadge { icon: Icon, label: String },
    Schedule { date: DetailItem, time: DetailItem },
    PayAndDistance { pay: DetailItem, distance: DetailItem },
    Notes(String),
    Actions(Vec<Button>),
}

/// Result of projecting a shift card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub fragments: Vec<Fragment>,
    /// Action bound to tapping anywhere on the card
    pub tap: Option<CardAction>,
}

impl CardView {
    /// Buttons in the actions row, if the row is shown
    pub fn actions(&self) -> Option<&[Button]> {
        self.fragments.iter().find_map(|f| match f {
            Fragment::Actions(buttons) => Some(buttons.as_slice()),
            _ => None,
        })
    }

    pub fn match_badge(&self) -> Option<&str> {
        self.fragments.iter().find_map(|f| match f {
            Fragment::MatchBadge { label, .. } => Some(label.as_str()),
            _ => None,
        })
    }

    pub fn is_urgent(&self) -> bool {
        self.fragments
            .iter()
            .any(|f| matches!(f, Fragment::UrgentBadge { .. }))
    }

    pub fn notes(&self) -> Option<&str> {
        self.fragments.iter().find_map(|f| match f {
            Fragment::Notes(notes) => Some(notes.as_str()),
            _ => None,
        })
    }
}

/// Card for a single shift listing
pub struct ShiftCard<'a> {
    shift: &'a Shift,
    on_claim: Option<Capability>,
    on_view_details: Option<Capability>,
    show_claim_button: bool,
}

impl<'a> ShiftCard<'a> {
    pub fn new(shift: &'a Shift) -> Self {
        Self {
            shift,
            on_claim: None,
            on_view_details: None,
            show_claim_button: true,
        }
    }

    pub fn on_claim(mut self, f: impl Fn() + 'static) -> Self {
        self.on_claim = Some(Box::new(f));
        self
    }

    pub fn on_view_details(mut self, f: impl Fn() + 'static) -> Self {
        self.on_view_details = Some(Box::new(f));
        self
    }

    pub fn show_claim_button(mut self, show: bool) -> Self {
        self.show_claim_button = show;
        self
    }

    pub fn shift(&self) -> &Shift {
        self.shift
    }

    /// Project the card into its visible fragments
    pub fn build(&self) -> CardView {
        let shift = self.shift;
        let mut fragments = Vec::with_capacity(7);

        fragments.push(Fragment::Header {
            facility: shift.facility.clone(),
            subtitle: format!("{} - {}", shift.role, shift.department),
        });

        if shift.is_urgent() {
            fragments.push(Fragment::UrgentBadge { label: "Urgent" });
        }

        // Presence check: a score of 0 still gets a badge
        if let Some(score) = shift.match_score {
            fragments.push(Fragment::MatchBadge {
                icon: Icon::Star,
                label: format::match_score(score),
            });
        }

        fragments.push(Fragment::Schedule {
            date: DetailItem::new(Icon::Calendar, format::card_date(shift.date)),
            time: DetailItem::new(Icon::Clock, shift.time_range.clone()),
        });

        fragments.push(Fragment::PayAndDistance {
            pay: DetailItem::new(Icon::Money, format::pay_rate(shift.pay_rate)).highlighted(),
            distance: DetailItem::new(Icon::Location, format::distance(shift.distance)),
        });

        if let Some(notes) = shift.visible_notes() {
            fragments.push(Fragment::Notes(notes.to_string()));
        }

        if self.show_claim_button {
            fragments.push(Fragment::Actions(self.action_buttons()));
        }

        let tap = self.on_view_details.as_ref().map(|_| CardAction::ViewDetails);

        tracing::trace!(
            facility = %shift.facility,
            fragments = fragments.len(),
            tappable = tap.is_some(),
            "Built shift card"
        );

        CardView { fragments, tap }
    }

    fn action_buttons(&self) -> Vec<Button> {
        let mut buttons = Vec::with_capacity(2);

        // View Details is omitted, not disabled, without its capability
        if self.on_view_details.is_some() {
            buttons.push(Button {
                label: "View Details",
                action: CardAction::ViewDetails,
                style: ButtonStyle::Outlined,
                trailing_icon: None,
            });
        }

        // Claim is always advertised, even when nothing handles it
        buttons.push(Button {
            label: "Claim Shift",
            action: CardAction::Claim,
            style: ButtonStyle::Filled,
            trailing_icon: Some(Icon::ArrowForward),
        });

        buttons
    }

    /// Invoke the capability bound to `action`; absent capabilities are a no-op
    pub fn activate(&self, action: CardAction) {
        let capability = match action {
            CardAction::Claim => self.on_claim.as_ref(),
            CardAction::ViewDetails => self.on_view_details.as_ref(),
        };

        match capability {
            Some(f) => f(),
            None => tracing::debug!(?action, "No capability bound for card action"),
        }
    }
}
