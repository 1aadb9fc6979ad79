//! Input events accepted by a quiz session.

use quiz_model::QuizMode;

/// One discrete player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    SelectMode(QuizMode),
    Start,
    /// Pick the option at this zero-based index.
    SelectAnswer(usize),
    Next,
    Reset,
    ConfirmReset,
    CancelReset,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectMode(_) => "select_mode",
            Self::Start => "start",
            Self::SelectAnswer(_) => "select_answer",
            Self::Next => "next",
            Self::Reset => "reset",
            Self::ConfirmReset => "confirm_reset",
            Self::CancelReset => "cancel_reset",
        }
    }
}

/// What a submitted event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was valid and the session moved from `from` to `to`.
    Applied { from: crate::Screen, to: crate::Screen },
    /// The event is not valid on `screen` and changed nothing.
    Ignored { screen: crate::Screen },
}

impl EventOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
