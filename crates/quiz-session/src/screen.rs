//! Screen types.
//!
//! This module contains the screens a quiz session moves through:
//! - `Screen`: the current screen of the session
//! - `Resume`: the screen a cancelled reset returns to

// =============================================================================
// SCREEN ENUM
// =============================================================================

/// Current screen of a quiz session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Mode selection, shown when a session starts or restarts
    #[default]
    ChooseMode,

    /// Mode chosen, waiting for the player to start
    Ready,

    /// A question is on screen, waiting for an answer
    Question,

    /// The last answer was correct
    PopupCorrect,

    /// The last answer was wrong
    PopupIncorrect,

    /// Reset requested, waiting for confirmation
    ConfirmReset {
        /// Screen restored when the reset is cancelled
        resume: Resume,
    },

    /// Every question has been answered
    Final,
}

impl Screen {
    /// Get the display name for this screen.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChooseMode => "Choose mode",
            Self::Ready => "Ready",
            Self::Question => "Question",
            Self::PopupCorrect => "Correct",
            Self::PopupIncorrect => "Incorrect",
            Self::ConfirmReset { .. } => "Confirm reset",
            Self::Final => "Final",
        }
    }

    /// Check if this screen is one of the answer popups.
    pub fn is_popup(&self) -> bool {
        matches!(self, Self::PopupCorrect | Self::PopupIncorrect)
    }

    /// Check if a question is in progress (on screen or being reviewed).
    pub fn is_in_question(&self) -> bool {
        *self == Self::Question || self.is_popup()
    }

    /// The screen a reset request would return to on cancel.
    pub(crate) fn resume_point(self) -> Option<Resume> {
        match self {
            Self::Ready => Some(Resume::Ready),
            Self::Question => Some(Resume::Question),
            Self::PopupCorrect => Some(Resume::PopupCorrect),
            Self::PopupIncorrect => Some(Resume::PopupIncorrect),
            Self::ChooseMode | Self::ConfirmReset { .. } | Self::Final => None,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// RESUME ENUM
// =============================================================================

/// Screens from which a reset can be requested and later cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resume {
    Ready,
    Question,
    PopupCorrect,
    PopupIncorrect,
}

impl From<Resume> for Screen {
    fn from(resume: Resume) -> Self {
        match resume {
            Resume::Ready => Self::Ready,
            Resume::Question => Self::Question,
            Resume::PopupCorrect => Self::PopupCorrect,
            Resume::PopupIncorrect => Self::PopupIncorrect,
        }
    }
}
