use serde::{Deserialize, Serialize};
use std::fmt;

/// Which loader pass produced a bank, and which presentation a player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizMode {
    /// Text-only questions and options.
    #[default]
    Simple,
    /// Questions and options carry image references.
    Visual,
}

impl QuizMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizMode::Simple => "SIMPLE",
            QuizMode::Visual => "VISUAL",
        }
    }

    pub fn is_visual(&self) -> bool {
        matches!(self, QuizMode::Visual)
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
