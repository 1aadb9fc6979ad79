//! Render data for the current screen.
//!
//! A [`ScreenView`] carries everything a front end needs to draw the
//! current screen, borrowed from the session and its bank.

use quiz_model::{AnswerOption, QuestionSet};

use crate::screen::Screen;
use crate::session::Session;

/// What to draw for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView<'a> {
    ChooseMode {
        /// False for text-only banks, where only the simple mode can be picked.
        visual_available: bool,
    },
    Ready {
        total: usize,
    },
    Question {
        question: &'a QuestionSet,
        /// One-based question number.
        number: usize,
        total: usize,
        show_images: bool,
    },
    PopupCorrect {
        number: usize,
        total: usize,
    },
    PopupIncorrect {
        correct_label: String,
        correct_option: &'a AnswerOption,
    },
    ConfirmReset,
    Final {
        score: usize,
        total: usize,
    },
}

impl Session {
    /// Builds the render data for the current screen.
    pub fn view(&self) -> ScreenView<'_> {
        let total = self.total();
        let number = self.cursor() + 1;
        let question = &self.bank()[self.cursor()];
        match self.screen() {
            Screen::ChooseMode => ScreenView::ChooseMode {
                visual_available: self.visual_available(),
            },
            Screen::Ready => ScreenView::Ready { total },
            Screen::Question => ScreenView::Question {
                question,
                number,
                total,
                show_images: self.show_images(),
            },
            Screen::PopupCorrect => ScreenView::PopupCorrect { number, total },
            Screen::PopupIncorrect => ScreenView::PopupIncorrect {
                correct_label: question.correct_label(),
                correct_option: question.correct_option(),
            },
            Screen::ConfirmReset { .. } => ScreenView::ConfirmReset,
            Screen::Final => ScreenView::Final {
                score: self.score(),
                total,
            },
        }
    }
}
