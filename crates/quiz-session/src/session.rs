//! The quiz session state machine.
//!
//! A [`Session`] owns the only mutable quiz state: the current screen, the
//! score and the question cursor. The question bank is shared read-only.
//! Events are applied one at a time through [`Session::handle`]; an event
//! that is not valid on the current screen is ignored.

use std::sync::Arc;

use quiz_model::{QuestionBank, QuestionSet, QuizMode};
use tracing::{debug, trace};

use crate::event::{EventOutcome, SessionEvent};
use crate::screen::Screen;

/// A single-player quiz run over a loaded question bank.
#[derive(Debug, Clone)]
pub struct Session {
    bank: Arc<QuestionBank>,
    screen: Screen,
    display_mode: Option<QuizMode>,
    score: usize,
    cursor: usize,
}

impl Session {
    /// Starts a session on the mode selection screen.
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            screen: Screen::ChooseMode,
            display_mode: None,
            score: 0,
            cursor: 0,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Number of correct answers so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Position of the current question in the bank's id order.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    /// The presentation picked on the mode selection screen.
    pub fn display_mode(&self) -> Option<QuizMode> {
        self.display_mode
    }

    /// Whether the visual presentation can be picked for this bank.
    pub fn visual_available(&self) -> bool {
        self.bank.mode().is_visual()
    }

    /// Whether question and option images should be shown.
    pub fn show_images(&self) -> bool {
        self.visual_available() && self.display_mode.is_some_and(|mode| mode.is_visual())
    }

    /// The question in progress, while one is on screen or being reviewed.
    pub fn current_question(&self) -> Option<&QuestionSet> {
        self.progress_screen()
            .is_in_question()
            .then(|| &self.bank[self.cursor])
    }

    /// Applies one event.
    ///
    /// Events that are not valid on the current screen leave the session
    /// untouched and return [`EventOutcome::Ignored`].
    pub fn handle(&mut self, event: SessionEvent) -> EventOutcome {
        let from = self.screen;
        match self.transition(event) {
            Some(to) => {
                self.screen = to;
                debug!(
                    event = event.name(),
                    from = %from,
                    to = %to,
                    score = self.score,
                    cursor = self.cursor,
                    "Session transition"
                );
                EventOutcome::Applied { from, to }
            }
            None => {
                trace!(event = event.name(), screen = %from, "Ignored session event");
                EventOutcome::Ignored { screen: from }
            }
        }
    }

    /// Computes the next screen, updating score and cursor on the way.
    fn transition(&mut self, event: SessionEvent) -> Option<Screen> {
        match (self.screen, event) {
            (Screen::ChooseMode, SessionEvent::SelectMode(mode)) => {
                if mode.is_visual() && !self.visual_available() {
                    return None;
                }
                self.display_mode = Some(mode);
                Some(Screen::Ready)
            }
            (Screen::Ready, SessionEvent::Start) => {
                self.cursor = 0;
                self.score = 0;
                Some(Screen::Question)
            }
            (Screen::Question, SessionEvent::SelectAnswer(index)) => {
                let question = &self.bank[self.cursor];
                if index >= question.option_count() {
                    return None;
                }
                if question.is_correct(index) {
                    self.score += 1;
                    Some(Screen::PopupCorrect)
                } else {
                    Some(Screen::PopupIncorrect)
                }
            }
            (screen, SessionEvent::Next) if screen.is_popup() => {
                if self.cursor + 1 >= self.bank.len() {
                    Some(Screen::Final)
                } else {
                    self.cursor += 1;
                    Some(Screen::Question)
                }
            }
            (Screen::ConfirmReset { resume }, SessionEvent::CancelReset) => Some(resume.into()),
            (
                Screen::ConfirmReset { .. } | Screen::Final,
                SessionEvent::ConfirmReset,
            )
            | (Screen::Final, SessionEvent::Reset) => {
                self.restart();
                Some(Screen::ChooseMode)
            }
            (screen, SessionEvent::Reset) => screen
                .resume_point()
                .map(|resume| Screen::ConfirmReset { resume }),
            _ => None,
        }
    }

    /// Replaces the session with a fresh one over the same bank.
    fn restart(&mut self) {
        *self = Self::new(Arc::clone(&self.bank));
    }

    /// The screen behind a pending reset confirmation.
    fn progress_screen(&self) -> Screen {
        match self.screen {
            Screen::ConfirmReset { resume } => resume.into(),
            screen => screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Resume;

    fn bank(correct: &[i64]) -> Arc<QuestionBank> {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(id, correct)| {
                QuestionSet::simple(
                    id,
                    format!("Question {id}"),
                    vec!["a".into(), "b".into(), "c".into()],
                    *correct,
                )
                .unwrap()
            })
            .collect();
        Arc::new(QuestionBank::new(questions).unwrap())
    }

    fn started(correct: &[i64]) -> Session {
        let mut session = Session::new(bank(correct));
        session.handle(SessionEvent::SelectMode(QuizMode::Simple));
        session.handle(SessionEvent::Start);
        session
    }

    #[test]
    fn new_session_waits_for_mode() {
        let session = Session::new(bank(&[0]));
        assert_eq!(session.screen(), Screen::ChooseMode);
        assert_eq!(session.display_mode(), None);
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn answer_out_of_range_is_ignored() {
        let mut session = started(&[0]);
        let outcome = session.handle(SessionEvent::SelectAnswer(3));
        assert_eq!(
            outcome,
            EventOutcome::Ignored {
                screen: Screen::Question
            }
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn reset_from_popup_resumes_popup() {
        let mut session = started(&[1, 0]);
        session.handle(SessionEvent::SelectAnswer(2));
        assert_eq!(session.screen(), Screen::PopupIncorrect);

        session.handle(SessionEvent::Reset);
        assert_eq!(
            session.screen(),
            Screen::ConfirmReset {
                resume: Resume::PopupIncorrect
            }
        );
        assert_eq!(
            session.current_question().map(QuestionSet::id),
            Some(0)
        );

        session.handle(SessionEvent::CancelReset);
        assert_eq!(session.screen(), Screen::PopupIncorrect);
    }

    #[test]
    fn confirm_reset_clears_mode() {
        let mut session = started(&[0]);
        session.handle(SessionEvent::Reset);
        session.handle(SessionEvent::ConfirmReset);
        assert_eq!(session.screen(), Screen::ChooseMode);
        assert_eq!(session.display_mode(), None);
    }

    #[test]
    fn reset_is_ignored_on_mode_selection() {
        let mut session = Session::new(bank(&[0]));
        assert!(!session.handle(SessionEvent::Reset).is_applied());
        assert!(!session.handle(SessionEvent::CancelReset).is_applied());
        assert_eq!(session.screen(), Screen::ChooseMode);
    }
}
