//! Quiz session state machine.
//!
//! A [`Session`] drives one player through a loaded question bank:
//! mode selection, one question at a time with a correct/incorrect popup,
//! and a final score screen. Reset requests go through a confirmation
//! screen that can be cancelled.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quiz_session::{Session, SessionEvent};
//!
//! let mut session = Session::new(Arc::new(bank));
//! session.handle(SessionEvent::SelectMode(QuizMode::Simple));
//! session.handle(SessionEvent::Start);
//! session.handle(SessionEvent::SelectAnswer(1));
//! println!("score: {}", session.score());
//! ```

mod event;
mod screen;
mod session;
mod view;

pub use event::{EventOutcome, SessionEvent};
pub use screen::{Resume, Screen};
pub use session::Session;
pub use view::ScreenView;
