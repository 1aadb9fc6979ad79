//! Quiz data model.
//!
//! Answer options, question sets and the validated question bank that the
//! loader produces and the session consumes. All records are immutable after
//! construction; constructors enforce the model invariants and report
//! violations as [`ModelError`].

pub mod answer;
pub mod bank;
pub mod error;
pub mod mode;
pub mod question;

pub use answer::{AnswerOption, option_index, option_label};
pub use bank::QuestionBank;
pub use error::{ModelError, Result};
pub use mode::QuizMode;
pub use question::{QuestionSet, SimpleQuestionSet, VisualQuestionSet};
