//! Error types for the quiz data model.

use thiserror::Error;

/// Invariant violations detected while constructing model records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The correct-option index does not point at one of the options.
    #[error(
        "question {question_id}: correct option {correct_index} is out of range for {option_count} options"
    )]
    InvalidReference {
        question_id: usize,
        correct_index: i64,
        option_count: usize,
    },

    /// Two question sets declare the same id.
    #[error("duplicate question id {id}")]
    DuplicateId { id: usize },

    /// The bank's id set is not exactly `0..count`.
    #[error("question ids are not contiguous: expected id {expected}, found {found}")]
    NonContiguousBank { expected: usize, found: i64 },

    /// The number of answer images differs from the number of text options.
    #[error(
        "question {question_id}: {image_options} answer images for {text_options} answer options"
    )]
    OptionCountMismatch {
        question_id: usize,
        text_options: usize,
        image_options: usize,
    },

    /// Simple and visual question sets were mixed in one bank.
    #[error("question {id} does not match the bank mode {expected}")]
    MixedVariants {
        id: usize,
        expected: crate::QuizMode,
    },

    /// A bank must hold at least one question set.
    #[error("question bank is empty")]
    EmptyBank,

    /// An image reference was requested from a text-only record.
    #[error("{0} has no image reference")]
    ImageUnavailable(&'static str),
}

pub type Result<T> = std::result::Result<T, ModelError>;
