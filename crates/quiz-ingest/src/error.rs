//! Error types for quiz ingestion.

use std::fmt;
use std::path::PathBuf;

use quiz_model::ModelError;
use thiserror::Error;

/// Why a declared-index set could not be reconciled into `0..count`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// The same declared index appeared more than once.
    #[error("declared index {index} appears more than once")]
    Duplicate { index: i64 },

    /// A declared index falls outside `0..count`.
    #[error("declared index {index} is outside 0..{count}")]
    OutOfRange { index: i64, count: usize },

    /// No fragment declared this index.
    #[error("declared index {index} is missing")]
    Missing { index: usize },
}

impl OrderingError {
    /// The index that broke the ordering.
    pub fn index(&self) -> i64 {
        match self {
            Self::Duplicate { index } | Self::OutOfRange { index, .. } => *index,
            Self::Missing { index } => *index as i64,
        }
    }
}

/// What was wrong with a required scalar field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Absent,
    NotANumber(String),
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("missing"),
            Self::NotANumber(value) => write!(f, "not a valid number ('{value}')"),
        }
    }
}

/// Errors that can occur while loading a question bank.
///
/// Loading is fail-fast: the first error aborts the whole bank.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read the question document.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Document Errors ===
    /// The markup tokenizer rejected the document.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed markup that is not a usable question document.
    #[error("invalid question document: {message}")]
    Document { message: String },

    /// A required field is absent, or not numeric where a number is required.
    #[error("questionSet #{position}: required field {field} is {problem}")]
    MissingField {
        position: usize,
        field: &'static str,
        problem: FieldProblem,
    },

    /// Fragment indices of one question do not form `0..count`.
    #[error("question {question_id}: malformed {element} ordering: {source}")]
    MalformedOrdering {
        question_id: usize,
        element: &'static str,
        #[source]
        source: OrderingError,
    },

    /// The upgrade pass found a question block with no base record.
    #[error("question {id} has no record in the base bank")]
    BaseMismatch { id: usize },

    // === Model Errors ===
    /// A model invariant was violated while building records.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Flat error category, one per kind of load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    Io,
    Xml,
    MissingField,
    MalformedOrdering,
    InvalidReference,
    DuplicateId,
    NonContiguousBank,
    OptionCountMismatch,
    EmptyBank,
    MixedVariants,
    ImageUnavailable,
    BaseMismatch,
}

impl IngestError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::FileRead { .. } => LoadErrorKind::Io,
            Self::Xml(_) | Self::Document { .. } => LoadErrorKind::Xml,
            Self::MissingField { .. } => LoadErrorKind::MissingField,
            Self::MalformedOrdering { .. } => LoadErrorKind::MalformedOrdering,
            Self::BaseMismatch { .. } => LoadErrorKind::BaseMismatch,
            Self::Model(err) => match err {
                ModelError::InvalidReference { .. } => LoadErrorKind::InvalidReference,
                ModelError::DuplicateId { .. } => LoadErrorKind::DuplicateId,
                ModelError::NonContiguousBank { .. } => LoadErrorKind::NonContiguousBank,
                ModelError::OptionCountMismatch { .. } => LoadErrorKind::OptionCountMismatch,
                ModelError::EmptyBank => LoadErrorKind::EmptyBank,
                ModelError::MixedVariants { .. } => LoadErrorKind::MixedVariants,
                ModelError::ImageUnavailable(_) => LoadErrorKind::ImageUnavailable,
            },
        }
    }

    pub(crate) fn document(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
