//! Quiz document ingestion.
//!
//! This crate reads XML question documents and turns them into validated
//! [`QuestionBank`](quiz_model::QuestionBank)s.
//!
//! # Features
//!
//! - **XML Reading**: Extract raw `questionSet` blocks in document order
//! - **Fragment Reconciliation**: Order answers and answer images by their declared index
//! - **Bank Loading**: Build a text-only bank, then upgrade it to the visual variant
//! - **Image Assets**: Resolve image references and report missing files
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use quiz_ingest::{LoadOptions, load_quiz_file};
//!
//! let quiz = load_quiz_file(Path::new("quizzes/flags.xml"), &LoadOptions::default())?;
//! for missing in quiz.assets.missing(&quiz.bank) {
//!     eprintln!("missing image: {}", missing.path.display());
//! }
//! ```

mod assets;
mod document;
mod error;
mod loader;
mod reconcile;
mod source;
mod xml;

// === Error Types ===
pub use error::{FieldProblem, IngestError, LoadErrorKind, OrderingError, Result};

// === Raw Documents ===
pub use document::{RawFragment, RawQuestionBlock, tags};
pub use xml::{parse_question_blocks, read_question_file};

// === Reconciliation ===
pub use reconcile::{Fragment, reconcile, reconcile_all};

// === Bank Loading ===
pub use loader::{load_bank, load_simple_bank, upgrade_to_visual};
pub use source::{LoadOptions, LoadedQuiz, detect_mode, load_quiz_file};

// === Image Assets ===
pub use assets::{ImageAssets, MissingAsset};
