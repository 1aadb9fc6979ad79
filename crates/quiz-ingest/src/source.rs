//! Loading a quiz document from disk.

use std::path::{Path, PathBuf};

use quiz_model::{QuestionBank, QuizMode};
use tracing::debug;

use crate::assets::ImageAssets;
use crate::error::Result;
use crate::loader::load_bank;
use crate::xml::read_question_file;

/// File stem marker of text-only documents.
const TEXT_ONLY_MARKER: &str = "textonly";

/// Caller overrides for loading a quiz document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Forces the source mode instead of detecting it from the file name.
    pub mode: Option<QuizMode>,
    /// Directory holding the image assets of a visual document.
    pub image_dir: Option<PathBuf>,
}

impl LoadOptions {
    #[must_use]
    pub fn with_mode(mut self, mode: QuizMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }
}

/// Detects the source mode from a document's file name.
///
/// Documents whose file stem contains `textOnly` (in any ASCII case) are
/// text-only; every other document is visual.
pub fn detect_mode(path: &Path) -> QuizMode {
    let is_text_only = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_ascii_lowercase().contains(TEXT_ONLY_MARKER))
        .unwrap_or(false);
    if is_text_only {
        QuizMode::Simple
    } else {
        QuizMode::Visual
    }
}

/// A loaded quiz document.
#[derive(Debug, Clone)]
pub struct LoadedQuiz {
    pub path: PathBuf,
    pub bank: QuestionBank,
    pub assets: ImageAssets,
}

/// Reads, validates and loads the quiz document at `path`.
///
/// The whole document is validated before anything is returned; any
/// ingestion error leaves no partially loaded bank behind.
pub fn load_quiz_file(path: &Path, options: &LoadOptions) -> Result<LoadedQuiz> {
    let mode = options.mode.unwrap_or_else(|| detect_mode(path));
    debug!(path = %path.display(), %mode, "Loading quiz document");

    let blocks = read_question_file(path)?;
    let bank = load_bank(&blocks, mode)?;
    let assets = match &options.image_dir {
        Some(dir) => ImageAssets::new(dir.clone()),
        None => ImageAssets::for_document(path),
    };

    Ok(LoadedQuiz {
        path: path.to_path_buf(),
        bank,
        assets,
    })
}
