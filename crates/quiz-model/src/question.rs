//! Question set records.
//!
//! A question set is built once from validated fields and never mutated. The
//! visual variant is produced by [`QuestionSet::into_visual`], which consumes
//! the simple record and returns a fresh one with image references attached.

use serde::Serialize;

use crate::answer::{AnswerOption, option_label};
use crate::error::{ModelError, Result};
use crate::mode::QuizMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionSet {
    Simple(SimpleQuestionSet),
    Visual(VisualQuestionSet),
}

/// Text-only question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleQuestionSet {
    id: usize,
    prompt: String,
    options: Vec<AnswerOption>,
    correct_index: usize,
}

/// Question set whose question and every option carry an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualQuestionSet {
    id: usize,
    prompt: String,
    options: Vec<AnswerOption>,
    correct_index: usize,
    image_ref: String,
}

impl QuestionSet {
    /// Builds a text-only question set from options already in display order.
    ///
    /// Fails with [`ModelError::InvalidReference`] unless
    /// `0 <= correct_index < options.len()`.
    pub fn simple(
        id: usize,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: i64,
    ) -> Result<Self> {
        let correct_index = checked_correct_index(id, correct_index, options.len())?;
        Ok(Self::Simple(SimpleQuestionSet {
            id,
            prompt: prompt.into(),
            options: options.into_iter().map(AnswerOption::text_only).collect(),
            correct_index,
        }))
    }

    /// Upgrades this record to the visual variant.
    ///
    /// `option_images` must already be in option order and have exactly one
    /// entry per option. Scalar fields are carried over unchanged. Upgrading
    /// an already visual record replaces its image references.
    pub fn into_visual(
        self,
        image_ref: impl Into<String>,
        option_images: Vec<String>,
    ) -> Result<Self> {
        let (id, prompt, options, correct_index) = match self {
            Self::Simple(set) => (set.id, set.prompt, set.options, set.correct_index),
            Self::Visual(set) => (set.id, set.prompt, set.options, set.correct_index),
        };
        if option_images.len() != options.len() {
            return Err(ModelError::OptionCountMismatch {
                question_id: id,
                text_options: options.len(),
                image_options: option_images.len(),
            });
        }
        let options = options
            .into_iter()
            .zip(option_images)
            .map(|(option, image)| option.into_image(image))
            .collect();
        Ok(Self::Visual(VisualQuestionSet {
            id,
            prompt,
            options,
            correct_index,
            image_ref: image_ref.into(),
        }))
    }

    pub fn id(&self) -> usize {
        match self {
            Self::Simple(set) => set.id,
            Self::Visual(set) => set.id,
        }
    }

    /// Human-facing question number (`id + 1`).
    pub fn number(&self) -> usize {
        self.id() + 1
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::Simple(set) => &set.prompt,
            Self::Visual(set) => &set.prompt,
        }
    }

    pub fn options(&self) -> &[AnswerOption] {
        match self {
            Self::Simple(set) => &set.options,
            Self::Visual(set) => &set.options,
        }
    }

    pub fn option_count(&self) -> usize {
        self.options().len()
    }

    pub fn correct_index(&self) -> usize {
        match self {
            Self::Simple(set) => set.correct_index,
            Self::Visual(set) => set.correct_index,
        }
    }

    pub fn correct_option(&self) -> &AnswerOption {
        // correct_index is checked against the option count at construction
        &self.options()[self.correct_index()]
    }

    pub fn correct_label(&self) -> String {
        option_label(self.correct_index())
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index()
    }

    /// The question's own image reference; an error on a simple record.
    pub fn image_ref(&self) -> Result<&str> {
        match self {
            Self::Visual(set) => Ok(&set.image_ref),
            Self::Simple(_) => Err(ModelError::ImageUnavailable("simple question set")),
        }
    }

    pub fn mode(&self) -> QuizMode {
        match self {
            Self::Simple(_) => QuizMode::Simple,
            Self::Visual(_) => QuizMode::Visual,
        }
    }
}

fn checked_correct_index(id: usize, correct_index: i64, option_count: usize) -> Result<usize> {
    usize::try_from(correct_index)
        .ok()
        .filter(|index| *index < option_count)
        .ok_or(ModelError::InvalidReference {
            question_id: id,
            correct_index,
            option_count,
        })
}
