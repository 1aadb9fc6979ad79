//! Raw question blocks as read from a question document.
//!
//! A block holds the untyped text of one `questionSet` element. Nothing is
//! parsed or validated here; the loader turns blocks into model records.

/// Element and attribute names of the question document.
pub mod tags {
    pub const QUESTION_SET: &str = "questionSet";
    pub const ID_ATTR: &str = "id";
    pub const PROMPT: &str = "q";
    pub const CORRECT: &str = "correct";
    pub const ANSWER: &str = "a";
    pub const QUESTION_IMAGE: &str = "qImg";
    pub const ANSWER_IMAGE: &str = "aImg";
}

/// An unordered, index-tagged child element (`a` or `aImg`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFragment {
    /// The `id` attribute, if present.
    pub declared_index: Option<String>,
    pub content: String,
}

impl RawFragment {
    pub fn new(declared_index: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            declared_index: Some(declared_index.into()),
            content: content.into(),
        }
    }
}

/// The raw fields of one `questionSet` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuestionBlock {
    /// Zero-based position of the block in document order.
    pub position: usize,
    pub id: Option<String>,
    pub prompt: Option<String>,
    pub correct: Option<String>,
    pub answers: Vec<RawFragment>,
    pub question_image: Option<String>,
    pub answer_images: Vec<RawFragment>,
}

impl RawQuestionBlock {
    pub fn new(position: usize, id: Option<String>) -> Self {
        Self {
            position,
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    #[must_use]
    pub fn with_correct(mut self, correct: impl Into<String>) -> Self {
        self.correct = Some(correct.into());
        self
    }

    #[must_use]
    pub fn with_answer(
        mut self,
        declared_index: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.answers.push(RawFragment::new(declared_index, text));
        self
    }

    #[must_use]
    pub fn with_question_image(mut self, image_ref: impl Into<String>) -> Self {
        self.question_image = Some(image_ref.into());
        self
    }

    #[must_use]
    pub fn with_answer_image(
        mut self,
        declared_index: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        self.answer_images.push(RawFragment::new(declared_index, image_ref));
        self
    }

    /// Stores a captured child element. Scalar fields keep their first value.
    pub(crate) fn set_field(
        &mut self,
        field: Field,
        declared_index: Option<String>,
        text: String,
    ) {
        match field {
            Field::Prompt => {
                self.prompt.get_or_insert(text);
            }
            Field::Correct => {
                self.correct.get_or_insert(text);
            }
            Field::QuestionImage => {
                self.question_image.get_or_insert(text);
            }
            Field::Answer => self.answers.push(RawFragment {
                declared_index,
                content: text,
            }),
            Field::AnswerImage => self.answer_images.push(RawFragment {
                declared_index,
                content: text,
            }),
        }
    }
}

/// Child elements of a `questionSet` that the reader captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Prompt,
    Correct,
    Answer,
    QuestionImage,
    AnswerImage,
}

impl Field {
    pub(crate) fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            t if t == tags::PROMPT.as_bytes() => Some(Self::Prompt),
            t if t == tags::CORRECT.as_bytes() => Some(Self::Correct),
            t if t == tags::ANSWER.as_bytes() => Some(Self::Answer),
            t if t == tags::QUESTION_IMAGE.as_bytes() => Some(Self::QuestionImage),
            t if t == tags::ANSWER_IMAGE.as_bytes() => Some(Self::AnswerImage),
            _ => None,
        }
    }

    /// Whether the element carries a declared index attribute.
    pub(crate) fn is_indexed(self) -> bool {
        matches!(self, Self::Answer | Self::AnswerImage)
    }
}
