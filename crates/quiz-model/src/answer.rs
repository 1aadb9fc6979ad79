//! Answer options and their on-screen labels.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single answer option.
///
/// Text-only banks hold `Text` options; visual banks hold `Image` options.
/// Options are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerOption {
    Text { text: String },
    Image { text: String, image_ref: String },
}

impl AnswerOption {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn with_image(text: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self::Image {
            text: text.into(),
            image_ref: image_ref.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Text { text } | Self::Image { text, .. } => text,
        }
    }

    /// Image reference of an image option.
    ///
    /// Asking a text-only option for its image is an error, never an empty default.
    pub fn image_ref(&self) -> Result<&str> {
        match self {
            Self::Image { image_ref, .. } => Ok(image_ref),
            Self::Text { .. } => Err(ModelError::ImageUnavailable("text option")),
        }
    }

    pub fn has_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }

    /// Rebuilds this option as an image option, keeping its text.
    pub(crate) fn into_image(self, image_ref: String) -> Self {
        let text = match self {
            Self::Text { text } | Self::Image { text, .. } => text,
        };
        Self::Image { text, image_ref }
    }
}

/// Label shown next to the option at `index`: `A`..`Z`, then `AA`, `AB`, ...
pub fn option_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// Inverse of [`option_label`]; case-insensitive. `None` for non-labels.
pub fn option_index(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut value = 0usize;
    for ch in label.bytes() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = usize::from(ch.to_ascii_uppercase() - b'A') + 1;
        value = value.checked_mul(26)?.checked_add(digit)?;
    }
    Some(value - 1)
}
