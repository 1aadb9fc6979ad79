//! Image asset lookup for visual documents.

use std::path::{Path, PathBuf};

use quiz_model::QuestionBank;
use tracing::warn;

/// Directory suffix of a document's image folder (`<stem>_images`).
const IMAGE_DIR_SUFFIX: &str = "_images";

/// Resolves image references to files on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAssets {
    dir: PathBuf,
}

/// An image reference whose file does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset {
    pub question_id: usize,
    /// `None` for the question image, otherwise the option index.
    pub option: Option<usize>,
    pub image_ref: String,
    pub path: PathBuf,
}

impl ImageAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The image folder that sits next to `document`: `<dir>/<stem>_images/`.
    pub fn for_document(document: &Path) -> Self {
        let stem = document
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parent = document.parent().unwrap_or_else(|| Path::new(""));
        Self::new(parent.join(format!("{stem}{IMAGE_DIR_SUFFIX}")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn resolve(&self, image_ref: &str) -> PathBuf {
        self.dir.join(image_ref)
    }

    /// Lists every image reference in `bank` whose file is missing.
    ///
    /// Text-only banks have no image references and never report anything.
    pub fn missing(&self, bank: &QuestionBank) -> Vec<MissingAsset> {
        let mut missing = Vec::new();
        for question in bank {
            let references = question
                .image_ref()
                .ok()
                .map(|image_ref| (None, image_ref))
                .into_iter()
                .chain(
                    question
                        .options()
                        .iter()
                        .enumerate()
                        .filter_map(|(index, option)| {
                            option.image_ref().ok().map(|image_ref| (Some(index), image_ref))
                        }),
                );
            for (option, image_ref) in references {
                let path = self.resolve(image_ref);
                if path.is_file() {
                    continue;
                }
                warn!(
                    question = question.id(),
                    image = image_ref,
                    path = %path.display(),
                    "Image asset not found"
                );
                missing.push(MissingAsset {
                    question_id: question.id(),
                    option,
                    image_ref: image_ref.to_string(),
                    path,
                });
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_model::QuestionSet;
    use tempfile::TempDir;

    #[test]
    fn image_folder_sits_next_to_document() {
        let assets = ImageAssets::for_document(Path::new("quizzes/flags.xml"));
        assert_eq!(assets.dir(), Path::new("quizzes/flags_images"));
        assert_eq!(
            assets.resolve("red.png"),
            PathBuf::from("quizzes/flags_images/red.png")
        );
    }

    #[test]
    fn reports_missing_files_only() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("q.png"), b"png").unwrap();
        std::fs::write(dir.path().join("a.png"), b"png").unwrap();

        let question = QuestionSet::simple(0, "Which?", vec!["A".into(), "B".into()], 0)
            .unwrap()
            .into_visual("q.png", vec!["a.png".into(), "b.png".into()])
            .unwrap();
        let bank = QuestionBank::new(vec![question]).unwrap();

        let missing = ImageAssets::new(dir.path()).missing(&bank);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].question_id, 0);
        assert_eq!(missing[0].option, Some(1));
        assert_eq!(missing[0].image_ref, "b.png");
    }

    #[test]
    fn text_only_bank_has_no_assets() {
        let question = QuestionSet::simple(0, "Which?", vec!["A".into()], 0).unwrap();
        let bank = QuestionBank::new(vec![question]).unwrap();
        assert!(ImageAssets::new("nowhere").missing(&bank).is_empty());
    }
}
