//! Question bank loading.
//!
//! The base pass turns raw blocks into text-only question sets. The visual
//! pass reconciles answer images against each base record and rebuilds the
//! whole bank as visual records. Both passes are all-or-nothing: the first
//! error aborts the load and no partial bank is ever returned.

use std::collections::BTreeSet;

use quiz_model::{ModelError, QuestionBank, QuestionSet, QuizMode};
use tracing::{debug, info};

use crate::document::{RawFragment, RawQuestionBlock, tags};
use crate::error::{FieldProblem, IngestError, Result};
use crate::reconcile::{Fragment, reconcile};

/// Loads a bank in the given mode, running the visual pass when required.
pub fn load_bank(blocks: &[RawQuestionBlock], mode: QuizMode) -> Result<QuestionBank> {
    let base = load_simple_bank(blocks)?;
    let bank = match mode {
        QuizMode::Simple => base,
        QuizMode::Visual => upgrade_to_visual(base, blocks)?,
    };
    info!(
        mode = %bank.mode(),
        questions = bank.len(),
        "Loaded question bank"
    );
    Ok(bank)
}

/// Builds the text-only bank from raw question blocks.
pub fn load_simple_bank(blocks: &[RawQuestionBlock]) -> Result<QuestionBank> {
    let mut seen = BTreeSet::new();
    let mut records = Vec::with_capacity(blocks.len());
    for block in blocks {
        let record = build_simple_question(block)?;
        if !seen.insert(record.id()) {
            return Err(ModelError::DuplicateId { id: record.id() }.into());
        }
        debug!(
            id = record.id(),
            options = record.option_count(),
            "Loaded question set"
        );
        records.push(record);
    }
    Ok(QuestionBank::new(records)?)
}

/// Rebuilds every record of `base` as a visual question set.
///
/// `blocks` must be the blocks `base` was loaded from. Each block's answer
/// images are reconciled against that question's own option count.
pub fn upgrade_to_visual(base: QuestionBank, blocks: &[RawQuestionBlock]) -> Result<QuestionBank> {
    // Ids are dense, so the id is the slot index.
    let mut slots: Vec<Option<QuestionSet>> =
        base.into_questions().into_iter().map(Some).collect();
    let mut records = Vec::with_capacity(slots.len());

    for block in blocks {
        let id = question_id(block)?;
        let base_record = slots
            .get_mut(id)
            .and_then(Option::take)
            .ok_or(IngestError::BaseMismatch { id })?;
        let image_ref = required_text(block, &block.question_image, tags::QUESTION_IMAGE)?;

        let option_count = base_record.option_count();
        if block.answer_images.len() != option_count {
            return Err(ModelError::OptionCountMismatch {
                question_id: id,
                text_options: option_count,
                image_options: block.answer_images.len(),
            }
            .into());
        }
        let fragments = fragments(block, &block.answer_images, ANSWER_IMAGE_INDEX)?;
        let images =
            reconcile(fragments, option_count).map_err(|source| IngestError::MalformedOrdering {
                question_id: id,
                element: tags::ANSWER_IMAGE,
                source,
            })?;

        records.push(base_record.into_visual(image_ref, images)?);
    }

    if let Some(leftover) = slots.iter().flatten().next() {
        return Err(IngestError::BaseMismatch { id: leftover.id() });
    }
    Ok(QuestionBank::new(records)?)
}

const ANSWER_INDEX: &str = "a@id";
const ANSWER_IMAGE_INDEX: &str = "aImg@id";
const QUESTION_ID: &str = "questionSet@id";

fn build_simple_question(block: &RawQuestionBlock) -> Result<QuestionSet> {
    let id = question_id(block)?;
    let prompt = required_text(block, &block.prompt, tags::PROMPT)?;
    let correct_text = required_text(block, &block.correct, tags::CORRECT)?;
    let correct_index = parse_number(block, correct_text, tags::CORRECT)?;

    let fragments = fragments(block, &block.answers, ANSWER_INDEX)?;
    let count = fragments.len();
    let options = reconcile(fragments, count).map_err(|source| IngestError::MalformedOrdering {
        question_id: id,
        element: tags::ANSWER,
        source,
    })?;

    Ok(QuestionSet::simple(id, prompt, options, correct_index)?)
}

/// The question id: a required, non-negative integer.
fn question_id(block: &RawQuestionBlock) -> Result<usize> {
    let text = required_text(block, &block.id, QUESTION_ID)?;
    text.parse::<usize>()
        .map_err(|_| missing(block, QUESTION_ID, FieldProblem::NotANumber(text.to_string())))
}

fn required_text<'a>(
    block: &RawQuestionBlock,
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| missing(block, field, FieldProblem::Absent))
}

fn parse_number(block: &RawQuestionBlock, text: &str, field: &'static str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| missing(block, field, FieldProblem::NotANumber(text.to_string())))
}

fn fragments(
    block: &RawQuestionBlock,
    raw: &[RawFragment],
    field: &'static str,
) -> Result<Vec<Fragment<String>>> {
    raw.iter()
        .map(|fragment| {
            let index = required_text(block, &fragment.declared_index, field)?;
            let declared_index = parse_number(block, index, field)?;
            Ok(Fragment::new(declared_index, fragment.content.clone()))
        })
        .collect()
}

fn missing(block: &RawQuestionBlock, field: &'static str, problem: FieldProblem) -> IngestError {
    IngestError::MissingField {
        position: block.position,
        field,
        problem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LoadErrorKind, OrderingError};

    fn block(id: &str) -> RawQuestionBlock {
        RawQuestionBlock::new(0, Some(id.to_string()))
            .with_prompt(format!("Question {id}"))
            .with_answer("1", "second")
            .with_answer("0", "first")
            .with_correct("1")
    }

    #[test]
    fn builds_options_in_declared_order() {
        let question = build_simple_question(&block("0")).unwrap();
        let texts: Vec<&str> = question.options().iter().map(|o| o.text()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(question.correct_index(), 1);
    }

    #[test]
    fn missing_prompt_is_reported() {
        let mut raw = block("0");
        raw.prompt = None;
        let err = build_simple_question(&raw).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingField {
                field: "q",
                problem: FieldProblem::Absent,
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_fields_are_missing_fields() {
        let err = build_simple_question(&block("zero")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingField {
                field: QUESTION_ID,
                ..
            }
        ));

        let err = build_simple_question(&block("-1")).unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::MissingField);

        let err = build_simple_question(&block("0").with_answer("x", "third")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingField {
                field: ANSWER_INDEX,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_answer_index_is_malformed_ordering() {
        let err = build_simple_question(&block("3").with_answer("1", "again")).unwrap_err();
        match err {
            IngestError::MalformedOrdering {
                question_id,
                element,
                source,
            } => {
                assert_eq!(question_id, 3);
                assert_eq!(element, "a");
                assert_eq!(source, OrderingError::Duplicate { index: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn correct_index_out_of_range() {
        let err = build_simple_question(&block("0").with_correct("2")).unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::InvalidReference);

        let err = build_simple_question(&block("0").with_correct("-1")).unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::InvalidReference);
    }

    #[test]
    fn upgrade_rejects_unknown_question() {
        let base = load_simple_bank(&[block("0")]).unwrap();
        let err = upgrade_to_visual(
            base,
            &[block("1")
                .with_question_image("q.png")
                .with_answer_image("0", "a.png")
                .with_answer_image("1", "b.png")],
        )
        .unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::BaseMismatch);
    }
}
