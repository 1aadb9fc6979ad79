//! The validated question bank.
//!
//! A [`QuestionBank`] is built once from loader records and never changes
//! afterwards. Construction rejects empty input, duplicate or gapped ids and
//! mixed question variants.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::mode::QuizMode;
use crate::question::QuestionSet;

/// A validated, immutable collection of question sets.
///
/// Ids are dense and zero-based, so the id doubles as the position in the
/// iteration order. Every record has the same variant as the bank mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    mode: QuizMode,
    questions: Vec<QuestionSet>,
}

impl QuestionBank {
    /// Validates `records` and orders them by id.
    ///
    /// Checks run in this order, reporting the first failure:
    /// empty input, duplicate ids (in arrival order), a gap in the id set,
    /// then mixed simple/visual variants.
    pub fn new(records: Vec<QuestionSet>) -> Result<Self> {
        let Some(first) = records.first() else {
            return Err(ModelError::EmptyBank);
        };
        let mode = first.mode();

        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(ModelError::DuplicateId { id: record.id() });
            }
        }
        if let Some((expected, found)) = seen
            .iter()
            .enumerate()
            .find(|(expected, found)| *expected != **found)
        {
            return Err(ModelError::NonContiguousBank {
                expected,
                found: *found as i64,
            });
        }
        if let Some(mixed) = records.iter().find(|record| record.mode() != mode) {
            return Err(ModelError::MixedVariants {
                id: mixed.id(),
                expected: mode,
            });
        }

        let mut questions = records;
        questions.sort_by_key(QuestionSet::id);
        Ok(Self { mode, questions })
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&QuestionSet> {
        self.questions.get(id)
    }

    /// Question sets in ascending id order.
    pub fn iter(&self) -> std::slice::Iter<'_, QuestionSet> {
        self.questions.iter()
    }

    pub fn ids(&self) -> std::ops::Range<usize> {
        0..self.questions.len()
    }

    /// Hands the records back, e.g. to rebuild them as another variant.
    pub fn into_questions(self) -> Vec<QuestionSet> {
        self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a QuestionSet;
    type IntoIter = std::slice::Iter<'a, QuestionSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Panics if `id` is not below [`QuestionBank::len`].
impl std::ops::Index<usize> for QuestionBank {
    type Output = QuestionSet;

    fn index(&self, id: usize) -> &QuestionSet {
        &self.questions[id]
    }
}
