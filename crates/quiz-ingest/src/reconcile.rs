//! Fragment reconciliation.
//!
//! Markup does not guarantee element order, so each answer (or answer image)
//! carries its own declared index. Reconciliation turns those unordered
//! `(declared index, payload)` pairs into a contiguous zero-based sequence.
//!
//! The result depends only on the index-to-payload association, never on
//! arrival order. Any index set other than exactly `0..count` is rejected:
//! a duplicate is an error (neither first nor last write wins), as is a gap
//! or an index outside the range.

use std::collections::BTreeMap;

use crate::error::OrderingError;

/// One declared-index/payload pair, as extracted from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<T> {
    pub declared_index: i64,
    pub payload: T,
}

impl<T> Fragment<T> {
    pub fn new(declared_index: i64, payload: T) -> Self {
        Self {
            declared_index,
            payload,
        }
    }
}

/// Orders `fragments` so that `result[i]` is the payload declared at index `i`.
///
/// `count` is the expected sequence length. Fragments are checked in arrival
/// order, so the first out-of-range or repeated index is the one reported.
pub fn reconcile<T, I>(fragments: I, count: usize) -> Result<Vec<T>, OrderingError>
where
    I: IntoIterator<Item = Fragment<T>>,
{
    let mut slots: BTreeMap<usize, T> = BTreeMap::new();
    for fragment in fragments {
        let declared = fragment.declared_index;
        let index = usize::try_from(declared)
            .ok()
            .filter(|index| *index < count)
            .ok_or(OrderingError::OutOfRange {
                index: declared,
                count,
            })?;
        if slots.insert(index, fragment.payload).is_some() {
            return Err(OrderingError::Duplicate { index: declared });
        }
    }

    // Every key is unique and below `count`, so a short map means a gap.
    if slots.len() < count {
        let index = (0..count)
            .find(|index| !slots.contains_key(index))
            .unwrap_or(slots.len());
        return Err(OrderingError::Missing { index });
    }

    Ok(slots.into_values().collect())
}

/// Reconciles a complete fragment list whose length is the expected count.
pub fn reconcile_all<T>(fragments: Vec<Fragment<T>>) -> Result<Vec<T>, OrderingError> {
    let count = fragments.len();
    reconcile(fragments, count)
}
