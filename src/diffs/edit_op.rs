#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::side::Side;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Equal,
    Delete,
    Insert,
}

/// One run of an edit script between an old and a new token sequence.
///
/// `old_start` and `new_start` are the indices in the respective sequences
/// where the run begins. For an `Insert` the old index is the position before
/// which the items are inserted, for a `Delete` the new index is where the
/// deleted items would have been.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOp {
    kind: EditKind,
    items: Vec<String>,
    old_start: usize,
    new_start: usize,
}

impl EditOp {
    #[must_use]
    pub fn new(kind: EditKind, items: Vec<String>, old_start: usize, new_start: usize) -> Self {
        Self {
            kind,
            items,
            old_start,
            new_start,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EditKind { self.kind }

    #[must_use]
    pub fn items(&self) -> &[String] { &self.items }

    #[must_use]
    pub fn old_start(&self) -> usize { self.old_start }

    #[must_use]
    pub fn new_start(&self) -> usize { self.new_start }

    /// Number of tokens in the run.
    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// The concatenated items.
    #[must_use]
    pub fn text(&self) -> String { self.items.concat() }

    /// Index range the run covers in the old sequence. Empty for inserts.
    #[must_use]
    pub fn old_range(&self) -> std::ops::Range<usize> {
        match self.kind {
            EditKind::Insert => self.old_start..self.old_start,
            EditKind::Equal | EditKind::Delete => self.old_start..self.old_start + self.len(),
        }
    }

    /// Whether the run contributes to the given side's sequence.
    #[must_use]
    pub fn is_on(&self, side: Side) -> bool {
        match (self.kind, side) {
            (EditKind::Equal, _) | (EditKind::Delete, Side::Old) | (EditKind::Insert, Side::New) => {
                true
            }
            (EditKind::Delete, Side::New) | (EditKind::Insert, Side::Old) => false,
        }
    }

    /// Extends the run with the items of another one. Only runs of the same
    /// kind can be joined, which is the caller's responsibility.
    pub fn extend(&mut self, other: EditOp) {
        debug_assert!(
            self.kind == other.kind,
            "Cannot extend operations of different kinds. This should have been handled before \
             calling this function."
        );

        self.items.extend(other.items);
    }
}

/// Rebuild one side's token sequence from an edit script.
#[must_use]
pub fn reconstruct(operations: &[EditOp], side: Side) -> Vec<String> {
    operations
        .iter()
        .filter(|operation| operation.is_on(side))
        .flat_map(|operation| operation.items.iter().cloned())
        .collect()
}

/// Whether the script transforms a sequence into itself.
#[must_use]
pub fn is_identity(operations: &[EditOp]) -> bool {
    operations
        .iter()
        .all(|operation| operation.kind == EditKind::Equal)
}
