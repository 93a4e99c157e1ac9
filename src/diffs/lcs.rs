//! LCS diff algorithm over token contents.
//!
//! * time: `O(MN)`
//! * space `O(MN)`
//!
//! Inputs are short captions, so the full dynamic-programming table is
//! affordable. A shared prefix is emitted up front and left out of the table.
use std::ops::Index;

use log::trace;

use super::edit_op::{EditKind, EditOp};

/// Compute the edit script turning `old` into `new`.
///
/// Tokens are compared by exact string equality, whitespace included. When
/// both deleting and inserting keep the LCS optimal, deleting wins
/// (`dp[i + 1][j] >= dp[i][j + 1]`). Consecutive steps of the same kind are
/// coalesced into maximal runs.
///
/// ```
/// use text_transition::{EditKind, diff};
///
/// let operations = diff(&["hello", " ", "world"], &["goodbye", " ", "world"]);
/// let kinds: Vec<EditKind> = operations.iter().map(|op| op.kind()).collect();
///
/// assert_eq!(kinds, vec![EditKind::Delete, EditKind::Insert, EditKind::Equal]);
/// ```
pub fn diff<O, N>(old: &[O], new: &[N]) -> Vec<EditOp>
where
    O: AsRef<str>,
    N: AsRef<str>,
{
    let old: Vec<&str> = old.iter().map(AsRef::as_ref).collect();
    let new: Vec<&str> = new.iter().map(AsRef::as_ref).collect();

    if old.is_empty() && new.is_empty() {
        return Vec::new();
    }
    if old.is_empty() {
        return vec![EditOp::new(EditKind::Insert, to_owned(&new), 0, 0)];
    }
    if new.is_empty() {
        return vec![EditOp::new(EditKind::Delete, to_owned(&old), 0, 0)];
    }

    let prefix_len = old
        .iter()
        .zip(&new)
        .take_while(|(old, new)| old == new)
        .count();
    let table = LcsTable::new(&old[prefix_len..], &new[prefix_len..]);
    let remaining_lcs = |i: usize, j: usize| table[(i - prefix_len, j - prefix_len)];

    let mut result: Vec<EditOp> = Vec::new();
    if prefix_len > 0 {
        result.push(EditOp::new(
            EditKind::Equal,
            to_owned(&old[..prefix_len]),
            0,
            0,
        ));
    }

    let mut old_idx = prefix_len;
    let mut new_idx = prefix_len;

    while old_idx < old.len() && new_idx < new.len() {
        if old[old_idx] == new[new_idx] {
            push_step(&mut result, EditKind::Equal, old[old_idx], old_idx, new_idx);
            old_idx += 1;
            new_idx += 1;
        } else if remaining_lcs(old_idx + 1, new_idx) >= remaining_lcs(old_idx, new_idx + 1) {
            push_step(&mut result, EditKind::Delete, old[old_idx], old_idx, new_idx);
            old_idx += 1;
        } else {
            push_step(&mut result, EditKind::Insert, new[new_idx], old_idx, new_idx);
            new_idx += 1;
        }
    }

    if old_idx < old.len() {
        push_run(
            &mut result,
            EditOp::new(EditKind::Delete, to_owned(&old[old_idx..]), old_idx, new_idx),
        );
    }

    if new_idx < new.len() {
        push_run(
            &mut result,
            EditOp::new(EditKind::Insert, to_owned(&new[new_idx..]), old.len(), new_idx),
        );
    }

    trace!(
        "Diffed {} old against {} new tokens into {} operations (common prefix: {prefix_len}, \
         lcs: {})",
        old.len(),
        new.len(),
        result.len(),
        prefix_len as u32 + table.lcs_len(),
    );

    result
}

fn to_owned(items: &[&str]) -> Vec<String> { items.iter().map(|&item| item.to_owned()).collect() }

fn push_step(result: &mut Vec<EditOp>, kind: EditKind, item: &str, old_idx: usize, new_idx: usize) {
    push_run(
        result,
        EditOp::new(kind, vec![item.to_owned()], old_idx, new_idx),
    );
}

/// Append `operation`, joining it with the last run if they are of the same
/// kind.
fn push_run(result: &mut Vec<EditOp>, operation: EditOp) {
    match result.last_mut() {
        Some(last) if last.kind() == operation.kind() => last.extend(operation),
        _ => result.push(operation),
    }
}

/// `table[(i, j)]` is the length of the longest common subsequence of
/// `old[i..]` and `new[j..]`. Stored row-major with one extra row and column
/// of zeroes so that `(old.len(), _)` and `(_, new.len())` are valid.
#[derive(Debug)]
struct LcsTable {
    columns: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn new<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let columns = new.len() + 1;
        let mut cells = vec![0; (old.len() + 1) * columns];

        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                cells[i * columns + j] = if old[i] == new[j] {
                    cells[(i + 1) * columns + j + 1] + 1
                } else {
                    cells[(i + 1) * columns + j].max(cells[i * columns + j + 1])
                };
            }
        }

        Self { columns, cells }
    }

    fn lcs_len(&self) -> u32 { self.cells.first().copied().unwrap_or(0) }
}

impl Index<(usize, usize)> for LcsTable {
    type Output = u32;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output { &self.cells[i * self.columns + j] }
}
