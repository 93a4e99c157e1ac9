use super::{spacer::Spacer, tagging::TaggedToken};
use crate::diffs::edit_op::{EditKind, EditOp};

/// A node of the rendered transition before any timing is assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Static(TaggedToken),
    Collapse(Vec<TaggedToken>),
    Grow(Spacer),
}

/// Arrange the old tokens and the spacers in display order.
///
/// Maximal runs of removed words collapse together. Whitespace next to a
/// removed word joins its group when the word on the other side is removed
/// too, or when the whitespace itself is deleted by the edit script.
/// Spacers are placed right after the old token they are anchored to.
#[must_use]
pub fn layout(tagged: Vec<TaggedToken>, operations: &[EditOp], spacers: Vec<Spacer>) -> Vec<LayoutNode> {
    let collapsing = collapsing_tokens(&tagged, operations);

    let mut result = Vec::with_capacity(tagged.len() + spacers.len());
    let mut spacers = spacers.into_iter().peekable();
    let mut group: Vec<TaggedToken> = Vec::new();

    while let Some(spacer) = spacers.next_if(|spacer| spacer.after_index().is_none()) {
        result.push(LayoutNode::Grow(spacer));
    }

    for (index, token) in tagged.into_iter().enumerate() {
        if collapsing[index] {
            group.push(token);
        } else {
            result.push(LayoutNode::Static(token));
        }

        let group_continues = collapsing.get(index + 1).copied().unwrap_or(false);
        if !group.is_empty() && !group_continues {
            result.push(LayoutNode::Collapse(std::mem::take(&mut group)));
        }

        let next_is_spacer = spacers
            .peek()
            .is_some_and(|spacer| spacer.is_anchored_up_to(index));
        if next_is_spacer && !group.is_empty() {
            // a spacer in the middle of a removed run splits it
            result.push(LayoutNode::Collapse(std::mem::take(&mut group)));
        }

        while let Some(spacer) = spacers.next_if(|spacer| spacer.is_anchored_up_to(index)) {
            result.push(LayoutNode::Grow(spacer));
        }
    }

    result.extend(spacers.map(LayoutNode::Grow));

    result
}

fn collapsing_tokens(tagged: &[TaggedToken], operations: &[EditOp]) -> Vec<bool> {
    let deleted = deleted_indices(operations, tagged.len());

    (0..tagged.len())
        .map(|index| {
            if tagged[index].token.is_space() {
                let left = index
                    .checked_sub(1)
                    .is_some_and(|left| tagged[left].is_removed());
                let right = tagged.get(index + 1).is_some_and(TaggedToken::is_removed);

                (left && right) || ((left || right) && deleted[index])
            } else {
                tagged[index].is_removed()
            }
        })
        .collect()
}

fn deleted_indices(operations: &[EditOp], old_len: usize) -> Vec<bool> {
    let mut result = vec![false; old_len];

    for operation in operations
        .iter()
        .filter(|operation| operation.kind() == EditKind::Delete)
    {
        for index in operation.old_range() {
            if let Some(deleted) = result.get_mut(index) {
                *deleted = true;
            }
        }
    }

    result
}
