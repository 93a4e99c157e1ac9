#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::measure::{TextMeasurer, measure_width};
use crate::{
    diffs::edit_op::{EditKind, EditOp},
    tokenizer::token::is_space,
    utils::id_generator::IdGenerator,
};

/// How insertions are cut into spacers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacerLayout {
    /// One spacer per inserted run.
    Whole,

    /// Every word of an inserted run (with the whitespace following it) gets
    /// its own spacer, so that long insertions can wrap between lines.
    WordChunks,
}

impl Default for SpacerLayout {
    fn default() -> Self { SpacerLayout::WordChunks }
}

/// An inserted span of new content, animated by growing from zero to its
/// measured width.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Spacer {
    id: usize,

    /// The old token after which the spacer is rendered, `None` if it comes
    /// before every old token.
    after_index: Option<usize>,

    /// Index of the first inserted token in the new sequence.
    new_start: usize,

    items: Vec<String>,
    target_width: f64,
}

impl Spacer {
    #[must_use]
    pub fn id(&self) -> usize { self.id }

    #[must_use]
    pub fn after_index(&self) -> Option<usize> { self.after_index }

    #[must_use]
    pub fn new_start(&self) -> usize { self.new_start }

    #[must_use]
    pub fn items(&self) -> &[String] { &self.items }

    #[must_use]
    pub fn target_width(&self) -> f64 { self.target_width }

    /// The text revealed inside the spacer.
    #[must_use]
    pub fn text(&self) -> String { join_items(&self.items) }

    /// Whether the spacer belongs in front of or right after the old token at
    /// `index`.
    #[must_use]
    pub fn is_anchored_up_to(&self, index: usize) -> bool {
        self.after_index.is_none_or(|after| after <= index)
    }

    /// Measure the spacer's text again, e.g. after the font changed.
    pub fn remeasure<M>(&mut self, measurer: &M, fallback_char_width: f64)
    where
        M: TextMeasurer + ?Sized,
    {
        self.target_width = measure_width(measurer, &self.text(), fallback_char_width);
    }
}

/// Derive the spacers of an edit script. Only `Insert` runs produce spacers,
/// in the order they appear in the script.
pub fn derive_spacers<M>(
    operations: &[EditOp],
    layout: SpacerLayout,
    measurer: &M,
    fallback_char_width: f64,
    ids: &mut IdGenerator,
) -> Vec<Spacer>
where
    M: TextMeasurer + ?Sized,
{
    let mut result = Vec::new();

    for operation in operations
        .iter()
        .filter(|operation| operation.kind() == EditKind::Insert)
    {
        let after_index = operation.old_start().checked_sub(1);

        let chunks = match layout {
            SpacerLayout::Whole => vec![Chunk {
                offset: 0,
                items: operation.items(),
            }],
            SpacerLayout::WordChunks => word_chunks(operation.items()),
        };

        for chunk in chunks {
            let mut spacer = Spacer {
                id: ids.next_id(),
                after_index,
                new_start: operation.new_start() + chunk.offset,
                items: chunk.items.to_vec(),
                target_width: 0.0,
            };
            spacer.remeasure(measurer, fallback_char_width);

            result.push(spacer);
        }
    }

    result
}

#[derive(Debug)]
struct Chunk<'a> {
    offset: usize,
    items: &'a [String],
}

fn word_chunks(items: &[String]) -> Vec<Chunk<'_>> {
    let mut result = Vec::new();
    let mut start = 0;

    for (i, item) in items.iter().enumerate() {
        if is_space(item) {
            result.push(Chunk {
                offset: start,
                items: &items[start..=i],
            });
            start = i + 1;
        } else if start < i {
            // punctuation right after a word starts a chunk of its own
            result.push(Chunk {
                offset: start,
                items: &items[start..i],
            });
            start = i;
        }
    }

    if start < items.len() {
        result.push(Chunk {
            offset: start,
            items: &items[start..],
        });
    }

    result
}

/// Concatenate tokens, putting a single space between two neighbouring
/// tokens that both contain letters or digits.
#[must_use]
pub fn join_items<S: AsRef<str>>(items: &[S]) -> String {
    let mut result = String::new();
    let mut previous_is_word = false;

    for item in items {
        let item = item.as_ref();
        let is_word = item.chars().any(char::is_alphanumeric);

        if previous_is_word && is_word {
            result.push(' ');
        }
        result.push_str(item);

        previous_is_word = is_word;
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::choreography::measure::MonospaceMeasurer;

    fn insert(items: &[&str], old_start: usize, new_start: usize) -> EditOp {
        EditOp::new(
            EditKind::Insert,
            items.iter().map(|&item| item.to_owned()).collect(),
            old_start,
            new_start,
        )
    }

    fn summary(spacers: &[Spacer]) -> Vec<(Option<usize>, usize, String, f64)> {
        spacers
            .iter()
            .map(|spacer| {
                (
                    spacer.after_index(),
                    spacer.new_start(),
                    spacer.text(),
                    spacer.target_width(),
                )
            })
            .collect()
    }

    #[test]
    fn test_join_items() {
        assert_eq!(join_items(&["brown", " "]), "brown ");
        assert_eq!(join_items(&["big", "bad"]), "big bad");
        assert_eq!(join_items(&["wait", ",", "what"]), "wait,what");
        assert_eq!(join_items::<&str>(&[]), "");
    }

    #[test]
    fn test_whole_layout() {
        let operations = vec![
            EditOp::new(EditKind::Equal, vec!["Memory".to_owned()], 0, 0),
            insert(&[" ", "layer", " ", "stack"], 1, 1),
        ];

        let spacers = derive_spacers(
            &operations,
            SpacerLayout::Whole,
            &MonospaceMeasurer::new(10.0),
            12.0,
            &mut IdGenerator::new(),
        );

        assert_eq!(
            summary(&spacers),
            vec![(Some(0), 1, " layer stack".to_owned(), 120.0)]
        );
    }

    #[test]
    fn test_word_chunks_layout() {
        let operations = vec![insert(&["graph", " ", "memory", " ", "layer"], 0, 0)];

        let spacers = derive_spacers(
            &operations,
            SpacerLayout::WordChunks,
            &MonospaceMeasurer::new(10.0),
            12.0,
            &mut IdGenerator::new(),
        );

        assert_eq!(
            summary(&spacers),
            vec![
                (None, 0, "graph ".to_owned(), 60.0),
                (None, 2, "memory ".to_owned(), 70.0),
                (None, 4, "layer".to_owned(), 50.0),
            ]
        );
        assert_eq!(
            spacers.iter().map(Spacer::id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_word_chunks_split_before_punctuation() {
        let operations = vec![insert(&["hi", ",", " ", "there"], 3, 3)];

        let spacers = derive_spacers(
            &operations,
            SpacerLayout::WordChunks,
            &MonospaceMeasurer::new(10.0),
            12.0,
            &mut IdGenerator::new(),
        );

        assert_eq!(
            summary(&spacers),
            vec![
                (Some(2), 3, "hi".to_owned(), 20.0),
                (Some(2), 4, ", ".to_owned(), 20.0),
                (Some(2), 6, "there".to_owned(), 50.0),
            ]
        );
    }

    #[test]
    fn test_only_inserts_produce_spacers() {
        let operations = vec![
            EditOp::new(EditKind::Delete, vec!["hello".to_owned()], 0, 0),
            insert(&["goodbye"], 1, 0),
            EditOp::new(EditKind::Equal, vec![" ".to_owned(), "world".to_owned()], 1, 1),
        ];

        let spacers = derive_spacers(
            &operations,
            SpacerLayout::WordChunks,
            &MonospaceMeasurer::new(10.0),
            12.0,
            &mut IdGenerator::new(),
        );

        assert_eq!(
            summary(&spacers),
            vec![(Some(0), 0, "goodbye".to_owned(), 70.0)]
        );
        assert!(spacers[0].is_anchored_up_to(0));
    }

    #[test]
    fn test_word_chunks_add_up_to_the_inserted_text() {
        let operations = vec![
            EditOp::new(EditKind::Equal, vec!["x".to_owned()], 0, 0),
            insert(&[" ", "hi", ",", " ", "there"], 1, 1),
        ];
        let measurer = MonospaceMeasurer::new(10.0);

        let chunks = derive_spacers(
            &operations,
            SpacerLayout::WordChunks,
            &measurer,
            12.0,
            &mut IdGenerator::new(),
        );
        let whole = derive_spacers(
            &operations,
            SpacerLayout::Whole,
            &measurer,
            12.0,
            &mut IdGenerator::new(),
        );

        assert_eq!(chunks.iter().map(Spacer::text).collect::<String>(), " hi, there");
        assert_eq!(
            chunks.iter().map(Spacer::target_width).sum::<f64>(),
            whole[0].target_width()
        );
        assert_eq!(whole[0].target_width(), 100.0);
    }

    #[test]
    fn test_remeasure() {
        let mut spacers = derive_spacers(
            &[insert(&["hi", ","], 0, 0)],
            SpacerLayout::WordChunks,
            &MonospaceMeasurer::new(10.0),
            12.0,
            &mut IdGenerator::new(),
        );

        spacers[0].remeasure(&MonospaceMeasurer::new(20.0), 12.0);
        assert_eq!(spacers[0].target_width(), 40.0);

        spacers[1].remeasure(&|_: &str| -> Option<f64> { None }, 12.0);
        assert_eq!(spacers[1].target_width(), 12.0);
    }

    #[test]
    fn test_leading_spacer_is_anchored_everywhere() {
        let spacers = derive_spacers(
            &[insert(&["new"], 0, 0)],
            SpacerLayout::Whole,
            &MonospaceMeasurer::new(10.0),
            12.0,
            &mut IdGenerator::new(),
        );

        assert_eq!(spacers[0].after_index(), None);
        assert!(spacers[0].is_anchored_up_to(0));
    }
}
