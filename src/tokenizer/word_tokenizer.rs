use super::token::Token;
use crate::utils::id_generator::IdGenerator;

/// Splits text on word boundaries, creating tokens of alternating words and
/// whitespace. Every character ends up in exactly one token.
///
/// ## Example
///
/// ```not_rust
/// "Hi  there!" -> ["Hi", "  ", "there!"]
/// ```
pub fn word_tokenizer(text: &str, ids: &mut IdGenerator) -> Vec<Token> {
    split_runs(text)
        .into_iter()
        .map(|run| Token::classify(ids.next_id(), run))
        .collect()
}

/// Split `text` into maximal runs of whitespace and non-whitespace
/// characters without allocating tokens.
#[must_use]
pub fn split_runs(text: &str) -> Vec<&str> {
    let mut result = Vec::new();

    let mut previous_boundary_index = 0;
    let mut previous_char_is_whitespace = text.chars().next().is_none_or(char::is_whitespace);

    for (i, c) in text.char_indices() {
        let is_current_char_whitespace = c.is_whitespace();
        if previous_char_is_whitespace != is_current_char_whitespace {
            result.push(&text[previous_boundary_index..i]);
            previous_boundary_index = i;
        }

        previous_char_is_whitespace = is_current_char_whitespace;
    }

    if previous_boundary_index < text.len() {
        result.push(&text[previous_boundary_index..]);
    }

    result
}
