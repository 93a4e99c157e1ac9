use super::token::{Token, TokenKind};
use crate::utils::id_generator::IdGenerator;

const PUNCTUATION: [char; 7] = ['.', ',', '!', '?', ';', ':', '-'];

/// Splits text into whitespace runs, words and single punctuation marks.
///
/// A hyphen between two alphanumeric characters is part of a compound word,
/// every other punctuation mark becomes its own token. Words are normalised by
/// lower-casing and dropping non-alphanumeric characters so that `"Don't"`
/// and `"dont"` are considered the same word.
///
/// ## Example
///
/// ```not_rust
/// "Well-known, right?" -> ["Well-known", ",", " ", "right", "?"]
/// ```
pub fn punctuation_tokenizer(text: &str, ids: &mut IdGenerator) -> Vec<Token> {
    let mut result = Vec::new();
    let mut run_start = 0;
    let mut run_is_space = false;

    let chars: Vec<(usize, char)> = text.char_indices().collect();

    for (position, &(i, c)) in chars.iter().enumerate() {
        if c.is_whitespace() {
            if !run_is_space {
                push_run(&mut result, text, run_start..i, ids);
                run_start = i;
            }
            run_is_space = true;
            continue;
        }

        let previous = position.checked_sub(1).map(|p| chars[p].1);
        let next = chars.get(position + 1).map(|&(_, c)| c);
        if PUNCTUATION.contains(&c) && !joins_compound(c, previous, next) {
            push_run(&mut result, text, run_start..i, ids);
            let end = i + c.len_utf8();
            push_run(&mut result, text, i..end, ids);
            run_start = end;
            run_is_space = false;
            continue;
        }

        if run_is_space {
            push_run(&mut result, text, run_start..i, ids);
            run_start = i;
        }
        run_is_space = false;
    }

    push_run(&mut result, text, run_start..text.len(), ids);

    result
}

fn joins_compound(c: char, previous: Option<char>, next: Option<char>) -> bool {
    c == '-'
        && previous.is_some_and(char::is_alphanumeric)
        && next.is_some_and(char::is_alphanumeric)
}

fn push_run(
    result: &mut Vec<Token>,
    text: &str,
    range: std::ops::Range<usize>,
    ids: &mut IdGenerator,
) {
    if range.is_empty() {
        return;
    }

    let run = &text[range];
    let id = ids.next_id();

    let token = if run.chars().all(char::is_whitespace) {
        Token::new(id, run.to_owned(), run.to_owned(), TokenKind::Space)
    } else if run.chars().count() == 1 && run.chars().all(|c| PUNCTUATION.contains(&c)) {
        Token::new(id, run.to_owned(), run.to_owned(), TokenKind::Punctuation)
    } else {
        let kind = if run.contains('-') {
            TokenKind::CompoundWord
        } else {
            TokenKind::Word
        };
        Token::new(id, run.to_owned(), normalise_word(run), kind)
    };

    result.push(token);
}

fn normalise_word(word: &str) -> String {
    let normalised: String = word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    if normalised.is_empty() {
        // symbols only, e.g. "&" or "→"
        word.to_lowercase()
    } else {
        normalised
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn originals(text: &str) -> Vec<String> {
        punctuation_tokenizer(text, &mut IdGenerator::new())
            .iter()
            .map(|token| token.original().to_owned())
            .collect()
    }

    #[test]
    fn test_splits_punctuation() {
        assert_eq!(
            originals("Well-known, right?"),
            vec!["Well-known", ",", " ", "right", "?"]
        );
        assert_eq!(originals("wait... what"), vec!["wait", ".", ".", ".", " ", "what"]);
        assert_eq!(originals(""), Vec::<String>::new());
    }

    #[test]
    fn test_free_standing_hyphen_is_punctuation() {
        assert_eq!(originals("a - b"), vec!["a", " ", "-", " ", "b"]);
        assert_eq!(originals("-start"), vec!["-", "start"]);
        assert_eq!(originals("end-"), vec!["end", "-"]);
    }

    #[test]
    fn test_kinds_and_normalisation() {
        let tokens = punctuation_tokenizer("Don't stop: real-time!", &mut IdGenerator::new());
        let summary: Vec<(&str, &str, TokenKind)> = tokens
            .iter()
            .map(|token| (token.original(), token.normalised(), token.kind()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Don't", "dont", TokenKind::Word),
                (" ", " ", TokenKind::Space),
                ("stop", "stop", TokenKind::Word),
                (":", ":", TokenKind::Punctuation),
                (" ", " ", TokenKind::Space),
                ("real-time", "realtime", TokenKind::CompoundWord),
                ("!", "!", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn test_symbol_only_words_keep_their_text() {
        let tokens = punctuation_tokenizer("A & B", &mut IdGenerator::new());
        assert_eq!(tokens[2].normalised(), "&");
    }

    #[test]
    fn test_compatibility_forms_are_not_folded() {
        let tokens = punctuation_tokenizer("\u{ff21}\u{ff22} AB", &mut IdGenerator::new());

        assert_eq!(tokens[0].normalised(), "\u{ff41}\u{ff42}");
        assert_eq!(tokens[2].normalised(), "ab");
    }

    #[test]
    fn test_is_lossless() {
        let text = "  Hello, world -- it's  a well-known fact!\n";
        assert_eq!(originals(text).concat(), text);
    }
}
