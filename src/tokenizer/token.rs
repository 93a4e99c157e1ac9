#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a token stands for. The word tokenizer only emits `Word` and `Space`,
/// the punctuation tokenizer emits all four.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    CompoundWord,
    Punctuation,
    Space,
}

/// An indivisible run of the source text.
///
/// A token consists of the original substring, which is what gets diffed and
/// rendered, and a normalised form that is used for deciding whether a word is
/// carried over from one text to the next.
///
/// The `id` is only meant for keeping rendering keys stable, it never takes
/// part in comparisons.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Token {
    id: usize,

    /// The exact substring of the tokenized text.
    original: String,

    /// Lower-cased form for words, the whitespace itself for spaces.
    normalised: String,

    kind: TokenKind,
}

impl Token {
    #[must_use]
    pub fn new(id: usize, original: String, normalised: String, kind: TokenKind) -> Self {
        Token {
            id,
            original,
            normalised,
            kind,
        }
    }

    /// Create a `Word` or `Space` token from a run that is either entirely
    /// whitespace or contains none.
    #[must_use]
    pub fn classify(id: usize, run: &str) -> Self {
        if is_space(run) {
            Token::new(id, run.to_owned(), run.to_owned(), TokenKind::Space)
        } else {
            Token::new(id, run.to_owned(), run.to_lowercase(), TokenKind::Word)
        }
    }

    #[must_use]
    pub fn id(&self) -> usize { self.id }

    #[must_use]
    pub fn original(&self) -> &str { &self.original }

    #[must_use]
    pub fn normalised(&self) -> &str { &self.normalised }

    #[must_use]
    pub fn kind(&self) -> TokenKind { self.kind }

    #[must_use]
    pub fn is_space(&self) -> bool { self.kind == TokenKind::Space }
}

/// Tokens are equal if their original text is, regardless of their ids.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool { self.original == other.original }
}

impl Eq for Token {}

/// Whether `text` is a non-empty run of whitespace.
#[must_use]
pub fn is_space(text: &str) -> bool { !text.is_empty() && text.chars().all(char::is_whitespace) }
