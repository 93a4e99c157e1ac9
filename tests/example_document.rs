use pretty_assertions::assert_eq;
use serde::Deserialize;
use text_transition::{
    BuiltinTokenizer, EditKind, EditOp, IdGenerator, Token, TokenState, tag_tokens,
};

/// `ExampleDocument` is a test case for a single transition from one text to
/// another.
///
/// `diff` is the expected edit script with deletions written as `{-...-}` and
/// insertions as `{+...+}`. `shared` and `removed` list the old words in the
/// order they appear in `from`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExampleDocument {
    from: String,
    to: String,
    diff: String,

    #[serde(default)]
    shared: Vec<String>,

    #[serde(default)]
    removed: Vec<String>,

    /// `word` unless specified.
    #[serde(default)]
    tokenizer: Option<String>,
}

impl ExampleDocument {
    #[must_use]
    pub fn from(&self) -> &str { &self.from }

    #[must_use]
    pub fn to(&self) -> &str { &self.to }

    /// # Panics
    ///
    /// If the document names an unknown tokenizer.
    #[must_use]
    pub fn tokenizer(&self) -> BuiltinTokenizer {
        match self.tokenizer.as_deref() {
            None | Some("word") => BuiltinTokenizer::Word,
            Some("punctuation") => BuiltinTokenizer::Punctuation,
            Some(other) => panic!("Unknown tokenizer '{other}'"),
        }
    }

    /// Tokens of `from` and `to`, with ids from the same generator.
    #[must_use]
    pub fn tokens(&self) -> (Vec<Token>, Vec<Token>) {
        let tokenizer = self.tokenizer();
        let mut ids = IdGenerator::new();

        let from = (*tokenizer)(&self.from, &mut ids);
        let to = (*tokenizer)(&self.to, &mut ids);

        (from, to)
    }

    /// Asserts that the edit script matches the expected `diff`.
    ///
    /// # Panics
    ///
    /// If the rendered operations differ from the expected diff.
    pub fn assert_diff(&self, operations: &[EditOp]) {
        assert_eq!(
            Self::render(operations),
            self.diff,
            "Unexpected diff from '{}' to '{}'",
            self.from,
            self.to
        );
    }

    /// Asserts that the old words are tagged as expected.
    ///
    /// # Panics
    ///
    /// If the shared or removed words differ from the expected ones.
    pub fn assert_tags(&self) {
        let (from, to) = self.tokens();
        let tagged = tag_tokens(&from, &to);

        let with_state = |state: TokenState| -> Vec<String> {
            tagged
                .iter()
                .filter(|tagged| tagged.state == state)
                .map(|tagged| tagged.token.original().to_owned())
                .collect()
        };

        assert_eq!(with_state(TokenState::Shared), self.shared, "shared words of '{}'", self.from);
        assert_eq!(with_state(TokenState::Removed), self.removed, "removed words of '{}'", self.from);
    }

    fn render(operations: &[EditOp]) -> String {
        operations
            .iter()
            .map(|operation| match operation.kind() {
                EditKind::Equal => operation.text(),
                EditKind::Delete => format!("{{-{}-}}", operation.text()),
                EditKind::Insert => format!("{{+{}+}}", operation.text()),
            })
            .collect()
    }
}
