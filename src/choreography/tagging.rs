use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tokenizer::token::Token;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenState {
    /// The word also appears in the new text.
    Shared,

    /// The word disappears.
    Removed,

    /// Whitespace, which is never carried over or removed on its own.
    Spacing,
}

/// An old token together with what happens to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: Token,
    pub state: TokenState,
}

impl TaggedToken {
    #[must_use]
    pub fn is_removed(&self) -> bool { self.state == TokenState::Removed }
}

/// Tag the words of `from` by whether their normalised form occurs anywhere
/// among the words of `to`. Position plays no role, a word moving elsewhere
/// is still shared.
#[must_use]
pub fn tag_tokens(from: &[Token], to: &[Token]) -> Vec<TaggedToken> {
    let carried_over: HashSet<&str> = to
        .iter()
        .filter(|token| !token.is_space())
        .map(Token::normalised)
        .collect();

    from.iter()
        .map(|token| {
            let state = if token.is_space() {
                TokenState::Spacing
            } else if carried_over.contains(token.normalised()) {
                TokenState::Shared
            } else {
                TokenState::Removed
            };

            TaggedToken {
                token: token.clone(),
                state,
            }
        })
        .collect()
}
