use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use token::Token;
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::utils::id_generator::IdGenerator;

pub mod punctuation_tokenizer;
pub mod token;
pub mod word_tokenizer;

/// A tokenizer takes a string and returns a list of tokens whose original
/// texts concatenate back to the input. Ids are drawn from the given
/// generator.
pub type Tokenizer = dyn Fn(&str, &mut IdGenerator) -> Vec<Token>;

/// The tokenizers shipped with the crate, selectable from configuration.
///
/// Dereferences to the tokenizer function itself:
///
/// ```
/// use text_transition::{BuiltinTokenizer, IdGenerator};
///
/// let tokens = (*BuiltinTokenizer::Word)("hello world", &mut IdGenerator::new());
/// assert_eq!(tokens.len(), 3);
/// ```
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTokenizer {
    /// Whitespace runs and everything in between.
    Word,

    /// Like `Word`, but punctuation marks are split off into their own tokens.
    Punctuation,
}

impl Default for BuiltinTokenizer {
    fn default() -> Self { BuiltinTokenizer::Word }
}

impl Deref for BuiltinTokenizer {
    type Target = Tokenizer;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinTokenizer::Word => &word_tokenizer::word_tokenizer,
            BuiltinTokenizer::Punctuation => &punctuation_tokenizer::punctuation_tokenizer,
        }
    }
}

/// Concatenate the original texts of `tokens`.
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String { tokens.iter().map(Token::original).collect() }
