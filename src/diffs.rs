pub mod edit_op;
pub mod lcs;

use edit_op::EditOp;

use crate::tokenizer::token::Token;

/// Diff two token sequences by their original texts.
#[must_use]
pub fn diff_tokens(old: &[Token], new: &[Token]) -> Vec<EditOp> {
    let old: Vec<&str> = old.iter().map(Token::original).collect();
    let new: Vec<&str> = new.iter().map(Token::original).collect();

    lcs::diff(&old, &new)
}
