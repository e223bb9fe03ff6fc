//! Tokenizer splitting expression text into operators and operand names.

use crate::operator::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Operator(Operator),
    Operand(String),
}

/// Scan the token starting at `pos`, returning it with the position just
/// past it.
///
/// Whitespace is skipped before a token and ends an operand run, so it never
/// appears in an operand name. Once the input is exhausted the sentinel
/// [`Operator::End`] is returned; every call advances at least one position.
pub(crate) fn next_token(chars: &[char], pos: usize) -> (Token, usize) {
    let start = chars
        .iter()
        .skip(pos)
        .position(|ch| !ch.is_whitespace())
        .map_or(chars.len(), |offset| pos + offset);

    let Some(&first) = chars.get(start) else {
        return (Token::Operator(Operator::End), start.max(pos) + 1);
    };
    if let Some(op) = Operator::from_symbol(first) {
        return (Token::Operator(op), start + 1);
    }

    let name: String = chars
        .iter()
        .skip(start)
        .take_while(|&&ch| Operator::from_symbol(ch).is_none() && !ch.is_whitespace())
        .collect();
    let end = start + name.chars().count();
    (Token::Operand(name), end)
}
