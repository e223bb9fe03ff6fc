//! Postfix token sequences and their arity check.

use std::fmt;
use std::ops::Deref;

use crate::operator::Operator;

/// A single element of a postfix expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostfixToken {
    /// Operand name copied verbatim from the input.
    Operand(String),
    /// Binary conjunction.
    And,
    /// Binary disjunction.
    Or,
    /// Unary negation.
    Not,
}

impl PostfixToken {
    /// Convert a logical operator into its postfix token.
    ///
    /// Grouping symbols and the sentinel never reach postfix output and yield
    /// `None`.
    #[must_use]
    pub const fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::And => Some(Self::And),
            Operator::Or => Some(Self::Or),
            Operator::Not => Some(Self::Not),
            Operator::OpenParen | Operator::CloseParen | Operator::End => None,
        }
    }

    /// Render the token as it appears in source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulex::PostfixToken;
    ///
    /// assert_eq!(PostfixToken::And.as_str(), "&");
    /// assert_eq!(PostfixToken::Operand("vip".into()).as_str(), "vip");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Operand(name) => name,
            Self::And => "&",
            Self::Or => "|",
            Self::Not => "!",
        }
    }

    /// Number of operands the token pops from an evaluation stack.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Operand(_) => 0,
            Self::Not => 1,
            Self::And | Self::Or => 2,
        }
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A converted expression in postfix (reverse Polish) order.
///
/// # Examples
///
/// ```
/// use rulex::convert_to_postfix;
///
/// let postfix = convert_to_postfix("a & (b | c)").expect("well-formed");
/// assert_eq!(postfix.to_string(), "a b c | &");
/// assert_eq!(postfix.into_strings(), ["a", "b", "c", "|", "&"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix(Vec<PostfixToken>);

impl Postfix {
    pub(crate) fn new(tokens: Vec<PostfixToken>) -> Self {
        Self(tokens)
    }

    /// Provides shared access to the tokens.
    #[must_use]
    pub fn as_slice(&self) -> &[PostfixToken] {
        &self.0
    }

    /// Returns an iterator over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, PostfixToken> {
        self.0.iter()
    }

    /// Render every token as a string, keeping the postfix order.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|token| token.as_str().to_owned()).collect()
    }

    /// Consume the expression, rendering every token as a string.
    #[must_use]
    pub fn into_strings(self) -> Vec<String> {
        self.0
            .into_iter()
            .map(|token| match token {
                PostfixToken::Operand(name) => name,
                other => other.as_str().to_owned(),
            })
            .collect()
    }

    /// Consumes the expression, returning the underlying tokens.
    #[must_use]
    pub fn into_inner(self) -> Vec<PostfixToken> {
        self.0
    }
}

impl Deref for Postfix {
    type Target = [PostfixToken];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Postfix {
    type Item = PostfixToken;
    type IntoIter = std::vec::IntoIter<PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a PostfixToken;
    type IntoIter = std::slice::Iter<'a, PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}

/// Check that a postfix sequence evaluates to exactly one value.
///
/// Simulates the depth of an evaluation stack: operands push one value, `!`
/// pops one and pushes one, `&` and `|` pop two and push one. The sequence is
/// balanced when no operator runs short of operands and exactly one value
/// remains.
///
/// # Examples
///
/// ```
/// use rulex::{PostfixToken, is_balanced};
///
/// let a = || PostfixToken::Operand("a".into());
/// assert!(is_balanced(&[a(), PostfixToken::Not]));
/// assert!(!is_balanced(&[a(), a()]));
/// assert!(!is_balanced(&[]));
/// ```
#[must_use]
pub fn is_balanced(tokens: &[PostfixToken]) -> bool {
    let mut depth = 0usize;
    for token in tokens {
        match token.arity() {
            0 => depth += 1,
            arity => {
                if depth < arity {
                    return false;
                }
                depth = depth - arity + 1;
            }
        }
    }
    depth == 1
}
