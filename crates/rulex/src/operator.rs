//! The closed operator alphabet understood by the converter.
//!
//! Besides the three logical operators and the two grouping symbols, the
//! alphabet contains [`Operator::End`], a sentinel that the tokenizer produces
//! once the input is exhausted. No input character ever maps to it.

use std::fmt;

/// Operator symbol recognised in rule expressions.
///
/// # Examples
///
/// ```
/// use rulex::Operator;
///
/// assert_eq!(Operator::from_symbol('&'), Some(Operator::And));
/// assert_eq!(Operator::from_symbol('x'), None);
/// assert_eq!(Operator::End.symbol(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Binary conjunction, written `&`.
    And,
    /// Binary disjunction, written `|`.
    Or,
    /// Unary negation, written `!`.
    Not,
    /// Opening parenthesis.
    OpenParen,
    /// Closing parenthesis.
    CloseParen,
    /// End-of-input sentinel.
    End,
}

impl Operator {
    /// Every member of the alphabet in table order.
    pub const ALL: [Self; 6] = [
        Self::And,
        Self::Or,
        Self::Not,
        Self::OpenParen,
        Self::CloseParen,
        Self::End,
    ];

    /// Map a source character onto its operator, if it is one.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '&' => Some(Self::And),
            '|' => Some(Self::Or),
            '!' => Some(Self::Not),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            _ => None,
        }
    }

    /// Return the source character for this operator.
    ///
    /// The sentinel has no textual form and yields `None`.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::And => Some('&'),
            Self::Or => Some('|'),
            Self::Not => Some('!'),
            Self::OpenParen => Some('('),
            Self::CloseParen => Some(')'),
            Self::End => None,
        }
    }

    /// Whether the operator survives into postfix output.
    ///
    /// ```
    /// use rulex::Operator;
    ///
    /// assert!(Operator::Not.is_logical());
    /// assert!(!Operator::OpenParen.is_logical());
    /// ```
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Not)
    }

    /// Row/column used by the relation table.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::And => 0,
            Self::Or => 1,
            Self::Not => 2,
            Self::OpenParen => 3,
            Self::CloseParen => 4,
            Self::End => 5,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(ch) => write!(f, "{ch}"),
            None => f.write_str("end of input"),
        }
    }
}
