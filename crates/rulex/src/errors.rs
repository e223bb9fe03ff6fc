//! Error types surfaced by expression conversion.

use std::fmt;
use thiserror::Error;

use crate::operator::Operator;

/// Details of a syntax failure.
///
/// # Examples
/// ```
/// use rulex::{Operator, SyntaxErrorInfo};
/// let info = SyntaxErrorInfo::new("no matching operator", Some(Operator::CloseParen), "a)");
/// assert_eq!(info.operator, Some(Operator::CloseParen));
/// assert_eq!(info.expression, "a)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Short description of what went wrong.
    pub message: &'static str,
    /// Operator that triggered the failure, when one did.
    pub operator: Option<Operator>,
    /// The expression exactly as the caller supplied it.
    pub expression: String,
}

impl SyntaxErrorInfo {
    /// Create a new syntax failure description.
    ///
    /// # Examples
    /// ```
    /// use rulex::SyntaxErrorInfo;
    /// let info = SyntaxErrorInfo::new("oops", None, "a b");
    /// assert_eq!(info.message, "oops");
    /// ```
    #[must_use]
    pub fn new(
        message: &'static str,
        operator: Option<Operator>,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            message,
            operator,
            expression: expression.into(),
        }
    }
}

impl fmt::Display for SyntaxErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Some(op) => write!(
                f,
                "invalid syntax, {} '{}', expr: {}",
                self.message, op, self.expression
            ),
            None => write!(f, "invalid syntax, {}, expr: {}", self.message, self.expression),
        }
    }
}

/// Errors surfaced while converting an expression to postfix form.
///
/// Both kinds are terminal: conversion stops at the first failure.
///
/// # Examples
/// ```
/// use rulex::{ConvertError, SyntaxErrorInfo};
/// let info = SyntaxErrorInfo::new("oops", None, "a b");
/// let err = ConvertError::InvalidSyntax(info.clone());
/// assert_eq!(err.to_string(), info.to_string());
/// assert_eq!(err.expression(), "a b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Malformed operator sequence, unbalanced parentheses, or an operand
    /// count that does not reduce to a single value.
    #[error("{0}")]
    InvalidSyntax(SyntaxErrorInfo),
    /// The operand validator rejected a name.
    #[error("condition not recognized: '{operand}', expr: {expression}")]
    OperandNotRecognized {
        /// The rejected operand name.
        operand: String,
        /// The expression exactly as the caller supplied it.
        expression: String,
    },
}

impl ConvertError {
    /// Return the original expression carried by the error.
    #[must_use]
    pub fn expression(&self) -> &str {
        match self {
            Self::InvalidSyntax(info) => &info.expression,
            Self::OperandNotRecognized { expression, .. } => expression,
        }
    }
}

pub(crate) const NO_MATCHING_OPERATOR: &str = "no matching operator for";
pub(crate) const ARITY_MISMATCH: &str =
    "mismatch between the number of operators and operands";

pub(crate) fn syntax_error(
    message: &'static str,
    operator: Option<Operator>,
    expression: &str,
) -> ConvertError {
    ConvertError::InvalidSyntax(SyntaxErrorInfo::new(message, operator, expression))
}
