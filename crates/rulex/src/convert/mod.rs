//! Infix-to-postfix conversion entry points.

mod lexer;
mod reducer;
#[cfg(test)]
pub(crate) mod test_support;

use std::fmt;

use crate::errors::ConvertError;
use crate::postfix::Postfix;
use crate::validator::{AcceptAll, OperandValidator};

/// Convert an infix rule expression into postfix order, accepting every
/// operand name.
///
/// # Errors
/// Returns [`ConvertError::InvalidSyntax`] when parentheses are unbalanced,
/// operators appear where none is allowed, or the operators and operands do
/// not reduce to exactly one value.
///
/// # Examples
/// ```
/// use rulex::convert_to_postfix;
///
/// let postfix = convert_to_postfix("!a & b").expect("well-formed");
/// assert_eq!(postfix.into_strings(), ["a", "!", "b", "&"]);
/// assert!(convert_to_postfix("(a & b").is_err());
/// ```
pub fn convert_to_postfix(expression: &str) -> Result<Postfix, ConvertError> {
    reducer::reduce(expression, &AcceptAll)
}

/// Convert an infix rule expression into postfix order, checking each operand
/// name with `validator`.
///
/// # Errors
/// Returns [`ConvertError::OperandNotRecognized`] for the first operand the
/// validator rejects, and [`ConvertError::InvalidSyntax`] as described for
/// [`convert_to_postfix`].
///
/// # Examples
/// ```
/// use rulex::{ConvertError, convert_to_postfix_with};
///
/// let only_x = |name: &str| name == "x";
/// let err = convert_to_postfix_with("x & y", &only_x).unwrap_err();
/// assert!(matches!(
///     err,
///     ConvertError::OperandNotRecognized { ref operand, .. } if operand == "y"
/// ));
/// ```
pub fn convert_to_postfix_with<V>(
    expression: &str,
    validator: &V,
) -> Result<Postfix, ConvertError>
where
    V: OperandValidator + ?Sized,
{
    reducer::reduce(expression, validator)
}

/// Reusable converter bundling an operand validator.
///
/// A converter holds no per-call state, so one instance can serve any number
/// of conversions, concurrently when its validator is `Sync`.
///
/// # Examples
/// ```
/// use rulex::Converter;
///
/// let converter = Converter::new().with_validator(|name: &str| name.starts_with("is_"));
/// let postfix = converter.convert("is_vip | !is_new").expect("known operands");
/// assert_eq!(postfix.to_string(), "is_vip is_new ! |");
/// assert!(converter.convert("is_vip & guest").is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct Converter<V = AcceptAll> {
    validator: V,
}

impl Converter {
    /// Create a converter that accepts every operand name.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validator: AcceptAll,
        }
    }
}

impl<V: OperandValidator> Converter<V> {
    /// Replace the operand validator.
    #[must_use]
    pub fn with_validator<W: OperandValidator>(self, validator: W) -> Converter<W> {
        Converter { validator }
    }

    /// Borrow the operand validator.
    #[must_use]
    pub const fn validator(&self) -> &V {
        &self.validator
    }

    /// Convert `expression` into postfix order.
    ///
    /// # Errors
    /// See [`convert_to_postfix_with`].
    pub fn convert(&self, expression: &str) -> Result<Postfix, ConvertError> {
        reducer::reduce(expression, &self.validator)
    }
}

impl<V> fmt::Debug for Converter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").finish_non_exhaustive()
    }
}
