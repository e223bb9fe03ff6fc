//! Boolean rule expressions rewritten into postfix (reverse Polish) order.
//!
//! Expressions combine operand names with `&`, `|`, `!` and parentheses. The
//! converter is a small operator-precedence parser: a fixed relation table
//! decides, for each pair of adjacent operators, whether to shift, reduce, or
//! match them, so the resulting token sequence can be evaluated with a single
//! stack. Operand names are never interpreted; callers may supply an
//! [`OperandValidator`] to reject unknown ones.
//!
//! ```
//! use rulex::convert_to_postfix;
//!
//! let postfix = convert_to_postfix("vip & (new_user | !churned)").expect("well-formed");
//! assert_eq!(postfix.to_string(), "vip new_user churned ! | &");
//! ```

mod convert;
mod errors;
mod operator;
mod postfix;
mod relation;
mod validator;

pub use convert::{Converter, convert_to_postfix, convert_to_postfix_with};
pub use errors::{ConvertError, SyntaxErrorInfo};
pub use operator::Operator;
pub use postfix::{Postfix, PostfixToken, is_balanced};
pub use relation::{Relation, relation};
pub use validator::{AcceptAll, OperandValidator};
