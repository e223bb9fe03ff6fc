//! Operator-precedence relation between adjacent operators.
//!
//! The table is keyed by the operator on top of the stack (row) and the
//! incoming operator (column). It encodes precedence, left associativity of
//! `&` and `|`, the tighter binding of `!`, and parenthesis nesting.

use crate::operator::Operator;

/// Action the reduction engine takes for a pair of operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Push the incoming operator; it must wait for its right operand.
    Shift,
    /// Emit the stack top first, then offer the incoming operator again.
    Reduce,
    /// The two operators close each other and are both discarded.
    Match,
    /// No legal relation exists; the expression is malformed.
    Invalid,
}

use self::Relation::{Invalid as I, Match as M, Reduce as R, Shift as S};

//             &  |  !  (  )  end
const RELATIONS: [[Relation; 6]; 6] = [
    /* &   */ [R, R, S, S, R, R],
    /* |   */ [R, R, S, S, R, R],
    /* !   */ [R, R, S, S, R, R],
    /* (   */ [S, S, S, S, M, I],
    // `)` is never pushed, so reaching this row is an internal error.
    /* )   */ [I, I, I, I, I, I],
    /* end */ [S, S, S, S, I, M],
];

/// Look up the relation between the stack top and the incoming operator.
///
/// # Examples
///
/// ```
/// use rulex::{Operator, Relation, relation};
///
/// assert_eq!(relation(Operator::And, Operator::Or), Relation::Reduce);
/// assert_eq!(relation(Operator::Or, Operator::Not), Relation::Shift);
/// assert_eq!(relation(Operator::OpenParen, Operator::CloseParen), Relation::Match);
/// assert_eq!(relation(Operator::End, Operator::CloseParen), Relation::Invalid);
/// ```
#[must_use]
pub fn relation(top: Operator, incoming: Operator) -> Relation {
    RELATIONS
        .get(top.index())
        .and_then(|row| row.get(incoming.index()))
        .copied()
        .unwrap_or(Relation::Invalid)
}
