//! Stack-driven infix-to-postfix reduction loop.

use crate::errors::{ARITY_MISMATCH, ConvertError, NO_MATCHING_OPERATOR, syntax_error};
use crate::operator::Operator;
use crate::postfix::{Postfix, PostfixToken, is_balanced};
use crate::relation::{Relation, relation};
use crate::validator::OperandValidator;

use super::lexer::{Token, next_token};

/// Rewrite `expression` into postfix order.
///
/// The operator stack starts with the sentinel and the loop ends when the
/// sentinel on the stack matches the one produced at end of input. A reduce
/// step keeps the incoming token in the look-ahead slot so it is offered
/// again to the new stack top.
pub(crate) fn reduce<V>(expression: &str, validator: &V) -> Result<Postfix, ConvertError>
where
    V: OperandValidator + ?Sized,
{
    let chars: Vec<char> = expression.chars().collect();
    let mut stack = vec![Operator::End];
    let mut output = Vec::new();
    let mut pos = 0;
    let mut lookahead: Option<(Token, usize)> = None;

    while let Some(&top) = stack.last() {
        let (token, next) = lookahead
            .take()
            .unwrap_or_else(|| next_token(&chars, pos));

        let op = match token {
            Token::Operand(name) => {
                if !validator.accepts(&name) {
                    log::debug!("operand '{name}' rejected in expression '{expression}'");
                    return Err(ConvertError::OperandNotRecognized {
                        operand: name,
                        expression: expression.to_owned(),
                    });
                }
                output.push(PostfixToken::Operand(name));
                pos = next;
                continue;
            }
            Token::Operator(op) => op,
        };

        match relation(top, op) {
            Relation::Shift => {
                log::trace!("shift '{op}' over '{top}'");
                stack.push(op);
                pos = next;
            }
            Relation::Reduce => {
                let Some(emitted) = PostfixToken::from_operator(top) else {
                    return Err(reject(Some(top), expression));
                };
                log::trace!("reduce '{top}' before '{op}'");
                stack.pop();
                output.push(emitted);
                lookahead = Some((Token::Operator(op), next));
            }
            Relation::Match => {
                log::trace!("match '{top}' with '{op}'");
                stack.pop();
                pos = next;
            }
            Relation::Invalid => return Err(reject(Some(op), expression)),
        }
    }

    if !is_balanced(&output) {
        log::debug!("operator/operand count mismatch in expression '{expression}'");
        return Err(syntax_error(ARITY_MISMATCH, None, expression));
    }
    Ok(Postfix::new(output))
}

fn reject(operator: Option<Operator>, expression: &str) -> ConvertError {
    log::debug!("no relation for operator in expression '{expression}'");
    syntax_error(NO_MATCHING_OPERATOR, operator, expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::test_support::{reduce_err, reduce_ok};
    use crate::errors::SyntaxErrorInfo;
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    #[case("a", "a")]
    #[case("a & b", "a b &")]
    #[case("a & b | c", "a b & c |")]
    #[case("a | b & c", "a b | c &")]
    #[case("a & b & c", "a b & c &")]
    #[case("a | b | c", "a b | c |")]
    #[case("a & (b | c)", "a b c | &")]
    #[case("(a)", "a")]
    #[case("((a & b))", "a b &")]
    #[case("!a & b", "a ! b &")]
    #[case("!(a & b)", "a b & !")]
    #[case("!!a", "a ! !")]
    #[case("a | !b & c", "a b ! | c &")]
    fn converts_to_postfix(#[case] expression: &str, #[case] expected: &str) {
        assert_eq!(reduce_ok(expression).to_string(), expected);
    }

    #[rstest]
    #[case("(a & b", Some(Operator::End))]
    #[case("a & b)", Some(Operator::CloseParen))]
    #[case(")", Some(Operator::CloseParen))]
    #[case("a)(", Some(Operator::CloseParen))]
    fn rejects_unbalanced_parentheses(
        #[case] expression: &str,
        #[case] operator: Option<Operator>,
    ) {
        assert_eq!(
            reduce_err(expression),
            ConvertError::InvalidSyntax(SyntaxErrorInfo::new(
                NO_MATCHING_OPERATOR,
                operator,
                expression
            ))
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("a b")]
    #[case("a &")]
    #[case("& b")]
    #[case("()")]
    #[case("a & | b")]
    #[case("! & a b")]
    fn rejects_operator_operand_mismatch(#[case] expression: &str) {
        assert_eq!(
            reduce_err(expression),
            ConvertError::InvalidSyntax(SyntaxErrorInfo::new(ARITY_MISMATCH, None, expression))
        );
    }

    #[test]
    fn stops_at_first_rejected_operand() {
        let seen = RefCell::new(Vec::new());
        let validator = |name: &str| {
            seen.borrow_mut().push(name.to_owned());
            name != "b"
        };
        let err = reduce("a & b & c", &validator).err();
        assert_eq!(
            err,
            Some(ConvertError::OperandNotRecognized {
                operand: "b".into(),
                expression: "a & b & c".into(),
            })
        );
        assert_eq!(*seen.borrow(), ["a", "b"]);
    }

    #[test]
    fn reduce_offers_the_pending_token_again() {
        // `|` flushes both `!` and `&` before it is shifted.
        assert_eq!(reduce_ok("a & !b | c").to_string(), "a b ! & c |");
    }
}
