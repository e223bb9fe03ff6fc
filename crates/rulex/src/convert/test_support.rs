//! Test helpers for asserting conversion outcomes.
use super::reducer::reduce;
use crate::errors::ConvertError;
use crate::postfix::Postfix;
use crate::validator::AcceptAll;

pub(crate) fn reduce_ok(expression: &str) -> Postfix {
    match reduce(expression, &AcceptAll) {
        Ok(postfix) => postfix,
        Err(err) => panic!("expression should convert: {err}"),
    }
}

pub(crate) fn reduce_err(expression: &str) -> ConvertError {
    match reduce(expression, &AcceptAll) {
        Ok(postfix) => panic!("expression should fail, got `{postfix}`"),
        Err(err) => err,
    }
}
