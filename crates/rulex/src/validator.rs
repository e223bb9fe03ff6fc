//! Caller-supplied operand name validation.

/// Decide whether an operand name is known to the caller.
///
/// The converter never interprets operand names; it only asks the validator
/// about each one, synchronously and in scan order. Implementations should be
/// free of side effects observable elsewhere during the same conversion.
///
/// Any `Fn(&str) -> bool` closure is a validator.
///
/// # Examples
///
/// ```
/// use rulex::OperandValidator;
///
/// let known = |name: &str| matches!(name, "vip" | "new_user");
/// assert!(known.accepts("vip"));
/// assert!(!known.accepts("guest"));
/// ```
pub trait OperandValidator {
    /// Return `true` when `operand` names a recognised condition.
    fn accepts(&self, operand: &str) -> bool;
}

impl<F> OperandValidator for F
where
    F: Fn(&str) -> bool,
{
    fn accepts(&self, operand: &str) -> bool {
        self(operand)
    }
}

/// Validator that accepts every operand name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl OperandValidator for AcceptAll {
    fn accepts(&self, _operand: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Known(HashSet<&'static str>);

    impl OperandValidator for Known {
        fn accepts(&self, operand: &str) -> bool {
            self.0.contains(operand)
        }
    }

    #[test]
    fn accept_all_accepts_anything() {
        assert!(AcceptAll.accepts(""));
        assert!(AcceptAll.accepts("条件"));
    }

    #[test]
    fn closures_act_as_validators() {
        let only_x = |name: &str| name == "x";
        assert!(only_x.accepts("x"));
        assert!(!only_x.accepts("y"));
    }

    #[test]
    fn trait_objects_dispatch_to_custom_impls() {
        let known = Known(["a", "b"].into_iter().collect());
        let validator: &dyn OperandValidator = &known;
        assert!(validator.accepts("a"));
        assert!(!validator.accepts("c"));
    }
}
