//! Reference evaluators used to check conversions against truth assignments.

use std::collections::HashMap;

use rulex::PostfixToken;

/// Truth assignment for operand names.
pub type Facts = HashMap<String, bool>;

/// Every assignment of `true`/`false` to `names`.
pub fn all_assignments(names: &[&str]) -> Vec<Facts> {
    let count = 1usize << names.len();
    (0..count)
        .map(|bits| {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| ((*name).to_owned(), bits & (1 << i) != 0))
                .collect()
        })
        .collect()
}

/// Evaluate a postfix sequence with a single value stack.
pub fn eval_postfix(tokens: &[PostfixToken], facts: &Facts) -> Option<bool> {
    let mut stack: Vec<bool> = Vec::new();
    for token in tokens {
        let value = match token {
            PostfixToken::Operand(name) => *facts.get(name)?,
            PostfixToken::Not => !stack.pop()?,
            PostfixToken::And => {
                let rhs = stack.pop()?;
                stack.pop()? && rhs
            }
            PostfixToken::Or => {
                let rhs = stack.pop()?;
                stack.pop()? || rhs
            }
        };
        stack.push(value);
    }
    match stack.as_slice() {
        [value] => Some(*value),
        _ => None,
    }
}

/// Evaluate an infix expression directly by recursive descent.
///
/// `&` and `|` share one precedence level and associate to the left; `!`
/// applies to the operand or group that follows it. Operand names are single
/// ASCII letters.
pub fn eval_infix(expression: &str, facts: &Facts) -> Option<bool> {
    let chars: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parser = Infix {
        chars: &chars,
        pos: 0,
        facts,
    };
    let value = parser.binary()?;
    (parser.pos == chars.len()).then_some(value)
}

struct Infix<'a> {
    chars: &'a [char],
    pos: usize,
    facts: &'a Facts,
}

impl Infix<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn binary(&mut self) -> Option<bool> {
        let mut value = self.unary()?;
        while let Some(op @ ('&' | '|')) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = if op == '&' { value && rhs } else { value || rhs };
        }
        Some(value)
    }

    fn unary(&mut self) -> Option<bool> {
        match self.bump()? {
            '!' => self.unary().map(|value| !value),
            '(' => {
                let value = self.binary()?;
                (self.bump()? == ')').then_some(value)
            }
            name if name.is_ascii_alphabetic() => self.facts.get(&name.to_string()).copied(),
            _ => None,
        }
    }
}
