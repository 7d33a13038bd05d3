use crate::{
    error::{Error, Outcome, RuntimeError},
    interpreter::{
        evaluator::{postfix, scan},
        token::{Token, TokenKind},
    },
};

/// Selects which evaluator turns a token sequence into a number.
///
/// Both strategies implement the same grammar and agree on every valid
/// expression. They differ only in which error they report for some
/// malformed inputs; see [`scan::evaluate`] and [`postfix::evaluate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Recursive splitting at the lowest-precedence top-level operator.
    PriorityScan,
    /// Conversion to postfix notation followed by stack evaluation.
    #[default]
    ShuntingYard,
}

impl Strategy {
    /// Evaluates `tokens` with this strategy.
    ///
    /// # Example
    /// ```
    /// use infixa::interpreter::{evaluator::core::Strategy, lexer::tokenize};
    ///
    /// let tokens = tokenize("2 + 3 * 4").unwrap();
    /// assert_eq!(Strategy::PriorityScan.evaluate(&tokens).unwrap(), 14.0);
    /// assert_eq!(Strategy::ShuntingYard.evaluate(&tokens).unwrap(), 14.0);
    /// ```
    pub fn evaluate(self, tokens: &[Token]) -> Outcome<f64> {
        match self {
            Self::PriorityScan => scan::evaluate(tokens),
            Self::ShuntingYard => postfix::evaluate(tokens),
        }
    }
}

/// Parses the text of a number token.
///
/// # Errors
/// Returns [`RuntimeError::InvalidNumber`] if the text is not a valid
/// decimal literal made of digits and at most one `.`. Forms `f64` would
/// otherwise accept, like `inf` or `1e5`, are rejected.
pub(in crate::interpreter::evaluator) fn parse_number(token: &Token) -> Outcome<f64> {
    let literal = token.text();
    let invalid = || Error::from(RuntimeError::InvalidNumber { literal: literal.to_string() });

    if !literal.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(invalid());
    }
    literal.parse::<f64>().map_err(|_| invalid())
}

/// Applies a binary operator to two values, `left op right`.
///
/// Division by zero is not an error; it yields an infinity or NaN.
///
/// # Errors
/// Returns [`RuntimeError::Fail`] if `kind` is not a binary operator.
pub(in crate::interpreter::evaluator) fn apply_binary(kind: TokenKind,
                                                      left: f64,
                                                      right: f64)
                                                      -> Outcome<f64> {
    match kind {
        TokenKind::Add => Ok(left + right),
        TokenKind::Sub => Ok(left - right),
        TokenKind::Mul => Ok(left * right),
        TokenKind::Div => Ok(left / right),
        TokenKind::Number | TokenKind::Negate | TokenKind::OpenParen | TokenKind::CloseParen => {
            Err(RuntimeError::Fail.into())
        },
    }
}
