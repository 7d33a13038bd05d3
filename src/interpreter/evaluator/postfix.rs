use tracing::trace;

use crate::{
    error::{Outcome, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{apply_binary, parse_number},
        token::{Token, TokenKind, TokenSequence},
    },
};

/// Evaluates a token sequence with the shunting-yard algorithm.
///
/// Equivalent to [`to_postfix`] followed by [`evaluate_postfix`].
///
/// # Errors
/// Any error from either phase. Notably `5 +` reports that `+` is missing an
/// operand, while a leading `+` is treated as a unary plus and ignored.
///
/// # Example
/// ```
/// use infixa::interpreter::{evaluator::postfix::evaluate, lexer::tokenize};
///
/// assert_eq!(evaluate(&tokenize("(2 + 3) * 4").unwrap()).unwrap(), 20.0);
/// assert_eq!(evaluate(&tokenize("+5").unwrap()).unwrap(), 5.0);
///
/// let err = evaluate(&tokenize("(1 + 2").unwrap()).unwrap_err();
/// assert_eq!(err.to_string(), "Found an opening parenthesis without a closing one.");
/// ```
pub fn evaluate(tokens: &[Token]) -> Outcome<f64> {
    to_postfix(tokens).and_then(|postfix| evaluate_postfix(&postfix))
}

/// Converts an infix token sequence to postfix (reverse Polish) order.
///
/// Operators wait on a stack and are moved to the output once an operator of
/// lower or equal precedence, or a closing parenthesis, arrives. A `-` that
/// does not follow an operand becomes a negation, which is pushed without
/// popping anything. A `+` in the same position is dropped.
///
/// # Errors
/// - [`ParseError::UnmatchedClosingParen`] if a `)` finds no `(` on the stack.
/// - [`ParseError::UnmatchedOpeningParen`] if a `(` is left on the stack at
///   the end.
///
/// # Example
/// ```
/// use infixa::interpreter::{evaluator::postfix::to_postfix, lexer::tokenize};
///
/// let postfix = to_postfix(&tokenize("1 + 2 * -3").unwrap()).unwrap();
/// let text: Vec<_> = postfix.iter().map(|t| t.text()).collect();
/// assert_eq!(text, ["1", "2", "3", "_", "*", "+"]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> Outcome<TokenSequence> {
    let mut output = TokenSequence::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();
    let mut previous: Option<TokenKind> = None;

    for token in tokens {
        let after_operand = previous.is_some_and(TokenKind::ends_operand);

        match token.kind() {
            TokenKind::Number => output.push(token.clone()),
            TokenKind::OpenParen => operators.push(token.clone()),
            TokenKind::CloseParen => loop {
                match operators.pop() {
                    Some(top) if top.kind() == TokenKind::OpenParen => break,
                    Some(top) => output.push(top),
                    None => return Err(ParseError::UnmatchedClosingParen.into()),
                }
            },
            TokenKind::Negate => operators.push(Token::negate()),
            TokenKind::Sub if !after_operand => operators.push(Token::negate()),
            TokenKind::Add if !after_operand => {},
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div => {
                let precedence = token.kind().precedence();
                while let Some(top) = operators.pop_if(|top| top.kind().precedence() >= precedence)
                {
                    output.push(top);
                }
                operators.push(token.clone());
            },
        }

        previous = Some(token.kind());
    }

    while let Some(top) = operators.pop() {
        if top.kind() == TokenKind::OpenParen {
            return Err(ParseError::UnmatchedOpeningParen.into());
        }
        output.push(top);
    }

    trace!(postfix = %display_sequence(&output), "converted to postfix");
    Ok(output)
}

/// Evaluates a postfix token sequence with a value stack.
///
/// Numbers are pushed. A negation pops one value; a binary operator pops the
/// right operand and then the left one, so `8 2 /` is `8 / 2`.
///
/// # Errors
/// - [`RuntimeError::MissingOperand`] if an operator finds too few values.
/// - [`RuntimeError::LeftoverOperands`] if more than one value remains.
/// - [`ParseError::EmptyExpression`] if no value remains at all.
/// - [`RuntimeError::InvalidNumber`] for a malformed literal.
/// - [`RuntimeError::Fail`] for parentheses, which never appear in postfix.
///
/// # Example
/// ```
/// use infixa::interpreter::{evaluator::postfix::evaluate_postfix, token::Token};
///
/// let postfix = ["8", "2", "/"].map(Token::new);
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), 4.0);
///
/// let err = evaluate_postfix(&["+", "5"].map(Token::new)).unwrap_err();
/// assert_eq!(err.to_string(), "The operator \"+\" is missing an operand.");
/// ```
pub fn evaluate_postfix(postfix: &[Token]) -> Outcome<f64> {
    let mut values: Vec<f64> = Vec::new();

    for token in postfix {
        let missing = || RuntimeError::MissingOperand { operator: token.text().to_string() };

        match token.kind() {
            TokenKind::Number => values.push(parse_number(token)?),
            TokenKind::Negate => {
                let value = values.pop().ok_or_else(missing)?;
                values.push(-value);
            },
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div => {
                let right = values.pop().ok_or_else(missing)?;
                let left = values.pop().ok_or_else(missing)?;
                values.push(apply_binary(token.kind(), left, right)?);
            },
            TokenKind::OpenParen | TokenKind::CloseParen => return Err(RuntimeError::Fail.into()),
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        [] => Err(ParseError::EmptyExpression.into()),
        _ => Err(RuntimeError::LeftoverOperands.into()),
    }
}

fn display_sequence(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect::<Vec<_>>().join(" ")
}
