use tracing::trace;

use crate::{
    error::{Outcome, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{apply_binary, parse_number},
        token::{NEGATE_TEXT, Token, TokenKind},
    },
};

/// The deepest parenthesis nesting [`evaluate`] accepts.
pub const MAX_NESTING: usize = 256;

/// Evaluates a token sequence by recursive splitting.
///
/// The sequence is split at its lowest-precedence operator outside any
/// parentheses, and both sides are evaluated recursively. Among binary
/// operators of equal precedence the rightmost one is the split point, which
/// gives left-to-right evaluation for chains like `10 - 2 - 3`. Unary minus
/// is only split on when no binary operator is at the top level.
///
/// Enclosing parentheses are removed only when they match each other, so
/// `(1 + 2) * (3 + 4)` splits at the `*`.
///
/// Chains of equal-precedence operators and runs of unary minus are folded in
/// a loop, so only parenthesis nesting deepens the recursion. That nesting is
/// limited to [`MAX_NESTING`].
///
/// # Errors
/// - [`ParseError::UnmatchedClosingParen`] / [`ParseError::UnmatchedOpeningParen`]
///   for unbalanced input.
/// - [`ParseError::NestingTooDeep`] when parentheses nest deeper than
///   [`MAX_NESTING`].
/// - [`ParseError::EmptyExpression`] when an operand is missing entirely, as
///   in `5 +` or `()`.
/// - [`RuntimeError::MissingOperand`] for a lone operator.
/// - [`RuntimeError::InvalidNumber`] for a malformed literal.
/// - [`RuntimeError::Fail`] when no operator joins two operands, as in
///   `(1)(2)`.
///
/// # Example
/// ```
/// use infixa::interpreter::{evaluator::scan::evaluate, lexer::tokenize};
///
/// assert_eq!(evaluate(&tokenize("100 / 10 / 2").unwrap()).unwrap(), 5.0);
/// assert_eq!(evaluate(&tokenize("-(2 + 3) * 4").unwrap()).unwrap(), -20.0);
///
/// let err = evaluate(&tokenize("5 +").unwrap()).unwrap_err();
/// assert_eq!(err.to_string(), "Found an empty expression.");
/// ```
pub fn evaluate(tokens: &[Token]) -> Outcome<f64> {
    check_balance(tokens)?;
    evaluate_balanced(tokens)
}

fn evaluate_balanced(tokens: &[Token]) -> Outcome<f64> {
    let tokens = strip_enclosing_parens(tokens);

    match tokens {
        [] => Err(ParseError::EmptyExpression.into()),
        [token] if token.kind() == TokenKind::Number => parse_number(token),
        [token] => Err(RuntimeError::MissingOperand { operator: token.text().to_string() }.into()),
        _ => match lowest_binary_precedence(tokens) {
            Some(precedence) => evaluate_chain(tokens, precedence),
            None => evaluate_negation(tokens),
        },
    }
}

/// Folds every top-level operator of `precedence` from left to right.
///
/// This is the same as splitting at the rightmost one and recursing into the
/// left side, without the recursion.
fn evaluate_chain(tokens: &[Token], precedence: u8) -> Outcome<f64> {
    let is_split = |kind: TokenKind| kind != TokenKind::Negate && kind.precedence() == precedence;
    let splits: Vec<usize> = top_level_operators(tokens).filter(|&(_, kind)| is_split(kind))
                                                        .map(|(index, _)| index)
                                                        .collect();
    let Some(&first) = splits.first() else {
        return Err(RuntimeError::Fail.into());
    };

    let mut value = evaluate_balanced(&tokens[..first])?;
    let ends = splits.iter().skip(1).copied().chain([tokens.len()]);
    for (index, end) in splits.iter().copied().zip(ends) {
        let operator = &tokens[index];
        trace!(operator = operator.text(), index, "splitting expression");
        let right = evaluate_balanced(&tokens[index + 1..end])?;
        value = apply_binary(operator.kind(), value, right)?;
    }
    Ok(value)
}

/// Evaluates a run of leading negations followed by one operand.
fn evaluate_negation(tokens: &[Token]) -> Outcome<f64> {
    let Some((index, _)) = top_level_operators(tokens).next() else {
        return Err(RuntimeError::Fail.into());
    };
    if index > 0 {
        return Err(RuntimeError::LeftoverOperands.into());
    }

    let count = tokens.iter().take_while(|token| token.kind() == TokenKind::Negate).count();
    let operand = &tokens[count..];
    trace!(count, "folding negations");
    if operand.is_empty() {
        return Err(RuntimeError::MissingOperand { operator: NEGATE_TEXT.to_string() }.into());
    }

    let value = evaluate_balanced(operand)?;
    Ok(if count % 2 == 0 { value } else { -value })
}

/// Checks that every parenthesis in `tokens` has a partner and that they
/// nest no deeper than [`MAX_NESTING`].
fn check_balance(tokens: &[Token]) -> Outcome<()> {
    let mut depth = 0usize;
    for token in tokens {
        match token.kind() {
            TokenKind::OpenParen => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(ParseError::NestingTooDeep { limit: MAX_NESTING }.into());
                }
            },
            TokenKind::CloseParen => {
                depth = depth.checked_sub(1).ok_or(ParseError::UnmatchedClosingParen)?;
            },
            _ => {},
        }
    }

    if depth > 0 {
        return Err(ParseError::UnmatchedOpeningParen.into());
    }
    Ok(())
}

/// Removes parenthesis pairs that wrap the whole sequence.
///
/// A leading `(` and a trailing `)` are only removed if the `(` is closed by
/// that very `)`. The input must be balanced.
fn strip_enclosing_parens(mut tokens: &[Token]) -> &[Token] {
    while let [first, inner @ .., last] = tokens
          && first.kind() == TokenKind::OpenParen
          && last.kind() == TokenKind::CloseParen
          && closes_at_end(inner)
    {
        tokens = inner;
    }
    tokens
}

/// Whether the parenthesis opened just before `inner` stays open until after
/// its last token.
fn closes_at_end(inner: &[Token]) -> bool {
    let mut depth = 0usize;
    for token in inner {
        match token.kind() {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {},
        }
    }
    true
}

/// The lowest precedence among binary operators outside parentheses.
fn lowest_binary_precedence(tokens: &[Token]) -> Option<u8> {
    top_level_operators(tokens).filter(|&(_, kind)| kind != TokenKind::Negate)
                               .map(|(_, kind)| kind.precedence())
                               .min()
}

/// Yields the index and kind of every operator at parenthesis depth zero.
fn top_level_operators(tokens: &[Token]) -> impl Iterator<Item = (usize, TokenKind)> + '_ {
    let mut depth = 0usize;
    tokens.iter().enumerate().filter_map(move |(index, token)| {
                                 let kind = token.kind();
                                 match kind {
                                     TokenKind::OpenParen => depth += 1,
                                     TokenKind::CloseParen => depth = depth.saturating_sub(1),
                                     TokenKind::Number => {},
                                     _ if depth == 0 => return Some((index, kind)),
                                     _ => {},
                                 }
                                 None
                             })
}
