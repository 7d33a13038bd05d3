//! # infixa
//!
//! infixa is an arithmetic expression evaluator written in Rust.
//! It tokenizes expressions built from non-negative decimal numbers, `+ - * /`,
//! unary minus and parentheses, and evaluates them with either a recursive
//! priority scan or the shunting-yard algorithm.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Outcome,
    interpreter::{
        evaluator::core::Strategy,
        token::{Token, TokenSequence},
    },
};

/// Provides the error types and the [`error::Outcome`] result alias.
///
/// Every operation in the crate reports failure as a value. Errors are split
/// into structural problems found before computing anything and problems
/// found while computing, and both display as a single human-readable
/// message.
///
/// # Responsibilities
/// - Defines error enums for the tokenizer and both evaluators.
/// - Renders each error as the message shown to the user.
/// - Converts between the specific errors and the crate-wide [`error::Error`].
pub mod error;
/// Orchestrates tokenizing and evaluation.
///
/// This module ties together the token model, the lexer and both evaluation
/// strategies.
///
/// # Responsibilities
/// - Defines tokens, their kinds and precedence.
/// - Converts text into tokens.
/// - Evaluates token sequences with the selected strategy.
pub mod interpreter;

/// Converts source text into a token sequence.
///
/// See [`interpreter::lexer::tokenize`].
pub fn tokenize(text: &str) -> Outcome<TokenSequence> {
    interpreter::lexer::tokenize(text)
}

/// Evaluates a token sequence with the default strategy, shunting-yard.
pub fn evaluate(tokens: &[Token]) -> Outcome<f64> {
    Strategy::default().evaluate(tokens)
}

/// Tokenizes and evaluates `text` with the default strategy.
///
/// The first error from either step is returned unchanged.
///
/// # Examples
/// ```
/// use infixa::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("10 - 2 - 3").unwrap(), 5.0);
/// assert_eq!(evaluate_expression("1 / 0").unwrap(), f64::INFINITY);
///
/// let err = evaluate_expression("3 + @").unwrap_err();
/// assert_eq!(err.to_string(), "The token \"@\" is invalid.");
/// ```
pub fn evaluate_expression(text: &str) -> Outcome<f64> {
    evaluate_expression_with(text, Strategy::default())
}

/// Tokenizes and evaluates `text` with the given strategy.
///
/// # Examples
/// ```
/// use infixa::{evaluate_expression_with, interpreter::evaluator::core::Strategy};
///
/// let value = evaluate_expression_with("(1 + 2) * (3 + 4)", Strategy::PriorityScan);
/// assert_eq!(value.unwrap(), 21.0);
/// ```
pub fn evaluate_expression_with(text: &str, strategy: Strategy) -> Outcome<f64> {
    tokenize(text).and_then(|tokens| strategy.evaluate(&tokens))
}
