/// The evaluator module turns token sequences into numbers.
///
/// Two interchangeable strategies live here: a recursive priority scan
/// working directly on the tokens, and a shunting-yard conversion to postfix
/// notation followed by stack evaluation. Both honor the same precedence
/// table and report failures as values.
///
/// # Responsibilities
/// - Evaluates `+ - * /`, unary minus and parenthesized groups.
/// - Parses numeric literals at evaluation time.
/// - Reports unbalanced parentheses, missing operands and leftover operands.
pub mod evaluator;
/// The lexer module tokenizes source text.
///
/// The lexer reads the raw input and produces the ordered token sequence the
/// evaluators consume. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Skips whitespace and recognizes numbers, operators and parentheses.
/// - Decides whether each `-` is negation or subtraction.
/// - Reports the first character that cannot begin a token.
pub mod lexer;
/// The token module defines token kinds and their precedence.
///
/// Kinds form a closed enum matched exhaustively by both evaluators; the
/// precedence of each kind is a fixed constant.
pub mod token;
