/// Shared evaluation helpers and strategy selection.
///
/// Contains the [`core::Strategy`] switch between the two evaluators, plus
/// numeric literal parsing and binary operator application used by both.
pub mod core;

/// Shunting-yard evaluation.
///
/// Converts infix tokens to postfix order with an operator stack, then
/// evaluates the postfix sequence with a value stack.
pub mod postfix;

/// Priority-scan evaluation.
///
/// Recursively splits the token sequence at its lowest-precedence top-level
/// operator and combines the values of both halves.
pub mod scan;
