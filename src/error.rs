/// Parsing errors.
///
/// Structural problems detected before any arithmetic happens: characters
/// that cannot start a token, unbalanced parentheses and empty operands.
pub mod parse_error;
/// Runtime errors.
///
/// Problems raised while computing a value: operators without enough
/// operands, operands without operators and malformed numeric literals.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type returned by every tokenizing and evaluating operation.
///
/// Holds either the computed value or the first [`Error`] encountered.
/// Compose with `?`, [`Result::map`] and [`Result::and_then`]; all of them
/// short-circuit on the first error.
pub type Outcome<T> = Result<T, Error>;

/// Any error the engine can produce.
///
/// Displays as the message of the wrapped error, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised by the tokenizer or by structural checks.
    Parse(ParseError),
    /// Raised while computing a value.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
