#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents structural errors found before any arithmetic is done.
pub enum ParseError {
    /// A character that cannot begin any token.
    InvalidToken {
        /// The offending character.
        token: char,
    },
    /// A `)` with no `(` before it.
    UnmatchedClosingParen,
    /// A `(` that is never closed.
    UnmatchedOpeningParen,
    /// An operand position with no tokens in it, such as the right side of
    /// `5+`.
    EmptyExpression,
    /// Parentheses nested deeper than the priority scan accepts.
    NestingTooDeep {
        /// The deepest nesting that is still accepted.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token } => write!(f, "The token \"{token}\" is invalid."),
            Self::UnmatchedClosingParen => {
                write!(f, "Found a closing parenthesis without an opening one.")
            },
            Self::UnmatchedOpeningParen => {
                write!(f, "Found an opening parenthesis without a closing one.")
            },
            Self::EmptyExpression => write!(f, "Found an empty expression."),
            Self::NestingTooDeep { limit } => {
                write!(f, "The expression is nested more than {limit} parentheses deep.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
