#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised while computing a value.
pub enum RuntimeError {
    /// An operator was applied with too few values available.
    MissingOperand {
        /// Literal text of the operator, e.g. `+` or `_`.
        operator: String,
    },
    /// More than one value was left once every operator had been applied.
    LeftoverOperands,
    /// A number token whose text does not parse as a floating-point value.
    InvalidNumber {
        /// The literal text of the token.
        literal: String,
    },
    /// No operator could be found to split the expression on, or a token
    /// showed up where no token of its kind can be evaluated.
    Fail,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { operator } => {
                write!(f, "The operator \"{operator}\" is missing an operand.")
            },
            Self::LeftoverOperands => write!(f, "Operands without operators were found."),
            Self::InvalidNumber { literal } => {
                write!(f, "The literal \"{literal}\" is not a valid number.")
            },
            Self::Fail => write!(f, "Fail"),
        }
    }
}

impl std::error::Error for RuntimeError {}
