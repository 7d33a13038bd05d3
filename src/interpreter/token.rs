/// Text used for synthesized unary minus tokens.
pub const NEGATE_TEXT: &str = "_";

/// The kind of a lexical token.
///
/// Every kind carries a fixed precedence shared by both evaluators. Higher
/// values bind tighter. Changing a value changes the grammar for every
/// strategy at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal, such as `3.14`.
    Number,
    /// Unary minus. Never produced from literal text; only synthesized.
    Negate,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `+`
    Add,
    /// `-` in binary position.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl TokenKind {
    /// Classifies literal text.
    ///
    /// Only the exact strings `+ - * / ( )` map to operator kinds. Any other
    /// text is a [`TokenKind::Number`], including `"_"`.
    ///
    /// # Example
    /// ```
    /// use infixa::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_text("*"), TokenKind::Mul);
    /// assert_eq!(TokenKind::from_text("-"), TokenKind::Sub);
    /// assert_eq!(TokenKind::from_text("1.5"), TokenKind::Number);
    /// assert_eq!(TokenKind::from_text("_"), TokenKind::Number);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match text {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            _ => Self::Number,
        }
    }

    /// Returns the precedence of this kind.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Number | Self::Negate => 10,
            Self::CloseParen => 6,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
            Self::OpenParen => 0,
        }
    }

    /// Returns the fixed text of this kind, or `None` for numbers.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Number => None,
            Self::Negate => Some(NEGATE_TEXT),
            Self::OpenParen => Some("("),
            Self::CloseParen => Some(")"),
            Self::Add => Some("+"),
            Self::Sub => Some("-"),
            Self::Mul => Some("*"),
            Self::Div => Some("/"),
        }
    }

    /// Whether this kind is an arithmetic operator, unary or binary.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Negate)
    }

    /// Whether a token of this kind can close an operand.
    ///
    /// A `-` following such a token is binary subtraction; anywhere else it
    /// is negation.
    #[must_use]
    pub const fn ends_operand(self) -> bool {
        matches!(self, Self::Number | Self::CloseParen)
    }
}

/// A single token: its kind and the literal text it came from.
///
/// Tokens are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Builds a token from literal text, classifying it with
    /// [`TokenKind::from_text`].
    ///
    /// # Example
    /// ```
    /// use infixa::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::new("42");
    /// assert_eq!(token.kind(), TokenKind::Number);
    /// assert_eq!(token.text(), "42");
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self { kind: TokenKind::from_text(&text),
               text }
    }

    /// Builds a synthesized unary minus token.
    #[must_use]
    pub fn negate() -> Self {
        Self { kind: TokenKind::Negate,
               text: NEGATE_TEXT.to_string(), }
    }

    /// The kind this token was classified as.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The text of the token, `"_"` for a synthesized negation.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// An ordered token list, produced by the lexer and read by the evaluators.
pub type TokenSequence = Vec<Token>;
