use logos::Logos;
use tracing::debug;

use crate::{
    error::{Outcome, ParseError},
    interpreter::token::{Token, TokenSequence},
};

/// Raw lexemes recognized in the source text.
///
/// The lexer only validates character classes. Whether a `-` is negation or
/// subtraction is decided afterwards, from the token emitted before it.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// A run of digits and dots, such as `3.14`, `.5` or even `1.2.3`.
    #[regex(r"[0-9.]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any Unicode whitespace, including vertical tabs and em spaces.
    #[regex(r"\p{White_Space}+", logos::skip)]
    Ignored,
}

/// Converts source text into a token sequence.
///
/// Whitespace between tokens is skipped. A `-` is emitted as subtraction
/// when the previous token is a number or a closing parenthesis, and as a
/// synthesized negation (text `"_"`) everywhere else, including at the start
/// of the input.
///
/// Numeric literals are not validated here: `1.2.3` is accepted and only
/// fails once an evaluator parses it.
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] for the first character that cannot
/// begin a token. Nothing after it is scanned.
///
/// # Example
/// ```
/// use infixa::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let tokens = tokenize("-2 - 3").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds,
///            [TokenKind::Negate, TokenKind::Number, TokenKind::Sub, TokenKind::Number]);
///
/// let err = tokenize("3 + @").unwrap_err();
/// assert_eq!(err.to_string(), "The token \"@\" is invalid.");
/// ```
pub fn tokenize(source: &str) -> Outcome<TokenSequence> {
    let mut tokens = TokenSequence::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            let token = source[lexer.span().start..].chars()
                                                    .next()
                                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(ParseError::InvalidToken { token }.into());
        };

        let token = match lexeme {
            Lexeme::Minus if !follows_operand(&tokens) => Token::negate(),
            _ => Token::new(lexer.slice()),
        };
        tokens.push(token);
    }

    debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

fn follows_operand(tokens: &[Token]) -> bool {
    tokens.last().is_some_and(|last| last.kind().ends_operand())
}
