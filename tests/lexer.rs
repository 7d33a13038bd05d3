use infixa::{
    error::{Error, Outcome, ParseError, RuntimeError},
    interpreter::{
        evaluator::postfix::{evaluate_postfix, to_postfix},
        lexer::tokenize,
        token::{Token, TokenKind},
    },
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("{src:?} failed to tokenize: {e}"))
                 .iter()
                 .map(Token::kind)
                 .collect()
}

fn postfix_text(src: &str) -> String {
    let tokens = tokenize(src).unwrap();
    to_postfix(&tokens).unwrap()
                       .iter()
                       .map(Token::text)
                       .collect::<Vec<_>>()
                       .join(" ")
}

#[test]
fn minus_is_negation_unless_it_follows_an_operand() {
    use TokenKind::{CloseParen, Negate, Number, OpenParen, Sub};

    assert_eq!(kinds("-1"), [Negate, Number]);
    assert_eq!(kinds("1-1"), [Number, Sub, Number]);
    assert_eq!(kinds("(1)-1"), [OpenParen, Number, CloseParen, Sub, Number]);
    assert_eq!(kinds("(-1)"), [OpenParen, Negate, Number, CloseParen]);
    assert_eq!(kinds("1--1"), [Number, Sub, Negate, Number]);
}

#[test]
fn negation_is_written_as_underscore() {
    let tokens = tokenize("-2").unwrap();
    assert_eq!(tokens[0].text(), "_");
    assert_eq!(tokens[0], Token::negate());
}

#[test]
fn numbers_are_maximal_runs_of_digits_and_dots() {
    let tokens = tokenize("12.5+1.2.3 .7").unwrap();
    let text: Vec<_> = tokens.iter().map(Token::text).collect();
    assert_eq!(text, ["12.5", "+", "1.2.3", ".7"]);
}

#[test]
fn blank_input_gives_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \t\r\n").unwrap().is_empty());
    assert!(tokenize("\u{0B}\u{0C}\u{85}\u{A0}\u{2003}\u{2028}\u{3000}").unwrap().is_empty());
}

#[test]
fn first_invalid_character_is_reported() {
    assert_eq!(tokenize("1 + $ + #"),
               Err(Error::Parse(ParseError::InvalidToken { token: '$' })));
    assert_eq!(tokenize("π"), Err(Error::Parse(ParseError::InvalidToken { token: 'π' })));
    assert_eq!(tokenize("1\u{200B}2"),
               Err(Error::Parse(ParseError::InvalidToken { token: '\u{200B}' })));
}

#[test]
fn precedence_table() {
    use TokenKind::{Add, CloseParen, Div, Mul, Negate, Number, OpenParen, Sub};

    assert_eq!(Number.precedence(), 10);
    assert_eq!(Negate.precedence(), 10);
    assert_eq!(OpenParen.precedence(), 0);
    assert_eq!(CloseParen.precedence(), 6);
    assert_eq!(Add.precedence(), Sub.precedence());
    assert_eq!(Mul.precedence(), Div.precedence());
    assert!(Mul.precedence() > Add.precedence());
}

#[test]
fn classification_is_exact() {
    for (text, kind) in [("+", TokenKind::Add),
                         ("-", TokenKind::Sub),
                         ("*", TokenKind::Mul),
                         ("/", TokenKind::Div),
                         ("(", TokenKind::OpenParen),
                         (")", TokenKind::CloseParen),
                         ("++", TokenKind::Number),
                         ("_", TokenKind::Number),
                         ("7", TokenKind::Number)]
    {
        assert_eq!(Token::new(text).kind(), kind, "{text:?}");
        if let Some(symbol) = kind.symbol() {
            assert_eq!(symbol, text);
        }
    }
}

#[test]
fn postfix_order() {
    assert_eq!(postfix_text("1 + 2 * 3"), "1 2 3 * +");
    assert_eq!(postfix_text("(1 + 2) * 3"), "1 2 + 3 *");
    assert_eq!(postfix_text("10 - 2 - 3"), "10 2 - 3 -");
    assert_eq!(postfix_text("-2 * 3"), "2 _ 3 *");
    assert_eq!(postfix_text("(1) - 2"), "1 2 -");
    assert_eq!(postfix_text("+1 + +2"), "1 2 +");
}

#[test]
fn postfix_sub_after_non_operand_becomes_negation() {
    let tokens = ["*", "-", "3"].map(Token::new);
    let postfix = to_postfix(&tokens).unwrap();
    let text: Vec<_> = postfix.iter().map(Token::text).collect();
    assert_eq!(text, ["3", "_", "*"]);
}

#[test]
fn postfix_evaluation_operand_order() {
    assert_eq!(evaluate_postfix(&["10", "4", "-"].map(Token::new)), Ok(6.0));
    assert_eq!(evaluate_postfix(&["10", "4", "/"].map(Token::new)), Ok(2.5));
    assert_eq!(evaluate_postfix(&[Token::new("4"), Token::negate()]), Ok(-4.0));
}

#[test]
fn postfix_evaluation_errors() {
    let missing = |operator: &str| -> Outcome<f64> {
        Err(Error::Runtime(RuntimeError::MissingOperand { operator: operator.to_string() }))
    };

    assert_eq!(evaluate_postfix(&["+", "5"].map(Token::new)), missing("+"));
    assert_eq!(evaluate_postfix(&["5", "/"].map(Token::new)), missing("/"));
    assert_eq!(evaluate_postfix(&[Token::negate()]), missing("_"));
    assert_eq!(evaluate_postfix(&["1", "2"].map(Token::new)),
               Err(Error::Runtime(RuntimeError::LeftoverOperands)));
    assert_eq!(evaluate_postfix(&[]), Err(Error::Parse(ParseError::EmptyExpression)));
    assert_eq!(evaluate_postfix(&["1", "("].map(Token::new)),
               Err(Error::Runtime(RuntimeError::Fail)));
    assert_eq!(evaluate_postfix(&["inf"].map(Token::new)),
               Err(Error::Runtime(RuntimeError::InvalidNumber { literal: "inf".to_string() })));
}

#[test]
fn scan_rejects_negation_with_a_left_operand() {
    let tokens = [Token::new("2"), Token::negate(), Token::new("3")];
    assert_eq!(infixa::interpreter::evaluator::scan::evaluate(&tokens),
               Err(Error::Runtime(RuntimeError::LeftoverOperands)));
}

#[test]
fn scan_folds_negation_runs_in_hand_built_sequences() {
    use infixa::interpreter::evaluator::scan::evaluate;

    let mut tokens = vec![Token::negate(); 100_001];
    tokens.push(Token::new("4"));
    assert_eq!(evaluate(&tokens), Ok(-4.0));

    let tokens = [Token::negate(), Token::negate()];
    assert_eq!(evaluate(&tokens),
               Err(Error::Runtime(RuntimeError::MissingOperand { operator: "_".to_string() })));
}
