use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")] // Whitespace never separates anything meaningful
pub enum Token {
    // --- Literals ---

    // Identifiers: variables, constants and function names (ex: "x", "sqrt", "pi")
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Numbers keep their source text so the token stays Eq + Hash for chumsky.
    // The parser converts them to f64.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().to_string())]
    #[regex(r"([0-9]+|[0-9]*\.[0-9]+)[eE][+-]?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    // --- Operators ---
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("^")]
    Caret, // Power (x^2)

    #[token("**")]
    StarStar, // Power, alternate spelling (x ** 2)

    #[token(",")]
    Comma,

    // --- Delimiters ---
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket, // Matrix rows

    #[token("]")]
    RBracket,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Number(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::Caret => write!(f, "^"),
            Token::StarStar => write!(f, "**"),
            Token::Comma => write!(f, ","),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
        }
    }
}
