pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

/// Tokenize a source string and return a Vec of tokens.
///
/// Characters that do not start any token are dropped; use [`lex_spanned`]
/// when they must be reported.
pub fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// A source byte range that no token matched.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub span: Range<usize>,
    pub text: String,
}

/// Tokenize a source string keeping byte spans, which the parser needs for
/// error reports. Unrecognised characters are collected as [`LexError`]s
/// instead of being silently skipped.
pub fn lex_spanned(source: &str) -> (Vec<(Token, Range<usize>)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    let mut lexer = Token::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(_) => errors.push(LexError {
                text: lexer.slice().to_string(),
                span,
            }),
        }
    }

    (tokens, errors)
}

#[cfg(test)]
mod tests;
