use crate::ast::{BinaryOp, Expr, ExprKind, Span, UnaryOp};
use crate::error::ParseError;
use chumsky::Stream;
use chumsky::prelude::*;
use lexer::token::Token;
use std::ops::Range;

/// Deepest nesting of groups, prefix signs and powers the parser accepts.
/// Parsing and evaluation both recurse once per level.
pub const MAX_NESTING: usize = 128;

/// Parser for a complete expression: trailing tokens are an error.
pub fn parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    expr_parser().then_ignore(end())
}

/// Lex and parse `source`, returning errors with byte spans into it.
pub fn parse_expression(source: &str) -> Result<Expr, Vec<ParseError>> {
    let (tokens, lex_errors) = lexer::lex_spanned(source);

    if !lex_errors.is_empty() {
        return Err(lex_errors
            .into_iter()
            .map(|e| Simple::custom(e.span, format!("Unexpected character '{}'", e.text)))
            .collect());
    }

    if let Some(error) = check_nesting(&tokens) {
        return Err(vec![error]);
    }

    if let Some(error) = check_implicit_multiplication(&tokens) {
        return Err(vec![error]);
    }

    let eoi = source.len()..source.len();
    parser().parse(Stream::from_iter(eoi, tokens.into_iter()))
}

/// Rejects input nested deeper than [`MAX_NESTING`] before chumsky recurses
/// into it. Each open delimiter is one level, and so is each prefix sign or
/// power operator chained inside the same delimiter.
fn check_nesting(tokens: &[(Token, Range<usize>)]) -> Option<ParseError> {
    // chains[i]: signs and powers pending at delimiter level i
    let mut chains: Vec<usize> = vec![0];
    let mut depth = 0usize;
    let mut prev: Option<&Token> = None;

    for (token, span) in tokens {
        match token {
            Token::LParen | Token::LBracket => {
                chains.push(0);
                depth += 1;
            }
            Token::RParen | Token::RBracket => {
                // Unbalanced closers are left to the parser
                if chains.len() > 1 {
                    if let Some(chain) = chains.pop() {
                        depth -= chain + 1;
                    }
                }
            }
            Token::Caret | Token::StarStar => {
                if let Some(chain) = chains.last_mut() {
                    *chain += 1;
                    depth += 1;
                }
            }
            Token::Plus | Token::Minus if is_prefix_position(prev) => {
                if let Some(chain) = chains.last_mut() {
                    *chain += 1;
                    depth += 1;
                }
            }
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Percent | Token::Comma => {
                if let Some(chain) = chains.last_mut() {
                    depth -= *chain;
                    *chain = 0;
                }
            }
            _ => {}
        }

        if depth > MAX_NESTING {
            return Some(Simple::custom(
                span.clone(),
                format!("Expression is nested too deeply (more than {} levels)", MAX_NESTING),
            ));
        }

        prev = Some(token);
    }

    None
}

/// A sign is a prefix operator at the start or right after an operator,
/// an opening delimiter or a comma.
fn is_prefix_position(prev: Option<&Token>) -> bool {
    match prev {
        None => true,
        Some(token) => !matches!(
            token,
            Token::Identifier(_) | Token::Number(_) | Token::RParen | Token::RBracket
        ),
    }
}

/// Detects two operands written side by side (`2x`, `(a)(b)`, `x y`).
/// Chumsky would only report "unexpected token"; this names the actual mistake.
fn check_implicit_multiplication(tokens: &[(Token, Range<usize>)]) -> Option<ParseError> {
    for window in tokens.windows(2) {
        let (prev_tok, prev_span) = &window[0];
        let (next_tok, next_span) = &window[1];

        let juxtaposed = match prev_tok {
            Token::Number(_) => matches!(
                next_tok,
                Token::Identifier(_) | Token::Number(_) | Token::LParen | Token::LBracket
            ),
            Token::RParen => matches!(
                next_tok,
                Token::Identifier(_) | Token::Number(_) | Token::LParen
            ),
            Token::Identifier(_) => matches!(next_tok, Token::Identifier(_) | Token::Number(_)),
            _ => false,
        };

        if juxtaposed {
            return Some(Simple::custom(
                prev_span.start..next_span.end,
                format!(
                    "Implicit multiplication is not supported, write '{} * {}'",
                    prev_tok, next_tok
                ),
            ));
        }
    }

    None
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    let span = lhs.span.start..rhs.span.end;
    Expr::new(
        ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        span,
    )
}

fn expr_parser() -> impl Parser<Token, Expr, Error = Simple<Token>> + Clone {
    recursive(|expr| {
        let number = select! { Token::Number(text) => text }.try_map(|text: String, span: Span| {
            text.parse::<f64>()
                .map(|n| Expr::new(ExprKind::Number(n), span.clone()))
                .map_err(|e| Simple::custom(span, format!("Invalid number '{}': {}", text, e)))
        });

        let args = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        // sqrt(x) is a call, a bare name is a variable or constant
        let call_or_ident = select! { Token::Identifier(name) => name }
            .then(args.or_not())
            .map_with_span(|(name, maybe_args), span| match maybe_args {
                Some(args) => Expr::new(ExprKind::Call { name, args }, span),
                None => Expr::new(ExprKind::Identifier(name), span),
            });

        let array = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map_with_span(|items, span| Expr::new(ExprKind::Array(items), span));

        let parenthesized = expr
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .map_with_span(|inner: Expr, span| Expr { span, ..inner });

        let atom = number
            .or(call_or_ident)
            .or(array)
            .or(parenthesized)
            .boxed();

        // Power is right-associative and binds tighter than prefix minus:
        // -2^2 is -(2^2), 2^-1 is 2^(-1)
        let unary = recursive(|unary| {
            let power = atom
                .clone()
                .then(
                    just(Token::Caret)
                        .or(just(Token::StarStar))
                        .ignore_then(unary.clone())
                        .or_not(),
                )
                .map(|(base, exponent)| match exponent {
                    Some(exponent) => binary(BinaryOp::Pow, base, exponent),
                    None => base,
                });

            just(Token::Minus)
                .to(UnaryOp::Negate)
                .or(just(Token::Plus).to(UnaryOp::Plus))
                .map_with_span(|op, span: Span| (op, span))
                .then(unary)
                .map(|((op, op_span), operand): ((UnaryOp, Span), Expr)| {
                    let span = op_span.start..operand.span.end;
                    Expr::new(
                        ExprKind::Unary {
                            op,
                            expr: Box::new(operand),
                        },
                        span,
                    )
                })
                .or(power)
        })
        .boxed();

        let product = unary
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .or(just(Token::Percent).to(BinaryOp::Mod))
                    .then(unary)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| binary(op, lhs, rhs))
            .boxed();

        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| binary(op, lhs, rhs));

        sum.boxed()
    })
}
