use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_expr,
            core::{EvalResult, Parser},
        },
    },
};

/// Parses and evaluates a factor, the tightest-binding grammar level.
///
/// Supports:
/// - numeric literals
/// - parenthesized expressions, which restart at the loosest level
/// - prefix `+` and `-`, which may stack (`--5`, `+-3`)
///
/// Signs apply to the factor that follows them only, so `-2 ** 2` is
/// `(-2) ** 2`.
///
/// Grammar:
/// ```text
///     factor := NUMBER
///             | "(" expr ")"
///             | ("+" | "-") factor
/// ```
/// # Parameters
/// - `parser`: Parser positioned at the start of the factor.
///
/// # Returns
/// The value of the factor.
///
/// # Errors
/// - [`ParseError::InvalidFactor`] if no factor starts at the current token.
/// - [`ParseError::UnexpectedToken`] if a group is not closed by `)`.
pub(crate) fn parse_factor(parser: &mut Parser<'_>) -> EvalResult<f64> {
    match parser.current() {
        Token::Number(value) => {
            parser.eat(Token::Number(value))?;
            Ok(value)
        },
        Token::LeftParen => parse_grouping(parser),
        Token::Plus => {
            parser.eat(Token::Plus)?;
            parse_factor(parser)
        },
        Token::Minus => {
            parser.eat(Token::Minus)?;
            Ok(-parse_factor(parser)?)
        },
        found => Err(ParseError::InvalidFactor { found,
                                                 offset: parser.offset() }.into()),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expr ")"`
fn parse_grouping(parser: &mut Parser<'_>) -> EvalResult<f64> {
    parser.eat(Token::LeftParen)?;
    let value = parse_expr(parser)?;
    parser.eat(Token::RightParen)?;
    Ok(value)
}
