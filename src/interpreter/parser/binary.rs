use crate::{
    error::RuntimeError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{EvalResult, Parser},
            unary::parse_factor,
        },
    },
};

/// Parses and evaluates addition and subtraction.
///
/// Handles the left-associative operators `+` and `-`, so `10 - 3 - 2`
/// evaluates as `(10 - 3) - 2`.
///
/// The rule is: `expr := power (("+" | "-") power)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the start of the expression.
///
/// # Returns
/// The value of the expression.
pub(crate) fn parse_expr(parser: &mut Parser<'_>) -> EvalResult<f64> {
    let mut result = parse_power(parser)?;
    loop {
        match parser.current() {
            Token::Plus => {
                parser.eat(Token::Plus)?;
                result += parse_power(parser)?;
            },
            Token::Minus => {
                parser.eat(Token::Minus)?;
                result -= parse_power(parser)?;
            },
            _ => break,
        }
    }
    Ok(result)
}

/// Parses and evaluates exponentiation.
///
/// `**` is right-associative: `2 ** 3 ** 2` parses as `2 ** (3 ** 2)`.
/// Its operands are whole terms, so `2 * 3 ** 2` is `(2 * 3) ** 2` and
/// `2 ** 3 * 2` is `2 ** (3 * 2)`.
///
/// The rule is: `power := term ("**" power)?`
///
/// # Parameters
/// - `parser`: Parser positioned at the start of the base.
///
/// # Returns
/// The base raised to the (recursively evaluated) exponent, or the base alone.
pub(crate) fn parse_power(parser: &mut Parser<'_>) -> EvalResult<f64> {
    let base = parse_term(parser)?;
    if parser.current() == Token::Power {
        parser.eat(Token::Power)?;
        let exponent = parse_power(parser)?;
        return Ok(base.powf(exponent));
    }
    Ok(base)
}

/// Parses and evaluates multiplication and division.
///
/// Handles the left-associative operators `*` and `/`. A divisor that
/// evaluates to exactly zero is rejected before dividing instead of producing
/// an infinity or NaN.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the start of the term.
///
/// # Returns
/// The value of the term.
///
/// # Errors
/// [`RuntimeError::DivisionByZero`] when a divisor is `0.0` or `-0.0`.
pub(crate) fn parse_term(parser: &mut Parser<'_>) -> EvalResult<f64> {
    let mut result = parse_factor(parser)?;
    loop {
        match parser.current() {
            Token::Multiply => {
                parser.eat(Token::Multiply)?;
                result *= parse_factor(parser)?;
            },
            Token::Divide => {
                let offset = parser.offset();
                parser.eat(Token::Divide)?;
                let divisor = parse_factor(parser)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero { offset }.into());
                }
                result /= divisor;
            },
            _ => break,
        }
    }
    Ok(result)
}
