//! # arithc
//!
//! arithc evaluates arithmetic expressions written as text. It supports `+`,
//! `-`, `*`, `/`, right-associative `**`, unary signs and parentheses, and
//! returns an `f64` or a descriptive error.
//!
//! Evaluation is a single pass: a pull-based tokenizer feeds a
//! recursive-descent parser that computes values as it goes.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        lexer::{Token, Tokenizer},
        parser::core::{EvalResult, Parser},
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can abort an evaluation, split into
/// parse errors (tokenizing and grammar) and runtime errors (computing the
/// value), plus the [`error::EvalError`] that carries either.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches the byte offset of the failure for user feedback.
/// - Implements `Display` and `std::error::Error` for direct reporting.
pub mod error;
/// Tokenizer and parser.
///
/// This module ties together the lexing and the evaluating parser. It
/// exposes the building blocks behind [`evaluate`] for callers that want to
/// drive the tokenizer or the parser themselves.
///
/// # Responsibilities
/// - Converts text into tokens.
/// - Applies the grammar and computes the value.
pub mod interpreter;
/// Interactive read-eval-print loop.
///
/// A thin driver that reads one expression per line, hands it to
/// [`evaluate`] and prints the value or the error. It contains no grammar
/// logic of its own.
pub mod repl;

/// Evaluates an arithmetic expression.
///
/// Tokens after a complete expression are ignored, so `"3 4"` evaluates to
/// `3.0`; see [`evaluate_strict`] to reject them.
///
/// # Errors
/// Returns an error if the text cannot be tokenized or parsed, or if a
/// division by zero occurs.
///
/// # Examples
/// ```
/// use arithc::evaluate;
///
/// assert_eq!(evaluate("3 + 5 * (10 - 4) / 2").unwrap(), 18.0);
/// assert_eq!(evaluate("2 ** 3 ** 2").unwrap(), 512.0);
///
/// // Division by zero is an error, not an infinity.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    evaluate_with(expression, false)
}

/// Evaluates an arithmetic expression that must span the whole input.
///
/// # Errors
/// Everything [`evaluate`] reports, plus
/// [`ParseError::UnexpectedTrailingTokens`] when tokens remain after the
/// expression.
///
/// # Examples
/// ```
/// use arithc::{evaluate, evaluate_strict};
///
/// assert_eq!(evaluate("3 4").unwrap(), 3.0);
/// assert!(evaluate_strict("3 4").is_err());
/// ```
pub fn evaluate_strict(expression: &str) -> EvalResult<f64> {
    evaluate_with(expression, true)
}

/// Splits an expression into its tokens, without the final end marker.
///
/// # Errors
/// Returns the first tokenizer error.
///
/// # Examples
/// ```
/// use arithc::{interpreter::lexer::Token, tokenize};
///
/// assert_eq!(tokenize("-2**x").unwrap_err().offset(), 4);
/// assert_eq!(tokenize("1 * 2").unwrap(),
///            vec![Token::Number(1.0), Token::Multiply, Token::Number(2.0)]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParseError> {
    Tokenizer::new(expression).collect()
}

fn evaluate_with(expression: &str, strict: bool) -> EvalResult<f64> {
    let result = Parser::new(Tokenizer::new(expression)).map_err(EvalError::from)
                                                        .and_then(|mut parser| {
                                                            if strict {
                                                                parser.parse_to_end()
                                                            } else {
                                                                parser.parse()
                                                            }
                                                        });

    match &result {
        Ok(value) => debug!(expression, value, strict, "evaluated"),
        Err(e) => debug!(expression, error = %e, strict, "evaluation failed"),
    }

    result
}
