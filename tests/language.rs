use std::fs;

use arithc::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate, evaluate_strict,
    interpreter::lexer::Token,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_examples(&content) {
            count += 1;
            match (evaluate(&expression), expected.as_str()) {
                (Err(_), "error") => {},
                (Ok(value), expected) => {
                    let expected: f64 =
                        expected.parse()
                                .unwrap_or_else(|_| panic!("{path:?}: `{expression}` evaluated to {value}, expected {expected}"));
                    assert_close(value, expected);
                },
                (Err(e), expected) => {
                    panic!("{path:?}: `{expression}` failed with `{e}`, expected {expected}")
                },
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```arithc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, expected)) = line.split_once("=>") {
            examples.push((expression.trim().to_string(), expected.trim().to_string()));
        }
    }

    examples
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "expected {expected}, got {actual}");
}

/// Debug text of an evaluation, so that two `NaN` results compare equal.
fn outcome(src: &str) -> String {
    format!("{:?}", evaluate(src))
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_close(value, expected),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) -> EvalError {
    match evaluate(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("42", 42.0);
    assert_value("3.25", 3.25);
    assert_value(".5 + 5.", 5.5);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("3 + 5 * (10 - 4) / 2", 18.0);
}

#[test]
fn power_takes_whole_products_as_operands() {
    assert_value("2 * 3 ** 2", 36.0);
    assert_value("2 ** 3 * 2", 64.0);
    assert_value("8 / 2 ** 2", 16.0);
    assert_value("1 + 2 ** 2", 5.0);
    assert_value("2 ** 2 + 1", 5.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("2 ** 3 ** 2", 512.0);
    assert_value("(2 ** 3) ** 2", 64.0);
    assert_value("2 ** -1", 0.5);
    assert_value("4 ** .5", 2.0);
}

#[test]
fn additive_and_multiplicative_chains_are_left_associative() {
    assert_value("10 - 3 - 2", 5.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 * 6 / 3", 4.0);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn unary_signs_stack() {
    assert_value("--5", 5.0);
    assert_value("+-3", -3.0);
    assert_value("-+-+1", 1.0);
    assert_value("3 - -2", 5.0);
    assert_value("-2 ** 2", 4.0);
    assert_value("-(1 + 1)", -2.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4) * 5", 70.0);
    assert_value("((((7))))", 7.0);
    assert_value("(1 + (2 * (3 + (4 / (5 - 3)))))", 11.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("3+5").unwrap(), evaluate(" 3 + 5 ").unwrap());
    assert_value("\t2\n*\r\n3 ", 6.0);
}

#[test]
fn evaluation_is_repeatable() {
    let src = "1.1 * (3.3 - 2) ** 2 / 7";
    assert_eq!(evaluate(src), evaluate(src));
    assert!(evaluate(src).unwrap().is_finite());
    assert_eq!(evaluate("5 / 0"), evaluate("5 / 0"));

    // A negative base under a fractional exponent is NaN, which never
    // compares equal to itself.
    let src = "1.1 * (2 - 3.3) ** 2 / 7";
    assert!(evaluate(src).unwrap().is_nan());
    assert_eq!(outcome(src), outcome(src));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(assert_failure("5 / 0"),
               EvalError::Runtime(RuntimeError::DivisionByZero { offset: 2 }));
    assert!(matches!(assert_failure("1 / (2 - 2)"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { offset: 2 })));
    assert!(matches!(assert_failure("1 / -0"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { .. })));
    assert_value("0 / 5", 0.0);
}

#[test]
fn invalid_character_names_the_character() {
    let err = assert_failure("3 & 4");
    assert_eq!(err,
               EvalError::Parse(ParseError::InvalidCharacter { character: '&',
                                                               offset:    2, }));
    assert!(err.to_string().contains('&'));

    assert!(matches!(assert_failure("x"),
                     EvalError::Parse(ParseError::InvalidCharacter { character: 'x',
                                                                     offset:    0, })));
    assert!(matches!(assert_failure("2 ^ 3"),
                     EvalError::Parse(ParseError::InvalidCharacter { character: '^', .. })));
}

#[test]
fn malformed_numbers_are_rejected() {
    assert_eq!(assert_failure("1.2.3 + 1"),
               EvalError::Parse(ParseError::InvalidNumber { literal: "1.2.3".to_string(),
                                                            offset:  0, }));
    assert!(matches!(assert_failure("2 * ."),
                     EvalError::Parse(ParseError::InvalidNumber { offset: 4, .. })));
}

#[test]
fn unbalanced_parenthesis_expects_right_paren() {
    assert_eq!(assert_failure("(3 + 4"),
               EvalError::Parse(ParseError::UnexpectedToken { expected: Token::RightParen,
                                                              found:    Token::End,
                                                              offset:   6, }));
    assert!(matches!(assert_failure("(1 (2)"),
                     EvalError::Parse(ParseError::UnexpectedToken { expected: Token::RightParen,
                                                                    found: Token::LeftParen,
                                                                    .. })));
}

#[test]
fn missing_operand_is_an_invalid_factor() {
    assert_eq!(assert_failure("3 +"),
               EvalError::Parse(ParseError::InvalidFactor { found:  Token::End,
                                                            offset: 3, }));
    assert!(matches!(assert_failure(""),
                     EvalError::Parse(ParseError::InvalidFactor { found: Token::End, .. })));
    assert!(matches!(assert_failure("* 2"),
                     EvalError::Parse(ParseError::InvalidFactor { found: Token::Multiply,
                                                                  offset: 0, })));
    assert!(matches!(assert_failure("()"),
                     EvalError::Parse(ParseError::InvalidFactor { found: Token::RightParen,
                                                                  .. })));
}

#[test]
fn trailing_tokens_are_ignored_by_default() {
    assert_value("3 4", 3.0);
    assert_value("3 + 4 )", 7.0);
    assert_value("(1) (2)", 1.0);
}

#[test]
fn strict_evaluation_rejects_trailing_tokens() {
    assert_eq!(evaluate_strict("3 + 4").unwrap(), 7.0);
    assert_eq!(evaluate_strict("3 4").unwrap_err(),
               EvalError::Parse(ParseError::UnexpectedTrailingTokens { token:  Token::Number(4.0),
                                                                       offset: 2, }));
    assert!(matches!(evaluate_strict("3 + 4 )").unwrap_err(),
                     EvalError::Parse(ParseError::UnexpectedTrailingTokens { token: Token::RightParen,
                                                                             offset: 6, })));
}

#[test]
fn errors_display_a_readable_message() {
    assert_eq!(assert_failure("5 / 0").to_string(),
               "Division by zero (at offset 2)");
    assert_eq!(assert_failure("3 & 4").to_string(),
               "Invalid character: & (at offset 2)");
    assert_eq!(assert_failure("(3 + 4").to_string(),
               "Unexpected token: expected ')', found end of input (at offset 6)");
}

#[test]
fn independent_evaluations_run_in_parallel() {
    let handles: Vec<_> = (1..=8).map(|n| {
                                     std::thread::spawn(move || {
                                         evaluate(&format!("{n} * ({n} + 1) / 2"))
                                     })
                                 })
                                 .collect();

    for (n, handle) in (1..=8).zip(handles) {
        let value = handle.join().expect("evaluation thread panicked").unwrap();
        assert_close(value, f64::from(n * (n + 1) / 2));
    }
}
