/// The parser itself and its entry points.
///
/// Holds the parser state (the current token and the tokenizer it pulls
/// from), token consumption and the result aliases shared by the grammar.
pub mod core;

/// Binary operator levels.
///
/// Implements the `expr` (`+`, `-`), `power` (`**`) and `term` (`*`, `/`)
/// rules, evaluating each operator as soon as both operands are known.
pub mod binary;

/// Factors.
///
/// Numbers, parenthesized groups and prefix signs.
pub mod unary;
