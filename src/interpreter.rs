/// The lexer module tokenizes expressions for the parser.
///
/// The lexer reads raw expression text and produces tokens on demand: numbers,
/// the arithmetic operators, parentheses and an end marker. This is the first
/// stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, one per request.
/// - Skips whitespace and disambiguates `*` from `**`.
/// - Reports stray characters and malformed numbers.
pub mod lexer;
/// The parser module evaluates expressions while parsing them.
///
/// The parser consumes tokens with a single token of lookahead and applies a
/// four-level recursive-descent grammar. Each rule returns the numeric value
/// of what it matched, so no syntax tree is ever built.
///
/// # Responsibilities
/// - Encodes operator precedence and associativity.
/// - Computes results, rejecting division by zero.
/// - Reports grammar violations with the offending token and its offset.
pub mod parser;
