use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in an arithmetic expression.
///
/// A token is the smallest meaningful unit of text produced by the
/// [`Tokenizer`]. Every token is consumed exactly once by the parser.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `42`.
    ///
    /// The lexer greedily takes every digit and decimal point in a row, so a
    /// run such as `1.2.3` is matched whole and then rejected when it does not
    /// convert to an `f64`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `**`
    #[token("**")]
    Power,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// End of input. Never matched by the lexer itself; the [`Tokenizer`]
    /// produces it once the source is exhausted.
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Multiply => write!(f, "'*'"),
            Self::Divide => write!(f, "'/'"),
            Self::Power => write!(f, "'**'"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Returns `None` for runs like `1.2.3` or `.` that are not valid floats; the
/// [`Tokenizer`] reports those as [`ParseError::InvalidNumber`].
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Pull-based tokenizer over a single expression.
///
/// Wraps the generated `logos` lexer, adding an idempotent [`Token::End`]
/// once the input is exhausted and mapping lexer failures onto
/// [`ParseError`]s that carry the offending text and its byte offset.
///
/// # Example
/// ```
/// use arithc::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("2 ** 3");
/// assert_eq!(tokenizer.next_token().unwrap(), Token::Number(2.0));
/// assert_eq!(tokenizer.next_token().unwrap(), Token::Power);
/// assert_eq!(tokenizer.next_token().unwrap(), Token::Number(3.0));
/// assert_eq!(tokenizer.next_token().unwrap(), Token::End);
/// assert_eq!(tokenizer.next_token().unwrap(), Token::End);
/// ```
pub struct Tokenizer<'source> {
    source:   &'source str,
    lexer:    logos::Lexer<'source, Token>,
    offset:   usize,
    finished: bool,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { source,
               lexer: Token::lexer(source),
               offset: 0,
               finished: false }
    }

    /// Produces the next token.
    ///
    /// After the input is exhausted every call returns [`Token::End`].
    ///
    /// # Errors
    /// - [`ParseError::InvalidCharacter`] if the next non-whitespace character
    ///   starts no token.
    /// - [`ParseError::InvalidNumber`] if a run of digits and decimal points
    ///   is not a valid number.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        if self.finished {
            return Ok(Token::End);
        }

        let Some(result) = self.lexer.next() else {
            self.finished = true;
            self.offset = self.source.len();
            trace!(offset = self.offset, "end of input");
            return Ok(Token::End);
        };

        let span = self.lexer.span();
        self.offset = span.start;

        match result {
            Ok(token) => {
                trace!(offset = self.offset, ?token, "token");
                Ok(token)
            },
            Err(()) => Err(self.classify_error(span.start)),
        }
    }

    /// Byte offset of the most recently produced token.
    ///
    /// Equals the input length once [`Token::End`] has been produced.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Turns a lexer failure at `offset` into a typed error.
    ///
    /// A failing slice that begins like a number came from the literal rule
    /// and is a malformed number; anything else is a stray character.
    fn classify_error(&self, offset: usize) -> ParseError {
        match self.source.get(offset..).and_then(|rest| rest.chars().next()) {
            Some(c) if c.is_ascii_digit() || c == '.' => {
                ParseError::InvalidNumber { literal: self.lexer.slice().to_string(),
                                            offset }
            },
            Some(character) => ParseError::InvalidCharacter { character, offset },
            None => ParseError::InvalidCharacter { character: char::REPLACEMENT_CHARACTER,
                                                   offset },
        }
    }
}

/// Yields every token before [`Token::End`].
///
/// Iteration stops after the end of input or after the first error.
impl Iterator for Tokenizer<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(Token::End) => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            },
        }
    }
}
