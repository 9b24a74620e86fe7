use std::mem::discriminant;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        lexer::{Token, Tokenizer},
        parser::binary::parse_expr,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;
pub type EvalResult<T> = Result<T, EvalError>;

/// Single-pass recursive-descent parser that computes values while it parses.
///
/// The parser holds exactly one token of lookahead, the current token, and
/// pulls the next one from its [`Tokenizer`] only when the current one is
/// consumed. No syntax tree is built: every grammar rule returns the `f64`
/// value of the text it matched.
///
/// # Example
/// ```
/// use arithc::interpreter::{lexer::Tokenizer, parser::core::Parser};
///
/// let mut parser = Parser::new(Tokenizer::new("(2 + 3) * 4")).unwrap();
/// assert_eq!(parser.parse().unwrap(), 20.0);
/// ```
pub struct Parser<'source> {
    tokenizer: Tokenizer<'source>,
    current:   Token,
    offset:    usize,
}

impl<'source> Parser<'source> {
    /// Creates a parser, pulling the first token from `tokenizer`.
    ///
    /// # Errors
    /// Returns a tokenizer error if the very first token is invalid.
    pub fn new(mut tokenizer: Tokenizer<'source>) -> ParseResult<Self> {
        let current = tokenizer.next_token()?;
        let offset = tokenizer.offset();
        Ok(Self { tokenizer,
                  current,
                  offset })
    }

    /// Evaluates one expression starting at the current token.
    ///
    /// Grammar: `expression := expr`
    ///
    /// Tokens left over after a complete expression are not inspected, so
    /// `3 4` evaluates to `3`. Use [`Parser::parse_to_end`] to reject them.
    pub fn parse(&mut self) -> EvalResult<f64> {
        parse_expr(self)
    }

    /// Evaluates one expression and requires the input to end right after it.
    ///
    /// # Errors
    /// Everything [`Parser::parse`] reports, plus
    /// [`ParseError::UnexpectedTrailingTokens`] when tokens remain.
    pub fn parse_to_end(&mut self) -> EvalResult<f64> {
        let value = parse_expr(self)?;

        if self.current != Token::End {
            return Err(ParseError::UnexpectedTrailingTokens { token:  self.current,
                                                              offset: self.offset, }.into());
        }

        Ok(value)
    }

    /// The next unconsumed token.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Byte offset of the current token in the input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Consumes the current token if it has the same kind as `expected`.
    ///
    /// Only the kind is compared, so any `Token::Number` matches any other.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] if the kinds differ.
    /// - Tokenizer errors raised while pulling the following token.
    pub(crate) fn eat(&mut self, expected: Token) -> ParseResult<()> {
        if discriminant(&self.current) != discriminant(&expected) {
            return Err(ParseError::UnexpectedToken { expected,
                                                     found: self.current,
                                                     offset: self.offset });
        }

        self.advance()
    }

    /// Replaces the current token with the next one from the tokenizer.
    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.tokenizer.next_token()?;
        self.offset = self.tokenizer.offset();
        Ok(())
    }
}
