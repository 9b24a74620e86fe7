use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// Found a character that starts no valid token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        offset:    usize,
    },
    /// A run of digits and decimal points that is not a valid number, such as
    /// `1.2.3`.
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal in the input.
        offset:  usize,
    },
    /// The parser required one specific token and found another.
    UnexpectedToken {
        /// The token the grammar required.
        expected: Token,
        /// The token actually found.
        found:    Token,
        /// Byte offset of the found token.
        offset:   usize,
    },
    /// No factor (number, group or signed factor) starts at this token.
    InvalidFactor {
        /// The token found where a factor was required.
        found:  Token,
        /// Byte offset of the found token.
        offset: usize,
    },
    /// Found extra tokens after a complete expression. Only reported by the
    /// strict entry points.
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token:  Token,
        /// Byte offset of the leftover token.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset in the input at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. }
            | Self::InvalidNumber { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::InvalidFactor { offset, .. }
            | Self::UnexpectedTrailingTokens { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, offset } => {
                write!(f, "Invalid character: {character} (at offset {offset})")
            },

            Self::InvalidNumber { literal, offset } => {
                write!(f, "Invalid number: {literal} (at offset {offset})")
            },

            Self::UnexpectedToken { expected, found, offset } => write!(f,
                                                                        "Unexpected token: expected {expected}, found {found} (at offset {offset})"),

            Self::InvalidFactor { found, offset } => write!(f,
                                                            "Invalid factor: expected a number, '(' or a sign, found {found} (at offset {offset})"),

            Self::UnexpectedTrailingTokens { token, offset } => write!(f,
                                                                       "Extra tokens after expression, starting with {token} (at offset {offset})"),
        }
    }
}

impl std::error::Error for ParseError {}
