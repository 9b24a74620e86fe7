/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression: stray characters, malformed numbers, unexpected tokens and
/// missing factors.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while computing a value, such as division by
/// zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that aborts the evaluation of an expression.
///
/// Evaluation either yields a complete value or exactly one of these; there is
/// no partial result. The `Display` text is meant to be shown to the user as
/// is, for example after an `Error: ` prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression parsed but its value could not be computed.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Byte offset in the input at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Parse(e) => e.offset(),
            Self::Runtime(e) => e.offset(),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
