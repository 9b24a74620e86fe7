#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a value.
pub enum RuntimeError {
    /// The right operand of a division evaluated to exactly zero.
    DivisionByZero {
        /// Byte offset of the `/` operator in the input.
        offset: usize,
    },
}

impl RuntimeError {
    /// Byte offset in the input at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::DivisionByZero { offset } => *offset,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { offset } => {
                write!(f, "Division by zero (at offset {offset})")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
