/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing input or parsing
/// function definitions. Parse errors include unrecognized words and malformed
/// definition lines, and are detected before any evaluation takes place.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the stack machine runs.
/// Runtime errors include arity mismatches, operand underflow and leftover
/// operands, and exhausting the function call recursion limit.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Unified error type returned by [`Calculator::eval_line`].
///
/// A failed call leaves the calculator untouched; in particular a definition
/// that fails to parse is never registered.
///
/// [`Calculator::eval_line`]: crate::interpreter::calculator::Calculator::eval_line
pub enum Error {
    /// The input could not be tokenized or parsed.
    Parse(ParseError),
    /// The input parsed but evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
