#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a token sequence.
pub enum RuntimeError {
    /// A function was invoked with fewer values on the stack than its
    /// declared parameter count.
    ArityMismatch {
        /// The name of the function.
        name: String,
        /// The number of arguments the function declares.
        expected: usize,
        /// The number of values that were actually available.
        found: usize,
    },
    /// An operator was applied with fewer than two values on the stack.
    InsufficientOperands,
    /// Evaluation finished with more than one value left on the stack.
    UntreatedOperands,
    /// Evaluation finished with nothing on the stack.
    NoReturnValue,
    /// Nested function calls exceeded the recursion limit.
    StackExhausted,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Too few arguments for function '{name}', expected {expected} found {found}."
                )
            }

            Self::InsufficientOperands => write!(f, "Insufficient operands for operator."),

            Self::UntreatedOperands => {
                write!(f, "Untreated operands, maybe missing an operator?")
            }

            Self::NoReturnValue => write!(f, "No return value."),

            Self::StackExhausted => {
                write!(f, "Evaluation exceeded the function call recursion limit.")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
