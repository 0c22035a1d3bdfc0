#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning a line of input into
/// tokens or into a function definition.
pub enum ParseError {
    /// A word matched no function, parameter, operator or numeric literal.
    UnrecognizedSymbol {
        /// The offending word, exactly as it appeared in the input.
        word: String,
    },
    /// A line containing a definition separator could not be parsed as a
    /// function definition.
    MalformedDefinition {
        /// Details about what made the definition invalid.
        reason: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedSymbol { word } => {
                write!(f, "Could not parse symbol '{word}'.")
            }

            Self::MalformedDefinition { reason } => {
                write!(f, "Malformed definition: {reason}.")
            }
        }
    }
}

impl std::error::Error for ParseError {}
