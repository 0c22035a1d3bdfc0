use std::rc::Rc;

use crate::{
    error::Error,
    interpreter::{
        evaluator::evaluate,
        function::{Function, Registry},
        parser::{parse_definition, tokenize},
    },
};

/// The two distinguishable results of a successful [`Calculator::eval_line`].
///
/// A tagged result rather than a formatted string, so the presentation layer
/// can react to new definitions (for example by rendering a shortcut for the
/// name) without sniffing message prefixes.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was a plain expression and evaluated to this value.
    Value(f64),
    /// The line was a definition; the named function is now registered.
    Defined(String),
}

/// Stores one interactive calculator session.
///
/// The calculator owns the [`Registry`] of user-defined functions and routes
/// each input line to either the definition parser or the tokenizer and
/// evaluator. Definitions live for the lifetime of the session; there is no
/// persistence and no removal.
///
/// ## Usage
///
/// Create one `Calculator` per session and feed it lines. A failed line
/// leaves the session unchanged and the caller may simply try another.
pub struct Calculator {
    functions: Registry,
}

#[allow(clippy::new_without_default)]
impl Calculator {
    /// Creates a session with no user-defined functions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: Registry::new(),
        }
    }

    /// Evaluates one line of input.
    ///
    /// A line containing the definition separator is parsed as a function
    /// definition and, on success, registered under its name — replacing any
    /// previous definition, while functions that embedded the old definition
    /// keep their snapshot of it. Any other line is tokenized as a top-level
    /// expression and run through the stack machine.
    ///
    /// # Returns
    /// [`Outcome::Defined`] with the function name for a definition,
    /// [`Outcome::Value`] for an expression.
    ///
    /// # Errors
    /// Any [`ParseError`] or [`RuntimeError`], wrapped in [`Error`]. Errors
    /// are terminal for the line but never alter the registry.
    ///
    /// [`ParseError`]: crate::error::ParseError
    /// [`RuntimeError`]: crate::error::RuntimeError
    pub fn eval_line(&mut self, line: &str) -> Result<Outcome, Error> {
        if let Some(function) = parse_definition(line, &self.functions)? {
            let name = function.name.clone();
            self.register(function);
            return Ok(Outcome::Defined(name));
        }

        let tokens = tokenize(line, &self.functions, &[])?;
        let value = evaluate(&tokens, &[])?;
        Ok(Outcome::Value(value))
    }

    /// Registers a function, replacing any previous definition of the name.
    ///
    /// No validation happens here; a body that can never evaluate cleanly
    /// fails when it is called, not when it is registered.
    pub fn register(&mut self, function: Function) {
        self.functions.insert(function.name.clone(), Rc::new(function));
    }

    /// The names of all currently registered functions, in no particular
    /// order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}
