//! # rpncalc
//!
//! rpncalc is a reverse Polish notation calculator written in Rust.
//! It evaluates whitespace-delimited postfix expressions and supports
//! user-defined, named, fixed-arity functions that may reference previously
//! defined functions.
//!
//! ```
//! use rpncalc::{Calculator, Outcome};
//!
//! let mut calc = Calculator::new();
//!
//! // Operands first, operator last: `5 3 -` is 5 - 3.
//! assert_eq!(calc.eval_line("5 3 -"), Ok(Outcome::Value(2.0)));
//!
//! // A line with a `:` defines a function; it can be called afterwards.
//! assert_eq!(
//!     calc.eval_line("sq x : x x *"),
//!     Ok(Outcome::Defined("sq".to_string()))
//! );
//! assert_eq!(calc.eval_line("3 sq"), Ok(Outcome::Value(9.0)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing input,
/// parsing a function definition, or running the stack machine. Every error
/// carries one human-readable message and is terminal for the line that
/// produced it; the session itself always survives.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Provides a unified [`Error`](error::Error) type for the session facade.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of line evaluation.
///
/// This module ties together the word scanner, the tokenizer, the definition
/// parser, the stack machine and the function registry to provide a complete
/// runtime for postfix expression evaluation. It exposes the public API for
/// feeding input lines to a session.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and the
///   function registry.
/// - Provides the [`Calculator`] session entry point.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::interpreter::calculator::{Calculator, Outcome};
