/// The calculator session facade.
///
/// Owns the function registry and routes each input line to either the
/// definition parser or the tokenizer and evaluator, returning a tagged
/// [`Outcome`] so callers can tell a registration apart from a value.
///
/// [`Outcome`]: calculator::Outcome
pub mod calculator;
/// The stack machine.
///
/// Consumes a token sequence left to right over a single operand stack and
/// produces exactly one value or a runtime error. Shared by top-level
/// expressions and function bodies; recursion depth is bounded.
pub mod evaluator;
/// The function model.
///
/// Defines [`Token`], the immutable [`Function`] unit and the [`Registry`]
/// mapping names to current definitions.
///
/// [`Token`]: function::Token
/// [`Function`]: function::Function
/// [`Registry`]: function::Registry
pub mod function;
/// The word scanner.
///
/// Classifies whitespace-delimited words into operator symbols, numeric
/// literals, identifiers and unclassified words. Stateless; name resolution
/// lives in the parser.
pub mod lexer;
/// Operator semantics.
///
/// The closed set of six binary arithmetic operators and their evaluation
/// over `f64` operands.
pub mod operator;
/// Tokenization and definition parsing.
///
/// Resolves words against the registry, the enclosing parameter list, the
/// operator set and numeric literal syntax, and detects and parses function
/// definition lines.
pub mod parser;
