use logos::Logos;

use crate::interpreter::operator::Operator;

/// Represents one whitespace-delimited word of the input.
///
/// The lexer only classifies words; it never resolves names. A word is an
/// operator symbol, a numeric literal, an identifier-shaped word, or — via
/// the low-priority catch-all — an arbitrary run of non-whitespace. Because
/// the catch-all competes at full length with every other class, a word like
/// `3+4` lexes as one (unclassified) word rather than three tokens, which
/// preserves the whitespace-delimited grammar.
///
/// Resolution against the function registry and the enclosing parameter list
/// happens afterwards, in [`tokenize`], because it depends on session state
/// the lexer does not have.
///
/// [`tokenize`]: crate::interpreter::parser::tokenize
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Lexeme {
    /// One of the six operator symbols: `+ - * / % ^`.
    #[regex(r"[+\-*/%^]", |lex| Operator::from_symbol(lex.slice()), priority = 3)]
    Op(Operator),
    /// Numeric literal words, such as `42`, `-3`, `2.5` or `1e-10`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse().ok(), priority = 3)]
    #[regex(r"-?\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse().ok(), priority = 3)]
    Number(f64),
    /// Identifier-shaped words; candidate function or parameter names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", priority = 3)]
    Ident,
    /// Any other run of non-whitespace, kept whole so it can be reported as
    /// a single unrecognized symbol.
    #[regex(r"\S+", priority = 0)]
    Word,
    /// Whitespace between words.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}
