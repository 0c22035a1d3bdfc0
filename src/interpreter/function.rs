use std::collections::HashMap;
use std::rc::Rc;

use crate::interpreter::operator::Operator;

/// A mapping from function names to their current definitions.
///
/// Owned by the [`Calculator`]; mutated only when a definition succeeds.
/// Redefining a name replaces the entry, but any [`Token::Function`]
/// snapshots of the old definition embedded in other functions keep pointing
/// at the old [`Function`] object.
///
/// [`Calculator`]: crate::interpreter::calculator::Calculator
pub type Registry = HashMap<String, Rc<Function>>;

/// One resolved unit of an expression or function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, pushed onto the stack as-is.
    Number(f64),
    /// A binary arithmetic operator.
    Op(Operator),
    /// A call to a user-defined function, captured by value at tokenization
    /// time. The snapshot is what makes redefinition safe: functions defined
    /// earlier keep the definition they were tokenized against.
    Function(Rc<Function>),
    /// A reference to one parameter of the enclosing function, by position.
    /// Only ever produced while tokenizing a function body.
    Variable(usize),
}

/// A named, fixed-arity user-defined function.
///
/// Constructed once by [`parse_definition`] and immutable afterwards. The
/// body is only validated in the sense that it tokenized; stack balance and
/// argument counts are checked lazily, on every evaluation.
///
/// [`parse_definition`]: crate::interpreter::parser::parse_definition
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The name the function is registered under.
    pub name: String,
    /// Declared parameter names, in declaration order.
    pub params: Vec<String>,
    /// The tokenized body.
    pub body: Vec<Token>,
}

impl Function {
    /// The number of arguments the function consumes from the stack.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
