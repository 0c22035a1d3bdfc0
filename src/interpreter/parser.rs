use std::rc::Rc;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        function::{Function, Registry, Token},
        lexer::Lexeme,
    },
};

/// The character separating a definition header from its body.
const DEFINITION_SEPARATOR: char = ':';

/// Turns a piece of input text into a token sequence.
///
/// Each whitespace-delimited word is resolved in a fixed precedence order:
///
/// 1. a registered function name, captured by value from the registry,
/// 2. a parameter of the enclosing function (`params` is empty outside a
///    function body),
/// 3. an operator symbol,
/// 4. a floating-point literal.
///
/// The registry and parameter checks run on the raw word before the lexeme
/// class is consulted, so a function registered under a literal-shaped name
/// shadows the literal.
///
/// # Parameters
/// - `text`: The expression or function body to tokenize.
/// - `registry`: The functions currently known to the session.
/// - `params`: Parameter names of the enclosing function, in declaration
///   order.
///
/// # Errors
/// `ParseError::UnrecognizedSymbol` if a word matches none of the four
/// categories.
pub fn tokenize(text: &str, registry: &Registry, params: &[String]) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexeme::lexer(text);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let word = lexer.slice();

        if let Some(function) = registry.get(word) {
            tokens.push(Token::Function(Rc::clone(function)));
            continue;
        }
        if let Some(index) = params.iter().position(|p| p == word) {
            tokens.push(Token::Variable(index));
            continue;
        }

        match lexeme {
            Ok(Lexeme::Op(op)) => tokens.push(Token::Op(op)),
            Ok(Lexeme::Number(n)) => tokens.push(Token::Number(n)),
            // `parse` accepts a few spellings the lexer classes do not,
            // such as `nan` and `inf`.
            _ => match word.parse::<f64>() {
                Ok(n) => tokens.push(Token::Number(n)),
                Err(_) => {
                    return Err(ParseError::UnrecognizedSymbol {
                        word: word.to_string(),
                    })
                }
            },
        }
    }

    Ok(tokens)
}

/// Tries to parse a line as a function definition.
///
/// A line is a definition exactly when it contains one definition separator
/// (`:`). The text before the separator is split on whitespace into the
/// function name followed by its parameter names; the text after it becomes
/// the body, tokenized against the registry plus those parameters.
///
/// The parser is side-effect-free: the returned [`Function`] is handed to
/// the caller, who decides whether to register it. A line with no separator
/// is not an error; it signals a plain expression.
///
/// # Returns
/// - `Ok(Some(Function))` for a well-formed definition.
/// - `Ok(None)` when the line contains no separator.
///
/// # Errors
/// `ParseError::MalformedDefinition` when the line contains more than one
/// separator, names no function, or declares a parameter twice;
/// `ParseError::UnrecognizedSymbol` when the body fails to tokenize.
pub fn parse_definition(line: &str, registry: &Registry) -> Result<Option<Function>, ParseError> {
    let parts: Vec<&str> = line.split(DEFINITION_SEPARATOR).collect();
    let (header, body) = match parts.as_slice() {
        [_] => return Ok(None),
        [header, body] => (*header, *body),
        _ => {
            return Err(ParseError::MalformedDefinition {
                reason: format!(
                    "expected one function definition at a time, found {}",
                    parts.len()
                ),
            })
        }
    };

    let mut words = header.split_whitespace();
    let name = words.next().ok_or_else(|| ParseError::MalformedDefinition {
        reason: "a function definition requires a name".to_string(),
    })?;
    let params: Vec<String> = words.map(str::to_string).collect();

    for (index, param) in params.iter().enumerate() {
        if params[..index].contains(param) {
            return Err(ParseError::MalformedDefinition {
                reason: format!("parameter '{param}' is declared twice"),
            });
        }
    }

    let body = tokenize(body, registry, &params)?;

    Ok(Some(Function {
        name: name.to_string(),
        params,
        body,
    }))
}
