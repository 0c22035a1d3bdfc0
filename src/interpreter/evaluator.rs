use crate::{error::RuntimeError, interpreter::function::Token};

/// Result type used by the evaluator.
///
/// Evaluation either produces a single `f64` or a `RuntimeError` describing
/// the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum depth of nested function calls.
///
/// Snapshot capture makes reference cycles between functions impossible, but
/// a long chain of redefinitions still nests one call per link, so depth is
/// bounded explicitly and exceeding the bound is reported as
/// [`RuntimeError::StackExhausted`] instead of overflowing the host stack.
pub const RECURSION_LIMIT: usize = 1024;

/// Evaluates a token sequence with the stack machine.
///
/// Tokens are processed strictly left to right over a single operand stack:
/// literals and parameter bindings push a value, an operator pops two values
/// and pushes its result, and a function call pops as many values as the
/// function declares parameters and evaluates its body recursively. After
/// the last token, exactly one value must remain on the stack.
///
/// # Parameters
/// - `tokens`: The sequence to evaluate.
/// - `bindings`: One value per parameter of the enclosing function; empty
///   for a top-level expression.
///
/// # Returns
/// The single value left on the stack.
///
/// # Errors
/// - `ArityMismatch` if a function finds fewer stack values than its arity.
/// - `InsufficientOperands` if an operator finds fewer than two values.
/// - `UntreatedOperands` if more than one value remains at the end.
/// - `NoReturnValue` if no value remains at the end.
/// - `StackExhausted` if function calls nest deeper than [`RECURSION_LIMIT`].
pub fn evaluate(tokens: &[Token], bindings: &[f64]) -> EvalResult<f64> {
    eval_at_depth(tokens, bindings, 0)
}

fn eval_at_depth(tokens: &[Token], bindings: &[f64], depth: usize) -> EvalResult<f64> {
    if depth > RECURSION_LIMIT {
        return Err(RuntimeError::StackExhausted);
    }

    let mut stack: Vec<f64> = Vec::new();
    for token in tokens {
        match token {
            Token::Number(n) => stack.push(*n),
            // The caller checked the argument count against the parameter
            // count, so the index is always in range.
            Token::Variable(index) => stack.push(bindings[*index]),
            Token::Op(op) => {
                let rhs = stack.pop().ok_or(RuntimeError::InsufficientOperands)?;
                let lhs = stack.pop().ok_or(RuntimeError::InsufficientOperands)?;
                stack.push(op.evaluate(lhs, rhs));
            }
            Token::Function(function) => {
                let arity = function.arity();
                if stack.len() < arity {
                    return Err(RuntimeError::ArityMismatch {
                        name: function.name.clone(),
                        expected: arity,
                        found: stack.len(),
                    });
                }
                // Arguments bind in pop order: the topmost stack value
                // becomes binding 0.
                let mut args = stack.split_off(stack.len() - arity);
                args.reverse();
                stack.push(eval_at_depth(&function.body, &args, depth + 1)?);
            }
        }
    }

    if stack.len() > 1 {
        return Err(RuntimeError::UntreatedOperands);
    }
    stack.pop().ok_or(RuntimeError::NoReturnValue)
}
