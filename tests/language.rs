use rpncalc::error::{Error, ParseError, RuntimeError};
use rpncalc::{Calculator, Outcome};

fn value(calc: &mut Calculator, line: &str) -> f64 {
    match calc.eval_line(line) {
        Ok(Outcome::Value(v)) => v,
        other => panic!("Expected a value for {line:?}, got: {other:?}"),
    }
}

fn define(calc: &mut Calculator, line: &str) -> String {
    match calc.eval_line(line) {
        Ok(Outcome::Defined(name)) => name,
        other => panic!("Expected a definition for {line:?}, got: {other:?}"),
    }
}

fn fail(calc: &mut Calculator, line: &str) -> Error {
    match calc.eval_line(line) {
        Err(e) => e,
        other => panic!("Line {line:?} succeeded but was expected to fail: {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    let mut calc = Calculator::new();
    assert_eq!(value(&mut calc, "3 4 +"), 7.0);
    assert_eq!(value(&mut calc, "3 4 *"), 12.0);
    assert_eq!(value(&mut calc, "7 2 /"), 3.5);
    assert_eq!(value(&mut calc, "2 3 ^"), 8.0);
    assert_eq!(value(&mut calc, "10 3 %"), 1.0);
    assert_eq!(value(&mut calc, "1 2 3 4 + + +"), 10.0);
}

#[test]
fn operands_apply_in_push_order() {
    // `a b -` is a - b, not b - a.
    let mut calc = Calculator::new();
    assert_eq!(value(&mut calc, "5 3 -"), 2.0);
    assert_eq!(value(&mut calc, "2 8 /"), 0.25);
}

#[test]
fn division_and_modulo_follow_ieee() {
    let mut calc = Calculator::new();
    assert_eq!(value(&mut calc, "1 0 /"), f64::INFINITY);
    assert_eq!(value(&mut calc, "-1 0 /"), f64::NEG_INFINITY);
    assert!(value(&mut calc, "0 0 /").is_nan());
    assert!(value(&mut calc, "1 0 %").is_nan());
    assert!(value(&mut calc, "-1 0.5 ^").is_nan());
}

#[test]
fn literal_spellings() {
    let mut calc = Calculator::new();
    assert_eq!(value(&mut calc, "-3 2 *"), -6.0);
    assert_eq!(value(&mut calc, ".5 2 *"), 1.0);
    assert_eq!(value(&mut calc, "2.5e1"), 25.0);
    assert_eq!(value(&mut calc, "inf 1 +"), f64::INFINITY);
    assert!(value(&mut calc, "nan").is_nan());
}

#[test]
fn unrecognized_words_name_the_offender() {
    let mut calc = Calculator::new();
    // Words are whitespace-delimited, so `3+4` is one bad word.
    for (line, word) in [("2 foo +", "foo"), ("3+4", "3+4"), ("3.5.6 1 +", "3.5.6")] {
        assert_eq!(
            fail(&mut calc, line),
            Error::Parse(ParseError::UnrecognizedSymbol {
                word: word.to_string()
            }),
            "for line {line:?}"
        );
    }
}

#[test]
fn stack_residue_errors() {
    let mut calc = Calculator::new();
    assert_eq!(
        fail(&mut calc, "1 2 3 +"),
        Error::Runtime(RuntimeError::UntreatedOperands)
    );
    assert_eq!(
        fail(&mut calc, "1 +"),
        Error::Runtime(RuntimeError::InsufficientOperands)
    );
    assert_eq!(
        fail(&mut calc, "   "),
        Error::Runtime(RuntimeError::NoReturnValue)
    );
}

#[test]
fn define_and_call() {
    let mut calc = Calculator::new();
    assert_eq!(define(&mut calc, "sq x : x x *"), "sq");
    assert_eq!(value(&mut calc, "3 sq"), 9.0);
    // Calling through a function matches evaluating the substituted body.
    assert_eq!(value(&mut calc, "2 sq"), value(&mut calc, "2 2 *"));

    define(&mut calc, "add a b : a b +");
    assert_eq!(value(&mut calc, "2 5 add"), 7.0);
}

#[test]
fn zero_arity_functions_act_as_constants() {
    let mut calc = Calculator::new();
    define(&mut calc, "pi : 3.14159");
    assert_eq!(value(&mut calc, "pi 2 *"), 6.28318);
}

#[test]
fn functions_nest() {
    let mut calc = Calculator::new();
    define(&mut calc, "sq x : x x *");
    define(&mut calc, "quad x : x sq sq");
    assert_eq!(value(&mut calc, "2 quad"), 16.0);

    define(&mut calc, "inc x : x 1 +");
    define(&mut calc, "inc2 x : x inc inc");
    assert_eq!(value(&mut calc, "0 inc2"), 2.0);
}

#[test]
fn arguments_bind_in_pop_order() {
    // The topmost stack value becomes the first parameter, so `5 3 diff`
    // computes 3 - 5.
    let mut calc = Calculator::new();
    define(&mut calc, "diff a b : a b -");
    assert_eq!(value(&mut calc, "5 3 diff"), -2.0);
}

#[test]
fn redefinition_replaces_future_lookups() {
    let mut calc = Calculator::new();
    define(&mut calc, "one : 1");
    assert_eq!(value(&mut calc, "one"), 1.0);
    define(&mut calc, "one : 2");
    assert_eq!(value(&mut calc, "one"), 2.0);
}

#[test]
fn embedded_functions_keep_their_snapshot() {
    let mut calc = Calculator::new();
    define(&mut calc, "one : 1");
    define(&mut calc, "succ x : x one +");
    define(&mut calc, "one : 2");
    // `succ` still uses the definition of `one` it was tokenized against.
    assert_eq!(value(&mut calc, "0 succ"), 1.0);
    assert_eq!(value(&mut calc, "one"), 2.0);
}

#[test]
fn arity_mismatch_reports_exact_counts() {
    let mut calc = Calculator::new();
    define(&mut calc, "sq x : x x *");
    assert_eq!(
        fail(&mut calc, "sq"),
        Error::Runtime(RuntimeError::ArityMismatch {
            name: "sq".to_string(),
            expected: 1,
            found: 0,
        })
    );

    define(&mut calc, "add a b : a b +");
    assert_eq!(
        fail(&mut calc, "1 add"),
        Error::Runtime(RuntimeError::ArityMismatch {
            name: "add".to_string(),
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn malformed_definitions() {
    let mut calc = Calculator::new();
    for line in ["f x : y : z", "a : b : c : d", " : 1 2 +", "f x x : x"] {
        assert!(
            matches!(
                fail(&mut calc, line),
                Error::Parse(ParseError::MalformedDefinition { .. })
            ),
            "for line {line:?}"
        );
    }
}

#[test]
fn failed_definitions_are_not_registered() {
    let mut calc = Calculator::new();
    assert_eq!(
        fail(&mut calc, "f x : x bogus +"),
        Error::Parse(ParseError::UnrecognizedSymbol {
            word: "bogus".to_string()
        })
    );
    // `f` never made it into the registry.
    assert_eq!(
        fail(&mut calc, "1 f"),
        Error::Parse(ParseError::UnrecognizedSymbol {
            word: "f".to_string()
        })
    );
    assert_eq!(calc.function_names().count(), 0);
}

#[test]
fn empty_bodies_fail_lazily() {
    // Registration never validates the body; the error surfaces on call.
    let mut calc = Calculator::new();
    define(&mut calc, "f :");
    assert_eq!(
        fail(&mut calc, "f"),
        Error::Runtime(RuntimeError::NoReturnValue)
    );
}

#[test]
fn function_names_shadow_everything_else() {
    // Resolution checks the registry before the operator set and before
    // literal parsing, so a function registered under such a spelling wins.
    let mut calc = Calculator::new();
    define(&mut calc, "+ : 42");
    assert_eq!(value(&mut calc, "+"), 42.0);

    define(&mut calc, "7 : 1");
    assert_eq!(value(&mut calc, "7"), 1.0);
}

#[test]
fn parameters_shadow_operators_inside_bodies() {
    let mut calc = Calculator::new();
    // `-` names a parameter here, so the body pushes it twice and multiplies.
    define(&mut calc, "weird - : - - *");
    assert_eq!(value(&mut calc, "3 weird"), 9.0);
}

#[test]
fn deep_call_chains_exhaust_cleanly() {
    let mut calc = Calculator::new();
    define(&mut calc, "f x : x 1 +");
    // Each redefinition embeds the previous snapshot, nesting one call
    // deeper per link.
    for _ in 0..1100 {
        define(&mut calc, "f x : x f");
    }
    assert_eq!(
        fail(&mut calc, "1 f"),
        Error::Runtime(RuntimeError::StackExhausted)
    );
}

#[test]
fn errors_leave_the_session_usable() {
    let mut calc = Calculator::new();
    define(&mut calc, "sq x : x x *");
    fail(&mut calc, "sq");
    fail(&mut calc, "nonsense");
    fail(&mut calc, "f : g : h");
    assert_eq!(value(&mut calc, "4 sq"), 16.0);
    assert_eq!(calc.function_names().count(), 1);
}

#[test]
fn error_messages_are_human_readable() {
    let mut calc = Calculator::new();
    assert_eq!(
        fail(&mut calc, "2 foo +").to_string(),
        "Could not parse symbol 'foo'."
    );
    define(&mut calc, "sq x : x x *");
    assert_eq!(
        fail(&mut calc, "sq").to_string(),
        "Too few arguments for function 'sq', expected 1 found 0."
    );
    assert_eq!(
        fail(&mut calc, "1 2").to_string(),
        "Untreated operands, maybe missing an operator?"
    );
}
