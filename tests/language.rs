use tally::frontend::lexer::tokenize;
use tally::frontend::token::Token;
use tally::runtime::runtime_error::RuntimeError;
use tally::runtime::vm::Vm;
use tally::{Error, evaluate, evaluate_with};

fn eval(src: &str) -> f64 {
    match evaluate(src) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("program {src:?} produced no value"),
        Err(e) => panic!("program {src:?} failed: {e}"),
    }
}

fn eval_err(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("expected {src:?} to fail, got {value:?}"),
        Err(e) => e,
    }
}

#[test]
fn sample_program() {
    assert_eq!(eval("hp=10; damage=5; hp/damage+(1.25*2);"), 5.0);
}

#[test]
fn single_operations_match_host_arithmetic() {
    let cases: &[(f64, &str, f64)] = &[
        (7.0, "+", 2.5),
        (7.0, "-", 2.5),
        (7.0, "*", 2.5),
        (7.0, "/", 2.5),
        (7.0, "%", 2.5),
        (0.1, "+", 0.2),
        (-3.0, "/", 4.0),
        (-9.0, "%", 4.0),
    ];

    for &(a, op, b) in cases {
        let expected = match op {
            "+" => a + b,
            "-" => a - b,
            "*" => a * b,
            "/" => a / b,
            "%" => a % b,
            _ => unreachable!(),
        };
        let src = format!("{} {} {};", a, op, b);
        assert_eq!(eval(&src), expected, "source: {src}");
    }
}

#[test]
fn assignment_round_trip() {
    assert_eq!(eval("x = 5; x;"), 5.0);
}

#[test]
fn chained_addition_is_a_parse_error() {
    match eval_err("1+2+3;") {
        Error::Parse(e) => {
            assert_eq!(e.found, Token::Plus);
            assert_eq!(e.expected, ";");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn parentheses_lift_the_single_operator_limit() {
    assert_eq!(eval("(1+2)+3;"), 6.0);
    assert_eq!(eval("((1+2)*(3+4))%5;"), 1.0);
}

#[test]
fn variables_are_stable_across_runs() {
    let mut vm = Vm::new();
    // result policy is last-Store-wins (DESIGN.md, decision 1), so the sum only shows on a rerun
    assert_eq!(evaluate_with(&mut vm, "a=1; b=2; a+b;").unwrap(), Some(2.0));
    assert_eq!(evaluate_with(&mut vm, "a+b;").unwrap(), Some(3.0));
    assert_eq!(evaluate_with(&mut vm, "a;").unwrap(), Some(1.0));
    assert_eq!(vm.symbols().lookup("a"), Some(0));
    assert_eq!(vm.symbols().lookup("b"), Some(1));
}

#[test]
fn fractional_literal_reconstruction() {
    assert_eq!(tokenize("1.25").unwrap(), vec![Token::Number(1.25)]);
}

#[test]
fn last_store_wins() {
    assert_eq!(eval("a=10; a+1;"), 10.0);
    assert_eq!(eval("a=10; b=a+1;"), 11.0);
}

#[test]
fn bare_expressions_only_return_the_last_one() {
    assert_eq!(eval("1; 2; 3*4;"), 12.0);
}

#[test]
fn missing_semicolon() {
    match eval_err("hp=10 damage=5;") {
        Error::Parse(e) => {
            assert_eq!(e.expected, ";");
            assert_eq!(e.found, Token::Identifier("damage".to_string()));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unrecognized_character() {
    let err = eval_err("a = 1 # comment");
    assert!(matches!(err, Error::Lex(_)), "got {err:?}");
    assert!(err.to_string().contains("'#'"), "msg was: {err}");
}

#[test]
fn negative_literals() {
    assert_eq!(eval("-2.5 * -2;"), 5.0);
    assert_eq!(eval("3 - -1;"), 4.0);
}

#[test]
fn read_before_assignment_fails() {
    match eval_err("y = x + 1;") {
        Error::Runtime(RuntimeError::UndefinedSlotRead { name }) => assert_eq!(name, "x"),
        other => panic!("expected undefined read, got {other:?}"),
    }
}

#[test]
fn division_by_zero_fails() {
    assert!(matches!(
        eval_err("1/0;"),
        Error::Runtime(RuntimeError::DivisionByZero)
    ));
    assert!(matches!(
        eval_err("n = 0; 5 % n;"),
        Error::Runtime(RuntimeError::ModuloByZero)
    ));
}

#[test]
fn nested_assignment_is_rejected_before_running() {
    let mut vm = Vm::new();
    let err = evaluate_with(&mut vm, "a = (b = 1);").unwrap_err();
    assert!(
        matches!(err, Error::Runtime(RuntimeError::StackCheck(_))),
        "got {err:?}"
    );
    assert_eq!(vm.variable("b"), None);
}

#[test]
fn failed_run_leaves_no_variables_behind() {
    let mut vm = Vm::new();
    let err = evaluate_with(&mut vm, "a=1; b=1/0;").unwrap_err();
    assert!(
        matches!(err, Error::Runtime(RuntimeError::DivisionByZero)),
        "got {err:?}"
    );
    assert_eq!(vm.variable("a"), None);
    assert_eq!(vm.symbols().len(), 0);

    evaluate_with(&mut vm, "a=1;").unwrap();
    assert!(evaluate_with(&mut vm, "a=2; c=missing;").is_err());
    assert_eq!(vm.variable("a"), Some(1.0));
    assert_eq!(vm.symbols().lookup("missing"), None);
}

#[test]
fn empty_program_has_no_value() {
    assert_eq!(evaluate("").unwrap(), None);
    assert_eq!(evaluate(" \n\t").unwrap(), None);
}

#[test]
fn compiled_image_runs_the_same() {
    let program = tally::compile("hp=10; damage=4; hp%damage;").unwrap();
    let bytes = program.to_bytes().unwrap();
    let decoded = tally::bytecode::ProgramBc::from_bytes(&bytes).unwrap();

    let mut vm = Vm::new();
    assert_eq!(vm.run(&decoded).unwrap(), Some(4.0));
    assert_eq!(vm.variable("hp"), Some(10.0));
}
