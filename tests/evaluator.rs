use yoru::{
    error::{Error, RuntimeError},
    evaluate, get_result,
    interpreter::{
        environment::Environment,
        evaluator::core::{DEFAULT_MAX_DEPTH, Evaluator},
        value::{core::Value, hash_key::HashKey},
    },
    parse,
};

fn eval(source: &str) -> Value {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:?}");
    evaluate(&program, &Environment::new())
}

fn eval_error(source: &str) -> String {
    match eval(source) {
        Value::Error(error) => error.to_string(),
        other => panic!("expected an error from {source:?}, got {other}"),
    }
}

#[test]
fn integer_arithmetic() {
    let cases = [("5", 5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("3 * (3 * 3) + 10", 37),
                 ("5 * (10 + 4)", 70),
                 ("-10 / 2", -5),
                 ("7 / 2", 3),
                 ("-7 / 2", -3),
                 ("7 % 3", 1),
                 ("-7 % 3", -1),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn boolean_expressions() {
    let cases = [("true", true),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("true == true", true),
                 ("true != false", true),
                 ("(1 < 2) == true", true),
                 ("(1 > 2) == true", false),
                 ("!true", false),
                 ("!5", false),
                 ("!0", false),
                 ("!!5", true),
                 (r#""a" == "a""#, true),
                 (r#""a" != "b""#, true),
                 ("[1, 2] == [1, 2]", true),
                 ("[1, 2] == [2, 1]", false),
                 (r#"{"a": 1} == {"a": 1}"#, true),
                 ("len == len", true),
                 ("len == puts", false)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Boolean(expected), "{source}");
    }
}

#[test]
fn if_else_expressions() {
    assert_eq!(eval("if (true) { 10 }"), Value::Integer(10));
    assert_eq!(eval("if (false) { 10 }"), Value::Null);
    assert_eq!(eval("if (1) { 10 }"), Value::Integer(10));
    assert_eq!(eval("if (0) { 10 } else { 20 }"), Value::Integer(10));
    assert_eq!(eval("if (1 > 2) { 10 }"), Value::Null);
    assert_eq!(eval("if (1 > 2) { 10 } else { 20 }"), Value::Integer(20));
    assert_eq!(eval("if (if (false) { 1 }) { 10 } else { 20 }"), Value::Integer(20));
    assert_eq!(eval("if (true) {}"), Value::Null);
}

#[test]
fn return_statements() {
    assert_eq!(eval("return 10;"), Value::Integer(10));
    assert_eq!(eval("return 10; 9;"), Value::Integer(10));
    assert_eq!(eval("9; return 2 * 5; 9;"), Value::Integer(10));
    assert_eq!(eval("if (10 > 1) { if (10 > 1) { return 10; } return 1; }"),
               Value::Integer(10));
    assert_eq!(eval("let f = fn(x) { return x; x + 10; }; f(10);"),
               Value::Integer(10));
    assert_eq!(eval("let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);"),
               Value::Integer(20));
}

#[test]
fn return_only_leaves_the_innermost_function() {
    let source = "let inner = fn() { return 1; };
                  let outer = fn() { inner(); 2 };
                  outer()";

    assert_eq!(eval(source), Value::Integer(2));
}

#[test]
fn return_inside_a_subexpression_leaves_the_function() {
    let cases = ["let f = fn() { let x = if (true) { return 5; }; 10 }; f()",
                 "let f = fn() { 1 + if (true) { return 5; } }; f()",
                 "let f = fn() { if (true) { return 5; } + 1 }; f()",
                 "let f = fn() { -if (true) { return 5; } }; f()",
                 "let f = fn() { if (if (true) { return 5; }) { 1 } else { 2 } }; f()",
                 "let id = fn(x) { x }; let f = fn() { id(if (true) { return 5; }); 10 }; f()",
                 "let f = fn() { [1, if (true) { return 5; }, 3]; 10 }; f()",
                 r#"let f = fn() { {"k": if (true) { return 5; }}; 10 }; f()"#,
                 "let f = fn() { [1, 2][if (true) { return 5; }] }; f()",
                 "let f = fn() { return if (true) { return 5; }; }; f()"];

    for source in cases {
        assert_eq!(eval(source), Value::Integer(5), "{source}");
    }
}

#[test]
fn return_inside_a_top_level_let_ends_the_program() {
    assert_eq!(eval("let x = if (true) { return 5; }; x + 1"), Value::Integer(5));
    assert_eq!(eval("let f = fn() { let x = if (true) { return 5; }; 10 }; f() + 1"),
               Value::Integer(6));
}

#[test]
fn let_statements() {
    assert_eq!(eval("let a = 5; a;"), Value::Integer(5));
    assert_eq!(eval("let a = 5 * 5; a;"), Value::Integer(25));
    assert_eq!(eval("let a = 5; let b = a; b;"), Value::Integer(5));
    assert_eq!(eval("let a = 5; let b = a; let c = a + b + 5; c;"),
               Value::Integer(15));
    assert_eq!(eval("let a = 1; let a = a + 1; a"), Value::Integer(2));
    assert_eq!(eval("let a = 1;"), Value::Null);
}

#[test]
fn failed_let_does_not_bind() {
    let env = Environment::new();
    let (program, _) = parse("let a = missing;");

    assert!(matches!(evaluate(&program, &env), Value::Error(_)));
    assert_eq!(env.get("a"), None);
}

#[test]
fn functions_and_closures() {
    assert_eq!(eval("let identity = fn(x) { x; }; identity(5);"),
               Value::Integer(5));
    assert_eq!(eval("let double = fn(x) { x * 2; }; double(5);"),
               Value::Integer(10));
    assert_eq!(eval("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));"),
               Value::Integer(20));
    assert_eq!(eval("fn(x) { x; }(5)"), Value::Integer(5));
    assert_eq!(eval("let newAdder = fn(x) { fn(y) { x + y } }; newAdder(2)(2)"),
               Value::Integer(4));
    assert_eq!(eval("let f = fn() {}; f()"), Value::Null);
}

#[test]
fn closures_see_later_bindings_in_their_scope() {
    let source = "let get = fn() { later };
                  let later = 42;
                  get()";

    assert_eq!(eval(source), Value::Integer(42));
}

#[test]
fn parameters_shadow_without_leaking() {
    let source = "let x = 1;
                  let f = fn(x) { let y = x * 10; y };
                  [f(5), x]";

    assert_eq!(eval(source).to_string(), "[50, 1]");
    assert_eq!(eval_error("let f = fn(x) { let y = x; y }; f(1); y"),
               "identifier not found: y");
}

#[test]
fn recursion() {
    let source = "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
                  fib(15)";

    assert_eq!(eval(source), Value::Integer(610));
}

#[test]
fn function_values_print_their_source() {
    assert_eq!(eval("fn(x) { x + 2; };").to_string(), "fn(x) { (x + 2) }");
    assert_eq!(eval("fn() {}").to_string(), "fn() {}");
    assert_eq!(eval("len").to_string(), "builtin function");
}

#[test]
fn strings() {
    assert_eq!(eval(r#""Hello World!""#), Value::from("Hello World!"));
    assert_eq!(eval(r#""Hello" + " " + "World!""#), Value::from("Hello World!"));
    assert_eq!(eval(r#"let greet = fn(name) { "hi " + name }; greet("yoru")"#),
               Value::from("hi yoru"));
}

#[test]
fn arrays() {
    assert_eq!(eval("[1, 2 * 2, 3 + 3]").to_string(), "[1, 4, 6]");
    assert_eq!(eval("[]").to_string(), "[]");

    let cases = [("[1, 2, 3][0]", Value::Integer(1)),
                 ("[1, 2, 3][1]", Value::Integer(2)),
                 ("[1, 2, 3][2]", Value::Integer(3)),
                 ("let i = 0; [1][i];", Value::Integer(1)),
                 ("[1, 2, 3][1 + 1];", Value::Integer(3)),
                 ("let myArray = [1, 2, 3]; myArray[2];", Value::Integer(3)),
                 ("let a = [1, 2, 3]; a[0] + a[1] + a[2];", Value::Integer(6)),
                 ("let a = [1, 2, 3]; let i = a[0]; a[i]", Value::Integer(2)),
                 ("[1, 2, 3][3]", Value::Null),
                 ("[1, 2, 3][-1]", Value::Null),
                 ("[[1, 2], [3]][0][1]", Value::Integer(2))];

    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn hashes() {
    let source = r#"let two = "two";
                    {
                        "one": 10 - 9,
                        two: 1 + 1,
                        "thr" + "ee": 6 / 2,
                        4: 4,
                        true: 5,
                        false: 6
                    }"#;

    assert_eq!(eval(source).to_string(),
               "{4: 4, false: 6, true: 5, one: 1, three: 3, two: 2}");

    let cases = [(r#"{"foo": 5}["foo"]"#, Value::Integer(5)),
                 (r#"{"foo": 5}["bar"]"#, Value::Null),
                 (r#"let key = "foo"; {"foo": 5}[key]"#, Value::Integer(5)),
                 (r#"{}["foo"]"#, Value::Null),
                 ("{5: 5}[5]", Value::Integer(5)),
                 ("{true: 5}[true]", Value::Integer(5)),
                 ("{false: 5}[false]", Value::Integer(5)),
                 ("{1: 1, true: 2}[1]", Value::Integer(1)),
                 ("{1: 1, 1: 2}[1]", Value::Integer(2))];

    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn hash_keys_give_back_the_original_value() {
    for key in [Value::from(-3), Value::from(false), Value::from("k")] {
        let hash_key = HashKey::try_from(&key).unwrap();
        assert_eq!(Value::from(hash_key), key);
    }

    let err = HashKey::try_from(&Value::from(Vec::<Value>::new())).unwrap_err();
    assert_eq!(err.to_string(), "unusable as hash key: ARRAY");
}

#[test]
fn runtime_error_messages() {
    let cases = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 == true", "type mismatch: INTEGER == BOOLEAN"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 (r#"-"a""#, "unknown operator: -STRING"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("foobar", "identifier not found: foobar"),
                 (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
                 ("[1] + [2]", "unknown operator: ARRAY + ARRAY"),
                 ("[1] < [2]", "unknown operator: ARRAY < ARRAY"),
                 (r#"{"name": "yoru"}[fn(x) { x }];"#, "unusable as hash key: FUNCTION"),
                 ("{[1]: 2}", "unusable as hash key: ARRAY"),
                 ("1[0]", "index operator not supported: INTEGER"),
                 (r#""abc"[0]"#, "index operator not supported: STRING"),
                 (r#"[1, 2]["0"]"#, "index operator not supported: ARRAY"),
                 ("5()", "not a function: INTEGER"),
                 ("1 / 0", "division by zero"),
                 ("1 % 0", "division by zero"),
                 ("9223372036854775807 + 1", "integer overflow: 9223372036854775807 + 1"),
                 ("-9223372036854775807 - 2", "integer overflow: -9223372036854775807 - 2"),
                 ("let f = fn(x) { x }; f(1, 2)", "wrong number of arguments. got=2, want=1"),
                 ("let f = fn(x, y) { x }; f(1)", "wrong number of arguments. got=1, want=2")];

    for (source, expected) in cases {
        assert_eq!(eval_error(source), expected, "{source}");
    }
}

#[test]
fn first_error_wins() {
    assert_eq!(eval_error("let f = fn(a, b) { a }; f(missing, 1 / 0)"),
               "identifier not found: missing");
    assert_eq!(eval_error("[1 / 0, nope]"), "division by zero");
    assert_eq!(eval_error("nope(1 / 0)"), "identifier not found: nope");
}

#[test]
fn errors_inside_functions_propagate() {
    let source = "let f = fn(x) { let y = x / 0; y + 1 };
                  let g = fn() { f(1) + 1 };
                  g()";

    assert_eq!(eval_error(source), "division by zero");
}

#[test]
fn builtins() {
    let cases = [(r#"len("")"#, Value::Integer(0)),
                 (r#"len("four")"#, Value::Integer(4)),
                 (r#"len("hello world")"#, Value::Integer(11)),
                 ("len([1, 2, 3])", Value::Integer(3)),
                 ("len([])", Value::Integer(0)),
                 ("first([1, 2, 3])", Value::Integer(1)),
                 ("first([])", Value::Null),
                 ("last([1, 2, 3])", Value::Integer(3)),
                 ("last([])", Value::Null),
                 ("rest([])", Value::Null),
                 ("puts(1, \"two\")", Value::Null),
                 ("puts()", Value::Null)];

    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }

    assert_eq!(eval("rest([1, 2, 3])").to_string(), "[2, 3]");
    assert_eq!(eval("push([], 1)").to_string(), "[1]");
    assert_eq!(eval("push([1], 2, 3)").to_string(), "[1, 2, 3]");
    assert_eq!(eval("let a = [1]; let b = push(a, 2); a").to_string(), "[1]");
}

#[test]
fn builtin_errors() {
    let cases = [("len(1)", "argument to `len` not supported. got INTEGER"),
                 (r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1"),
                 ("len()", "wrong number of arguments. got=0, want=1"),
                 ("push(1, 1)", "the first argument to `push` must be ARRAY. got=INTEGER"),
                 ("push([1])", "wrong number of arguments. got=1, want=at least 2"),
                 ("first(1)", "the first argument to `first` must be ARRAY. got=INTEGER"),
                 ("last(\"x\")", "the first argument to `last` must be ARRAY. got=STRING"),
                 ("rest({})", "the first argument to `rest` must be ARRAY. got=HASH")];

    for (source, expected) in cases {
        assert_eq!(eval_error(source), expected, "{source}");
    }
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_eq!(eval("let len = fn(x) { 42 }; len([1])"), Value::Integer(42));
}

#[test]
fn unbounded_recursion_is_a_stack_overflow() {
    let (program, _) = parse("let f = fn(x) { f(x + 1) }; f(0)");
    let value = Evaluator::with_max_depth(64).eval_program(&program, &Environment::new());

    assert_eq!(value,
               Value::Error(RuntimeError::StackOverflow { limit: 64 }));
    assert_eq!(value.to_string(),
               "ERROR: stack overflow: evaluation depth exceeded 64");
}

#[test]
fn default_ceiling_is_reported_instead_of_aborting() {
    let count = "let count = fn(x) { if (x == 0) { 0 } else { count(x - 1) } };";

    assert_eq!(get_result(&format!("{count} count(200)")).unwrap(), Value::Integer(0));
    match get_result(&format!("{count} count(100000)")) {
        Err(Error::Runtime(error)) => {
            assert_eq!(error,
                       RuntimeError::StackOverflow { limit: DEFAULT_MAX_DEPTH });
        },
        other => panic!("expected a stack overflow, got {other:?}"),
    }
}

#[test]
fn raised_ceiling_grows_the_native_stack() {
    let (program, _) = parse("let count = fn(x) { if (x == 0) { 0 } else { count(x - 1) } }; \
                              count(3000)");
    let value = Evaluator::with_max_depth(20_000).eval_program(&program, &Environment::new());

    assert_eq!(value, Value::Integer(0));
}

#[test]
fn evaluator_can_be_reused_after_a_stack_overflow() {
    let env = Environment::new();
    let mut evaluator = Evaluator::with_max_depth(32);

    let (program, _) = parse("let f = fn(x) { f(x) }; f(1)");
    assert!(matches!(evaluator.eval_program(&program, &env), Value::Error(_)));

    let (program, _) = parse("1 + 2");
    assert_eq!(evaluator.eval_program(&program, &env), Value::Integer(3));
}

#[test]
fn environment_persists_between_programs() {
    let env = Environment::new();

    for line in ["let x = 10;", "let add_x = fn(y) { x + y };", "let x = 20;"] {
        let (program, _) = parse(line);
        evaluate(&program, &env);
    }

    let (program, _) = parse("add_x(1)");
    assert_eq!(evaluate(&program, &env), Value::Integer(21));
}

#[test]
fn get_result_reports_both_channels() {
    assert_eq!(get_result("1 + 1").unwrap(), Value::Integer(2));

    match get_result("let x 5;") {
        Err(Error::Parse(errors)) => assert_eq!(errors.len(), 1),
        other => panic!("expected parse errors, got {other:?}"),
    }

    match get_result("1 / 0") {
        Err(Error::Runtime(error)) => assert_eq!(error, RuntimeError::DivisionByZero),
        other => panic!("expected a runtime error, got {other:?}"),
    }

    let err = get_result("let x 5;").unwrap_err();
    assert_eq!(err.to_string(),
               "line 1: expected next token to be =, got INT instead");
}

#[test]
fn every_listed_builtin_resolves() {
    use yoru::interpreter::evaluator::function::core::{Arity, BUILTIN_FUNCTIONS, lookup_builtin};

    assert_eq!(BUILTIN_FUNCTIONS, ["len", "push", "first", "last", "rest", "puts"]);
    for name in BUILTIN_FUNCTIONS {
        let builtin = lookup_builtin(name).unwrap_or_else(|| panic!("{name} is not registered"));
        assert_eq!(builtin.name(), *name);
        assert_eq!(eval(name).to_string(), "builtin function");
    }
    assert!(lookup_builtin("print").is_none());

    let arities: Vec<Arity> = BUILTIN_FUNCTIONS.iter()
                                               .filter_map(|name| lookup_builtin(name))
                                               .map(|builtin| builtin.arity())
                                               .collect();
    assert_eq!(arities,
               [Arity::Exact(1),
                Arity::AtLeast(2),
                Arity::Exact(1),
                Arity::Exact(1),
                Arity::Exact(1),
                Arity::Any]);
}
