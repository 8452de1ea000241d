//! Sample programs evaluated by the `sapling` driver

use sapling::Value;

/// `(let ((x 5)) x)`
pub fn let_single() -> Value {
    Value::let_form([("x", Value::int(5))], Value::ident("x"))
}

/// `(let ((x 5) (y 2)) (+ y x))`
pub fn let_add() -> Value {
    Value::let_form(
        [("x", Value::int(5)), ("y", Value::int(2))],
        Value::sexpr([Value::add(), Value::ident("y"), Value::ident("x")]),
    )
}

/// `((let ((x 5)) (lambda (z) (+ x z))) 3)`
pub fn closure_capture() -> Value {
    let adder = Value::let_form(
        [("x", Value::int(5))],
        Value::lambda(
            ["z"],
            Value::sexpr([Value::add(), Value::ident("x"), Value::ident("z")]),
        ),
    );
    Value::sexpr([adder, Value::int(3)])
}

/// `((lambda (x) (lambda (x) x)) 5)`
pub fn nested_lambda() -> Value {
    let inner = Value::lambda(["x"], Value::ident("x"));
    Value::sexpr([Value::lambda(["x"], inner), Value::int(5)])
}

/// `(let ((f (let ((y 1)) (lambda () y)))) (let ((y 2)) (f)))`
///
/// Yields 1 under lexical scoping and 2 when the caller's bindings leak
/// into the closure.
pub fn scoping_probe() -> Value {
    let make_f = Value::let_form(
        [("y", Value::int(1))],
        Value::lambda([], Value::ident("y")),
    );
    Value::let_form(
        [("f", make_f)],
        Value::let_form(
            [("y", Value::int(2))],
            Value::sexpr([Value::ident("f")]),
        ),
    )
}

pub fn all() -> Vec<Value> {
    vec![
        let_single(),
        let_add(),
        closure_capture(),
        nested_lambda(),
        scoping_probe(),
    ]
}
