//! Built-in procedures

use sapling::{Builtin, EvalError, EvalResult, Value, ValueKind};

pub fn apply_builtin(builtin: Builtin, args: &[Value]) -> EvalResult<Value> {
    match builtin {
        Builtin::Add => {
            let [lhs, rhs] = args else {
                return Err(EvalError::ArityError {
                    expected: builtin.arity(),
                    got: args.len(),
                });
            };
            let a = expect_integer(lhs)?;
            let b = expect_integer(rhs)?;
            a.checked_add(b)
                .map(Value::Integer)
                .ok_or(EvalError::IntegerOverflow)
        }
    }
}

fn expect_integer(value: &Value) -> EvalResult<i64> {
    value.as_integer().ok_or(EvalError::TypeMismatch {
        expected: ValueKind::Integer,
        got: value.kind(),
    })
}
