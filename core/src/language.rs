use std::fmt;
use std::sync::Arc;

use crate::environment::Environment;
use crate::identifier::Identifier;

// ============================================================================
// Core Type System
// ============================================================================

/// Procedures whose behavior is fixed by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Integer addition of exactly two operands
    Add,
}

impl Builtin {
    pub fn arity(self) -> usize {
        match self {
            Builtin::Add => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
        }
    }
}

/// A procedure value produced by evaluating a `lambda` form.
#[derive(Clone)]
pub struct Closure {
    pub params: Vec<Identifier>,
    pub body: Value,
    /// Snapshot of the environment the `lambda` was evaluated in
    pub env: Environment,
}

// Captured environments are not part of a closure's identity
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .field("env", &"<environment>")
            .finish()
    }
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.body == other.body
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Procedure {
    Builtin(Builtin),
    Closure(Arc<Closure>),
}

impl Procedure {
    /// Number of arguments the procedure must be applied to
    pub fn arity(&self) -> usize {
        match self {
            Procedure::Builtin(builtin) => builtin.arity(),
            Procedure::Closure(closure) => closure.params.len(),
        }
    }
}

/// `(let ((name expr) ...) body)`
#[derive(Debug, Clone, PartialEq)]
pub struct LetForm {
    pub bindings: Vec<(Identifier, Value)>,
    pub body: Value,
}

/// `(lambda (param ...) body)`
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaForm {
    pub params: Vec<Identifier>,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Identifier(Identifier),
    /// Self-evaluating; no evaluation rule consumes it
    StringLiteral(Arc<str>),
    Procedure(Procedure),
    SExpr(Arc<[Value]>),
    Let(Arc<LetForm>),
    Lambda(Arc<LambdaForm>),
}

/// The case of a [`Value`], used when reporting type errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Identifier,
    String,
    Procedure,
    SExpr,
    Let,
    Lambda,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Identifier => "identifier",
            ValueKind::String => "string",
            ValueKind::Procedure => "procedure",
            ValueKind::SExpr => "s-expression",
            ValueKind::Let => "let",
            ValueKind::Lambda => "lambda",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl Value {
    pub fn int(n: i64) -> Self {
        Value::Integer(n)
    }

    pub fn ident(name: &str) -> Self {
        Value::Identifier(Identifier::new(name))
    }

    pub fn string(text: &str) -> Self {
        Value::StringLiteral(Arc::from(text))
    }

    /// The built-in `+` procedure
    pub fn add() -> Self {
        Value::Procedure(Procedure::Builtin(Builtin::Add))
    }

    pub fn sexpr<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::SExpr(elements.into_iter().collect())
    }

    pub fn let_form<'a, I>(bindings: I, body: Value) -> Self
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let bindings = bindings
            .into_iter()
            .map(|(name, expr)| (Identifier::new(name), expr))
            .collect();
        Value::Let(Arc::new(LetForm { bindings, body }))
    }

    pub fn lambda<'a, I>(params: I, body: Value) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let params = params.into_iter().map(Identifier::new).collect();
        Value::Lambda(Arc::new(LambdaForm { params, body }))
    }

    pub fn closure(params: Vec<Identifier>, body: Value, env: Environment) -> Self {
        Value::Procedure(Procedure::Closure(Arc::new(Closure { params, body, env })))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Identifier(_) => ValueKind::Identifier,
            Value::StringLiteral(_) => ValueKind::String,
            Value::Procedure(_) => ValueKind::Procedure,
            Value::SExpr(_) => ValueKind::SExpr,
            Value::Let(_) => ValueKind::Let,
            Value::Lambda(_) => ValueKind::Lambda,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_procedure(&self) -> Option<&Procedure> {
        match self {
            Value::Procedure(procedure) => Some(procedure),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<Identifier> for Value {
    fn from(id: Identifier) -> Self {
        Value::Identifier(id)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

fn escape_string(s: &str) -> String {
    let mut result = String::new();
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c => result.push(c),
        }
    }
    result
}

fn write_spaced<T: fmt::Display>(f: &mut fmt::Formatter, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Procedure::Builtin(builtin) => write!(f, "{}", builtin.name()),
            Procedure::Closure(closure) => {
                write!(f, "<lambda (")?;
                write_spaced(f, &closure.params)?;
                write!(f, ")>")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Identifier(id) => write!(f, "{id}"),
            Value::StringLiteral(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Procedure(procedure) => write!(f, "{procedure}"),
            Value::SExpr(elements) => {
                write!(f, "(")?;
                write_spaced(f, elements)?;
                write!(f, ")")
            }
            Value::Let(form) => {
                write!(f, "(let (")?;
                for (i, (name, expr)) in form.bindings.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "({name} {expr})")?;
                }
                write!(f, ") {})", form.body)
            }
            Value::Lambda(form) => {
                write!(f, "(lambda (")?;
                write_spaced(f, &form.params)?;
                write!(f, ") {})", form.body)
            }
        }
    }
}

/// Render a value in its fully parenthesized form
pub fn render(value: &Value) -> String {
    value.to_string()
}
