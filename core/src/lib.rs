//! Core language definition for Sapling
//!
//! This crate contains the value representation, environments, and error
//! types for the Sapling S-expression language. It does not evaluate
//! anything - the evaluator lives in the `evlis` crate.
//!
//! ASTs are built directly from [`Value`] constructors; there is no reader.

pub mod environment;
pub mod error;
pub mod identifier;
pub mod language;

// Re-export commonly used items for convenience
pub use environment::Environment;
pub use error::{EvalError, EvalResult};
pub use identifier::Identifier;
pub use language::{
    Builtin, Closure, LambdaForm, LetForm, Procedure, Value, ValueKind, render,
};
