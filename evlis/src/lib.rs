//! Sapling evaluator
//!
//! A tree-walking `eval`/`apply` over ASTs built from [`sapling::Value`]:
//! integers, identifiers, the built-in `+`, applications, `let`, and
//! `lambda` closures.

pub mod builtins;
pub mod config;
pub mod interpreter;
pub mod samples;

pub use config::{EvalConfig, Scoping};
pub use interpreter::{Evaluator, apply, eval};
