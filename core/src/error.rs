//! Evaluation errors
//!
//! Every failure aborts the top-level evaluation it occurs in; there is no
//! local recovery. The variants let callers tell failure kinds apart.

use thiserror::Error;

use crate::identifier::Identifier;
use crate::language::{Value, ValueKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Lookup found no binding for the identifier
    #[error("unbound identifier: {0}")]
    UnboundIdentifier(Identifier),

    /// The head of an application did not evaluate to a procedure
    #[error("{0} is not callable")]
    NotCallable(Value),

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: ValueKind, got: ValueKind },

    #[error("arity mismatch: expected {expected} arguments, got {got}")]
    ArityError { expected: usize, got: usize },

    #[error("integer overflow")]
    IntegerOverflow,

    #[error("evaluation depth limit of {0} exceeded")]
    DepthLimitExceeded(usize),
}

/// Result alias for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;
