//! Evaluator configuration

/// How a closure's body environment is assembled at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoping {
    /// The body sees the captured environment plus its parameters
    #[default]
    Lexical,
    /// The caller's bindings are folded over the captured environment
    /// before parameters are bound
    CallerMerge,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalConfig {
    pub scoping: Scoping,
    /// Maximum nesting of `eval` calls; `None` leaves recursion unbounded
    pub max_depth: Option<usize>,
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoping(mut self, scoping: Scoping) -> Self {
        self.scoping = scoping;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
