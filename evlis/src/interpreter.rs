use sapling::{Environment, EvalError, EvalResult, LetForm, Procedure, Value};

use crate::builtins::apply_builtin;
use crate::config::{EvalConfig, Scoping};

// ============================================================================
// Evaluator
// ============================================================================

/// Walks a value tree against an environment.
///
/// Holds no state between top-level calls other than its configuration;
/// `depth` only tracks the nesting of the call in flight.
#[derive(Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,
    depth: usize,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Evaluator { config, depth: 0 }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn eval(&mut self, expr: &Value, env: &Environment) -> EvalResult<Value> {
        if let Some(limit) = self.config.max_depth {
            if self.depth >= limit {
                return Err(EvalError::DepthLimitExceeded(limit));
            }
        }

        self.depth += 1;
        let result = self.eval_form(expr, env);
        self.depth -= 1;
        result
    }

    fn eval_form(&mut self, expr: &Value, env: &Environment) -> EvalResult<Value> {
        tracing::trace!(depth = self.depth, expr = %expr, "eval");

        match expr {
            // Self-evaluating forms
            Value::Integer(_) | Value::StringLiteral(_) | Value::Procedure(_) => Ok(expr.clone()),

            Value::Identifier(name) => env.lookup(*name),

            // Application: evaluate every element left to right, then apply the head
            Value::SExpr(elements) => {
                let mut results = Vec::with_capacity(elements.len());
                for element in elements.iter() {
                    results.push(self.eval(element, env)?);
                }

                match results.split_first() {
                    Some((Value::Procedure(procedure), args)) => self.apply(procedure, env, args),
                    Some((head, _)) => Err(EvalError::NotCallable(head.clone())),
                    None => Err(EvalError::NotCallable(expr.clone())),
                }
            }

            Value::Let(form) => self.eval_let(form, env),

            Value::Lambda(form) => Ok(Value::closure(
                form.params.clone(),
                form.body.clone(),
                env.copy(),
            )),
        }
    }

    // Right-hand sides see only the enclosing environment, never earlier
    // bindings of the same form.
    fn eval_let(&mut self, form: &LetForm, outer: &Environment) -> EvalResult<Value> {
        let mut ext = outer.copy();
        for (name, expr) in &form.bindings {
            let value = self.eval(expr, outer)?;
            ext.extend(*name, value);
        }
        self.eval(&form.body, &ext)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(procedure = %procedure, argc = args.len()))]
    pub fn apply(
        &mut self,
        procedure: &Procedure,
        caller_env: &Environment,
        args: &[Value],
    ) -> EvalResult<Value> {
        match procedure {
            Procedure::Builtin(builtin) => apply_builtin(*builtin, args),
            Procedure::Closure(closure) => {
                if args.len() != closure.params.len() {
                    return Err(EvalError::ArityError {
                        expected: closure.params.len(),
                        got: args.len(),
                    });
                }

                let mut call_env = closure.env.copy();
                if self.config.scoping == Scoping::CallerMerge {
                    call_env.merge(caller_env);
                }
                for (param, arg) in closure.params.iter().zip(args) {
                    call_env.extend(*param, arg.clone());
                }

                self.eval(&closure.body, &call_env)
            }
        }
    }
}

/// Evaluate `expr` against `env` with the default configuration
pub fn eval(expr: &Value, env: &Environment) -> EvalResult<Value> {
    Evaluator::default().eval(expr, env)
}

/// Apply `procedure` to already evaluated `args` with the default configuration
pub fn apply(procedure: &Procedure, caller_env: &Environment, args: &[Value]) -> EvalResult<Value> {
    Evaluator::default().apply(procedure, caller_env, args)
}
