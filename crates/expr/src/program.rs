use std::fmt;

use rootfind_core::Function;
use symb_anafis::{CompiledEvaluator, Expr};

use crate::ExprError;

/// A compiled expression in one variable.
///
/// Wraps the bytecode evaluator from `symb_anafis`. Programs are immutable and
/// hold no evaluation state, so one program can be shared across threads and
/// evaluated concurrently.
#[derive(Clone)]
pub struct Program {
    evaluator: CompiledEvaluator,
}

impl Program {
    /// Compiles `expr` with `variable` as its only parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Compile`] if the expression mentions another free
    /// symbol or contains a construct the evaluator cannot run.
    pub fn compile(expr: &Expr, variable: &str) -> Result<Self, ExprError> {
        let evaluator = CompiledEvaluator::compile(expr, &[variable], None).map_err(|err| {
            ExprError::Compile {
                message: err.to_string(),
            }
        })?;
        Ok(Self { evaluator })
    }

    /// Evaluates the program at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.evaluator.evaluate(&[x])
    }

    /// Evaluates the program at every element of `xs`.
    ///
    /// Each point goes through [`Program::eval`], so batch and scalar results
    /// are bit-identical.
    #[must_use]
    pub fn eval_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("params", &self.evaluator.param_names())
            .finish_non_exhaustive()
    }
}

impl Function for Program {
    fn call(&self, x: f64) -> f64 {
        self.eval(x)
    }

    fn call_batch(&self, xs: &[f64]) -> Vec<f64> {
        self.eval_batch(xs)
    }
}
