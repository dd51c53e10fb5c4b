use std::collections::HashSet;
use std::fmt;

use symb_anafis::Expr;
use tracing::debug;

use crate::{
    ExprError, Program,
    screen::{self, CONSTANTS, FUNCTIONS, RESERVED},
};

/// A parsed expression together with the name of its free variable.
#[derive(Debug, Clone)]
pub struct Formula {
    variable: String,
    expr: Expr,
}

impl Formula {
    /// Parses `text` as an expression in the single variable `variable`.
    ///
    /// # Errors
    ///
    /// Returns an error if `variable` is not a plain identifier (or collides
    /// with a function or constant name), or if `text` is not a well-formed
    /// expression in that variable alone.
    pub fn parse(text: &str, variable: &str) -> Result<Self, ExprError> {
        validate_variable(variable)?;
        let canonical = screen::screen(text, variable)?;

        let known: HashSet<String> = CONSTANTS
            .iter()
            .map(|name| (*name).to_string())
            .chain([variable.to_string()])
            .collect();
        let expr = symb_anafis::parse(&canonical, &known, &HashSet::new(), None).map_err(
            |err| ExprError::Parse {
                message: err.to_string(),
            },
        )?;

        debug!(text, variable, "parsed expression");
        Ok(Self {
            variable: variable.to_string(),
            expr,
        })
    }

    /// The constant `value`, as an expression in `variable`.
    ///
    /// # Errors
    ///
    /// Returns an error if `variable` is not a valid variable name.
    pub fn constant(value: f64, variable: &str) -> Result<Self, ExprError> {
        validate_variable(variable)?;
        Ok(Self {
            variable: variable.to_string(),
            expr: Expr::number(value),
        })
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The underlying `symb_anafis` expression.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Returns the symbolic derivative with respect to the variable.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Differentiate`] if the expression has no symbolic
    /// derivative.
    pub fn derivative(&self) -> Result<Self, ExprError> {
        let expr = self
            .expr
            .diff(&self.variable)
            .map_err(|err| ExprError::Differentiate {
                message: err.to_string(),
            })?;
        let derivative = Self {
            variable: self.variable.clone(),
            expr,
        };
        debug!(
            expression = %self,
            derivative = %derivative,
            "differentiated expression"
        );
        Ok(derivative)
    }

    /// Compiles the expression into an evaluable [`Program`].
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Compile`] if the evaluator rejects the expression.
    pub fn compile(&self) -> Result<Program, ExprError> {
        let program = Program::compile(&self.expr, &self.variable)?;
        debug!(expression = %self, "compiled expression");
        Ok(program)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}

fn validate_variable(name: &str) -> Result<(), ExprError> {
    let mut chars = name.chars();
    let well_formed = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !well_formed || FUNCTIONS.contains(&name) || RESERVED.contains(&name) {
        return Err(ExprError::InvalidVariable {
            name: name.to_string(),
        });
    }
    Ok(())
}
