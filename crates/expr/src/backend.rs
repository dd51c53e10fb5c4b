use std::error::Error;

use rootfind_core::Function;

use crate::{ExprError, Formula, Program};

/// An expression-parsing capability.
///
/// A backend turns text into its own tree representation, differentiates that
/// tree, and compiles it into something evaluable. Solvers only ever see the
/// compiled [`Function`], so any expression or CAS library can sit behind this
/// trait and report failures in its own error type.
pub trait Backend {
    /// The backend's parsed representation.
    type Ast;

    /// The backend's compiled, evaluable representation.
    type Compiled: Function;

    /// Why parsing, differentiation, or compilation failed.
    type Error: Error;

    /// Parses `text` as an expression in `variable`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or mentions any free symbol
    /// other than `variable`.
    fn parse(&self, text: &str, variable: &str) -> Result<Self::Ast, Self::Error>;

    /// Differentiates `ast` with respect to `variable`.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression has no symbolic derivative.
    fn differentiate(&self, ast: &Self::Ast, variable: &str) -> Result<Self::Ast, Self::Error>;

    /// Compiles `ast` for numeric evaluation.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot evaluate the expression.
    fn compile(&self, ast: &Self::Ast) -> Result<Self::Compiled, Self::Error>;
}

/// The built-in backend, over `symb_anafis`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Symbolic;

impl Backend for Symbolic {
    type Ast = Formula;
    type Compiled = Program;
    type Error = ExprError;

    fn parse(&self, text: &str, variable: &str) -> Result<Formula, ExprError> {
        Formula::parse(text, variable)
    }

    fn differentiate(&self, ast: &Formula, variable: &str) -> Result<Formula, ExprError> {
        if ast.variable() == variable {
            ast.derivative()
        } else {
            // The formula has no other free symbol, so it is constant in `variable`.
            Formula::constant(0.0, ast.variable())
        }
    }

    fn compile(&self, ast: &Formula) -> Result<Program, ExprError> {
        ast.compile()
    }
}
