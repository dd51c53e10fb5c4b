use thiserror::Error;

/// Errors that can occur while parsing, differentiating, or compiling an
/// expression.
///
/// Positions are byte offsets into the original expression text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExprError {
    #[error("expression is empty")]
    Empty,

    #[error("invalid variable name '{name}'")]
    InvalidVariable { name: String },

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("expected {expected} at position {pos}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        pos: usize,
    },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown symbol '{name}' at position {pos}, the only variable is '{variable}'")]
    UnknownSymbol {
        name: String,
        variable: String,
        pos: usize,
    },

    #[error("unknown function '{name}' at position {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("could not parse expression: {message}")]
    Parse { message: String },

    #[error("could not differentiate expression: {message}")]
    Differentiate { message: String },

    #[error("could not compile expression: {message}")]
    Compile { message: String },
}
