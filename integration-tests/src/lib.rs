//! Shared fixtures for the end-to-end tests.

pub mod cases {
    use rootfind::{Config, FailureKind, Outcome, solve_newton, solve_secant};
    use serde::Deserialize;

    /// Which solver a case runs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Method {
        Newton,
        Secant,
    }

    /// What a case expects.
    #[derive(Debug, Clone, PartialEq, Deserialize)]
    #[serde(tag = "kind", rename_all = "snake_case")]
    pub enum Expected {
        Root { value: f64 },
        Failure { failure: String },
    }

    /// A single end-to-end solve described in a case file.
    #[derive(Debug, Clone, Deserialize)]
    pub struct Case {
        pub name: String,
        pub expression: String,
        #[serde(default = "default_variable")]
        pub variable: String,
        pub method: Method,
        pub x0: f64,
        pub x1: Option<f64>,
        #[serde(default)]
        pub config: Option<Config>,
        pub expected: Expected,
    }

    /// A table of cases.
    #[derive(Debug, Clone, Deserialize)]
    pub struct Suite {
        pub case: Vec<Case>,
    }

    fn default_variable() -> String {
        "x".to_string()
    }

    impl Case {
        /// Runs the case through the public API.
        ///
        /// # Panics
        ///
        /// Panics if a secant case has no `x1`.
        #[must_use]
        pub fn run(&self) -> Outcome {
            let config = self.config.unwrap_or_default();
            match self.method {
                Method::Newton => solve_newton(&self.expression, &self.variable, self.x0, &config),
                Method::Secant => {
                    let x1 = self.x1.expect("secant cases need x1");
                    solve_secant(&self.expression, &self.variable, self.x0, x1, &config)
                }
            }
        }
    }

    /// Parses a failure kind name as written in case files.
    #[must_use]
    pub fn failure_kind(name: &str) -> Option<FailureKind> {
        Some(match name {
            "invalid_expression" => FailureKind::InvalidExpression,
            "invalid_seed" => FailureKind::InvalidSeed,
            "derivative_zero" => FailureKind::DerivativeZero,
            "degenerate_denominator" => FailureKind::DegenerateDenominator,
            "non_convergent" => FailureKind::NonConvergent,
            "unexpected" => FailureKind::Unexpected,
            _ => return None,
        })
    }
}
