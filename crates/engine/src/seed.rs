use crate::{Failure, SeedError};

/// Parses seed text typed by a user.
///
/// `label` names the seed in the failure message, as in
/// `"x0 must be a number"`. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`Failure::InvalidSeed`] if the text is not a number or is not
/// finite.
pub fn parse_seed(label: &str, text: &str) -> Result<f64, Failure> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| SeedError::NotANumber {
            label: label.to_string(),
        })?;

    if !value.is_finite() {
        return Err(SeedError::not_finite(label).into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_plain_numbers() {
        assert_relative_eq!(parse_seed("x0", "1.5").expect("valid"), 1.5);
        assert_relative_eq!(parse_seed("x0", "  -2e3 ").expect("valid"), -2000.0);
        assert_relative_eq!(parse_seed("x1", ".25").expect("valid"), 0.25);
    }

    #[test]
    fn names_the_seed_in_the_message() {
        let err = parse_seed("x0", "abc").expect_err("not a number");
        assert_eq!(err.to_string(), "invalid seed: x0 must be a number");
        assert_eq!(
            parse_seed("x1", ""),
            Err(Failure::InvalidSeed(SeedError::NotANumber {
                label: "x1".into()
            }))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        for text in ["inf", "-inf", "NaN"] {
            assert_eq!(
                parse_seed("x0", text),
                Err(Failure::InvalidSeed(SeedError::not_finite("x0")))
            );
        }
    }
}
