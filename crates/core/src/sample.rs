use crate::error::{AvgError, Result};

/// Parse user-entered text into a sample.
///
/// Accepts anything `f64::from_str` accepts after trimming surrounding
/// whitespace (`42`, `-3.5`, `.5`, `1e3`), as long as the result is finite.
pub fn parse_sample(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AvgError::InvalidInput(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_integers_and_fractions() {
        assert_eq!(parse_sample("42").unwrap(), 42.0);
        assert_eq!(parse_sample("-3.5").unwrap(), -3.5);
        assert_eq!(parse_sample(".25").unwrap(), 0.25);
        assert_eq!(parse_sample("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_sample("  7 \n").unwrap(), 7.0);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(parse_sample("abc"), Err(AvgError::InvalidInput(_))));
        assert!(matches!(parse_sample(""), Err(AvgError::InvalidInput(_))));
        assert!(matches!(parse_sample("   "), Err(AvgError::InvalidInput(_))));
        assert!(matches!(parse_sample("1,5"), Err(AvgError::InvalidInput(_))));
    }

    #[test]
    fn rejects_non_finite() {
        for text in ["inf", "-infinity", "NaN", "1e400"] {
            assert!(
                matches!(parse_sample(text), Err(AvgError::InvalidInput(_))),
                "{text} should be rejected"
            );
        }
    }
}
