//! Error types for conversion operations.

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error type for conversion operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// A logarithm argument (flux or distance) was zero or negative.
    #[error("Invalid input: {quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    /// NaN or an infinity where a finite real number is required.
    #[error("Invalid input: {quantity} must be finite, got {value}")]
    NotFinite { quantity: &'static str, value: f64 },

    /// Text that does not parse as a floating-point number.
    #[error("Invalid input: {quantity} must be numeric, got {input:?}")]
    NotNumeric { quantity: &'static str, input: String },

    #[error("Shape mismatch: operands of length {left} and {right} cannot be broadcast together")]
    ShapeMismatch { left: usize, right: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Self test failed: {0}")]
    SelfTest(String),
}

impl ConversionError {
    /// Whether this error rejects the value handed to a conversion
    /// (as opposed to operand shapes, configuration or the smoke test).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ConversionError::NonPositive { .. }
                | ConversionError::NotFinite { .. }
                | ConversionError::NotNumeric { .. }
        )
    }
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(quantity: &'static str, value: f64) -> ConversionResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejecting non-finite {}: {}", quantity, value);
        Err(ConversionError::NotFinite { quantity, value })
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> ConversionResult<f64> {
    let value = ensure_finite(quantity, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        log::debug!("rejecting non-positive {}: {}", quantity, value);
        Err(ConversionError::NonPositive { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_rejects_zero_and_negative() {
        assert!(matches!(
            ensure_positive("flux", 0.0),
            Err(ConversionError::NonPositive { quantity: "flux", .. })
        ));
        assert!(matches!(
            ensure_positive("flux", -1.0),
            Err(ConversionError::NonPositive { .. })
        ));
        assert_eq!(ensure_positive("flux", 2.0), Ok(2.0));
    }

    #[test]
    fn test_ensure_finite_rejects_nan_before_sign_check() {
        assert!(matches!(
            ensure_positive("distance", f64::NAN),
            Err(ConversionError::NotFinite { .. })
        ));
        assert!(matches!(
            ensure_finite("zeropoint", f64::NEG_INFINITY),
            Err(ConversionError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_invalid_input_classification() {
        let numeric = ConversionError::NotNumeric {
            quantity: "flux",
            input: "not_a_number".to_string(),
        };
        assert!(numeric.is_invalid_input());
        assert!(!ConversionError::ShapeMismatch { left: 2, right: 3 }.is_invalid_input());
        assert!(!ConversionError::Configuration("x".into()).is_invalid_input());
    }

    #[test]
    fn test_display_messages() {
        let err = ConversionError::NonPositive {
            quantity: "flux",
            value: -3.0,
        };
        assert_eq!(err.to_string(), "Invalid input: flux must be positive, got -3");

        let err = ConversionError::NotNumeric {
            quantity: "flux",
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid input: flux must be numeric, got \"abc\"");
    }
}
