// ============================================================================
// Numeric Errors
// Failures of decimal arithmetic on calculator operands
// ============================================================================

use std::fmt;

/// Why a decimal operation on a [`NumericValue`](super::NumericValue) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Mantissa or scale left the range of the 96-bit decimal
    Overflow,
    /// Divisor was zero
    DivisionByZero,
    /// Text or keypad digit that is not a decimal number
    InvalidInput,
}

impl NumericError {
    /// Short, lowercase description used by `Display`
    pub const fn message(&self) -> &'static str {
        match self {
            NumericError::Overflow => "decimal overflow: value outside the 28-digit range",
            NumericError::DivisionByZero => "division by zero",
            NumericError::InvalidInput => "not a decimal number",
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for NumericError {}

/// Result of a decimal operation
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        for err in [
            NumericError::Overflow,
            NumericError::DivisionByZero,
            NumericError::InvalidInput,
        ] {
            assert_eq!(err.to_string(), err.message());
        }
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_parse_failure_is_invalid_input() {
        let err = "1.2.3".parse::<crate::numeric::NumericValue>().unwrap_err();
        assert_eq!(err, NumericError::InvalidInput);
        assert!(err.to_string().contains("decimal"));
    }
}
