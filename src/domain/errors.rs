// ============================================================================
// Calculator Errors
// Error taxonomy of the calculator engine
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised while handling key events.
///
/// None of them is fatal: input errors are recovered by ignoring the key,
/// arithmetic errors put the engine into its error display state until the
/// next clear, and format failures fall back to `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Key event carried a token that is not a digit, decimal point or known key
    InvalidDigitInput(String),
    /// Appending the digit would exceed the entry digit budget
    EntryOverflow,
    /// Equals with a pending divide and a zero second operand
    DivisionByZero,
    /// Arithmetic result left the representable decimal range
    Overflow,
    /// The display formatter could not render the value
    FormatFailure,
}

impl CalcError {
    /// True for errors that put the engine into its error display state.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, CalcError::DivisionByZero | CalcError::Overflow)
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidDigitInput(token) => write!(f, "invalid key input: {:?}", token),
            CalcError::EntryOverflow => write!(f, "entry overflow: digit budget exhausted"),
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::Overflow => write!(f, "result too large for the calculator"),
            CalcError::FormatFailure => write!(f, "format failure: value could not be rendered"),
        }
    }
}

impl std::error::Error for CalcError {}

impl From<NumericError> for CalcError {
    fn from(err: NumericError) -> Self {
        match err {
            NumericError::Overflow => CalcError::Overflow,
            NumericError::DivisionByZero => CalcError::DivisionByZero,
            NumericError::InvalidInput => CalcError::InvalidDigitInput(String::new()),
        }
    }
}

/// Result type alias for engine operations
pub type CalcResult<T> = Result<T, CalcError>;
