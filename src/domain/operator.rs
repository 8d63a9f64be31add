// ============================================================================
// Operator Domain Model
// ============================================================================

use crate::numeric::{NumericResult, NumericValue};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary operator of the four-function keypad.
///
/// "No pending operation" is expressed as `Option<Operator>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom).
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Apply this operator to `(lhs, rhs)`.
    ///
    /// # Errors
    /// - `DivisionByZero` for `Divide` with a zero `rhs`
    /// - `Overflow` when the result leaves the decimal range
    pub fn apply(self, lhs: NumericValue, rhs: NumericValue) -> NumericResult<NumericValue> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => lhs.checked_div(rhs),
        }
    }

    /// Keypad symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Parse a keypad symbol, accepting the ASCII spellings as well.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Subtract),
            "*" | "×" | "x" | "X" => Some(Operator::Multiply),
            "/" | "÷" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
