// ============================================================================
// Numeric Module
// Decimal arithmetic for the calculator's operands
// ============================================================================
//
// This module provides:
// - NumericValue: decimal operand with exact base-10 arithmetic
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No binary floating-point operations (0.1 + 0.2 is exactly 0.3)
// - All arithmetic returns Result (no panics)
// - Values built by digit entry keep their typed scale

mod errors;
mod numeric_value;

pub use errors::{NumericError, NumericResult};
pub use numeric_value::NumericValue;

pub(crate) use numeric_value::count_digits;
