// ============================================================================
// Evaluator Interface
// Defines the contract for applying a pending operator
// ============================================================================

use crate::domain::{CalcResult, Operator};
use crate::numeric::NumericValue;

/// Strategy interface for binary evaluation on equals
/// Implementations: DecimalEvaluator (exact decimal arithmetic)
pub trait Evaluator: Send + Sync {
    /// Apply `operator` to `(first_operand, second_operand)`
    ///
    /// # Returns
    /// The new current value, or `DivisionByZero`/`Overflow`
    fn evaluate(
        &self,
        first_operand: NumericValue,
        operator: Operator,
        second_operand: NumericValue,
    ) -> CalcResult<NumericValue>;

    /// Get the evaluator name for logging
    fn name(&self) -> &str;
}
