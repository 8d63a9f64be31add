// ============================================================================
// Evaluator
// Applies the pending operator on equals
// ============================================================================

use crate::domain::{CalcError, CalcResult, EngineState, Operator};
use crate::interfaces::Evaluator;
use crate::numeric::NumericValue;

/// Exact decimal evaluation of the four operators
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalEvaluator;

impl DecimalEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for DecimalEvaluator {
    fn evaluate(
        &self,
        first_operand: NumericValue,
        operator: Operator,
        second_operand: NumericValue,
    ) -> CalcResult<NumericValue> {
        operator
            .apply(first_operand, second_operand)
            .map_err(CalcError::from)
    }

    fn name(&self) -> &str {
        "Decimal"
    }
}

/// Outcome of an equals press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// No operator pending; nothing was computed
    NoPendingOperation,
    /// The operator was applied and the result became the current value
    Completed {
        first_operand: NumericValue,
        operator: Operator,
        second_operand: NumericValue,
        result: NumericValue,
    },
    /// Arithmetic failed; the state now holds the error
    Failed(CalcError),
}

/// Run equals against the state.
///
/// Success and failure both drop the pending operator and arm an entry reset,
/// so a second equals in a row is a no-op.
pub fn evaluate_pending(state: &mut EngineState, evaluator: &dyn Evaluator) -> Evaluation {
    let Some(operator) = state.operator else {
        state.has_active_operation = false;
        return Evaluation::NoPendingOperation;
    };

    let first_operand = state.first_operand;
    let second_operand = state.current_value;
    let outcome = evaluator.evaluate(first_operand, operator, second_operand);

    state.operator = None;
    state.has_active_operation = false;
    state.entry_reset_pending = true;
    state.trailing_decimal_typed = false;

    match outcome {
        Ok(result) => {
            state.current_value = result;
            Evaluation::Completed {
                first_operand,
                operator,
                second_operand,
                result,
            }
        },
        Err(err) => {
            state.error = Some(err.clone());
            Evaluation::Failed(err)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> NumericValue {
        s.parse().unwrap()
    }

    fn armed(first: &str, operator: Operator, second: &str) -> EngineState {
        let mut state = EngineState::new();
        state.first_operand = num(first);
        state.operator = Some(operator);
        state.has_active_operation = true;
        state.current_value = num(second);
        state
    }

    #[test]
    fn test_completed_evaluation() {
        let mut state = armed("123", Operator::Add, "45");
        let outcome = evaluate_pending(&mut state, &DecimalEvaluator);

        assert_eq!(
            outcome,
            Evaluation::Completed {
                first_operand: num("123"),
                operator: Operator::Add,
                second_operand: num("45"),
                result: num("168"),
            }
        );
        assert_eq!(state.current_value, num("168"));
        assert_eq!(state.operator, None);
        assert!(!state.has_active_operation);
        assert!(state.entry_reset_pending);
    }

    #[test]
    fn test_no_pending_operation() {
        let mut state = EngineState::new();
        state.current_value = num("9");
        let before = state.clone();
        assert_eq!(
            evaluate_pending(&mut state, &DecimalEvaluator),
            Evaluation::NoPendingOperation
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_division_by_zero_sets_error() {
        let mut state = armed("5", Operator::Divide, "0");
        assert_eq!(
            evaluate_pending(&mut state, &DecimalEvaluator),
            Evaluation::Failed(CalcError::DivisionByZero)
        );
        assert_eq!(state.error, Some(CalcError::DivisionByZero));
        assert_eq!(state.operator, None);
    }

    #[test]
    fn test_second_equals_is_noop() {
        let mut state = armed("2", Operator::Multiply, "21");
        evaluate_pending(&mut state, &DecimalEvaluator);
        let after_first = state.clone();
        assert_eq!(
            evaluate_pending(&mut state, &DecimalEvaluator),
            Evaluation::NoPendingOperation
        );
        assert_eq!(state, after_first);
        assert_eq!(state.current_value, num("42"));
    }

    #[test]
    fn test_evaluator_name() {
        assert_eq!(DecimalEvaluator::new().name(), "Decimal");
    }
}
