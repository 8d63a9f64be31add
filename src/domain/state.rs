// ============================================================================
// Engine State
// The single mutable record behind the calculator, plus its derived phase
// ============================================================================

use super::errors::CalcError;
use super::operator::Operator;
use crate::numeric::NumericValue;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Engine Phase
// ============================================================================

/// Coarse phase of the key-entry state machine.
///
/// | from                  | key        | to             |
/// |-----------------------|------------|----------------|
/// | Idle / ResultShown    | digit      | OperandEntered |
/// | Idle / ResultShown    | operator   | OperatorArmed  |
/// | OperatorArmed         | digit      | OperandEntered |
/// | OperandEntered        | operator   | OperatorArmed  |
/// | OperandEntered        | equals     | ResultShown    |
/// | any                   | ÷0, overflow | Error        |
/// | Error                 | clear      | Idle           |
///
/// The phase is derived from [`EngineState`]'s flags, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnginePhase {
    /// Fresh zero, nothing typed and no pending operation
    Idle,
    /// An operand is being typed (first or second)
    OperandEntered,
    /// An operator was chosen; the next digit starts the second operand
    OperatorArmed,
    /// Equals produced a result; the next digit starts a new number
    ResultShown,
    /// An arithmetic error is displayed; only clear is accepted
    Error,
}

impl EnginePhase {
    /// Whether digits, operators and equals are currently processed.
    pub fn accepts_arithmetic(&self) -> bool {
        !matches!(self, EnginePhase::Error)
    }
}

// ============================================================================
// Clear Button Label
// ============================================================================

/// Label of the bimodal clear key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClearLabel {
    /// "AC": nothing to clear locally, a press resets the pending operation
    AllClear,
    /// "C": a press clears the current entry only
    Clear,
}

impl ClearLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearLabel::AllClear => "AC",
            ClearLabel::Clear => "C",
        }
    }
}

impl fmt::Display for ClearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Engine State Record
// ============================================================================

/// All mutable calculator state, owned exclusively by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineState {
    /// Value being displayed or edited
    pub current_value: NumericValue,

    /// Operand captured when the operator was chosen; meaningless without one
    pub first_operand: NumericValue,

    /// Pending binary operator
    pub operator: Option<Operator>,

    /// True from operator selection until equals or all-clear
    pub has_active_operation: bool,

    /// Next digit starts a new number instead of extending the current one
    pub entry_reset_pending: bool,

    /// "." was typed and no fractional digit follows yet (display only)
    pub trailing_decimal_typed: bool,

    /// Arithmetic error currently displayed
    pub error: Option<CalcError>,
}

impl EngineState {
    /// Startup state: zero, no operator, all flags cleared.
    pub fn new() -> Self {
        Self {
            current_value: NumericValue::ZERO,
            first_operand: NumericValue::ZERO,
            operator: None,
            has_active_operation: false,
            entry_reset_pending: false,
            trailing_decimal_typed: false,
            error: None,
        }
    }

    /// Return to the startup state (all clear).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Zero with nothing typed: no decimal point, no typed fractional zeros.
    pub fn is_fresh_zero(&self) -> bool {
        self.current_value.is_zero()
            && !self.current_value.has_decimal_point()
            && !self.trailing_decimal_typed
    }

    /// Next digit belongs to the fractional side.
    pub fn in_fractional_entry(&self) -> bool {
        self.trailing_decimal_typed || self.current_value.has_decimal_point()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// "AC" whenever the current value is zero (or an error is shown), else "C".
    pub fn clear_label(&self) -> ClearLabel {
        if self.is_error() || self.current_value.is_zero() {
            ClearLabel::AllClear
        } else {
            ClearLabel::Clear
        }
    }

    /// Operator button to show as armed. At most one at a time.
    pub fn highlighted_operator(&self) -> Option<Operator> {
        if self.is_error() || !self.has_active_operation {
            None
        } else {
            self.operator
        }
    }

    /// Derive the state-machine phase from the flags.
    pub fn phase(&self) -> EnginePhase {
        if self.is_error() {
            EnginePhase::Error
        } else if self.has_active_operation {
            if self.entry_reset_pending || self.is_fresh_zero() {
                EnginePhase::OperatorArmed
            } else {
                EnginePhase::OperandEntered
            }
        } else if self.entry_reset_pending {
            EnginePhase::ResultShown
        } else if self.is_fresh_zero() {
            EnginePhase::Idle
        } else {
            EnginePhase::OperandEntered
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = EngineState::new();
        assert!(state.current_value.is_zero());
        assert_eq!(state.operator, None);
        assert!(!state.has_active_operation);
        assert!(!state.entry_reset_pending);
        assert!(!state.trailing_decimal_typed);
        assert_eq!(state.phase(), EnginePhase::Idle);
        assert_eq!(state.clear_label(), ClearLabel::AllClear);
    }

    #[test]
    fn test_phase_derivation() {
        let mut state = EngineState::new();
        state.current_value = NumericValue::from_integer(12);
        assert_eq!(state.phase(), EnginePhase::OperandEntered);
        assert_eq!(state.clear_label(), ClearLabel::Clear);

        state.operator = Some(Operator::Add);
        state.has_active_operation = true;
        state.entry_reset_pending = true;
        assert_eq!(state.phase(), EnginePhase::OperatorArmed);
        assert_eq!(state.highlighted_operator(), Some(Operator::Add));

        state.entry_reset_pending = false;
        assert_eq!(state.phase(), EnginePhase::OperandEntered);

        state.operator = None;
        state.has_active_operation = false;
        state.entry_reset_pending = true;
        assert_eq!(state.phase(), EnginePhase::ResultShown);
        assert_eq!(state.highlighted_operator(), None);

        state.error = Some(CalcError::DivisionByZero);
        assert_eq!(state.phase(), EnginePhase::Error);
        assert!(!state.phase().accepts_arithmetic());
        assert_eq!(state.clear_label(), ClearLabel::AllClear);
    }

    #[test]
    fn test_fresh_zero() {
        let mut state = EngineState::new();
        assert!(state.is_fresh_zero());

        state.trailing_decimal_typed = true;
        assert!(!state.is_fresh_zero());
        assert!(state.in_fractional_entry());

        state.trailing_decimal_typed = false;
        state.current_value = "0.0".parse().unwrap();
        assert!(!state.is_fresh_zero());
        assert_eq!(state.clear_label(), ClearLabel::AllClear);
    }

    #[test]
    fn test_reset() {
        let mut state = EngineState::new();
        state.current_value = NumericValue::from_integer(9);
        state.first_operand = NumericValue::from_integer(3);
        state.operator = Some(Operator::Divide);
        state.has_active_operation = true;
        state.reset();
        assert_eq!(state, EngineState::new());
    }

    #[test]
    fn test_clear_label_text() {
        assert_eq!(ClearLabel::AllClear.to_string(), "AC");
        assert_eq!(ClearLabel::Clear.as_str(), "C");
    }
}
