// ============================================================================
// Calculator Engine
// Core key-event handling for the four-function calculator
// ============================================================================

use super::entry_buffer::{self, EntryLimits, EntryOutcome};
use super::evaluator::{evaluate_pending, DecimalEvaluator, Evaluation};
use crate::domain::{
    CalcError, CalcResult, ClearLabel, EngineConfig, EnginePhase, EngineSnapshot, EngineState,
    Key, Operator,
};
use crate::format::DisplayFormatter;
use crate::interfaces::{ClearMode, EngineEvent, EventHandler, Evaluator, NoOpEventHandler};
use crate::numeric::NumericValue;
use chrono::Utc;
use std::sync::Arc;

/// Calculator engine: owns the state record and turns key presses into
/// display output.
///
/// Every key goes through [`CalculatorEngine::press`], which mutates the state,
/// then pushes the resulting events to the event handler in one batch.
pub struct CalculatorEngine {
    /// The single mutable state record
    state: EngineState,

    /// Entry limits and display rules
    config: EngineConfig,

    /// Renders the current value
    formatter: DisplayFormatter,

    /// Pluggable equals evaluation
    evaluator: Box<dyn Evaluator>,

    /// Event handler for view notifications
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorEngine {
    /// Create a new calculator engine with exact decimal evaluation
    pub fn new(config: EngineConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self::with_evaluator(config, Box::new(DecimalEvaluator), event_handler)
    }

    /// Create a new calculator engine with a custom evaluator
    pub fn with_evaluator(
        config: EngineConfig,
        evaluator: Box<dyn Evaluator>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            state: EngineState::new(),
            formatter: DisplayFormatter::new(config.display.clone()),
            config,
            evaluator,
            event_handler,
        }
    }

    // ========================================================================
    // Key input
    // ========================================================================

    /// Digit key (`'0'..='9'`) or decimal point (`'.'`)
    pub fn press_digit(&mut self, digit: char) {
        match Key::from_digit_char(digit) {
            Ok(key) => self.press(key),
            Err(err) => self.reject_token(&digit.to_string(), err),
        }
    }

    /// Operator key; the chosen operator becomes the only armed one
    pub fn press_operator(&mut self, operator: Operator) {
        self.press(Key::Operator(operator));
    }

    pub fn press_equals(&mut self) {
        self.press(Key::Equals);
    }

    pub fn press_change_sign(&mut self) {
        self.press(Key::ChangeSign);
    }

    pub fn press_percent(&mut self) {
        self.press(Key::Percent);
    }

    /// The bimodal "AC"/"C" key
    pub fn press_clear(&mut self) {
        self.press(Key::Clear);
    }

    /// Parse a keypad label and press it.
    ///
    /// # Errors
    /// Returns `InvalidDigitInput` for an unknown label; the engine state is
    /// left untouched.
    pub fn press_token(&mut self, token: &str) -> CalcResult<()> {
        match Key::from_token(token) {
            Ok(key) => {
                self.press(key);
                Ok(())
            },
            Err(err) => {
                self.reject_token(token, err.clone());
                Err(err)
            },
        }
    }

    /// Press every whitespace-separated label in `keys`, e.g. `"1 2 + 3 ="`.
    ///
    /// # Errors
    /// Stops at the first unknown label.
    pub fn press_sequence(&mut self, keys: &str) -> CalcResult<()> {
        for token in keys.split_whitespace() {
            self.press_token(token)?;
        }
        Ok(())
    }

    /// Handle one key event to completion
    pub fn press(&mut self, key: Key) {
        let before = self.snapshot();
        let mut events = Vec::new();

        tracing::trace!("Key {} pressed in phase {:?}", key, before.phase);

        if let Some(error) = &self.state.error {
            if key != Key::Clear {
                tracing::debug!("Key {} ignored while showing error: {}", key, error);
                events.push(EngineEvent::key_rejected(&key, error.clone()));
                self.publish(&before, events);
                return;
            }
        }

        match key {
            Key::Digit(digit) => self.handle_digit(&key, digit, &mut events),
            Key::DecimalPoint => self.handle_decimal_point(),
            Key::Operator(operator) => self.select_operator(operator),
            Key::Equals => self.handle_equals(&mut events),
            Key::ChangeSign => self.state.current_value = -self.state.current_value,
            Key::Percent => self.handle_percent(&mut events),
            Key::Clear => self.handle_clear(&mut events),
        }

        self.publish(&before, events);
    }

    // ========================================================================
    // Outputs
    // ========================================================================

    /// Formatted display text ("Error" while in the error state)
    pub fn display_text(&self) -> String {
        if self.state.is_error() {
            return self.config.display.error_text.clone();
        }
        self.formatter
            .format(&self.state.current_value, self.state.trailing_decimal_typed)
    }

    pub fn clear_label(&self) -> ClearLabel {
        self.state.clear_label()
    }

    pub fn highlighted_operator(&self) -> Option<Operator> {
        self.state.highlighted_operator()
    }

    pub fn phase(&self) -> EnginePhase {
        self.state.phase()
    }

    /// Current numeric value
    pub fn current_value(&self) -> NumericValue {
        self.state.current_value
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the evaluator name
    pub fn evaluator_name(&self) -> &str {
        self.evaluator.name()
    }

    /// Everything the view layer renders
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display_text: self.display_text(),
            clear_label: self.clear_label(),
            highlighted_operator: self.highlighted_operator(),
            phase: self.phase(),
        }
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn handle_digit(&mut self, key: &Key, digit: u8, events: &mut Vec<EngineEvent>) {
        let limits = EntryLimits::from(&self.config);
        match entry_buffer::push_digit(&mut self.state, digit, limits) {
            Ok(outcome) => tracing::trace!("Digit {} {:?}", digit, outcome),
            Err(err) => {
                tracing::debug!("Digit {} rejected: {}", digit, err);
                events.push(EngineEvent::key_rejected(key, err));
            },
        }
    }

    fn handle_decimal_point(&mut self) {
        let limits = EntryLimits::from(&self.config);
        if entry_buffer::push_decimal_point(&mut self.state, limits) == EntryOutcome::Ignored {
            tracing::trace!("Decimal point ignored, entry already fractional");
        }
    }

    /// Arm `operator`, capturing the displayed value as the first operand.
    /// A second operator before equals replaces the first without evaluating.
    fn select_operator(&mut self, operator: Operator) {
        let state = &mut self.state;
        if let Some(previous) = state.operator {
            tracing::debug!("Operator {} replaces pending {}", operator, previous);
        }
        state.first_operand = state.current_value;
        state.operator = Some(operator);
        state.has_active_operation = true;
        state.entry_reset_pending = true;
        state.trailing_decimal_typed = false;
    }

    fn handle_equals(&mut self, events: &mut Vec<EngineEvent>) {
        match evaluate_pending(&mut self.state, self.evaluator.as_ref()) {
            Evaluation::NoPendingOperation => {
                tracing::trace!("Equals with no pending operator");
            },
            Evaluation::Completed {
                first_operand,
                operator,
                second_operand,
                result,
            } => {
                tracing::debug!(
                    "{} {} {} = {} ({})",
                    first_operand,
                    operator,
                    second_operand,
                    result,
                    self.evaluator.name()
                );
                events.push(EngineEvent::Evaluated {
                    first_operand,
                    operator,
                    second_operand,
                    result,
                    timestamp: Utc::now(),
                });
            },
            Evaluation::Failed(error) => self.raise_error(error, events),
        }
    }

    fn handle_percent(&mut self, events: &mut Vec<EngineEvent>) {
        match self.state.current_value.percent() {
            Ok(value) => {
                self.state.current_value = value;
                self.state.trailing_decimal_typed = false;
            },
            Err(err) => self.raise_error(CalcError::from(err), events),
        }
    }

    fn raise_error(&mut self, error: CalcError, events: &mut Vec<EngineEvent>) {
        tracing::warn!("Calculator error: {}", error);
        self.state.error = Some(error.clone());
        self.state.operator = None;
        self.state.has_active_operation = false;
        events.push(EngineEvent::ErrorRaised {
            error,
            timestamp: Utc::now(),
        });
    }

    fn handle_clear(&mut self, events: &mut Vec<EngineEvent>) {
        let state = &mut self.state;

        let mode = if state.is_error() {
            state.reset();
            ClearMode::All
        } else if state.current_value.is_zero() && state.has_active_operation {
            // "AC": nothing left to clear locally, drop the pending operation
            state.reset();
            ClearMode::All
        } else if state.current_value.is_zero() {
            // Zero with no pending operation; "0.", "0.00" and "-0" stay as typed
            tracing::trace!("Clear with nothing to clear");
            return;
        } else {
            // "C": reset the entry, keep operator and first operand
            state.current_value = NumericValue::ZERO;
            state.trailing_decimal_typed = false;
            state.entry_reset_pending = false;
            ClearMode::Entry
        };

        tracing::debug!("Cleared ({:?})", mode);
        events.push(EngineEvent::Cleared {
            mode,
            timestamp: Utc::now(),
        });
    }

    fn reject_token(&self, token: &str, err: CalcError) {
        tracing::warn!("Rejected key input {:?}: {}", token, err);
        self.event_handler.on_event(EngineEvent::KeyRejected {
            key: token.to_string(),
            reason: err,
            timestamp: Utc::now(),
        });
    }

    /// Append change notifications and hand the batch to the event handler.
    fn publish(&self, before: &EngineSnapshot, mut events: Vec<EngineEvent>) {
        let after = self.snapshot();

        if after.highlighted_operator != before.highlighted_operator {
            events.push(EngineEvent::OperatorHighlightChanged {
                operator: after.highlighted_operator,
                timestamp: Utc::now(),
            });
        }

        if after.display_text != before.display_text || after.clear_label != before.clear_label
        {
            events.push(EngineEvent::DisplayChanged {
                text: after.display_text,
                clear_label: after.clear_label,
                timestamp: Utc::now(),
            });
        }

        if !events.is_empty() {
            self.event_handler.on_events(events);
        }
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default(), Arc::new(NoOpEventHandler))
    }
}
