// ============================================================================
// Entry Buffer
// Accumulates digit and decimal-point presses into the current operand
// ============================================================================

use crate::domain::{CalcError, CalcResult, EngineConfig, EngineState};
use crate::numeric::{NumericError, NumericValue};

/// Digit budget applied while typing an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLimits {
    /// Integer plus fractional digits
    pub max_digits: u32,
    /// Fractional digits
    pub max_fraction_digits: u32,
}

impl From<&EngineConfig> for EntryLimits {
    fn from(config: &EngineConfig) -> Self {
        Self {
            max_digits: config.max_entry_digits,
            max_fraction_digits: config.max_fraction_digits,
        }
    }
}

/// What a digit-class key did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// A new number was started with this key
    Started,
    /// The key extended the number being typed
    Appended,
    /// The key had no effect (second decimal point)
    Ignored,
}

/// Apply a digit key (`0..=9`) to the state.
///
/// Starts a new number when an entry reset is pending or nothing has been
/// typed yet; otherwise appends to the integer or fractional side.
///
/// # Errors
/// - `InvalidDigitInput` if `digit` is not in `0..=9`
/// - `EntryOverflow` if the digit would exceed `limits`
pub fn push_digit(
    state: &mut EngineState,
    digit: u8,
    limits: EntryLimits,
) -> CalcResult<EntryOutcome> {
    if digit > 9 {
        return Err(CalcError::InvalidDigitInput(digit.to_string()));
    }

    if state.entry_reset_pending || state.is_fresh_zero() {
        let mut value = NumericValue::from_digit(digit)?;
        // ± on a fresh zero carries over to the first digit
        if !state.entry_reset_pending && state.current_value.is_negative() {
            value = -value;
        }
        state.current_value = value;
        state.trailing_decimal_typed = false;
        state.entry_reset_pending = false;
        return Ok(EntryOutcome::Started);
    }

    let current = state.current_value;
    let fractional = state.in_fractional_entry();

    if current.entry_digit_count() >= limits.max_digits {
        return Err(CalcError::EntryOverflow);
    }
    if fractional && current.scale() >= limits.max_fraction_digits {
        return Err(CalcError::EntryOverflow);
    }

    state.current_value = current
        .push_digit(digit, fractional)
        .map_err(|err| match err {
            NumericError::Overflow => CalcError::EntryOverflow,
            other => CalcError::from(other),
        })?;
    state.trailing_decimal_typed = false;
    state.entry_reset_pending = false;
    Ok(EntryOutcome::Appended)
}

/// Apply the decimal-point key to the state.
///
/// Only the display changes (`3` becomes `3.`); the value is untouched until
/// a fractional digit follows. With an entry reset pending the point starts a
/// fresh `0.` entry.
pub fn push_decimal_point(state: &mut EngineState, limits: EntryLimits) -> EntryOutcome {
    if limits.max_fraction_digits == 0 {
        return EntryOutcome::Ignored;
    }

    if state.entry_reset_pending {
        state.current_value = NumericValue::ZERO;
        state.entry_reset_pending = false;
        state.trailing_decimal_typed = true;
        return EntryOutcome::Started;
    }

    if state.in_fractional_entry() {
        return EntryOutcome::Ignored;
    }

    state.trailing_decimal_typed = true;
    EntryOutcome::Appended
}
