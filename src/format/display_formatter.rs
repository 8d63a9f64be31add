// ============================================================================
// Display Formatter
// Renders calculator values as display text
// ============================================================================

use crate::domain::{CalcError, CalcResult, DisplayConfig};
use crate::numeric::{count_digits, NumericValue};
use arrayvec::ArrayString;
use rust_decimal::{Decimal, RoundingStrategy};

/// Upper bound on rendered text; anything longer is a format failure.
const DISPLAY_CAPACITY: usize = 64;

type DisplayBuffer = ArrayString<DISPLAY_CAPACITY>;

/// Half away from zero, the usual pocket-calculator rounding.
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Text shown when a value cannot be rendered.
pub const FALLBACK_TEXT: &str = "0";

/// Pure value-to-text renderer for the calculator display.
///
/// Rules, with the standard [`DisplayConfig`]:
/// - integer part grouped in threes with `,`
/// - 9 significant digits when |value| >= 1, 8 when |value| < 1
/// - at most 8 digits after the decimal point
/// - |value| > 999,999,999 switches to scientific notation with 6
///   significant digits and an `e` exponent marker (`1.23457e9`)
/// - fractional zeros the user typed stay visible (`1.50`), results carry none
/// - a typed-but-unfilled decimal point renders as a trailing `.`
///
/// Formatting never mutates anything: the same `(value, trailing)` pair always
/// yields the same text.
#[derive(Debug, Clone, Default)]
pub struct DisplayFormatter {
    config: DisplayConfig,
}

impl DisplayFormatter {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Render `value`, falling back to `"0"` if rendering fails.
    pub fn format(&self, value: &NumericValue, trailing_decimal_typed: bool) -> String {
        match self.try_format(value, trailing_decimal_typed) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("Display format failed for {:?}: {}", value, err);
                FALLBACK_TEXT.to_string()
            },
        }
    }

    /// Render `value`.
    ///
    /// # Errors
    /// Returns `FormatFailure` if the text does not fit the display buffer or
    /// the scientific mantissa cannot be computed.
    pub fn try_format(
        &self,
        value: &NumericValue,
        trailing_decimal_typed: bool,
    ) -> CalcResult<String> {
        let mut out = DisplayBuffer::new();

        let threshold = Decimal::from(self.config.scientific_threshold);
        if value.as_decimal().abs() > threshold {
            self.write_scientific(&mut out, *value.as_decimal())?;
        } else {
            self.write_plain(&mut out, *value.as_decimal())?;
        }

        if trailing_decimal_typed {
            push_str(&mut out, ".")?;
        }

        Ok(out.to_string())
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    /// Fraction digits allowed by the significant-digit budget for `abs`.
    fn fraction_digits_for(&self, abs: Decimal) -> u32 {
        let max_fraction = self.config.max_fraction_digits;

        if abs.is_zero() {
            return max_fraction;
        }

        if abs >= Decimal::ONE {
            let integer_digits = NumericValue::from_decimal(abs).integer_digit_count();
            return self
                .config
                .significant_digits
                .saturating_sub(integer_digits)
                .min(max_fraction);
        }

        // 0 < abs < 1: zeros between the point and the first significant digit
        let leading_zeros = abs
            .scale()
            .saturating_sub(count_digits(abs.mantissa().unsigned_abs()));
        (self.config.small_significant_digits + leading_zeros).min(max_fraction)
    }

    fn write_plain(&self, out: &mut DisplayBuffer, value: Decimal) -> CalcResult<()> {
        let dp = self.fraction_digits_for(value.abs());

        // Only rounded values are normalized; typed zeros within budget survive
        let rounded = if value.scale() > dp {
            value.round_dp_with_strategy(dp, ROUNDING).normalize()
        } else {
            value
        };

        if rounded.is_sign_negative() {
            push_str(out, "-")?;
        }

        let text = rounded.abs().to_string();
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text.as_str(), None),
        };

        push_grouped(out, integer, self.config.grouping_separator)?;

        if let Some(fraction) = fraction {
            push_str(out, ".")?;
            push_str(out, fraction)?;
        }

        Ok(())
    }

    fn write_scientific(&self, out: &mut DisplayBuffer, value: Decimal) -> CalcResult<()> {
        let abs = value.abs();
        let integer_digits = NumericValue::from_decimal(abs).integer_digit_count();
        let mut exponent = integer_digits.saturating_sub(1);

        let mut mantissa = abs
            .checked_div(pow10(exponent)?)
            .ok_or(CalcError::FormatFailure)?
            .round_dp_with_strategy(
                self.config.scientific_significant_digits.saturating_sub(1),
                ROUNDING,
            );

        // 9.999996 rounds up to 10.00000
        if mantissa >= Decimal::TEN {
            mantissa = mantissa
                .checked_div(Decimal::TEN)
                .ok_or(CalcError::FormatFailure)?;
            exponent += 1;
        }

        if value.is_sign_negative() {
            push_str(out, "-")?;
        }
        push_str(out, &mantissa.normalize().to_string())?;
        push_str(out, &self.config.exponent_symbol)?;
        push_str(out, &exponent.to_string())
    }
}

/// 10^exponent as a decimal.
fn pow10(exponent: u32) -> CalcResult<Decimal> {
    let power = 10i128
        .checked_pow(exponent)
        .ok_or(CalcError::FormatFailure)?;
    Decimal::try_from_i128_with_scale(power, 0).map_err(|_| CalcError::FormatFailure)
}

fn push_str(out: &mut DisplayBuffer, s: &str) -> CalcResult<()> {
    out.try_push_str(s).map_err(|_| CalcError::FormatFailure)
}

/// Write `digits` with `separator` between groups of three, counted from the right.
fn push_grouped(out: &mut DisplayBuffer, digits: &str, separator: char) -> CalcResult<()> {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.try_push(separator).map_err(|_| CalcError::FormatFailure)?;
        }
        out.try_push(c).map_err(|_| CalcError::FormatFailure)?;
    }
    Ok(())
}
