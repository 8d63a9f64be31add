// ============================================================================
// Numeric Value
// Decimal operand used for every calculator computation
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal operand of the calculator.
///
/// Wraps a `rust_decimal::Decimal` (96-bit mantissa, scale 0-28), so all
/// arithmetic happens in base 10 and `0.1 + 0.2` is exactly `0.3`.
///
/// # Scale
/// Values produced by digit entry keep the scale the user typed: entering
/// `1`, `.`, `0` yields `1.0` (scale 1), which lets the next digit land after
/// the typed zero. Arithmetic results are normalized and carry no trailing
/// fractional zeros.
///
/// # Example
/// ```
/// use calculator_engine::numeric::NumericValue;
///
/// let a: NumericValue = "0.1".parse().unwrap();
/// let b: NumericValue = "0.2".parse().unwrap();
/// assert_eq!(a.checked_add(b).unwrap().to_string(), "0.3");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct NumericValue(Decimal);

/// Number of decimal digits in `n` (zero has none).
pub(crate) const fn count_digits(mut n: u128) -> u32 {
    let mut digits = 0;
    while n > 0 {
        n /= 10;
        digits += 1;
    }
    digits
}

impl NumericValue {
    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (1)
    pub const ONE: Self = Self(Decimal::ONE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap an existing decimal without touching its scale.
    #[inline]
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Create from an integer value.
    #[inline]
    pub fn from_integer(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create from a single keypad digit.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `digit` is not in `0..=9`.
    #[inline]
    pub fn from_digit(digit: u8) -> NumericResult<Self> {
        if digit > 9 {
            return Err(NumericError::InvalidInput);
        }
        Ok(Self(Decimal::from(digit)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the underlying decimal.
    #[inline]
    pub const fn as_decimal(&self) -> &Decimal {
        &self.0
    }

    /// Consume into the underlying decimal.
    #[inline]
    pub const fn into_decimal(self) -> Decimal {
        self.0
    }

    /// Check if value is zero (either sign).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the sign bit is set. True for `-0` as well.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative()
    }

    /// Number of fractional digits carried by this value.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Whether the textual form of this value contains a decimal point.
    #[inline]
    pub fn has_decimal_point(&self) -> bool {
        self.0.scale() > 0
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Digits left of the decimal point. A lone leading zero (`0.5`) counts as none.
    pub fn integer_digit_count(&self) -> u32 {
        count_digits(self.0.mantissa().unsigned_abs()).saturating_sub(self.0.scale())
    }

    /// Digits the user has typed to produce this value: integer digits plus
    /// fractional digits, ignoring sign, decimal point and a lone leading zero.
    pub fn entry_digit_count(&self) -> u32 {
        self.integer_digit_count() + self.0.scale()
    }

    /// Strip trailing fractional zeros; `-0` becomes `0`.
    #[inline]
    pub fn normalize(&self) -> Self {
        Self(self.0.normalize())
    }

    // ========================================================================
    // Digit Entry
    // ========================================================================

    /// Append a keypad digit to the textual form of this value.
    ///
    /// With `fractional == false` the digit extends the integer part
    /// (`12` -> `123`); with `fractional == true` it becomes the next
    /// fractional digit (`1.0` -> `1.05`, `3` -> `3.7`). The sign is kept,
    /// so `-4` followed by `2` gives `-42`.
    ///
    /// # Errors
    /// - `InvalidInput` if `digit` is not in `0..=9`
    /// - `Overflow` if the mantissa or scale limit of the decimal is exceeded
    pub fn push_digit(&self, digit: u8, fractional: bool) -> NumericResult<Self> {
        if digit > 9 {
            return Err(NumericError::InvalidInput);
        }

        let mantissa = self
            .0
            .mantissa()
            .unsigned_abs()
            .checked_mul(10)
            .and_then(|m| m.checked_add(u128::from(digit)))
            .ok_or(NumericError::Overflow)?;
        let mantissa = i128::try_from(mantissa).map_err(|_| NumericError::Overflow)?;
        let scale = self.0.scale() + u32::from(fractional);

        let mut value = Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| NumericError::Overflow)?;
        value.set_sign_negative(self.0.is_sign_negative());
        Ok(Self(value))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition. Result is normalized.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(|d| Self(d.normalize()))
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction. Result is normalized.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(|d| Self(d.normalize()))
            .ok_or(NumericError::Overflow)
    }

    /// Checked multiplication. Result is normalized.
    ///
    /// Products needing more than 28 fractional digits are rounded by the
    /// decimal backend.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs.0)
            .map(|d| Self(d.normalize()))
            .ok_or(NumericError::Overflow)
    }

    /// Checked division. Result is normalized.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the result is out of range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        self.0
            .checked_div(rhs.0)
            .map(|d| Self(d.normalize()))
            .ok_or(NumericError::Overflow)
    }

    /// Divide by exactly 100.
    ///
    /// # Errors
    /// Returns `Overflow` if the scale limit of the decimal is exceeded.
    #[inline]
    pub fn percent(self) -> NumericResult<Self> {
        self.checked_div(Self::from_integer(100))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

/// Negation keeps scale and flips the sign bit, zero included, so applying it
/// twice always restores the original value exactly.
impl Neg for NumericValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<Decimal> for NumericValue {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<NumericValue> for Decimal {
    #[inline]
    fn from(value: NumericValue) -> Self {
        value.0
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericValue({}, scale={})", self.0, self.0.scale())
    }
}

/// Plain decimal text, keeping the value's scale (`1.50` stays `1.50`).
impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for NumericValue {
    type Err = NumericError;

    /// Parse from plain decimal text.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "0.50" -> 0.50 (scale 2)
    /// - "-0.001" -> -0.001
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        s.parse::<Decimal>()
            .map(Self)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn num(s: &str) -> NumericValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_constants() {
        assert!(NumericValue::ZERO.is_zero());
        assert_eq!(NumericValue::ONE, NumericValue::from_integer(1));
        assert_eq!(NumericValue::default(), NumericValue::ZERO);
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(NumericValue::from_digit(7).unwrap(), num("7"));
        assert_eq!(
            NumericValue::from_digit(10),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_push_integer_digit() {
        let x = num("12").push_digit(3, false).unwrap();
        assert_eq!(x.to_string(), "123");

        let neg = num("-4").push_digit(2, false).unwrap();
        assert_eq!(neg.to_string(), "-42");
    }

    #[test]
    fn test_push_fraction_digit() {
        let x = num("3").push_digit(7, true).unwrap();
        assert_eq!(x.to_string(), "3.7");

        // Typed zeros survive and later digits land after them
        let y = num("1").push_digit(0, true).unwrap();
        assert_eq!(y.to_string(), "1.0");
        let z = y.push_digit(5, true).unwrap();
        assert_eq!(z.to_string(), "1.05");

        let small = num("0").push_digit(0, true).unwrap().push_digit(5, true).unwrap();
        assert_eq!(small, num("0.05"));
    }

    #[test]
    fn test_push_digit_keeps_negative_zero_sign() {
        let neg_zero = -NumericValue::ZERO;
        let x = neg_zero.push_digit(5, true).unwrap();
        assert_eq!(x.to_string(), "-0.5");
    }

    #[test]
    fn test_push_digit_invalid() {
        assert_eq!(
            num("1").push_digit(12, false),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_push_digit_scale_overflow() {
        let deep = num("0.0000000000000000000000000001"); // scale 28
        assert_eq!(deep.push_digit(1, true), Err(NumericError::Overflow));
    }

    #[test]
    fn test_digit_counts() {
        assert_eq!(num("0").entry_digit_count(), 0);
        assert_eq!(num("123").entry_digit_count(), 3);
        assert_eq!(num("0.05").integer_digit_count(), 0);
        assert_eq!(num("0.05").entry_digit_count(), 2);
        assert_eq!(num("10.50").integer_digit_count(), 2);
        assert_eq!(num("10.50").entry_digit_count(), 4);
        assert_eq!(num("-987.6").entry_digit_count(), 4);
    }

    #[test]
    fn test_decimal_addition_is_exact() {
        let sum = num("0.1").checked_add(num("0.2")).unwrap();
        assert_eq!(sum, num("0.3"));
        assert_eq!(sum.to_string(), "0.3");
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(num("123").checked_add(num("45")).unwrap(), num("168"));
        assert_eq!(num("10").checked_sub(num("30")).unwrap(), num("-20"));
        assert_eq!(num("1.5").checked_mul(num("1.5")).unwrap(), num("2.25"));
        assert_eq!(num("7").checked_div(num("2")).unwrap(), num("3.5"));
    }

    #[test]
    fn test_results_are_normalized() {
        let product = num("1.50").checked_mul(num("2")).unwrap();
        assert_eq!(product.to_string(), "3");
        assert_eq!(product.scale(), 0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            num("5").checked_div(NumericValue::ZERO),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            num("5").checked_div(num("0.00")),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        let max = NumericValue::from_decimal(Decimal::MAX);
        assert_eq!(max.checked_add(NumericValue::ONE), Err(NumericError::Overflow));
        assert_eq!(
            max.checked_mul(NumericValue::from_integer(2)),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_percent() {
        assert_eq!(num("50").percent().unwrap(), num("0.5"));
        assert_eq!(num("5").percent().unwrap().to_string(), "0.05");
        assert!(NumericValue::ZERO.percent().unwrap().is_zero());
    }

    #[test]
    fn test_negation() {
        let x = num("100");
        assert_eq!((-x).to_string(), "-100");
        assert_eq!(-(-x), x);

        let zero = NumericValue::ZERO;
        assert!((-zero).is_negative());
        assert!(!(-(-zero)).is_negative());
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("".parse::<NumericValue>(), Err(NumericError::InvalidInput));
        assert_eq!(
            "not_a_number".parse::<NumericValue>(),
            Err(NumericError::InvalidInput)
        );
    }

    quickcheck! {
        fn prop_double_negation_restores_text(mantissa: i64, scale: u8) -> bool {
            let value = NumericValue::from_decimal(Decimal::new(mantissa, u32::from(scale % 29)));
            let restored = -(-value);
            restored.to_string() == value.to_string() && restored.scale() == value.scale()
        }
    }
}
