// ============================================================================
// Key Events
// Discrete keypad presses consumed by the engine
// ============================================================================

use super::errors::{CalcError, CalcResult};
use super::operator::Operator;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One key press on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    /// Digit key, always in `0..=9`
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    ChangeSign,
    Percent,
    /// The bimodal "AC"/"C" key
    Clear,
}

impl Key {
    /// Build a digit-class key (`0`-`9` or `.`) from its character.
    ///
    /// # Errors
    /// Returns `InvalidDigitInput` for any other character.
    pub fn from_digit_char(c: char) -> CalcResult<Self> {
        match c {
            '.' => Ok(Key::DecimalPoint),
            '0'..='9' => Ok(Key::Digit(c as u8 - b'0')),
            _ => Err(CalcError::InvalidDigitInput(c.to_string())),
        }
    }

    /// Parse a keypad label.
    ///
    /// # Examples
    /// - "7" -> `Digit(7)`
    /// - "÷" or "/" -> `Operator(Divide)`
    /// - "+/-" or "±" -> `ChangeSign`
    /// - "AC" or "C" -> `Clear`
    pub fn from_token(token: &str) -> CalcResult<Self> {
        let token = token.trim();

        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c == '.' || c.is_ascii_digit() {
                return Self::from_digit_char(c);
            }
        }

        if let Some(op) = Operator::from_symbol(token) {
            return Ok(Key::Operator(op));
        }

        match token {
            "=" => Ok(Key::Equals),
            "±" | "+/-" => Ok(Key::ChangeSign),
            "%" => Ok(Key::Percent),
            "C" | "AC" | "c" | "ac" => Ok(Key::Clear),
            _ => Err(CalcError::InvalidDigitInput(token.to_string())),
        }
    }

    /// Keypad label for this key
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::DecimalPoint => ".".to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
            Key::ChangeSign => "±".to_string(),
            Key::Percent => "%".to_string(),
            Key::Clear => "C".to_string(),
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_token(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_tokens() {
        assert_eq!(Key::from_token("0").unwrap(), Key::Digit(0));
        assert_eq!(Key::from_token("9").unwrap(), Key::Digit(9));
        assert_eq!(Key::from_token(".").unwrap(), Key::DecimalPoint);
    }

    #[test]
    fn test_operator_tokens() {
        assert_eq!(Key::from_token("+").unwrap(), Key::Operator(Operator::Add));
        assert_eq!(Key::from_token("-").unwrap(), Key::Operator(Operator::Subtract));
        assert_eq!(Key::from_token("×").unwrap(), Key::Operator(Operator::Multiply));
        assert_eq!(Key::from_token("÷").unwrap(), Key::Operator(Operator::Divide));
    }

    #[test]
    fn test_function_tokens() {
        assert_eq!("=".parse::<Key>().unwrap(), Key::Equals);
        assert_eq!("+/-".parse::<Key>().unwrap(), Key::ChangeSign);
        assert_eq!("%".parse::<Key>().unwrap(), Key::Percent);
        assert_eq!("AC".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!(" C ".parse::<Key>().unwrap(), Key::Clear);
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(
            Key::from_token("12"),
            Err(CalcError::InvalidDigitInput("12".to_string()))
        );
        assert!(Key::from_token("sqrt").is_err());
        assert!(Key::from_digit_char('a').is_err());
    }

    #[test]
    fn test_label_parses_back() {
        let keys = [
            Key::Digit(4),
            Key::DecimalPoint,
            Key::Operator(Operator::Divide),
            Key::Equals,
            Key::ChangeSign,
            Key::Percent,
            Key::Clear,
        ];
        for key in keys {
            assert_eq!(Key::from_token(&key.label()).unwrap(), key);
        }
    }
}
