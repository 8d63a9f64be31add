// ============================================================================
// Engine Configuration
// Entry limits and display rules for the calculator engine
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Display Configuration
// ============================================================================

/// Rules the display formatter applies when rendering a value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Significant digits shown when |value| >= 1
    pub significant_digits: u32,

    /// Significant digits shown when |value| < 1
    pub small_significant_digits: u32,

    /// Maximum digits after the decimal point
    pub max_fraction_digits: u32,

    /// Values with |value| above this switch to scientific notation
    pub scientific_threshold: u64,

    /// Significant digits of the scientific mantissa
    pub scientific_significant_digits: u32,

    /// Marker between mantissa and exponent (e.g. "1.5e12")
    pub exponent_symbol: String,

    /// Separator between groups of three integer digits
    pub grouping_separator: char,

    /// Text shown while the engine is in its error state
    pub error_text: String,
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self {
            significant_digits: 9,
            small_significant_digits: 8,
            max_fraction_digits: 8,
            scientific_threshold: 999_999_999,
            scientific_significant_digits: 6,
            exponent_symbol: "e".to_string(),
            grouping_separator: ',',
            error_text: "Error".to_string(),
        }
    }

    /// Builder method: Set significant digits for |value| >= 1
    pub fn with_significant_digits(mut self, digits: u32) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Builder method: Set significant digits for |value| < 1
    pub fn with_small_significant_digits(mut self, digits: u32) -> Self {
        self.small_significant_digits = digits;
        self
    }

    /// Builder method: Set maximum fraction digits
    pub fn with_max_fraction_digits(mut self, digits: u32) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Builder method: Set the scientific notation threshold
    pub fn with_scientific_threshold(mut self, threshold: u64) -> Self {
        self.scientific_threshold = threshold;
        self
    }

    /// Builder method: Set scientific mantissa significant digits
    pub fn with_scientific_significant_digits(mut self, digits: u32) -> Self {
        self.scientific_significant_digits = digits;
        self
    }

    /// Builder method: Set the error text
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.significant_digits == 0 || self.significant_digits > 28 {
            return Err("Significant digits must be between 1 and 28".to_string());
        }

        if self.small_significant_digits == 0 || self.small_significant_digits > 28 {
            return Err("Small-value significant digits must be between 1 and 28".to_string());
        }

        if self.max_fraction_digits > 28 {
            return Err("Fraction digits cannot exceed 28".to_string());
        }

        if self.scientific_significant_digits == 0 || self.scientific_significant_digits > 28 {
            return Err("Scientific significant digits must be between 1 and 28".to_string());
        }

        if self.scientific_threshold == 0 {
            return Err("Scientific threshold must be positive".to_string());
        }

        if self.exponent_symbol.is_empty() {
            return Err("Exponent symbol cannot be empty".to_string());
        }

        if self.grouping_separator.is_ascii_digit() || self.grouping_separator == '.' {
            return Err("Grouping separator cannot be a digit or the decimal point".to_string());
        }

        if self.error_text.is_empty() {
            return Err("Error text cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Complete Engine Configuration
// ============================================================================

/// Configuration for creating a calculator engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Most digits a single entry may hold (integer + fraction)
    pub max_entry_digits: u32,

    /// Most digits an entry may hold after the decimal point
    pub max_fraction_digits: u32,

    /// Display rendering rules
    pub display: DisplayConfig,
}

impl EngineConfig {
    /// Create a new configuration with the standard limits
    pub fn new() -> Self {
        Self {
            max_entry_digits: 9,
            max_fraction_digits: 8,
            display: DisplayConfig::new(),
        }
    }

    /// Builder method: Set the entry digit budget
    pub fn with_max_entry_digits(mut self, digits: u32) -> Self {
        self.max_entry_digits = digits;
        self
    }

    /// Builder method: Set the entry fraction digit budget
    pub fn with_max_fraction_digits(mut self, digits: u32) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Builder method: Set display rules
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_entry_digits == 0 || self.max_entry_digits > 28 {
            return Err("Entry digits must be between 1 and 28".to_string());
        }

        if self.max_fraction_digits > self.max_entry_digits {
            return Err("Entry fraction digits cannot exceed entry digits".to_string());
        }

        self.display.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EngineConfig {
    /// Handheld-style configuration
    /// - 9-digit entry, at most 8 after the point
    /// - 9 significant digits shown (8 below one)
    /// - Scientific notation above 999,999,999
    pub fn standard() -> Self {
        Self::new()
    }

    /// Wide display configuration
    /// - 15-digit entry
    /// - 15 significant digits shown, scientific above 999 trillion
    pub fn wide() -> Self {
        Self::new()
            .with_max_entry_digits(15)
            .with_max_fraction_digits(12)
            .with_display(
                DisplayConfig::new()
                    .with_significant_digits(15)
                    .with_small_significant_digits(14)
                    .with_max_fraction_digits(12)
                    .with_scientific_threshold(999_999_999_999_999)
                    .with_scientific_significant_digits(10),
            )
    }
}
