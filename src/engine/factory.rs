// ============================================================================
// Calculator Engine Factory
// Creates calculator engines with proper configuration
// ============================================================================

use crate::domain::config::{DisplayConfig, EngineConfig};
use crate::engine::{CalculatorEngine, DecimalEvaluator};
use crate::interfaces::{EventHandler, Evaluator, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator engine from configuration
///
/// # Arguments
/// * `config` - Entry limits and display rules
/// * `event_handler` - Event handler for display and evaluation events
///
/// # Returns
/// * `Result<CalculatorEngine, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use calculator_engine::prelude::*;
/// use calculator_engine::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let engine = create_from_config(EngineConfig::standard(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(engine.display_text(), "0");
/// ```
pub fn create_from_config(
    config: EngineConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<CalculatorEngine, String> {
    config.validate()?;
    Ok(CalculatorEngine::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculator engines with fluent API
///
/// # Example
/// ```
/// use calculator_engine::prelude::*;
/// use std::sync::Arc;
///
/// let mut engine = CalculatorEngineBuilder::new()
///     .with_max_entry_digits(12)
///     .with_event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
///
/// engine.press_sequence("1 2 + 3 0 =").unwrap();
/// assert_eq!(engine.display_text(), "42");
/// ```
pub struct CalculatorEngineBuilder {
    config: EngineConfig,
    evaluator: Box<dyn Evaluator>,
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorEngineBuilder {
    /// Create a builder with the standard configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::standard(),
            evaluator: Box::new(DecimalEvaluator),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    // ========================================================================
    // Entry Configuration
    // ========================================================================

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum number of digits per operand
    pub fn with_max_entry_digits(mut self, digits: u32) -> Self {
        self.config.max_entry_digits = digits;
        self
    }

    /// Set the maximum number of fractional digits per operand
    pub fn with_max_fraction_digits(mut self, digits: u32) -> Self {
        self.config.max_fraction_digits = digits;
        self
    }

    // ========================================================================
    // Display Configuration
    // ========================================================================

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.config.display = display;
        self
    }

    /// Set the text shown in the error state
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.config.display.error_text = text.into();
        self
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    /// Swap the equals evaluator
    pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// Start from the wide (fifteen digit) preset
    pub fn wide() -> Self {
        Self::new().with_config(EngineConfig::wide())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator engine
    pub fn build(self) -> Result<CalculatorEngine, String> {
        self.config.validate()?;
        Ok(CalculatorEngine::with_evaluator(
            self.config,
            self.evaluator,
            self.event_handler,
        ))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for CalculatorEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
