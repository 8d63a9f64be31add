// ============================================================================
// Calculator Engine Library
// Key-driven four-function calculator with exact decimal arithmetic
// ============================================================================

//! # Calculator Engine
//!
//! The state machine behind a pocket calculator: it accepts key presses
//! (digits, decimal point, the four operators, equals, ±, %, AC/C) and
//! exposes what a display needs to render.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** (`0.1 + 0.2` shows `0.3`)
//! - **Handheld display rules**: digit grouping, significant-digit budget,
//!   scientific notation for large magnitudes
//! - **Bimodal clear key** ("C" clears the entry, "AC" clears everything)
//! - **Event notifications** for view layers, with tracing-based logging
//!
//! ## Example
//!
//! ```rust
//! use calculator_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let mut engine = CalculatorEngine::new(EngineConfig::standard(), Arc::new(NoOpEventHandler));
//!
//! engine.press_digit('1');
//! engine.press_digit('2');
//! engine.press_digit('3');
//! engine.press_operator(Operator::Add);
//! engine.press_digit('4');
//! engine.press_digit('5');
//! engine.press_equals();
//!
//! assert_eq!(engine.display_text(), "168");
//! assert_eq!(engine.clear_label(), ClearLabel::Clear);
//! assert_eq!(engine.highlighted_operator(), None);
//! ```

pub mod domain;
pub mod engine;
pub mod format;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalcError, CalcResult, ClearLabel, DisplayConfig, EngineConfig, EnginePhase,
        EngineSnapshot, EngineState, Key, Operator,
    };
    pub use crate::engine::{
        create_from_config, CalculatorEngine, CalculatorEngineBuilder, DecimalEvaluator,
    };
    pub use crate::format::DisplayFormatter;
    pub use crate::interfaces::{
        ClearMode, EngineEvent, EventHandler, Evaluator, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{NumericError, NumericValue};
}
