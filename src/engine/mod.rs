// ============================================================================
// Engine Module
// Contains the calculator's key handling, entry and evaluation logic
// ============================================================================

mod calculator_engine;

pub mod entry_buffer;
pub mod evaluator;
pub mod factory;

pub use calculator_engine::CalculatorEngine;
pub use entry_buffer::{EntryLimits, EntryOutcome};
pub use evaluator::{evaluate_pending, DecimalEvaluator, Evaluation};
pub use factory::{create_from_config, CalculatorEngineBuilder};
