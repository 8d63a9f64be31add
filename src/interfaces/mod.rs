// ============================================================================
// Interfaces Module
// Contains all trait definitions and the engine's output contract
// ============================================================================

mod evaluator;
mod event_handler;

pub use evaluator::Evaluator;
pub use event_handler::{
    ClearMode, EngineEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    RecordingEventHandler,
};
