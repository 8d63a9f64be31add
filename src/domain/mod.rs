// ============================================================================
// Domain Models Module
// Contains the calculator's keys, operators, state record and configuration
// ============================================================================

pub mod config;
pub mod errors;
pub mod key;
pub mod operator;
pub mod snapshot;
pub mod state;

pub use config::{DisplayConfig, EngineConfig};
pub use errors::{CalcError, CalcResult};
pub use key::Key;
pub use operator::Operator;
pub use snapshot::EngineSnapshot;
pub use state::{ClearLabel, EnginePhase, EngineState};
