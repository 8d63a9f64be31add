// ============================================================================
// Engine Snapshot
// ============================================================================

use super::operator::Operator;
use super::state::{ClearLabel, EnginePhase};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable snapshot of everything the view layer renders
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineSnapshot {
    /// Text for the display, already formatted
    pub display_text: String,
    /// "AC" or "C"
    pub clear_label: ClearLabel,
    /// Operator button to show as selected
    pub highlighted_operator: Option<Operator>,
    pub phase: EnginePhase,
}

impl EngineSnapshot {
    pub fn is_error(&self) -> bool {
        self.phase == EnginePhase::Error
    }

    /// Serialize for a view layer that lives across a process boundary.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_error_flag() {
        let snapshot = EngineSnapshot {
            display_text: "Error".to_string(),
            clear_label: ClearLabel::AllClear,
            highlighted_operator: None,
            phase: EnginePhase::Error,
        };
        assert!(snapshot.is_error());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_json() {
        let snapshot = EngineSnapshot {
            display_text: "1,234".to_string(),
            clear_label: ClearLabel::Clear,
            highlighted_operator: Some(Operator::Add),
            phase: EnginePhase::OperatorArmed,
        };
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"display_text\":\"1,234\""));
        assert!(json.contains("\"Add\""));
    }
}
