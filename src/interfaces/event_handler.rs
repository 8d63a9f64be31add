// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator engine events
// ============================================================================

use crate::domain::{CalcError, ClearLabel, Key, Operator};
use crate::numeric::NumericValue;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which tier of the bimodal clear key fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClearMode {
    /// "C": current entry reset, pending operation kept
    Entry,
    /// "AC": pending operation dropped as well
    All,
}

/// Events emitted by the calculator engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineEvent {
    /// Key ignored (malformed digit, digit budget exhausted, error state)
    KeyRejected {
        key: String,
        reason: CalcError,
        timestamp: DateTime<Utc>,
    },

    /// Equals applied the pending operator
    Evaluated {
        first_operand: NumericValue,
        operator: Operator,
        second_operand: NumericValue,
        result: NumericValue,
        timestamp: DateTime<Utc>,
    },

    /// Arithmetic failed and the error display state was entered
    ErrorRaised {
        error: CalcError,
        timestamp: DateTime<Utc>,
    },

    /// Clear key handled
    Cleared {
        mode: ClearMode,
        timestamp: DateTime<Utc>,
    },

    /// Armed operator changed (None = no operator highlighted)
    OperatorHighlightChanged {
        operator: Option<Operator>,
        timestamp: DateTime<Utc>,
    },

    /// Display text or clear label changed
    DisplayChanged {
        text: String,
        clear_label: ClearLabel,
        timestamp: DateTime<Utc>,
    },
}

impl EngineEvent {
    pub(crate) fn key_rejected(key: &Key, reason: CalcError) -> Self {
        EngineEvent::KeyRejected {
            key: key.label(),
            reason,
            timestamp: Utc::now(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            EngineEvent::KeyRejected { timestamp, .. }
            | EngineEvent::Evaluated { timestamp, .. }
            | EngineEvent::ErrorRaised { timestamp, .. }
            | EngineEvent::Cleared { timestamp, .. }
            | EngineEvent::OperatorHighlightChanged { timestamp, .. }
            | EngineEvent::DisplayChanged { timestamp, .. } => *timestamp,
        }
    }
}

/// Event handler trait for observing engine output.
/// Implementations render the display, animate operator buttons, log, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an engine event
    fn on_event(&self, event: EngineEvent);

    /// Batch event handler, called once per key press
    fn on_events(&self, events: Vec<EngineEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for pull-only callers
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: EngineEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: EngineEvent) {
        tracing::debug!("Calculator engine event: {:?}", event);
    }
}

/// Keeps every event in memory, in emission order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<EngineEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<EngineEvent> {
        self.events.lock().clone()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Most recent display text pushed to the handler
    pub fn last_display(&self) -> Option<String> {
        self.events.lock().iter().rev().find_map(|e| match e {
            EngineEvent::DisplayChanged { text, .. } => Some(text.clone()),
            _ => None,
        })
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: EngineEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<EngineEvent>) {
        self.events.lock().extend(events);
    }
}
