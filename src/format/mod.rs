// ============================================================================
// Format Module
// Turns engine values into the text shown on the calculator display
// ============================================================================

mod display_formatter;

pub use display_formatter::{DisplayFormatter, FALLBACK_TEXT};
