// ============================================================================
// Keypad Example
// ============================================================================
//
// Presses each command-line argument as a key and prints the display:
//
//   cargo run --example keypad -- 1 2 3 + 4 5 =
//   cargo run --example keypad --features logging -- 5 ÷ 0 = AC
// ============================================================================

use calculator_engine::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calculator Keypad Example ===\n");

    let mut keys: Vec<String> = std::env::args().skip(1).collect();
    if keys.is_empty() {
        keys = "1 2 3 + 4 5 = ± % AC"
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    let mut engine = CalculatorEngine::new(EngineConfig::standard(), Arc::new(LoggingEventHandler));

    println!("{:>6} | {:>14} | {:>3} | {:>2}", "key", "display", "clr", "op");
    println!("{}", "-".repeat(34));

    for key in &keys {
        if let Err(err) = engine.press_token(key) {
            println!("{:>6} | {}", key, err);
            continue;
        }

        let snapshot = engine.snapshot();
        let highlight = snapshot
            .highlighted_operator
            .map(|op| op.symbol().to_string())
            .unwrap_or_default();
        println!(
            "{:>6} | {:>14} | {:>3} | {:>2}",
            key, snapshot.display_text, snapshot.clear_label, highlight
        );
    }

    println!("\nFinal phase: {:?}", engine.phase());

    #[cfg(feature = "serde")]
    match engine.snapshot().to_json() {
        Ok(json) => println!("Snapshot: {}", json),
        Err(err) => println!("Snapshot serialization failed: {}", err),
    }
}
