// ============================================================================
// Calculator Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Key Dispatch - Full key sequences through the engine
// 2. Display Formatting - Value-to-text rendering in isolation
// 3. Snapshot - Everything the view layer reads after a key
// ============================================================================

use calculator_engine::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Key Dispatch Benchmarks
// ============================================================================

fn benchmark_key_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_sequences");

    let sequences = [
        ("addition", "1 2 3 + 4 5 ="),
        ("decimal_entry", "0 . 1 2 3 4 5 6 7 8"),
        ("chained", "6 × 7 = - 2 = ÷ 4 = % ±"),
        ("division_by_zero", "5 ÷ 0 = AC"),
    ];

    for (name, keys) in sequences.iter() {
        group.bench_with_input(BenchmarkId::new("press_sequence", name), keys, |b, keys| {
            b.iter(|| {
                let mut engine = CalculatorEngine::default();
                engine.press_sequence(black_box(keys)).unwrap();
                black_box(engine.current_value())
            });
        });
    }

    group.finish();
}

fn benchmark_event_handlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_handlers");

    group.bench_function("noop", |b| {
        b.iter(|| {
            let mut engine =
                CalculatorEngine::new(EngineConfig::standard(), Arc::new(NoOpEventHandler));
            engine.press_sequence("9 8 7 × 6 5 4 =").unwrap();
            black_box(engine.display_text())
        });
    });

    group.bench_function("recording", |b| {
        b.iter(|| {
            let recorder = Arc::new(RecordingEventHandler::new());
            let mut engine = CalculatorEngine::new(EngineConfig::standard(), recorder.clone());
            engine.press_sequence("9 8 7 × 6 5 4 =").unwrap();
            black_box(recorder.take())
        });
    });

    group.finish();
}

// ============================================================================
// Display Formatting Benchmarks
// ============================================================================

fn benchmark_display_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_formatter");
    let formatter = DisplayFormatter::default();

    let values = [
        ("integer", "123456789"),
        ("fraction", "0.33333333333333333333"),
        ("small", "0.000012345678"),
        ("scientific", "98765432109876"),
    ];

    for (name, text) in values.iter() {
        let value: NumericValue = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("format", name), &value, |b, value| {
            b.iter(|| black_box(formatter.format(black_box(value), false)));
        });
    }

    group.finish();
}

// ============================================================================
// Snapshot Benchmarks
// ============================================================================

fn benchmark_snapshot(c: &mut Criterion) {
    let mut engine = CalculatorEngine::default();
    engine.press_sequence("1 2 3 4 . 5 6 +").unwrap();

    c.bench_function("engine_snapshot", |b| {
        b.iter(|| black_box(engine.snapshot()));
    });
}

criterion_group!(
    benches,
    benchmark_key_sequences,
    benchmark_event_handlers,
    benchmark_display_formatter,
    benchmark_snapshot,
);
criterion_main!(benches);
