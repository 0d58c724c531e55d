// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-event hot paths.
//!
//! Measures the performance of:
//! - Duration formatting (runs on every clock tick)
//! - A scrub drag (pointer-down, many moves, pointer-up)

use criterion::{criterion_group, criterion_main, Criterion};
use playback_overlay::player::events;
use playback_overlay::player::{
    format_duration, HeadlessSurface, MemoryStore, PlaybackController, PlayerOptions,
    SimulatedClock, TimelineRegion,
};
use std::hint::black_box;

/// Benchmark formatting of short and hour-long timestamps.
fn bench_format_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    group.bench_function("format_duration", |b| {
        b.iter(|| {
            black_box(format_duration(black_box(65.0)));
            black_box(format_duration(black_box(3661.0)));
        });
    });

    group.finish();
}

/// Benchmark a full scrub gesture across the timeline.
fn bench_scrub_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");
    let region = TimelineRegion::new(0.0, 800.0);

    let (notifier, listener) = events::channel();
    let mut clock = SimulatedClock::new(3600.0, notifier);
    clock.load();
    let mut controller = PlaybackController::attach(
        PlayerOptions::new("bench.webm", "bench"),
        clock,
        HeadlessSurface::new(),
        MemoryStore::new(),
        listener,
    );
    controller.pump();

    group.bench_function("scrub_drag", |b| {
        b.iter(|| {
            controller.timeline_pointer_down(black_box(10.0), region);
            for x in (0..800).step_by(8) {
                controller.timeline_pointer_move(f64::from(x), region);
            }
            controller.timeline_pointer_up();
            black_box(controller.pump());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format_duration, bench_scrub_drag);
criterion_main!(benches);
