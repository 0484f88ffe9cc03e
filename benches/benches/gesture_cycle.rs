// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sentiment_slider::tracker::TrackBounds;
use sentiment_slider::{Colorway, SentimentSlider, SliderBuilder};
use sentiment_timing::TimerQueue;

fn slider(colorway: Colorway) -> SentimentSlider {
    SliderBuilder::new()
        .colorway(colorway)
        .on_confirm(|v| {
            black_box(v);
        })
        .build()
        .expect("valid configuration")
}

fn bench_drag_release_confirm(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/cycle");
    let track = TrackBounds::new(0.0, 320.0);

    for moves in [8_usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("standard", moves), &moves, |b, &moves| {
            b.iter_batched(
                || slider(Colorway::Standard),
                |mut s| {
                    s.press();
                    for i in 0..moves {
                        s.move_to(i as f64 * 320.0 / moves as f64, &track);
                        black_box(s.color());
                        black_box(s.label());
                    }
                    s.release(Duration::ZERO);
                    s.tick(Duration::from_secs(1));
                    black_box(s.confirm());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_interrupted_cycles(c: &mut Criterion) {
    c.bench_function("slider/interrupted_cycles", |b| {
        b.iter_batched(
            || slider(Colorway::Spectacular),
            |mut s| {
                // Rapid re-drags: every release is cancelled by the next press.
                for i in 0..100_u64 {
                    s.press();
                    s.set_raw_value(i as f64);
                    s.release(Duration::from_millis(i * 10));
                }
                black_box(s.tick(Duration::from_secs(10)));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_timer_queue(c: &mut Criterion) {
    c.bench_function("timing/schedule_cancel_drain", |b| {
        b.iter(|| {
            let mut q = TimerQueue::new();
            let mut ids = Vec::with_capacity(64);
            for i in 0..64_u64 {
                ids.push(q.schedule_at(Duration::from_millis((i * 37) % 100), i));
            }
            for id in ids.iter().step_by(2) {
                black_box(q.cancel(*id));
            }
            black_box(q.drain_due(Duration::from_millis(100)).count());
        });
    });
}

criterion_group!(
    benches,
    bench_drag_release_confirm,
    bench_interrupted_cycles,
    bench_timer_queue
);
criterion_main!(benches);
