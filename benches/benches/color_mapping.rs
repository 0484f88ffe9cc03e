// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sentiment_color::{Colorway, SentimentColorMapper};

fn bench_map_full_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("color/map_full_range");
    group.throughput(Throughput::Elements(101));

    // Recomputed on every move event, so the whole sweep should stay trivially cheap.
    for colorway in Colorway::ALL {
        group.bench_with_input(
            BenchmarkId::new("map_value_to_color", colorway),
            &colorway,
            |b, colorway| {
                b.iter(|| {
                    for v in 0..=100_u8 {
                        black_box(colorway.map_value_to_color(black_box(v)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_to_brush(c: &mut Criterion) {
    let mut group = c.benchmark_group("color/to_brush");

    for colorway in Colorway::ALL {
        let descriptor = colorway.map_value_to_color(67);
        group.bench_with_input(
            BenchmarkId::new("to_brush", colorway),
            &descriptor,
            |b, descriptor| {
                b.iter(|| black_box(descriptor.to_brush(black_box(480.0))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_map_full_range, bench_to_brush);
criterion_main!(benches);
