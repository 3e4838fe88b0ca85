//! Benchmarks for the icon placement hot paths.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use atrium_desktop::{PlacementConfig, PlacementEngine};
use atrium_types::geometry::{Point, Size};

fn crowded_canvas() -> Vec<Point> {
    // 8x5 grid of icons on a 1280x720 canvas.
    let mut occupied = Vec::new();
    for row in 0..5 {
        for col in 0..8 {
            occupied.push(Point::new(20 + col * 120, 20 + row * 120));
        }
    }
    occupied
}

fn bench_find_available(c: &mut Criterion) {
    let occupied = crowded_canvas();
    let canvas = Size::new(1280, 720);
    c.bench_function("find_available_position/crowded", |b| {
        b.iter(|| {
            let mut engine = PlacementEngine::new(PlacementConfig::default(), 0x5eed);
            black_box(engine.find_available_position(black_box(&occupied), canvas))
        })
    });
}

fn bench_spiral(c: &mut Criterion) {
    let occupied = crowded_canvas();
    let canvas = Size::new(1280, 720);
    let engine = PlacementEngine::new(PlacementConfig::default(), 0x5eed);
    c.bench_function("find_non_overlapping_position/cluster", |b| {
        b.iter(|| {
            black_box(engine.find_non_overlapping_position(
                black_box(Point::new(260, 260)),
                black_box(&occupied),
                canvas,
            ))
        })
    });
}

fn bench_arrange(c: &mut Criterion) {
    let canvas = Size::new(1280, 720);
    let engine = PlacementEngine::new(PlacementConfig::default(), 0x5eed);
    c.bench_function("arrange_icons/64", |b| {
        b.iter(|| black_box(engine.arrange_icons(black_box(64), canvas)))
    });
}

criterion_group!(benches, bench_find_available, bench_spiral, bench_arrange);
criterion_main!(benches);
