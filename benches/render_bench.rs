use criterion::{criterion_group, criterion_main, Criterion};

use expenses_mockup::mockup::build_scene;
use expenses_mockup::mockup::palette::BG_DARK;
use expenses_mockup::rendering::raster::rasterize;
use expenses_mockup::{FontBook, Viewport};

// Run with:
//    cargo bench

/// Bench: measuring text and emitting the display list
fn bench_build_scene(c: &mut Criterion) {
    let mut fonts = FontBook::default();
    c.bench_function("build_scene", |b| {
        b.iter(|| build_scene(&mut fonts, Viewport::default()))
    });
}

/// Bench: replaying the display list and encoding the PNG
fn bench_rasterize(c: &mut Criterion) {
    let mut fonts = FontBook::default();
    let viewport = Viewport::default();
    let scene = build_scene(&mut fonts, viewport);
    c.bench_function("rasterize", |b| {
        b.iter(|| rasterize(viewport, BG_DARK, &scene, &mut fonts).unwrap())
    });
}

criterion_group!(benches, bench_build_scene, bench_rasterize);
criterion_main!(benches);
