// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation and swipe throughput on large slide sets.

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_carousel::config::Config;
use understory_carousel::navigator::{Animation, Navigator};
use understory_carousel::surface::{Headless, Surface};
use understory_swipe::controller::SwipeController;
use understory_swipe::types::PointerSample;

/// Fixed-size surface so swipes preview and commit.
#[derive(Copy, Clone, Debug, Default)]
struct FixedTrack;

impl Surface for FixedTrack {
    fn translate(&mut self, percent: f64) {
        black_box(percent);
    }
    fn set_transitions(&mut self, enabled: bool) {
        black_box(enabled);
    }
    fn track_width(&self) -> f64 {
        4000.0
    }
    fn viewport_width(&self) -> f64 {
        400.0
    }
}

// Simple xorshift for deterministic jumps.
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 7;
        x ^= x >> 9;
        self.0 = x;
        x
    }
}

fn items(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

fn quiet_logs() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Off)
        .is_test(true)
        .try_init();
}

fn bench_build(c: &mut Criterion) {
    quiet_logs();
    let mut group = c.benchmark_group("build");
    for &n in &[16usize, 256, 4096] {
        let config = Config::default()
            .with_slides_visible(3)
            .with_infinite(true);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("infinite_n{n}"), |b| {
            b.iter_batched(
                || items(n),
                |items| black_box(Navigator::new(items, config.clone(), Headless).map(|nav| nav.len())),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    let steps = 1_000usize;
    group.throughput(Throughput::Elements(steps as u64));
    for (name, config) in [
        ("bounded", Config::default().with_slides_visible(3)),
        ("loop", Config::default().with_slides_visible(3).with_loop(true)),
        (
            "infinite",
            Config::default().with_slides_visible(3).with_infinite(true),
        ),
    ] {
        group.bench_function(format!("next_transition_end_{name}"), |b| {
            b.iter_batched(
                || Navigator::new(items(64), config.clone(), Headless).ok(),
                |nav| {
                    let Some(mut nav) = nav else { return };
                    for _ in 0..steps {
                        black_box(nav.next());
                        nav.transition_end();
                    }
                    black_box(nav.current());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_goto(c: &mut Criterion) {
    let mut group = c.benchmark_group("goto");
    let jumps = 1_000usize;
    group.throughput(Throughput::Elements(jumps as u64));
    let config = Config::default()
        .with_slides_visible(4)
        .with_slides_to_scroll(2)
        .with_infinite(true);
    group.bench_function("random_instant", |b| {
        b.iter_batched(
            || Navigator::new(items(256), config.clone(), Headless).ok(),
            |nav| {
                let Some(mut nav) = nav else { return };
                let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
                let len = nav.len() as u64;
                for _ in 0..jumps {
                    let target = (rng.next_u64() % len) as isize;
                    black_box(nav.goto_item_with(target, Animation::Instant));
                    nav.reset_infinite();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe");
    let samples = 32usize;
    group.throughput(Throughput::Elements(samples as u64));
    let config = Config::default().with_infinite(true);
    group.bench_function("drag_release", |b| {
        b.iter_batched(
            || Navigator::new(items(32), config.clone(), FixedTrack).ok(),
            |nav| {
                let Some(mut nav) = nav else { return };
                let mut swipe = SwipeController::new();
                swipe.start(&mut nav, PointerSample::mouse(Point::new(300.0, 0.0)));
                for i in 1..=samples {
                    let x = 300.0 - 5.0 * i as f64;
                    black_box(swipe.drag(&mut nav, PointerSample::mouse(Point::new(x, 0.0))));
                }
                black_box(swipe.end(&mut nav));
                nav.transition_end();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_step, bench_goto, bench_swipe);
criterion_main!(benches);
