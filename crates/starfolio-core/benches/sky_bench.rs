//! Benchmarks for the sky and motion engines
//!
//! Run with: cargo bench -p starfolio-core
//!
//! These benchmarks establish performance baselines for:
//! - Starfield generation per theme
//! - Scheduler advance (quiet ticks, sweeps, stall catch-up)
//! - Spring integration per frame
//! - Style string derivation

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use starfolio_core::motion::spring::{CURSOR_DOT, SCROLL_GLIDE};
use starfolio_core::sky::shooting::SPAWN_TICK;
use starfolio_core::{
    hero_drift, Repeat, ShootingStarScheduler, SpringState, StarField, Theme, Transition,
};

// ============================================================================
// Starfield Benchmarks
// ============================================================================

fn bench_starfield_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("starfield_generation");

    for theme in [Theme::Dark, Theme::Light] {
        group.throughput(Throughput::Elements(theme.star_count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(theme),
            &theme,
            |b, &theme| b.iter(|| black_box(StarField::generate_seeded(theme, 42))),
        );
    }

    group.finish();
}

// ============================================================================
// Scheduler Benchmarks
// ============================================================================

fn bench_scheduler_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler_advance");

    // The common case: a driver wakeup between ticks with nothing due
    group.bench_function("quiet_wakeup", |b| {
        b.iter_batched(
            || {
                let mut scheduler = ShootingStarScheduler::with_seed(7);
                scheduler.advance(Duration::from_secs(1), Theme::Dark);
                scheduler
            },
            |mut scheduler| black_box(scheduler.advance(Duration::from_secs(2), Theme::Dark)),
            criterion::BatchSize::SmallInput,
        )
    });

    // One tick due, possibly spawning
    group.bench_function("single_tick", |b| {
        b.iter_batched(
            || ShootingStarScheduler::with_seed(7),
            |mut scheduler| black_box(scheduler.advance(SPAWN_TICK, Theme::Dark)),
            criterion::BatchSize::SmallInput,
        )
    });

    // A stalled driver catching up over many missed ticks at once
    group.bench_function("catch_up_100_ticks", |b| {
        b.iter_batched(
            || ShootingStarScheduler::with_seed(7),
            |mut scheduler| black_box(scheduler.advance(SPAWN_TICK * 100, Theme::Dark)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_scheduler_session(c: &mut Criterion) {
    // A full minute of the shell's 250ms driver cadence
    c.bench_function("scheduler_one_minute_session", |b| {
        b.iter(|| {
            let mut scheduler = ShootingStarScheduler::with_seed(7);
            for step in 1..=240u32 {
                black_box(scheduler.advance(Duration::from_millis(250) * step, Theme::Dark));
            }
            scheduler.len()
        })
    });
}

// ============================================================================
// Spring Benchmarks
// ============================================================================

fn bench_spring_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_step");

    group.bench_function("single_frame", |b| {
        b.iter_batched(
            || {
                let mut state = SpringState::new(CURSOR_DOT, 0.0);
                state.set_target(100.0);
                state
            },
            |mut state| black_box(state.step(1.0 / 60.0)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("settle_run", |b| {
        b.iter(|| {
            let mut state = SpringState::new(SCROLL_GLIDE, 0.0);
            state.set_target(1.0);
            for _ in 0..300 {
                state.step(1.0 / 60.0);
            }
            black_box(state.position())
        })
    });

    group.finish();
}

// ============================================================================
// Style Derivation Benchmarks
// ============================================================================

fn bench_style_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_derivation");

    let twinkle = Transition::new(3.5).with_delay(1.2).with_repeat(Repeat::Forever);
    group.bench_function("transition_css", |b| {
        b.iter(|| black_box(twinkle.css("twinkle")))
    });

    group.bench_function("hero_drift", |b| {
        b.iter(|| black_box(hero_drift(0.37)))
    });

    group.finish();
}

// ============================================================================
// Criterion Groups
// ============================================================================

criterion_group!(starfield_benches, bench_starfield_generation,);

criterion_group!(
    scheduler_benches,
    bench_scheduler_advance,
    bench_scheduler_session,
);

criterion_group!(motion_benches, bench_spring_step, bench_style_derivation,);

criterion_main!(starfield_benches, scheduler_benches, motion_benches,);
