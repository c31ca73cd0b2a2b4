//! Property-based tests for the sky and motion engines
//!
//! Uses proptest to verify the invariants that hold for every seed, theme,
//! and driver cadence.

use std::time::Duration;

use proptest::prelude::*;
use starfolio_core::motion::spring::{CURSOR_DOT, CURSOR_RING, SCROLL_GLIDE};
use starfolio_core::sky::shooting::{LIFETIME, SPAWN_TICK, X_SPAN, Y_SPAN};
use starfolio_core::sky::star::{DELAY_SPAN, SIZE_MIN, SIZE_SPAN, TWINKLE_MIN, TWINKLE_SPAN};
use starfolio_core::{
    map_range, Ease, ShootingStarScheduler, Spring, SpringState, StarField, Theme,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn theme_strategy() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Dark), Just(Theme::Light)]
}

fn spring_strategy() -> impl Strategy<Value = Spring> {
    prop_oneof![Just(CURSOR_DOT), Just(CURSOR_RING), Just(SCROLL_GLIDE)]
}

/// Collect the spawn trace of one seeded scheduler driven at a fixed cadence
/// until `horizon`.
fn spawn_trace(seed: u64, cadence: Duration, horizon: Duration) -> Vec<(f64, f64, Duration)> {
    let mut scheduler = ShootingStarScheduler::with_seed(seed);
    let mut trace = Vec::new();
    let mut now = Duration::ZERO;
    while now < horizon {
        now = (now + cadence).min(horizon);
        for star in scheduler.advance(now, Theme::Dark).spawned {
            trace.push((star.x, star.y, star.spawned_at));
        }
    }
    trace
}

// ============================================================================
// Starfield Properties
// ============================================================================

proptest! {
    /// Every star of every seeded field sits inside its documented ranges
    #[test]
    fn starfield_respects_ranges(seed in any::<u64>(), theme in theme_strategy()) {
        let field = StarField::generate_seeded(theme, seed);
        prop_assert_eq!(field.len(), theme.star_count());

        for star in field.stars() {
            prop_assert!((0.0..100.0).contains(&star.x));
            prop_assert!((0.0..100.0).contains(&star.y));
            prop_assert!((SIZE_MIN..SIZE_MIN + SIZE_SPAN).contains(&star.size));
            prop_assert!(
                (TWINKLE_MIN..TWINKLE_MIN + TWINKLE_SPAN).contains(&star.twinkle_secs)
            );
            prop_assert!((0.0..DELAY_SPAN).contains(&star.delay_secs));
        }
    }

    /// Same seed, same field, for either theme
    #[test]
    fn starfield_is_seed_stable(seed in any::<u64>(), theme in theme_strategy()) {
        let a = StarField::generate_seeded(theme, seed);
        let b = StarField::generate_seeded(theme, seed);
        prop_assert_eq!(a, b);
    }
}

// ============================================================================
// Scheduler Properties
// ============================================================================

proptest! {
    /// No observation ever catches an expired streak still in the arena
    #[test]
    fn no_expired_streak_survives_an_observation(
        seed in any::<u64>(),
        steps in prop::collection::vec(1u64..3000, 1..60),
    ) {
        let mut scheduler = ShootingStarScheduler::with_seed(seed);
        let mut now = Duration::ZERO;
        for step_ms in steps {
            now += Duration::from_millis(step_ms);
            scheduler.advance(now, Theme::Dark);
            for star in scheduler.active() {
                prop_assert!(!star.is_expired(now), "stale streak at {now:?}");
                prop_assert!(star.expires_at == star.spawned_at + LIFETIME);
            }
        }
    }

    /// Spawn positions stay inside the top band for every seed
    #[test]
    fn spawns_stay_in_band(seed in any::<u64>()) {
        let horizon = SPAWN_TICK * 60;
        for (x, y, at) in spawn_trace(seed, Duration::from_millis(250), horizon) {
            prop_assert!((0.0..X_SPAN).contains(&x));
            prop_assert!((0.0..Y_SPAN).contains(&y));
            prop_assert!(at <= horizon);
        }
    }

    /// The light sky is silent for every seed
    #[test]
    fn light_theme_never_spawns(seed in any::<u64>()) {
        let mut scheduler = ShootingStarScheduler::with_seed(seed);
        let mut now = Duration::ZERO;
        for _ in 0..200 {
            now += Duration::from_millis(1750);
            let outcome = scheduler.advance(now, Theme::Light);
            prop_assert!(outcome.spawned.is_empty());
        }
        prop_assert!(scheduler.is_empty());
    }

    /// The spawn trace does not depend on how often the driver looks, as
    /// long as it looks at least once per streak lifetime
    #[test]
    fn spawn_trace_is_cadence_independent(
        seed in any::<u64>(),
        cadence_ms in 50u64..1999,
    ) {
        let horizon = SPAWN_TICK * 40;
        let fine = spawn_trace(seed, Duration::from_millis(250), horizon);
        let coarse = spawn_trace(seed, Duration::from_millis(cadence_ms), horizon);
        prop_assert_eq!(fine, coarse);
    }
}

// ============================================================================
// Spring Properties
// ============================================================================

proptest! {
    /// Every preset spring settles exactly on any reachable target
    #[test]
    fn springs_converge(
        spring in spring_strategy(),
        start in -1000.0f64..1000.0,
        target in -1000.0f64..1000.0,
    ) {
        let mut state = SpringState::new(spring, start);
        state.set_target(target);
        for _ in 0..600 {
            state.step(1.0 / 60.0);
        }
        prop_assert!(state.is_settled());
        prop_assert_eq!(state.position(), target);
    }

    /// A settled spring never drifts
    #[test]
    fn settled_springs_stay_settled(
        spring in spring_strategy(),
        position in -1000.0f64..1000.0,
        frames in 1usize..120,
    ) {
        let mut state = SpringState::new(spring, position);
        for _ in 0..frames {
            prop_assert_eq!(state.step(1.0 / 60.0), position);
        }
    }
}

// ============================================================================
// Mapping Properties
// ============================================================================

proptest! {
    /// Output never escapes the target range, whatever the input
    #[test]
    fn map_range_output_is_clamped(
        value in -1e6f64..1e6,
        from_start in -100.0f64..100.0,
        from_span in 0.001f64..100.0,
        to_start in -100.0f64..100.0,
        to_end in -100.0f64..100.0,
    ) {
        let out = map_range(
            value,
            (from_start, from_start + from_span),
            (to_start, to_end),
        );
        let lo = to_start.min(to_end);
        let hi = to_start.max(to_end);
        prop_assert!(out >= lo - 1e-9 && out <= hi + 1e-9, "escaped: {out}");
    }

    /// Mapping preserves order over an ascending range
    #[test]
    fn map_range_is_monotonic(
        a in -1e3f64..1e3,
        b in -1e3f64..1e3,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let out_lo = map_range(lo, (-1e3, 1e3), (0.0, 1.0));
        let out_hi = map_range(hi, (-1e3, 1e3), (0.0, 1.0));
        prop_assert!(out_lo <= out_hi);
    }

    /// Easing curves stay inside the unit square
    #[test]
    fn ease_samples_are_bounded(t in -10.0f64..10.0) {
        for ease in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
            let v = ease.sample(t);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
