//! Shooting star lifecycle.
//!
//! Every spawned streak is owned by a single [`ShootingStarScheduler`] arena.
//! One caller drives the arena with [`ShootingStarScheduler::advance`] on its
//! own cadence; each call sweeps expired streaks and runs any spawn ticks that
//! have come due. Dropping the scheduler retires everything at once, so there
//! are no stray per-streak timers to cancel on teardown.
//!
//! Time is a plain [`Duration`] since an epoch the caller picks, which keeps
//! the whole lifecycle deterministic under test.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::theme::Theme;

/// A spawn attempt happens once per this interval
pub const SPAWN_TICK: Duration = Duration::from_secs(4);
/// How long a streak stays in the sky
pub const LIFETIME: Duration = Duration::from_secs(2);
/// Uniform draw in [0, 1) must exceed this for a tick to spawn
pub const SPAWN_THRESHOLD: f64 = 0.7;
/// Spawn x positions cover the full viewport width, in percent
pub const X_SPAN: f64 = 100.0;
/// Spawn y positions stay in the top band of the viewport, in percent
pub const Y_SPAN: f64 = 30.0;

/// One live streak.
///
/// `x` and `y` are viewport percentages; `spawned_at` and `expires_at`
/// are offsets on the scheduler's clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShootingStar {
    pub id: Ulid,
    pub x: f64,
    pub y: f64,
    pub spawned_at: Duration,
    pub expires_at: Duration,
}

impl ShootingStar {
    /// Whether this streak is past its lifetime at `now`.
    pub fn is_expired(&self, now: Duration) -> bool {
        self.expires_at <= now
    }
}

/// What one [`ShootingStarScheduler::advance`] call did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Advance {
    pub spawned: Vec<ShootingStar>,
    pub expired: Vec<ShootingStar>,
}

impl Advance {
    /// True if the visible set changed and the caller should re-render.
    pub fn changed(&self) -> bool {
        !self.spawned.is_empty() || !self.expired.is_empty()
    }
}

/// Arena that owns every live shooting star.
pub struct ShootingStarScheduler {
    rng: StdRng,
    active: Vec<ShootingStar>,
    next_tick_at: Duration,
}

impl ShootingStarScheduler {
    /// Scheduler with entropy from the OS.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Scheduler with a fixed seed; spawn decisions and positions replay
    /// identically for the same seed and advance cadence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            active: Vec::new(),
            next_tick_at: SPAWN_TICK,
        }
    }

    /// Move the arena forward to `now`.
    ///
    /// Sweeps every streak whose lifetime has elapsed, then runs each spawn
    /// tick that has come due. A tick spawns only when `theme` is one that
    /// shows shooting stars and the uniform draw clears [`SPAWN_THRESHOLD`];
    /// in other themes no draw is consumed at all. Calling with a `now`
    /// earlier than a previous call only re-runs the sweep, which is a no-op.
    pub fn advance(&mut self, now: Duration, theme: Theme) -> Advance {
        let mut outcome = Advance::default();

        self.active.retain(|star| {
            if star.is_expired(now) {
                outcome.expired.push(*star);
                false
            } else {
                true
            }
        });

        while self.next_tick_at <= now {
            let at = self.next_tick_at;
            self.next_tick_at += SPAWN_TICK;

            if !theme.spawns_shooting_stars() {
                continue;
            }
            if self.rng.random::<f64>() <= SPAWN_THRESHOLD {
                continue;
            }

            let star = ShootingStar {
                id: Ulid::new(),
                x: self.rng.random::<f64>() * X_SPAN,
                y: self.rng.random::<f64>() * Y_SPAN,
                spawned_at: at,
                expires_at: at + LIFETIME,
            };

            // A stalled driver can be handed ticks whose streaks already
            // lived and died; nobody could have seen those.
            if star.is_expired(now) {
                tracing::debug!(id = %star.id, tick = ?at, "dropping stale spawn");
                continue;
            }

            tracing::debug!(id = %star.id, x = star.x, y = star.y, "shooting star spawned");
            self.active.push(star);
            outcome.spawned.push(star);
        }

        if !outcome.expired.is_empty() {
            tracing::debug!(swept = outcome.expired.len(), "shooting stars expired");
        }
        outcome
    }

    /// Drop one streak early, e.g. when its exit animation finished.
    ///
    /// Returns whether anything was removed; a second call with the same id
    /// is a no-op.
    pub fn remove(&mut self, id: Ulid) -> bool {
        let before = self.active.len();
        self.active.retain(|star| star.id != id);
        before != self.active.len()
    }

    /// Currently visible streaks.
    pub fn active(&self) -> &[ShootingStar] {
        &self.active
    }

    /// Owned copy of the visible set, for handing to a renderer.
    pub fn snapshot(&self) -> Vec<ShootingStar> {
        self.active.clone()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Retire every streak immediately.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

impl Default for ShootingStarScheduler {
    fn default() -> Self {
        Self::new()
    }
}
