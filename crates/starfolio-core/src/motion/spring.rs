//! Damped spring integration for pointer and scroll followers.
//!
//! A [`SpringState`] chases a moving target; callers retarget it whenever the
//! input changes and step it once per frame. Integration is semi-implicit
//! Euler with a capped internal step so a long frame cannot blow it up.

use serde::{Deserialize, Serialize};

/// Spring tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

/// Tight spring for the small dot riding directly on the pointer
pub const CURSOR_DOT: Spring = Spring {
    stiffness: 500.0,
    damping: 28.0,
    mass: 1.0,
};

/// Loose spring for the ring trailing the pointer
pub const CURSOR_RING: Spring = Spring {
    stiffness: 150.0,
    damping: 20.0,
    mass: 1.0,
};

/// Overdamped spring that glides the scroll progress bar
pub const SCROLL_GLIDE: Spring = Spring {
    stiffness: 100.0,
    damping: 30.0,
    mass: 1.0,
};

/// Position error below which the spring may come to rest
pub const REST_DELTA: f64 = 0.01;
/// Speed below which the spring may come to rest
pub const REST_SPEED: f64 = 0.05;
/// Largest internal integration step in seconds
pub const MAX_STEP: f64 = 1.0 / 60.0;

/// One spring-driven scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringState {
    spring: Spring,
    position: f64,
    velocity: f64,
    target: f64,
}

impl SpringState {
    /// Spring at rest at `position`.
    pub fn new(spring: Spring, position: f64) -> Self {
        Self {
            spring,
            position,
            velocity: 0.0,
            target: position,
        }
    }

    /// Point the spring at a new target, keeping current momentum.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Teleport to `position` with no residual motion.
    pub fn snap_to(&mut self, position: f64) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds and return the new position.
    ///
    /// Non-positive `dt` leaves the state untouched. Once within
    /// [`REST_DELTA`] of the target at under [`REST_SPEED`], the spring
    /// settles exactly onto the target.
    pub fn step(&mut self, dt: f64) -> f64 {
        if dt <= 0.0 {
            return self.position;
        }
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return self.position;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            remaining -= h;

            let displacement = self.position - self.target;
            let accel = (-self.spring.stiffness * displacement
                - self.spring.damping * self.velocity)
                / self.spring.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }

    /// Whether the spring has effectively stopped at its target.
    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}
