//! Declarative animation timing.
//!
//! A [`Transition`] describes how a property animates without saying what
//! runs it. The desktop renderer turns one into a CSS `animation` shorthand;
//! [`Ease::sample`] exists for anything driving values directly.

use serde::{Deserialize, Serialize};

/// Easing curve shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Ease {
    /// CSS timing-function keyword for this curve.
    pub fn css_name(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseIn => "ease-in",
            Ease::EaseOut => "ease-out",
            Ease::EaseInOut => "ease-in-out",
        }
    }

    /// Evaluate the curve at `t`, clamped to [0, 1].
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::EaseIn => t * t,
            Ease::EaseOut => t * (2.0 - t),
            Ease::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// How many times an animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repeat {
    Once,
    Forever,
    Count(u32),
}

impl Repeat {
    /// CSS iteration-count for this repeat mode.
    pub fn css(&self) -> String {
        match self {
            Repeat::Once => "1".to_string(),
            Repeat::Forever => "infinite".to_string(),
            Repeat::Count(n) => n.to_string(),
        }
    }
}

/// Timing envelope for one animated property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Seconds per play
    pub duration: f64,
    /// Seconds before the first play
    pub delay: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Transition {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Ease::EaseInOut,
            repeat: Repeat::Once,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// CSS `animation` shorthand playing the named keyframes.
    pub fn css(&self, keyframes: &str) -> String {
        format!(
            "{} {:.2}s {} {:.2}s {}",
            keyframes,
            self.duration,
            self.ease.css_name(),
            self.delay,
            self.repeat.css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_has_canonical_shape() {
        let twinkle = Transition::new(3.5)
            .with_delay(1.2)
            .with_repeat(Repeat::Forever);
        assert_eq!(twinkle.css("twinkle"), "twinkle 3.50s ease-in-out 1.20s infinite");
    }

    #[test]
    fn one_shot_shorthand() {
        let rise = Transition::new(0.6).with_ease(Ease::EaseOut);
        assert_eq!(rise.css("rise"), "rise 0.60s ease-out 0.00s 1");
    }

    #[test]
    fn counted_repeat() {
        assert_eq!(Repeat::Count(3).css(), "3");
    }

    #[test]
    fn curves_hit_their_endpoints() {
        for ease in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
            assert_eq!(ease.sample(0.0), 0.0);
            assert_eq!(ease.sample(1.0), 1.0);
        }
    }

    #[test]
    fn sampling_clamps_out_of_range_input() {
        assert_eq!(Ease::EaseIn.sample(-2.0), 0.0);
        assert_eq!(Ease::EaseOut.sample(7.0), 1.0);
    }

    #[test]
    fn curves_are_monotonic() {
        for ease in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = ease.sample(i as f64 / 100.0);
                assert!(v >= prev, "{ease:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn smoothstep_is_symmetric_about_the_midpoint() {
        let mid = Ease::EaseInOut.sample(0.5);
        assert!((mid - 0.5).abs() < 1e-12);
        for i in 0..=50 {
            let t = i as f64 / 100.0;
            let lo = Ease::EaseInOut.sample(t);
            let hi = Ease::EaseInOut.sample(1.0 - t);
            assert!((lo + hi - 1.0).abs() < 1e-12);
        }
    }
}
