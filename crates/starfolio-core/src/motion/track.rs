//! Scroll-linked value mapping.
//!
//! Scroll progress arrives as a fraction in [0, 1]; these helpers turn it
//! into the style values the hero drifts through as it scrolls away.

use serde::{Deserialize, Serialize};

/// Map `value` from the `from` range onto the `to` range, clamped.
///
/// Values outside `from` pin to the nearest end of `to`. A degenerate
/// `from` range maps everything to `to.0`.
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let t = ((value - from.0) / span).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Style values for the hero section at one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroDrift {
    /// Downward translation as a percentage of the hero's height
    pub y_percent: f64,
    pub opacity: f64,
    pub scale: f64,
}

/// Hero parallax at overall scroll `progress` in [0, 1].
///
/// The hero slides down half its height over the full scroll range while
/// fading and shrinking away over the first half.
pub fn hero_drift(progress: f64) -> HeroDrift {
    HeroDrift {
        y_percent: map_range(progress, (0.0, 1.0), (0.0, 50.0)),
        opacity: map_range(progress, (0.0, 0.5), (1.0, 0.0)),
        scale: map_range(progress, (0.0, 0.5), (1.0, 0.8)),
    }
}
