//! Static starfield backdrop.
//!
//! Stars are generated once per theme and never move; only their twinkle
//! animation varies. Positions are percentages of the viewport so the field
//! scales with the window.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Smallest star diameter in CSS pixels
pub const SIZE_MIN: f64 = 0.5;
/// Diameter spread above [`SIZE_MIN`]
pub const SIZE_SPAN: f64 = 2.5;
/// Shortest twinkle period in seconds
pub const TWINKLE_MIN: f64 = 2.0;
/// Twinkle period spread above [`TWINKLE_MIN`]
pub const TWINKLE_SPAN: f64 = 4.0;
/// Twinkle start offsets are drawn from [0, this) seconds
pub const DELAY_SPAN: f64 = 3.0;

/// One fixed point of light.
///
/// `x` and `y` are percentages of the viewport in [0, 100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// Diameter in CSS pixels
    pub size: f64,
    /// Twinkle period in seconds
    pub twinkle_secs: f64,
    /// Twinkle start offset in seconds
    pub delay_secs: f64,
}

/// The full set of stars for one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Generate a fresh field sized for `theme`.
    pub fn generate(theme: Theme) -> Self {
        Self::with_rng(theme, &mut rand::rng())
    }

    /// Generate a reproducible field from `seed`.
    pub fn generate_seeded(theme: Theme, seed: u64) -> Self {
        Self::with_rng(theme, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> Self {
        let count = theme.star_count();
        let stars = (0..count as u32)
            .map(|id| Star {
                id,
                x: rng.random::<f64>() * 100.0,
                y: rng.random::<f64>() * 100.0,
                size: rng.random::<f64>() * SIZE_SPAN + SIZE_MIN,
                twinkle_secs: rng.random::<f64>() * TWINKLE_SPAN + TWINKLE_MIN,
                delay_secs: rng.random::<f64>() * DELAY_SPAN,
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
