//! Display preference flags: color theme and motion preference.
//!
//! Both flags live for the page session only. Relaunching resets them to
//! their compiled-in defaults (dark theme, full motion).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Color theme of the page.
///
/// The theme drives more than colors: it sets the star budget of the
/// backdrop and gates whether shooting stars may spawn at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Night sky: dense starfield, shooting stars enabled
    #[default]
    Dark,
    /// Morning sky: sparser stars, no shooting stars
    Light,
}

impl Theme {
    /// Number of backdrop stars generated for this theme
    pub fn star_count(self) -> usize {
        match self {
            Theme::Dark => 200,
            Theme::Light => 100,
        }
    }

    /// Whether shooting stars may spawn under this theme
    pub fn spawns_shooting_stars(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// CSS class applied to the root container
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    /// The opposite theme
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Lowercase name, matching what [`FromStr`] accepts
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(CoreError::UnknownTheme(other.to_string())),
        }
    }
}

/// Motion preference, combining the host accessibility signal with any
/// launch-time override.
///
/// `Reduced` suppresses non-essential animation: cursor followers are not
/// rendered, reveal sections start revealed, and the shooting-star
/// scheduler is never driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MotionPref {
    /// All decorative animation enabled
    #[default]
    Full,
    /// Non-essential animation suppressed
    Reduced,
}

impl MotionPref {
    /// Interpret a `prefers-reduced-motion` media query result.
    ///
    /// An unavailable query (`None`) means full motion.
    pub fn from_media_query(matches: Option<bool>) -> Self {
        match matches {
            Some(true) => MotionPref::Reduced,
            _ => MotionPref::Full,
        }
    }

    /// Whether ambient animation (twinkle, shooting stars, followers) runs
    pub fn allows_ambient(self) -> bool {
        matches!(self, MotionPref::Full)
    }

    /// Whether this preference requests suppression
    pub fn is_reduced(self) -> bool {
        matches!(self, MotionPref::Reduced)
    }

    /// Combine two sources of preference; reduction from either side wins.
    pub fn strictest(self, other: MotionPref) -> MotionPref {
        if self.is_reduced() || other.is_reduced() {
            MotionPref::Reduced
        } else {
            MotionPref::Full
        }
    }

    /// CSS class applied to the root container
    pub fn css_class(self) -> &'static str {
        match self {
            MotionPref::Full => "motion-full",
            MotionPref::Reduced => "motion-reduced",
        }
    }

    /// Lowercase name, matching what [`FromStr`] accepts
    pub fn label(self) -> &'static str {
        match self {
            MotionPref::Full => "full",
            MotionPref::Reduced => "reduced",
        }
    }
}

impl fmt::Display for MotionPref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MotionPref {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(MotionPref::Full),
            "reduced" => Ok(MotionPref::Reduced),
            other => Err(CoreError::UnknownMotionPref(other.to_string())),
        }
    }
}
