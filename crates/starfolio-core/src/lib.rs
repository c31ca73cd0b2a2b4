//! Starfolio Core Library
//!
//! Content model and motion engine for an animated portfolio page.
//!
//! ## Overview
//!
//! Everything the page shows and everything that moves is decided here, as
//! plain data and pure state machines. The desktop shell only renders: it
//! feeds this crate clock ticks, scroll positions, and pointer positions and
//! paints whatever comes back. That split keeps every visual behavior
//! testable without a window.
//!
//! ## Core Principles
//!
//! - **Deterministic**: every random element accepts a seed and replays
//!   identically under the same cadence
//! - **One owner per effect**: transient visuals live in a single arena that
//!   one task drives; teardown is dropping the arena
//! - **Renderer-agnostic motion**: transitions describe timing, springs
//!   integrate positions; CSS strings are derived at the edge
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use starfolio_core::sky::ShootingStarScheduler;
//! use starfolio_core::Theme;
//!
//! let mut sky = ShootingStarScheduler::with_seed(7);
//! let outcome = sky.advance(Duration::from_secs(4), Theme::Dark);
//! for streak in outcome.spawned {
//!     println!("streak at {:.0}%, {:.0}%", streak.x, streak.y);
//! }
//! ```

pub mod content;
pub mod error;
pub mod motion;
pub mod section;
pub mod sky;
pub mod theme;

// Re-exports
pub use content::{
    Achievement, ContactInfo, IconKind, ProfileContent, ProjectEntry, RoleEntry, SkillGroup, Stat,
};
pub use error::{CoreError, CoreResult};
pub use motion::{hero_drift, map_range, Ease, HeroDrift, Repeat, Spring, SpringState, Transition};
pub use section::Section;
pub use sky::{Advance, ShootingStar, ShootingStarScheduler, Star, StarField};
pub use theme::{MotionPref, Theme};
