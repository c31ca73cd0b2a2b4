//! The animated night sky: a static twinkling starfield plus scheduled
//! shooting stars.

pub mod shooting;
pub mod star;

pub use shooting::{Advance, ShootingStar, ShootingStarScheduler};
pub use star::{Star, StarField};
