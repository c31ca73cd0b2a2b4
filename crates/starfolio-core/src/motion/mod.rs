//! Motion primitives: springs, declarative transitions, and scroll mapping.

pub mod spring;
pub mod track;
pub mod transition;

pub use spring::{Spring, SpringState};
pub use track::{hero_drift, map_range, HeroDrift};
pub use transition::{Ease, Repeat, Transition};
