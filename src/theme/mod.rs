//! Visual theme: the global stylesheet and the window-shell palette.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
