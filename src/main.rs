#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use starfolio_core::{MotionPref, ProfileContent, Theme};

/// Theme the window opens with, set from command line
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

/// Motion preference forced from the command line
static INITIAL_MOTION: OnceLock<MotionPref> = OnceLock::new();

/// Fixed seed for the sky, set from command line
static SKY_SEED: OnceLock<Option<u64>> = OnceLock::new();

/// Get the startup theme (set from command line or default)
pub fn initial_theme() -> Theme {
    INITIAL_THEME.get().copied().unwrap_or_default()
}

/// Get the startup motion preference (set from command line or default)
pub fn initial_motion() -> MotionPref {
    INITIAL_MOTION.get().copied().unwrap_or_default()
}

/// Get the sky seed, if one was fixed on the command line
pub fn sky_seed() -> Option<u64> {
    SKY_SEED.get().copied().flatten()
}

/// Starfolio - Animated portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "starfolio-desktop")]
#[command(about = "Starfolio - Portfolio page under an animated night sky")]
struct Args {
    /// Theme to open with: dark or light
    #[arg(long, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Motion preference: full or reduced (reduced also follows the OS setting)
    #[arg(long, default_value_t = MotionPref::Full)]
    motion: MotionPref,

    /// Fix the sky's random seed so every run paints the same stars
    #[arg(long)]
    sky_seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let _ = INITIAL_THEME.set(args.theme);
    let _ = INITIAL_MOTION.set(args.motion);
    let _ = SKY_SEED.set(args.sky_seed);

    // Window size: wide enough for the desktop layout breakpoint
    let window_width = 1240.0;
    let window_height = 900.0;

    let title = ProfileContent::standard().window_title();

    tracing::info!(
        theme = %args.theme,
        motion = %args.motion,
        seed = ?args.sky_seed,
        "Starting portfolio window"
    );

    // Configure desktop window
    let config = Config::new()
        .with_background_color(theme::colors::window_background(args.theme))
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
