//! Ambient Sky Backdrop
//!
//! Fixed, non-interactive layer behind all content: the twinkling star
//! field, self-removing shooting stars, and the drifting color orbs. The
//! whole layer is decorative and hidden from the accessibility tree.
//!
//! Shooting stars come from a [`ShootingStarScheduler`] advanced by a
//! background task on a coarse cadence; the component only mirrors the
//! scheduler's live set into a signal when something actually changed.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use starfolio_core::{Repeat, ShootingStar, ShootingStarScheduler, Star, StarField, Theme, Transition};

use crate::context::{use_motion, use_theme};

/// Cadence of the scheduler driver task. Well under the streak lifetime, so
/// every spawn is observed on screen before it expires.
const DRIVER_TICK: Duration = Duration::from_millis(250);

/// Inline placement and twinkle animation for one star.
fn star_style(star: &Star) -> String {
    let twinkle = Transition::new(star.twinkle_secs)
        .with_delay(star.delay_secs)
        .with_repeat(Repeat::Forever);
    format!(
        "left: {x:.2}%; top: {y:.2}%; width: {size:.2}px; height: {size:.2}px; animation: {anim};",
        x = star.x,
        y = star.y,
        size = star.size,
        anim = twinkle.css("twinkle"),
    )
}

#[component]
pub fn NightSky() -> Element {
    let theme = use_theme();
    let motion = use_motion();

    // Star budget follows the theme; a fixed seed keeps the same sky across
    // theme toggles.
    let field = use_memo(move || match crate::sky_seed() {
        Some(seed) => StarField::generate_seeded(theme(), seed),
        None => StarField::generate(theme()),
    });

    let mut streaks: Signal<Vec<ShootingStar>> = use_signal(Vec::new);

    // Drive the shooting-star scheduler on logical time. Reduced motion
    // pauses the driver and clears anything in flight; flipping back
    // resumes on the same clock, and the scheduler drops the ticks that
    // fully elapsed while paused.
    use_effect(move || {
        spawn(async move {
            let mut scheduler = match crate::sky_seed() {
                Some(seed) => ShootingStarScheduler::with_seed(seed),
                None => ShootingStarScheduler::new(),
            };
            let started = Instant::now();
            let mut ticker = tokio::time::interval(DRIVER_TICK);
            loop {
                ticker.tick().await;
                if !motion.peek().allows_ambient() {
                    if !streaks.peek().is_empty() {
                        scheduler.clear();
                        streaks.set(Vec::new());
                    }
                    continue;
                }
                let outcome = scheduler.advance(started.elapsed(), *theme.peek());
                if outcome.changed() {
                    streaks.set(scheduler.snapshot());
                }
            }
        });
    });

    let sky = field();
    let live = streaks();

    rsx! {
        div { class: "night-sky", aria_hidden: "true",
            for star in sky.stars() {
                div {
                    key: "{star.id}",
                    class: "star",
                    style: star_style(star),
                }
            }
            for streak in live.iter() {
                div {
                    key: "{streak.id}",
                    class: "shooting-star",
                    style: "left: {streak.x:.2}%; top: {streak.y:.2}%;",
                }
            }
            OrbLayer { theme: theme() }
        }
    }
}

/// Drifting gradient orbs. Each theme carries its own set with its own
/// palette and timing, laid out entirely in CSS.
#[component]
fn OrbLayer(theme: Theme) -> Element {
    match theme {
        Theme::Dark => rsx! {
            div { class: "sky-orb dark-orb-1" }
            div { class: "sky-orb dark-orb-2" }
            div { class: "sky-orb dark-orb-3" }
            div { class: "sky-orb dark-orb-4" }
        },
        Theme::Light => rsx! {
            div { class: "sky-orb light-orb-1" }
            div { class: "sky-orb light-orb-2" }
            div { class: "sky-orb light-orb-3" }
            div { class: "sky-orb light-orb-4" }
        },
    }
}
