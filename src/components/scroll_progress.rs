//! Scroll Progress Bar
//!
//! Thin gradient bar pinned to the top of the viewport, scaled horizontally
//! by how far the page is scrolled. The raw progress is smoothed through the
//! scroll glide spring; reduced motion tracks it exactly instead.

use std::time::Duration;

use dioxus::prelude::*;
use starfolio_core::motion::spring::SCROLL_GLIDE;
use starfolio_core::SpringState;

use crate::context::{use_motion, use_scroll};

/// Spring integration step, roughly one display frame.
const FRAME: Duration = Duration::from_millis(16);

/// Signal updates below this are invisible at bar scale; skip the render.
const MIN_DELTA: f64 = 1e-4;

#[component]
pub fn ScrollProgress() -> Element {
    let scroll = use_scroll();
    let motion = use_motion();
    let mut eased = use_signal(|| 0.0f64);

    use_effect(move || {
        spawn(async move {
            let mut glide = SpringState::new(SCROLL_GLIDE, 0.0);
            let mut ticker = tokio::time::interval(FRAME);
            loop {
                ticker.tick().await;
                let target = scroll.peek().progress;
                if motion.peek().is_reduced() {
                    glide.snap_to(target);
                } else {
                    glide.set_target(target);
                    glide.step(FRAME.as_secs_f64());
                }
                let position = glide.position();
                if (position - *eased.peek()).abs() > MIN_DELTA {
                    eased.set(position);
                }
            }
        });
    });

    let scale = eased();

    rsx! {
        div {
            class: "scroll-progress",
            aria_hidden: "true",
            style: "transform: scaleX({scale:.4});",
        }
    }
}
