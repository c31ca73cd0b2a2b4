//! Cursor Trail
//!
//! A small dot and a larger ring chase the pointer on two spring pairs with
//! different stiffness, so the ring visibly lags the dot. Pointer positions
//! arrive over an eval bridge; a frame-rate task steps the springs and
//! mirrors the results into signals.
//!
//! The trail only exists with full motion. CSS additionally hides it on
//! narrow (touch) layouts.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use starfolio_core::motion::spring::{CURSOR_DOT, CURSOR_RING};
use starfolio_core::SpringState;

use crate::context::{use_cursor, use_motion, CursorPos};

/// Spring integration step, roughly one display frame.
const FRAME: Duration = Duration::from_millis(16);

/// Dot is 12px; center it on the pointer.
const DOT_OFFSET: f64 = -6.0;

/// Ring is 32px; center it on the pointer.
const RING_OFFSET: f64 = -16.0;

/// Streams pointer positions in CSS pixels.
const MOUSE_TRACK_JS: &str = r#"
window.addEventListener("mousemove", (e) => {
    dioxus.send([e.clientX, e.clientY]);
}, { passive: true });
"#;

#[component]
pub fn CursorTrail() -> Element {
    let motion = use_motion();
    let mut cursor = use_cursor();
    let mut dot = use_signal(CursorPos::default);
    let mut ring = use_signal(CursorPos::default);

    // Pointer bridge
    use_effect(move || {
        spawn(async move {
            let mut bridge = document::eval(MOUSE_TRACK_JS);
            loop {
                match bridge.recv::<[f64; 2]>().await {
                    Ok([x, y]) => cursor.set(CursorPos { x, y }),
                    Err(e) => {
                        tracing::warn!("Pointer bridge closed: {e}");
                        break;
                    }
                }
            }
        });
    });

    // Spring stepper. Idles without re-rendering once both followers have
    // settled on the pointer.
    use_effect(move || {
        spawn(async move {
            let mut dot_x = SpringState::new(CURSOR_DOT, DOT_OFFSET);
            let mut dot_y = SpringState::new(CURSOR_DOT, DOT_OFFSET);
            let mut ring_x = SpringState::new(CURSOR_RING, RING_OFFSET);
            let mut ring_y = SpringState::new(CURSOR_RING, RING_OFFSET);
            let mut ticker = tokio::time::interval(FRAME);
            loop {
                ticker.tick().await;
                if motion.peek().is_reduced() {
                    continue;
                }
                let target = *cursor.peek();
                dot_x.set_target(target.x + DOT_OFFSET);
                dot_y.set_target(target.y + DOT_OFFSET);
                ring_x.set_target(target.x + RING_OFFSET);
                ring_y.set_target(target.y + RING_OFFSET);
                if dot_x.is_settled()
                    && dot_y.is_settled()
                    && ring_x.is_settled()
                    && ring_y.is_settled()
                {
                    continue;
                }
                let dt = FRAME.as_secs_f64();
                dot.set(CursorPos {
                    x: dot_x.step(dt),
                    y: dot_y.step(dt),
                });
                ring.set(CursorPos {
                    x: ring_x.step(dt),
                    y: ring_y.step(dt),
                });
            }
        });
    });

    if motion().is_reduced() {
        return rsx! {};
    }

    let d = dot();
    let r = ring();

    rsx! {
        div { class: "cursor-layer", aria_hidden: "true",
            div {
                class: "cursor-dot",
                style: "transform: translate3d({d.x:.1}px, {d.y:.1}px, 0);",
                div { class: "cursor-dot-pulse" }
            }
            div {
                class: "cursor-ring",
                style: "transform: translate3d({r.x:.1}px, {r.y:.1}px, 0);",
            }
        }
    }
}
