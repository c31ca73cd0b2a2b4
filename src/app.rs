use dioxus::document;
use dioxus::prelude::*;
use starfolio_core::{MotionPref, ProfileContent, Theme};

use crate::context::{CursorPos, ScrollState};
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

/// Reports scroll progress, offset, and viewport height on every scroll or
/// resize, and once on startup.
const SCROLL_TRACK_JS: &str = r#"
const report = () => {
    const doc = document.documentElement;
    const max = Math.max(doc.scrollHeight - window.innerHeight, 1);
    const y = window.scrollY;
    dioxus.send([Math.min(y / max, 1), y, window.innerHeight]);
};
window.addEventListener("scroll", report, { passive: true });
window.addEventListener("resize", report);
report();
"#;

/// Reports the OS reduced-motion setting once on startup and again whenever
/// it changes.
const MOTION_QUERY_JS: &str = r#"
const mq = window.matchMedia("(prefers-reduced-motion: reduce)");
dioxus.send(mq.matches);
mq.addEventListener("change", (e) => dioxus.send(e.matches));
"#;

/// Root application component.
///
/// Owns every page-wide signal, provides them via context, and bridges the
/// webview's scroll position and motion setting into them.
#[component]
pub fn App() -> Element {
    let theme: Signal<Theme> = use_signal(crate::initial_theme);
    let mut motion: Signal<MotionPref> = use_signal(crate::initial_motion);
    let mut scroll: Signal<ScrollState> = use_signal(ScrollState::default);
    let cursor: Signal<CursorPos> = use_signal(CursorPos::default);
    let profile: Signal<ProfileContent> = use_signal(ProfileContent::standard);

    // Provide page state to all child components
    use_context_provider(|| theme);
    use_context_provider(|| motion);
    use_context_provider(|| scroll);
    use_context_provider(|| cursor);
    use_context_provider(|| profile);

    // Follow the OS motion setting; a reduction from either the command
    // line or the OS wins.
    use_effect(move || {
        spawn(async move {
            let mut bridge = document::eval(MOTION_QUERY_JS);
            loop {
                match bridge.recv::<bool>().await {
                    Ok(reduced) => {
                        let os_pref = MotionPref::from_media_query(Some(reduced));
                        let effective = crate::initial_motion().strictest(os_pref);
                        if motion() != effective {
                            tracing::info!(%effective, "Motion preference changed");
                            motion.set(effective);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Motion query bridge closed: {e}");
                        break;
                    }
                }
            }
        });
    });

    // Mirror the webview scroll position into a signal
    use_effect(move || {
        spawn(async move {
            let mut bridge = document::eval(SCROLL_TRACK_JS);
            loop {
                match bridge.recv::<[f64; 3]>().await {
                    Ok([progress, offset_px, viewport_px]) => {
                        scroll.set(ScrollState {
                            progress,
                            offset_px,
                            viewport_px,
                        });
                    }
                    Err(e) => {
                        tracing::warn!("Scroll bridge closed: {e}");
                        break;
                    }
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Portfolio {}
    }
}
