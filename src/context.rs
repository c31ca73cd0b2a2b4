//! Shared page state for the portfolio.
//!
//! The root component owns one signal per concern and provides them all via
//! context; components reach them through these typed hooks.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let theme = use_theme();
//! let scroll = use_scroll();
//! rsx! { div { class: "{theme().css_class()}", "{scroll().progress}" } }
//! ```

use dioxus::document;
use dioxus::prelude::*;
use starfolio_core::{MotionPref, ProfileContent, Section, Theme};

/// Where the page is scrolled to, as reported by the webview.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Overall progress through the document in [0, 1]
    pub progress: f64,
    /// Scroll offset from the top in CSS pixels
    pub offset_px: f64,
    /// Viewport height in CSS pixels
    pub viewport_px: f64,
}

impl ScrollState {
    /// Progress of the hero section scrolling out of view, in [0, 1].
    pub fn hero_progress(&self) -> f64 {
        if self.viewport_px <= 0.0 {
            return 0.0;
        }
        (self.offset_px / self.viewport_px).clamp(0.0, 1.0)
    }

    /// Whether the page has scrolled enough for the nav bar to solidify.
    pub fn past_nav_threshold(&self) -> bool {
        self.offset_px > 20.0
    }
}

/// Last reported pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPos {
    pub x: f64,
    pub y: f64,
}

/// Hook to access the active theme from context.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access the effective motion preference from context.
///
/// Already combines the command line choice with the OS setting; components
/// never consult the media query themselves.
pub fn use_motion() -> Signal<MotionPref> {
    use_context::<Signal<MotionPref>>()
}

/// Hook to access the live scroll state from context.
pub fn use_scroll() -> Signal<ScrollState> {
    use_context::<Signal<ScrollState>>()
}

/// Hook to access the live pointer position from context.
pub fn use_cursor() -> Signal<CursorPos> {
    use_context::<Signal<CursorPos>>()
}

/// Hook to access the profile content from context.
pub fn use_profile() -> Signal<ProfileContent> {
    use_context::<Signal<ProfileContent>>()
}

/// Scroll the page to a section and move keyboard focus there.
///
/// Reduced motion jumps instead of gliding. Unknown anchors are ignored by
/// the null check in the snippet.
pub fn scroll_to(section: Section, motion: MotionPref) {
    let behavior = if motion.is_reduced() { "auto" } else { "smooth" };
    let js = format!(
        r#"const el = document.getElementById("{anchor}");
        if (el) {{
            el.scrollIntoView({{ behavior: "{behavior}", block: "start" }});
            el.setAttribute("tabindex", "-1");
            el.focus({{ preventScroll: true }});
        }}"#,
        anchor = section.anchor(),
        behavior = behavior,
    );
    document::eval(&js);
}
