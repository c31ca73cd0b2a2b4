//! Hero Section
//!
//! Full-height banner with the availability badge, animated gradient name,
//! rotating role line, and call-to-action buttons. The glow backdrop drifts
//! down and fades as the page scrolls while the content shrinks away.

use std::time::Duration;

use dioxus::prelude::*;
use starfolio_core::{hero_drift, IconKind, Section};

use crate::components::Icon;
use crate::context::{scroll_to, use_motion, use_profile, use_scroll};

/// Seconds each role word stays up
const ROLE_ROTATE_SECS: u64 = 3;

/// Hero banner component.
#[component]
pub fn Hero() -> Element {
    let motion = use_motion();
    let profile = use_profile();
    let scroll = use_scroll();

    let mut role_index = use_signal(|| 0usize);

    // Cycle the role line on a fixed cadence; the task dies with the
    // component.
    use_effect(move || {
        let count = profile.peek().rotating_roles.len();
        if count == 0 {
            return;
        }
        spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(ROLE_ROTATE_SECS));
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let next = (*role_index.peek() + 1) % count;
                role_index.set(next);
            }
        });
    });

    let drift = hero_drift(scroll().hero_progress());
    let backdrop_style = format!(
        "transform: translateY({:.2}%); opacity: {:.3};",
        drift.y_percent, drift.opacity
    );
    let content_style = format!("transform: scale({:.4});", drift.scale);

    let p = profile();
    let (given, family) = split_name(&p.name);
    let role = p
        .rotating_roles
        .get(role_index())
        .cloned()
        .unwrap_or_default();

    rsx! {
        section {
            id: "{Section::Hero.anchor()}",
            class: "hero",
            "aria-labelledby": "hero-heading",

            // Drifting glow backdrop, behind the content
            div { class: "hero-backdrop", style: "{backdrop_style}", "aria-hidden": "true",
                div { class: "hero-orb hero-orb-a" }
                div { class: "hero-orb hero-orb-b" }
            }

            div { class: "hero-content", style: "{content_style}",
                span { class: "hero-badge", "✅ {p.availability}" }

                h1 { id: "hero-heading", class: "hero-name",
                    "{given}"
                    br {}
                    span { class: "hero-name-accent", "{family}" }
                }

                // Keyed on the index so the entrance animation replays on
                // every word change
                div { class: "hero-role-well", "aria-live": "polite",
                    p { key: "{role_index()}", class: "hero-role", "{role}" }
                }

                div { class: "hero-ctas",
                    button {
                        r#type: "button",
                        class: "btn-primary",
                        "aria-label": "View projects section",
                        onclick: move |_| scroll_to(Section::Projects, motion()),
                        "View Projects "
                        span { class: "nudge-x", Icon { kind: IconKind::ExternalLink, size: 22 } }
                    }
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        "aria-label": "Download resume PDF",
                        Icon { kind: IconKind::Download, size: 22 }
                        " Download Resume"
                    }
                }

                button {
                    r#type: "button",
                    class: "hero-scroll-cue",
                    "aria-label": "Scroll to About section",
                    onclick: move |_| scroll_to(Section::About, motion()),
                    Icon { kind: IconKind::ArrowDown, size: 36 }
                }
            }
        }
    }
}

/// Split a full name into everything-but-last and the last word, for the
/// gradient treatment on the family name.
fn split_name(name: &str) -> (String, String) {
    match name.rsplit_once(' ') {
        Some((given, family)) => (given.to_string(), family.to_string()),
        None => (name.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::split_name;

    #[test]
    fn splits_on_the_last_space() {
        let (given, family) = split_name("Mahesh Babu Kethineni");
        assert_eq!(given, "Mahesh Babu");
        assert_eq!(family, "Kethineni");
    }

    #[test]
    fn single_word_name_has_no_family_part() {
        let (given, family) = split_name("Mononym");
        assert_eq!(given, "Mononym");
        assert_eq!(family, "");
    }
}
