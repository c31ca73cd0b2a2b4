//! Fixed navigation bar.
//!
//! Transparent over the hero, solidifying with a blur once the page scrolls
//! past the threshold. Desktop shows inline section links; mobile collapses
//! them behind a hamburger menu.

use dioxus::prelude::*;
use starfolio_core::{IconKind, Section, Theme};

use crate::components::{Icon, MobileMenu};
use crate::context::{scroll_to, use_motion, use_profile, use_scroll, use_theme};

/// Fixed top navigation with section links and the theme toggle.
#[component]
pub fn NavBar() -> Element {
    let mut theme = use_theme();
    let motion = use_motion();
    let scroll = use_scroll();
    let profile = use_profile();

    let mut menu_open = use_signal(|| false);

    let nav_class = if scroll().past_nav_threshold() {
        "nav-bar scrolled"
    } else {
        "nav-bar"
    };

    let (toggle_icon, toggle_label) = match theme() {
        Theme::Dark => (IconKind::Sun, "Switch to light mode"),
        Theme::Light => (IconKind::Moon, "Switch to dark mode"),
    };
    let menu_icon = if menu_open() {
        IconKind::Close
    } else {
        IconKind::Menu
    };
    let menu_label = if menu_open() { "Close menu" } else { "Open menu" };

    rsx! {
        header { class: "{nav_class}",
            div { class: "nav-inner",
                // Left: monogram brand, doubling as a back-to-top button
                button {
                    r#type: "button",
                    class: "nav-brand",
                    onclick: move |_| scroll_to(Section::Hero, motion()),
                    "{profile().initials}"
                }

                // Center: section links (hidden on mobile via CSS)
                nav { class: "nav-links", "aria-label": "Section navigation",
                    for section in Section::NAV {
                        button {
                            r#type: "button",
                            class: "nav-link",
                            onclick: move |_| scroll_to(section, motion()),
                            "{section.title()}"
                        }
                    }
                }

                // Right: theme toggle and the mobile menu button
                div { class: "nav-actions",
                    button {
                        r#type: "button",
                        class: "theme-toggle",
                        "aria-label": "{toggle_label}",
                        onclick: move |_| {
                            let next = theme().toggled();
                            tracing::debug!(%next, "Theme toggled");
                            theme.set(next);
                        },
                        Icon { kind: toggle_icon, size: 18 }
                    }
                    button {
                        r#type: "button",
                        class: "menu-toggle",
                        "aria-label": "{menu_label}",
                        "aria-expanded": "{menu_open()}",
                        "aria-controls": "mobile-menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        Icon { kind: menu_icon, size: 20 }
                    }
                }
            }
        }

        MobileMenu {
            open: menu_open(),
            on_select: move |section| {
                menu_open.set(false);
                scroll_to(section, motion());
            },
        }
    }
}
