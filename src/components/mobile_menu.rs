//! Mobile Navigation Menu
//!
//! Dropdown panel for narrow windows (< 768px), replacing the inline nav
//! links. Items cascade in with a per-item stagger driven by a CSS variable.

use dioxus::prelude::*;
use starfolio_core::Section;

#[derive(Props, Clone, PartialEq)]
pub struct MobileMenuProps {
    /// Whether the panel is expanded
    pub open: bool,
    /// Callback with the chosen section; the caller closes the panel
    pub on_select: EventHandler<Section>,
}

/// Collapsible navigation panel for mobile widths.
#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    rsx! {
        nav { id: "mobile-menu", class: "mobile-menu", "aria-label": "Section navigation",
            for (index, section) in Section::NAV.into_iter().enumerate() {
                button {
                    key: "{section.anchor()}",
                    r#type: "button",
                    class: "mobile-menu-item",
                    style: "--item-index: {index}",
                    onclick: move |_| props.on_select.call(section),
                    "{section.title()}"
                }
            }
        }
    }
}
