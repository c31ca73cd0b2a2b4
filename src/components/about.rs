//! About Section
//!
//! Short bio plus the headline stat cards.

use dioxus::prelude::*;
use starfolio_core::Section;

use crate::components::{Icon, Reveal};
use crate::context::use_profile;

#[component]
pub fn About() -> Element {
    let profile = use_profile();
    let p = profile();

    rsx! {
        Reveal { section: Section::About,
            div { class: "section-inner",
                div { class: "section-heading",
                    h2 { class: "section-title",
                        "About "
                        span { class: "accent-gradient", "Me" }
                    }
                    p { class: "section-lede", "{p.about}" }
                }

                div { class: "stat-grid",
                    for (index, stat) in p.stats.iter().enumerate() {
                        div {
                            key: "{stat.label}",
                            class: "stat-card",
                            style: "--item-index: {index}",
                            span { class: "stat-icon", Icon { kind: stat.icon, size: 36 } }
                            h3 { class: "stat-value", "{stat.value}" }
                            p { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}
