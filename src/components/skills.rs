//! Skills Section

use dioxus::prelude::*;
use starfolio_core::Section;

use crate::components::{Icon, Reveal};
use crate::context::use_profile;

#[component]
pub fn Skills() -> Element {
    let profile = use_profile();
    let p = profile();

    rsx! {
        Reveal { section: Section::Skills,
            div { class: "section-inner centered",
                h2 { class: "section-title",
                    "Technical "
                    span { class: "accent", "Skills" }
                }

                div { class: "skill-grid",
                    for (index, group) in p.skills.iter().enumerate() {
                        div {
                            key: "{group.title}",
                            class: "skill-card",
                            style: "--item-index: {index}",
                            span { class: "skill-icon", Icon { kind: group.icon, size: 50 } }
                            h3 { "{group.title}" }
                            p { "{group.summary}" }
                        }
                    }
                }
            }
        }
    }
}
