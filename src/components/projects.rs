//! Projects Section
//!
//! Each card is a plain link to the app's store listing; the desktop shell
//! hands external navigation to the system browser.

use dioxus::prelude::*;
use starfolio_core::Section;

use crate::components::Reveal;
use crate::context::use_profile;

#[component]
pub fn Projects() -> Element {
    let profile = use_profile();
    let p = profile();

    rsx! {
        Reveal { section: Section::Projects,
            div { class: "section-inner centered",
                h2 { class: "section-title",
                    "Featured "
                    span { class: "accent", "Projects" }
                }

                div { class: "project-grid",
                    for project in p.projects.iter() {
                        a {
                            key: "{project.title}",
                            class: "project-card",
                            href: "{project.store_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            h3 { "{project.title}" }
                            p { "{project.summary}" }
                            span { class: "project-link", "View on Play Store →" }
                        }
                    }
                }
            }
        }
    }
}
