//! Experience Section

use dioxus::prelude::*;
use starfolio_core::Section;

use crate::components::Reveal;
use crate::context::use_profile;

#[component]
pub fn Experience() -> Element {
    let profile = use_profile();
    let p = profile();

    rsx! {
        Reveal { section: Section::Experience,
            div { class: "section-inner narrow",
                h2 { class: "section-title centered",
                    "Work "
                    span { class: "accent", "Experience" }
                }

                div { class: "role-stack",
                    for role in p.experience.iter() {
                        div { key: "{role.title}", class: "role-card",
                            h3 { "{role.title}" }
                            p { class: "role-company", "{role.company}" }
                            p { class: "role-summary", "{role.summary}" }
                        }
                    }
                }
            }
        }
    }
}
