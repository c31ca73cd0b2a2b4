//! Achievements Section

use dioxus::prelude::*;
use starfolio_core::{IconKind, Section};

use crate::components::{Icon, Reveal};
use crate::context::use_profile;

#[component]
pub fn Achievements() -> Element {
    let profile = use_profile();
    let p = profile();

    rsx! {
        Reveal { section: Section::Achievements,
            div { class: "section-inner narrow centered",
                div { class: "achievement-icon",
                    Icon { kind: IconKind::Award, size: 60 }
                }
                h2 { class: "section-title", "Achievements" }

                for achievement in p.achievements.iter() {
                    p { key: "{achievement.summary}", class: "achievement-entry",
                        "{achievement.summary}"
                    }
                }
            }
        }
    }
}
