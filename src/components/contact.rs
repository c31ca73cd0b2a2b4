//! Contact Section
//!
//! Three pill links: mail, LinkedIn, phone. mailto:/tel: schemes are built by
//! the content model so the strings stay in one place.

use dioxus::prelude::*;
use starfolio_core::{IconKind, Section};

use crate::components::Icon;
use crate::components::Reveal;
use crate::context::use_profile;

#[component]
pub fn Contact() -> Element {
    let profile = use_profile();
    let p = profile();
    let contact = &p.contact;

    rsx! {
        Reveal { section: Section::Contact,
            div { class: "section-inner narrow centered",
                h2 { class: "section-title",
                    "Get in "
                    span { class: "accent", "Touch" }
                }
                p { class: "section-lede",
                    "Open to new opportunities. Reach out and I'll get back to you."
                }

                div { class: "contact-row",
                    a {
                        class: "contact-pill pill-mail",
                        href: "{contact.mailto()}",
                        Icon { kind: IconKind::Mail, size: 20 }
                        span { "Email" }
                    }
                    a {
                        class: "contact-pill pill-linkedin",
                        href: "{contact.linkedin_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { kind: IconKind::Linkedin, size: 20 }
                        span { "LinkedIn" }
                    }
                    a {
                        class: "contact-pill pill-call",
                        href: "{contact.tel()}",
                        Icon { kind: IconKind::Phone, size: 20 }
                        span { "Call" }
                    }
                }
            }
        }
    }
}
