//! The portfolio page.
//!
//! One linear column of presentation sections under the animated sky, with
//! the fixed chrome (nav bar, scroll progress, cursor trail) layered on top.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::{
    About, Achievements, Contact, CursorTrail, Experience, Hero, NavBar, NightSky, Projects,
    ScrollProgress, Skills,
};
use crate::context::{use_motion, use_profile, use_theme};

/// Single-page portfolio layout.
#[component]
pub fn Portfolio() -> Element {
    let theme = use_theme();
    let motion = use_motion();
    let profile = use_profile();

    let year = chrono::Local::now().year();
    let name = profile().name;

    rsx! {
        div { class: "page {theme().css_class()} {motion().css_class()}",
            a { class: "skip-link", href: "#main-content", "Skip to main content" }

            NightSky {}
            ScrollProgress {}
            CursorTrail {}
            NavBar {}

            main { id: "main-content", class: "page-main",
                Hero {}
                About {}
                Skills {}
                Experience {}
                Projects {}
                Achievements {}
                Contact {}
            }

            footer { class: "page-footer",
                p { "© {year} {name}. All rights reserved." }
            }
        }
    }
}
