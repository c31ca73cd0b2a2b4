//! Enter-on-scroll wrapper.
//!
//! Wraps one page section and keeps it faded down until the webview reports
//! it entering the viewport, then reveals it once and never hides it again.
//! Under reduced motion the section mounts already revealed.

use dioxus::document;
use dioxus::prelude::*;
use starfolio_core::Section;

use crate::context::use_motion;

/// Section wrapper that reveals its children when scrolled into view.
///
/// The observed element is the section's own anchor id, so navigation and
/// reveal share one source of truth.
#[component]
pub fn Reveal(section: Section, children: Element) -> Element {
    let motion = use_motion();
    let mut revealed = use_signal(|| motion.peek().is_reduced());

    // Reduced motion reveals everything immediately, including sections
    // mounted before the OS preference arrived.
    use_effect(move || {
        if motion().is_reduced() && !*revealed.peek() {
            revealed.set(true);
        }
    });

    // Watch for the section entering the viewport, shrunk by 10% so the
    // reveal starts once the section is meaningfully on screen.
    use_effect(move || {
        if *revealed.peek() {
            return;
        }
        let js = format!(
            r#"const el = document.getElementById("{anchor}");
            if (el) {{
                const obs = new IntersectionObserver((entries) => {{
                    for (const entry of entries) {{
                        if (entry.isIntersecting) {{
                            dioxus.send(true);
                            obs.disconnect();
                            return;
                        }}
                    }}
                }}, {{ rootMargin: "-10% 0% -10% 0%" }});
                obs.observe(el);
            }}"#,
            anchor = section.anchor(),
        );
        spawn(async move {
            let mut bridge = document::eval(&js);
            if let Ok(true) = bridge.recv::<bool>().await {
                revealed.set(true);
            }
        });
    });

    let state = if revealed() { "reveal revealed" } else { "reveal" };

    rsx! {
        section { id: "{section.anchor()}", class: "{state} section-{section.anchor()}",
            {children}
        }
    }
}
