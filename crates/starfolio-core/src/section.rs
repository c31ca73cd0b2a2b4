//! Page sections and anchor navigation.
//!
//! The page is a single scroll column; navigation is "scroll to anchor".
//! Resolving an unknown anchor yields `None` and callers treat that as a
//! silent no-op, never an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One block of the portfolio page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Achievements,
    Contact,
}

impl Section {
    /// All sections, in the order they appear on the page
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Achievements,
        Section::Contact,
    ];

    /// The sections the navigation bar links to
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id this section is anchored under
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    /// Display label used for navigation links
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Achievements => "Achievements",
            Section::Contact => "Contact",
        }
    }

    /// Resolve an anchor id back to its section.
    ///
    /// Unknown anchors resolve to `None`; navigation treats that as a no-op.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
    }

    #[test]
    fn unknown_anchor_is_none() {
        assert_eq!(Section::from_anchor("blog"), None);
        assert_eq!(Section::from_anchor(""), None);
        // Anchors are case-sensitive DOM ids
        assert_eq!(Section::from_anchor("About"), None);
    }

    #[test]
    fn nav_excludes_hero_and_achievements() {
        assert!(!Section::NAV.contains(&Section::Hero));
        assert!(!Section::NAV.contains(&Section::Achievements));
        assert_eq!(Section::NAV.len(), 5);
    }

    #[test]
    fn anchors_are_unique() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }
}
