//! UI Components for the portfolio page.
//!
//! Content sections, fixed chrome, and the ambient sky effects.

mod about;
mod achievements;
mod contact;
mod cursor_trail;
mod experience;
mod hero;
mod icons;
mod mobile_menu;
mod nav_bar;
mod night_sky;
mod projects;
mod reveal;
mod scroll_progress;
mod skills;

pub use about::About;
pub use achievements::Achievements;
pub use contact::Contact;
pub use cursor_trail::CursorTrail;
pub use experience::Experience;
pub use hero::Hero;
pub use icons::Icon;
pub use mobile_menu::MobileMenu;
pub use nav_bar::NavBar;
pub use night_sky::NightSky;
pub use projects::Projects;
pub use reveal::Reveal;
pub use scroll_progress::ScrollProgress;
pub use skills::Skills;
