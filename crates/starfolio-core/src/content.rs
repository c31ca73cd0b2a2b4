//! Portfolio content model.
//!
//! All copy on the page lives here as plain data; presentation components
//! only decide how to lay it out. The content is compiled in, with no
//! content database and nothing fetched or persisted.

use serde::{Deserialize, Serialize};

/// Named glyph a content block displays.
///
/// Content refers to icons by name; the rendering layer owns the actual
/// SVG paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKind {
    Mail,
    Phone,
    Linkedin,
    Download,
    ExternalLink,
    Code,
    Smartphone,
    Database,
    Moon,
    Sun,
    Award,
    TrendingUp,
    Users,
    Clock,
    ArrowDown,
    Menu,
    Close,
}

/// One headline statistic shown in the about section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: IconKind,
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(icon: IconKind, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon,
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A cluster of related skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub icon: IconKind,
    pub title: String,
    pub summary: String,
}

impl SkillGroup {
    pub fn new(icon: IconKind, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            summary: summary.into(),
        }
    }
}

/// One entry of the work history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub title: String,
    pub company: String,
    pub summary: String,
}

impl RoleEntry {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            summary: summary.into(),
        }
    }
}

/// A shipped project with its store listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub summary: String,
    /// Opaque destination URL; the page never negotiates with it
    pub store_url: String,
}

impl ProjectEntry {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        store_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            store_url: store_url.into(),
        }
    }
}

/// A recognition worth showing off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub summary: String,
}

impl Achievement {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}

/// Ways to get in touch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
}

impl ContactInfo {
    /// mailto: link for the email address
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// tel: link for the phone number
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// Everything the page says about its person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileContent {
    /// Full display name
    pub name: String,
    /// Short monogram used as the navigation brand
    pub initials: String,
    /// Availability badge text in the hero
    pub availability: String,
    /// Role words the hero cycles through
    pub rotating_roles: Vec<String>,
    /// About-section blurb
    pub about: String,
    /// Headline statistics
    pub stats: Vec<Stat>,
    /// Skill clusters
    pub skills: Vec<SkillGroup>,
    /// Work history, most recent first
    pub experience: Vec<RoleEntry>,
    /// Shipped projects
    pub projects: Vec<ProjectEntry>,
    /// Recognitions
    pub achievements: Vec<Achievement>,
    /// Contact channels
    pub contact: ContactInfo,
}

impl ProfileContent {
    /// The canonical compiled-in profile.
    pub fn standard() -> Self {
        Self {
            name: "Mahesh Babu Kethineni".to_string(),
            initials: "MBK".to_string(),
            availability: "Immediate Joiner".to_string(),
            rotating_roles: vec![
                "Frontend Developer".to_string(),
                "React Specialist".to_string(),
                "Mobile App Developer".to_string(),
                "UI/UX Enthusiast".to_string(),
            ],
            about: "Passionate Frontend & Mobile Developer with 3+ years of experience \
                    building high-performance, user-centric applications using React, \
                    React Native, and modern web technologies in the insurance domain."
                .to_string(),
            stats: vec![
                Stat::new(IconKind::Clock, "3+", "Years Experience"),
                Stat::new(IconKind::Smartphone, "2+", "Live Apps"),
                Stat::new(IconKind::TrendingUp, "40%", "Performance Boost"),
                Stat::new(IconKind::Users, "25%", "User Retention"),
            ],
            skills: vec![
                SkillGroup::new(IconKind::Code, "Frontend", "React, Angular, Next.js, Tailwind"),
                SkillGroup::new(
                    IconKind::Smartphone,
                    "Mobile",
                    "React Native, Ionic, Capacitor",
                ),
                SkillGroup::new(
                    IconKind::Database,
                    "State & Data",
                    "Redux, RTK Query, Realm, Strapi",
                ),
            ],
            experience: vec![
                RoleEntry::new(
                    "Member of Technical Staff",
                    "Kshema General Insurance",
                    "Building scalable React Native & Web applications, improving \
                     performance, modularizing legacy code, and integrating analytics.",
                ),
                RoleEntry::new(
                    "Trainee Executive",
                    "Itus Insurance Brokers Pvt. Ltd",
                    "Developed responsive UI components for multi-device compatibility \
                     across mobile and web platforms.",
                ),
            ],
            projects: vec![
                ProjectEntry::new(
                    "Kshema App",
                    "Ionic + Angular Insurance App",
                    "https://play.google.com/store/apps/details?id=app.iagri&hl=en_IN",
                ),
                ProjectEntry::new(
                    "Kshema 2.0",
                    "React Native flagship mobile app",
                    "https://play.google.com/store/apps/details?id=app.iagri&hl=en_IN",
                ),
                ProjectEntry::new(
                    "Kshema Field Assist",
                    "Field service management app",
                    "https://play.google.com/store/apps/details?id=com.kshemafieldassist&hl=en_IN",
                ),
                ProjectEntry::new(
                    "Smart CCE",
                    "Offline-first APP",
                    "https://play.google.com/store/apps/details?id=cce.omdc&hl=en_IN",
                ),
            ],
            achievements: vec![Achievement::new(
                "Certificate of Appreciation – August 2024 for outstanding performance \
                 and delivery excellence.",
            )],
            contact: ContactInfo {
                email: "maheshbabukethineni@gmail.com".to_string(),
                phone: "+91720792059".to_string(),
                linkedin_url: "https://www.linkedin.com/in/mahesh-babu-kethineni-3a40a7221/"
                    .to_string(),
            },
        }
    }

    /// Window title for the desktop shell
    pub fn window_title(&self) -> String {
        format!("{} - Portfolio", self.name)
    }
}
