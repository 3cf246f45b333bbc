//! Static page content: featured projects, skills and quick stats.

use serde::Serialize;

use crate::locale::{LocaleDictionary, TextKey};

pub const GITHUB_PROFILE: &str = "https://github.com/your-user";
pub const GITHUB_REPOSITORIES: &str = "https://github.com/your-user?tab=repositories";
pub const LINKEDIN_PROFILE: &str = "https://www.linkedin.com/in/your-profile";
pub const CONTACT_EMAIL: &str = "mailto:hello@efebulbul.com";
pub const CV_PATH: &str = "/CV_Efe_Bulbul.pdf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    /// Translated per language at render time
    pub description: TextKey,
    pub badges: Vec<&'static str>,
    pub links: Vec<ProjectLink>,
    /// Label shown on the placeholder screenshot
    pub preview: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100
    pub level: u8,
}

/// Text that is either fixed or looked up in the active dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatText {
    Literal(&'static str),
    Text(TextKey),
}

impl StatText {
    pub fn resolve(self, dictionary: &LocaleDictionary) -> &'static str {
        match self {
            StatText::Literal(text) => text,
            StatText::Text(key) => dictionary.get(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStat {
    pub emoji: &'static str,
    pub label: StatText,
    pub value: StatText,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Taskly — To‑Do (iOS)",
            description: TextKey::PTaskly,
            badges: vec!["Swift", "UIKit", "Local Notifications", "Dark/Light"],
            links: vec![
                ProjectLink {
                    label: "GitHub",
                    href: "https://github.com/your-user/taskly",
                },
                ProjectLink {
                    label: "App Store",
                    href: "https://apps.apple.com/",
                },
            ],
            preview: "Taskly",
        },
        Project {
            title: "MapKit Demo",
            description: TextKey::PMapkit,
            badges: vec!["Swift", "MapKit", "CoreLocation"],
            links: vec![ProjectLink {
                label: "GitHub",
                href: "https://github.com/your-user/mapkit-demo",
            }],
            preview: "MapKit",
        },
        Project {
            title: "ItemsViewController",
            description: TextKey::PItems,
            badges: vec!["UIKit", "MVC", "TableView"],
            links: vec![ProjectLink {
                label: "GitHub",
                href: "https://github.com/your-user/items-vc",
            }],
            preview: "ItemsVC",
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill { name: "Swift", level: 90 },
        Skill { name: "UIKit", level: 85 },
        Skill { name: "SwiftUI", level: 70 },
        Skill { name: "MapKit", level: 75 },
        Skill { name: "CoreData", level: 65 },
        Skill { name: "Git / GitHub", level: 80 },
    ]
}

pub fn quick_stats() -> Vec<QuickStat> {
    vec![
        QuickStat {
            emoji: "📱",
            label: StatText::Text(TextKey::StatApps),
            value: StatText::Literal("6+"),
        },
        QuickStat {
            emoji: "💼",
            label: StatText::Text(TextKey::StatIntern),
            value: StatText::Text(TextKey::StatInternVal),
        },
        QuickStat {
            emoji: "⚙️",
            label: StatText::Literal("Swift / UIKit / SwiftUI"),
            value: StatText::Text(TextKey::StatExperienceVal),
        },
        QuickStat {
            emoji: "🎯",
            label: StatText::Text(TextKey::StatGoal),
            value: StatText::Text(TextKey::StatGoalVal),
        },
    ]
}
