//! Bilingual text dictionaries (Turkish default, English)

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Supported page languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Tr,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
        }
    }

    /// Label shown on the language toggle button.
    pub fn badge(self) -> &'static str {
        match self {
            Lang::Tr => "TR",
            Lang::En => "EN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "tr" | "tr-tr" => Some(Lang::Tr),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Tr => Lang::En,
            Lang::En => Lang::Tr,
        }
    }
}

/// Semantic keys for every piece of translated copy on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKey {
    TitleTop,
    NavProjects,
    NavSkills,
    NavContact,
    HeroH1Line1,
    HeroH1Line2,
    HeroP,
    CtaProjects,
    Projects,
    AllOnGithub,
    PTaskly,
    PMapkit,
    PItems,
    StatApps,
    StatIntern,
    StatInternVal,
    StatExperienceVal,
    StatGoal,
    StatGoalVal,
    Skills,
    ContactTitle,
    ContactDesc,
    ContactBtnEmail,
    ContactBtnCv,
    FooterNote,
}

impl TextKey {
    pub const ALL: [TextKey; 25] = [
        TextKey::TitleTop,
        TextKey::NavProjects,
        TextKey::NavSkills,
        TextKey::NavContact,
        TextKey::HeroH1Line1,
        TextKey::HeroH1Line2,
        TextKey::HeroP,
        TextKey::CtaProjects,
        TextKey::Projects,
        TextKey::AllOnGithub,
        TextKey::PTaskly,
        TextKey::PMapkit,
        TextKey::PItems,
        TextKey::StatApps,
        TextKey::StatIntern,
        TextKey::StatInternVal,
        TextKey::StatExperienceVal,
        TextKey::StatGoal,
        TextKey::StatGoalVal,
        TextKey::Skills,
        TextKey::ContactTitle,
        TextKey::ContactDesc,
        TextKey::ContactBtnEmail,
        TextKey::ContactBtnCv,
        TextKey::FooterNote,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextKey::TitleTop => "title_top",
            TextKey::NavProjects => "nav_projects",
            TextKey::NavSkills => "nav_skills",
            TextKey::NavContact => "nav_contact",
            TextKey::HeroH1Line1 => "hero_h1_line1",
            TextKey::HeroH1Line2 => "hero_h1_line2",
            TextKey::HeroP => "hero_p",
            TextKey::CtaProjects => "cta_projects",
            TextKey::Projects => "projects",
            TextKey::AllOnGithub => "all_on_github",
            TextKey::PTaskly => "p_taskly",
            TextKey::PMapkit => "p_mapkit",
            TextKey::PItems => "p_items",
            TextKey::StatApps => "stat_apps",
            TextKey::StatIntern => "stat_intern",
            TextKey::StatInternVal => "stat_intern_val",
            TextKey::StatExperienceVal => "stat_experience_val",
            TextKey::StatGoal => "stat_goal",
            TextKey::StatGoalVal => "stat_goal_val",
            TextKey::Skills => "skills",
            TextKey::ContactTitle => "contact_title",
            TextKey::ContactDesc => "contact_desc",
            TextKey::ContactBtnEmail => "contact_btn_email",
            TextKey::ContactBtnCv => "contact_btn_cv",
            TextKey::FooterNote => "footer_note",
        }
    }
}

/// Static mapping from [`TextKey`] to display text for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleDictionary {
    lang: Lang,
    entries: BTreeMap<TextKey, &'static str>,
}

impl LocaleDictionary {
    fn build(lang: Lang, text: fn(TextKey) -> &'static str) -> Self {
        Self {
            lang,
            entries: TextKey::ALL.iter().map(|&key| (key, text(key))).collect(),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn get(&self, key: TextKey) -> &'static str {
        self.entries.get(&key).copied().unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = TextKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static TR: Lazy<LocaleDictionary> = Lazy::new(|| LocaleDictionary::build(Lang::Tr, turkish));
static EN: Lazy<LocaleDictionary> = Lazy::new(|| LocaleDictionary::build(Lang::En, english));

pub fn active_dictionary(lang: Lang) -> &'static LocaleDictionary {
    match lang {
        Lang::Tr => &*TR,
        Lang::En => &*EN,
    }
}

/// Language is never persisted; this only flips the in-page selection.
pub fn toggle_lang(current: Lang) -> Lang {
    current.toggled()
}

fn turkish(key: TextKey) -> &'static str {
    match key {
        TextKey::TitleTop => "iOS Geliştirici",
        TextKey::NavProjects => "Projeler",
        TextKey::NavSkills => "Yetenekler",
        TextKey::NavContact => "İletişim",
        TextKey::HeroH1Line1 => "Profesyonel",
        TextKey::HeroH1Line2 => "projelerle portföy",
        TextKey::HeroP => "Swift, UIKit ve SwiftUI ile ürettiğim iOS uygulamalarımı burada sergiliyorum. Minimal, performanslı ve kullanıcı odaklı tasarım ilkeleriyle geliştiriyorum.",
        TextKey::CtaProjects => "Projeleri gör",
        TextKey::Projects => "Öne Çıkan Projeler",
        TextKey::AllOnGithub => "GitHub’da tümü ↗",
        TextKey::PTaskly => "Kategori/etiket desteği, bildirim planlama ve offline veri yönetimi olan günlük görev uygulaması.",
        TextKey::PMapkit => "Kullanıcının konumunu alan, pin ekleyen ve rota çizen MapKit demosu.",
        TextKey::PItems => "TableView tabanlı liste, detay görünümü ve kalıcı depolama mantığını örnekleyen MVC proje.",
        TextKey::StatApps => "Yayınlanan uygulama",
        TextKey::StatIntern => "Staj deneyimi",
        TextKey::StatInternVal => "iOS stajyeri",
        TextKey::StatExperienceVal => "2+ yıl",
        TextKey::StatGoal => "Hedef",
        TextKey::StatGoalVal => "Junior iOS",
        TextKey::Skills => "Yetenekler",
        TextKey::ContactTitle => "Projeleriniz için iletişime geçin",
        TextKey::ContactDesc => "Yeni uygulama fikirleri, freelance işler veya staj/iş fırsatları için mail atabilirsiniz.",
        TextKey::ContactBtnEmail => "E-posta Gönder",
        TextKey::ContactBtnCv => "CV’yi İndir",
        TextKey::FooterNote => "Arayüz Türkçe, açık/koyu mod ve marka moru (#602A80) desteklenir.",
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::TitleTop => "iOS Developer",
        TextKey::NavProjects => "Projects",
        TextKey::NavSkills => "Skills",
        TextKey::NavContact => "Contact",
        TextKey::HeroH1Line1 => "Professional",
        TextKey::HeroH1Line2 => "portfolio with projects",
        TextKey::HeroP => "I showcase my iOS apps built with Swift, UIKit and SwiftUI. Minimal, performant, and user‑centric design.",
        TextKey::CtaProjects => "View projects",
        TextKey::Projects => "Featured Projects",
        TextKey::AllOnGithub => "All on GitHub ↗",
        TextKey::PTaskly => "Daily tasks app with categories/tags, scheduled notifications, and offline persistence.",
        TextKey::PMapkit => "MapKit demo with user location, pins, and routing.",
        TextKey::PItems => "MVC sample with TableView list, detail screen, and persistence.",
        TextKey::StatApps => "Published apps",
        TextKey::StatIntern => "Internship",
        TextKey::StatInternVal => "iOS intern",
        TextKey::StatExperienceVal => "2+ years",
        TextKey::StatGoal => "Goal",
        TextKey::StatGoalVal => "Junior iOS",
        TextKey::Skills => "Skills",
        TextKey::ContactTitle => "Let’s work together",
        TextKey::ContactDesc => "For new app ideas, freelance work, or internship/job opportunities, drop me an email.",
        TextKey::ContactBtnEmail => "Send Email",
        TextKey::ContactBtnCv => "Download CV",
        TextKey::FooterNote => "Turkish/English UI, dark/light theme, and brand purple (#602A80) supported.",
    }
}
