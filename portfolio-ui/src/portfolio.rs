//! Portfolio page - single page with header, hero, stats, projects, skills
//! and contact sections.
//!
//! Theme state is a `ThemeSession` owned by the page signal; language is a
//! plain `Lang` signal and is never persisted.

pub mod theme;

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_types::content::{
    CONTACT_EMAIL, CV_PATH, GITHUB_PROFILE, GITHUB_REPOSITORIES, LINKEDIN_PROFILE,
};
use portfolio_types::{
    active_dictionary, projects, quick_stats, skills, toggle_lang, Lang, Project, TextKey,
    ThemeValue, BRAND_ACCENT, SECTION_CONTACT, SECTION_PROJECTS, SECTION_SKILLS,
};

use crate::components::{Logo, ProjectCard, ShowcasePhone, SkillBar, StatCard};
use crate::portfolio::theme::start_page_session;

// ============================================================================
// Portfolio Component - Page Root
// ============================================================================

#[component]
pub fn Portfolio() -> Element {
    let mut theme_session = use_signal(start_page_session);
    let mut lang = use_signal(Lang::default);

    let toggle_theme = use_callback(move |_| {
        let next = theme_session.write().toggle();
        dioxus_logger::tracing::debug!("Theme toggled to {}", next);
    });

    let toggle_language = use_callback(move |_| {
        lang.set(toggle_lang(lang()));
    });

    let theme = theme_session.read().current();
    let lang = lang();

    rsx! {
        style { {BASE_TOKENS} }

        div {
            class: "portfolio min-h-screen font-sans antialiased bg-white text-slate-900 dark:bg-black dark:text-slate-100",
            style: "--accent: {BRAND_ACCENT};",

            Header {
                theme,
                lang,
                on_toggle_theme: toggle_theme,
                on_toggle_lang: toggle_language,
            }

            main {
                class: "mx-auto max-w-6xl px-4 sm:px-6 lg:px-8",
                Hero { lang }
                QuickStats { lang }
                ProjectGrid { lang, projects: projects() }
                Skills { lang }
                Contact { lang }
                Footer {}
            }
        }
    }
}

// ============================================================================
// Header - Navigation and toggles
// ============================================================================

#[component]
fn Header(
    theme: ThemeValue,
    lang: Lang,
    on_toggle_theme: Callback<()>,
    on_toggle_lang: Callback<()>,
) -> Element {
    let t = active_dictionary(lang);
    let title_top = t.get(TextKey::TitleTop);
    let nav_projects = t.get(TextKey::NavProjects);
    let nav_skills = t.get(TextKey::NavSkills);
    let nav_contact = t.get(TextKey::NavContact);
    let lang_badge = lang.badge();
    let theme_icon = theme.next_action_icon();
    let theme_label = theme.next_action_label();

    rsx! {
        header {
            class: "sticky top-0 z-50 backdrop-blur border-b border-slate-200/60 dark:border-white/10",
            div {
                class: "mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                div {
                    class: "flex items-center gap-3",
                    Logo {}
                    div {
                        class: "hidden sm:flex flex-col",
                        span { class: "text-sm text-slate-500 dark:text-slate-400", "{title_top}" }
                        span { class: "text-lg font-semibold tracking-tight", "Efe Bülbül" }
                    }
                }
                nav {
                    class: "flex items-center gap-2",
                    a { class: "nav-link", href: "#{SECTION_PROJECTS}", "{nav_projects}" }
                    a { class: "nav-link", href: "#{SECTION_SKILLS}", "{nav_skills}" }
                    a { class: "nav-link", href: "#{SECTION_CONTACT}", "{nav_contact}" }
                    button {
                        class: "lang-toggle ml-1 px-3 py-2 text-sm rounded-xl border border-slate-200 dark:border-white/10",
                        aria_label: "Toggle language",
                        onclick: move |_| on_toggle_lang.call(()),
                        "{lang_badge}"
                    }
                    button {
                        class: "page-theme-toggle px-3 py-2 rounded-xl border border-slate-200 dark:border-white/10",
                        aria_label: "Toggle theme",
                        aria_pressed: if theme.is_dark() { "true" } else { "false" },
                        title: "{theme_label}",
                        onclick: move |_| on_toggle_theme.call(()),
                        span { class: "theme-icon", "{theme_icon}" }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

#[component]
fn Hero(lang: Lang) -> Element {
    let t = active_dictionary(lang);
    let line1 = t.get(TextKey::HeroH1Line1);
    let line2 = t.get(TextKey::HeroH1Line2);
    let intro = t.get(TextKey::HeroP);
    let cta = t.get(TextKey::CtaProjects);

    rsx! {
        section {
            class: "hero pt-12 pb-8",
            div {
                class: "grid md:grid-cols-2 gap-10 items-center",
                div {
                    h1 {
                        class: "text-3xl sm:text-4xl lg:text-5xl font-bold leading-tight tracking-tight",
                        "{line1} "
                        span { style: "color: var(--accent);", "iOS" }
                        " {line2}"
                    }
                    p { class: "mt-4 text-base sm:text-lg text-slate-600 dark:text-slate-300 max-w-prose", "{intro}" }
                    div {
                        class: "mt-6 flex flex-wrap gap-3",
                        a {
                            class: "cta px-5 py-2.5 rounded-2xl text-white font-medium shadow-sm",
                            style: "background-color: var(--accent);",
                            href: "#{SECTION_PROJECTS}",
                            "{cta}"
                        }
                        a { class: "outline-link", href: GITHUB_PROFILE, "GitHub ↗" }
                        a { class: "outline-link", href: LINKEDIN_PROFILE, "LinkedIn ↗" }
                    }
                }
                div { class: "relative", ShowcasePhone {} }
            }
        }
    }
}

#[component]
fn QuickStats(lang: Lang) -> Element {
    rsx! {
        section {
            class: "quick-stats py-6",
            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-3",
                for (i, stat) in quick_stats().into_iter().enumerate() {
                    StatCard { key: "{i}", stat, lang }
                }
            }
        }
    }
}

#[component]
fn ProjectGrid(lang: Lang, projects: Vec<Project>) -> Element {
    let t = active_dictionary(lang);
    let title = t.get(TextKey::Projects);
    let all_on_github = t.get(TextKey::AllOnGithub);

    rsx! {
        section {
            id: SECTION_PROJECTS,
            class: "py-10",
            div {
                class: "flex items-end justify-between mb-5",
                h2 { class: "text-2xl md:text-3xl font-bold tracking-tight", "{title}" }
                a {
                    class: "text-sm text-slate-600 dark:text-slate-300 hover:underline",
                    href: GITHUB_REPOSITORIES,
                    "{all_on_github}"
                }
            }
            div {
                class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-6",
                for project in projects {
                    ProjectCard { key: "{project.title}", project, lang }
                }
            }
        }
    }
}

#[component]
fn Skills(lang: Lang) -> Element {
    let title = active_dictionary(lang).get(TextKey::Skills);

    rsx! {
        section {
            id: SECTION_SKILLS,
            class: "py-10",
            h2 { class: "text-2xl md:text-3xl font-bold tracking-tight mb-6", "{title}" }
            div {
                class: "grid md:grid-cols-2 gap-5",
                for skill in skills() {
                    SkillBar { key: "{skill.name}", skill }
                }
            }
        }
    }
}

#[component]
fn Contact(lang: Lang) -> Element {
    let t = active_dictionary(lang);
    let title = t.get(TextKey::ContactTitle);
    let description = t.get(TextKey::ContactDesc);
    let email = t.get(TextKey::ContactBtnEmail);
    let cv = t.get(TextKey::ContactBtnCv);
    let note = t.get(TextKey::FooterNote);

    rsx! {
        section {
            id: SECTION_CONTACT,
            class: "py-12",
            div {
                class: "rounded-3xl border border-slate-200 dark:border-white/10 p-6 md:p-8",
                div {
                    class: "flex flex-col md:flex-row md:items-center md:justify-between gap-6",
                    div {
                        h3 { class: "text-xl md:text-2xl font-bold tracking-tight", "{title}" }
                        p { class: "text-slate-600 dark:text-slate-300 mt-1", "{description}" }
                    }
                    div {
                        class: "flex flex-wrap gap-3",
                        a {
                            class: "cta px-5 py-2.5 rounded-2xl text-white font-medium shadow-sm",
                            style: "background-color: var(--accent);",
                            href: CONTACT_EMAIL,
                            "{email}"
                        }
                        a { class: "outline-link", href: CV_PATH, "{cv}" }
                    }
                }
            }
            p { class: "text-center text-xs text-slate-500 dark:text-slate-400 mt-3", "{note}" }
        }
    }
}

#[component]
fn Footer() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer {
            class: "py-8 text-center text-xs text-slate-500 dark:text-slate-400",
            "© {year} Efe Bülbül — efebulbul.com"
        }
    }
}

// ============================================================================
// Base tokens
// ============================================================================

const BASE_TOKENS: &str = r#"
:root {
    --bg-primary: #000000;
    --text-primary: #f1f5f9;
    --text-secondary: #94a3b8;
    --border-color: rgba(255, 255, 255, 0.1);
}

:root[data-theme="light"] {
    --bg-primary: #ffffff;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --border-color: #e2e8f0;
}

body {
    margin: 0;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.nav-link {
    padding: 0.5rem 0.75rem;
    border-radius: 0.75rem;
    font-size: 0.875rem;
    color: inherit;
    text-decoration: none;
}

.outline-link {
    padding: 0.625rem 1.25rem;
    border-radius: 1rem;
    border: 1px solid var(--border-color);
    font-weight: 500;
    color: inherit;
    text-decoration: none;
}
"#;
