use dioxus::prelude::*;
use portfolio_types::{active_dictionary, Lang, Project, QuickStat, Skill};

// ============================================================================
// Cards
// ============================================================================

#[component]
pub fn StatCard(stat: QuickStat, lang: Lang) -> Element {
    let t = active_dictionary(lang);
    let label = stat.label.resolve(t);
    let value = stat.value.resolve(t);

    rsx! {
        div {
            class: "stat-card rounded-2xl border border-slate-200 dark:border-white/10 p-4 bg-slate-50/70 dark:bg-white/[0.03]",
            div { class: "text-2xl mb-1", "{stat.emoji}" }
            div { class: "text-sm text-slate-500 dark:text-slate-400", "{label}" }
            div { class: "text-lg font-semibold", "{value}" }
        }
    }
}

#[component]
pub fn ProjectCard(project: Project, lang: Lang) -> Element {
    let description = active_dictionary(lang).get(project.description);

    rsx! {
        article {
            class: "project-card group rounded-3xl overflow-hidden border border-slate-200 dark:border-white/10 bg-white dark:bg-white/[0.03] shadow-sm",
            div {
                class: "aspect-[4/3] bg-slate-100 dark:bg-white/[0.06] relative",
                PlaceholderShot { label: project.preview }
            }
            div {
                class: "p-5",
                h3 { class: "font-semibold text-lg tracking-tight mb-1", "{project.title}" }
                p { class: "text-sm text-slate-600 dark:text-slate-300 line-clamp-3", "{description}" }
                div {
                    class: "mt-3 flex flex-wrap gap-2",
                    for badge in project.badges.iter() {
                        span {
                            key: "{badge}",
                            class: "badge px-2.5 py-1 rounded-xl text-xs bg-slate-50 dark:bg-white/[0.06] border border-slate-200 dark:border-white/10",
                            "{badge}"
                        }
                    }
                }
                div {
                    class: "mt-4 flex gap-3",
                    for link in project.links.iter() {
                        a {
                            key: "{link.href}",
                            class: "text-sm font-medium hover:underline",
                            style: "color: var(--accent);",
                            href: link.href,
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillBar(skill: Skill) -> Element {
    let level = skill.level.min(100);

    rsx! {
        div {
            class: "skill rounded-2xl border border-slate-200 dark:border-white/10 p-5 bg-slate-50/70 dark:bg-white/[0.03]",
            div {
                class: "flex items-center justify-between mb-2",
                span { class: "font-medium", "{skill.name}" }
                span { class: "text-sm text-slate-500 dark:text-slate-400", "{level}%" }
            }
            div {
                class: "h-2 w-full rounded-full bg-slate-200 dark:bg-white/10",
                div {
                    class: "h-2 rounded-full",
                    style: "width: {level}%; background-color: var(--accent);",
                }
            }
        }
    }
}

// ============================================================================
// Artwork
// ============================================================================

#[component]
pub fn PlaceholderShot(label: &'static str) -> Element {
    rsx! {
        div {
            class: "absolute inset-0 grid place-items-center",
            div {
                class: "w-[85%] h-[80%] rounded-2xl bg-gradient-to-br from-slate-200 to-slate-100 dark:from-white/10 dark:to-white/5 border border-slate-300/70 dark:border-white/10 flex items-center justify-center",
                span { class: "text-sm font-medium text-slate-600 dark:text-slate-200", "{label} Screenshot" }
            }
        }
    }
}

#[component]
pub fn Logo() -> Element {
    rsx! {
        div {
            class: "logo w-10 h-10 rounded-2xl grid place-items-center shadow-sm border border-slate-200 dark:border-white/10 bg-white dark:bg-white/5",
            svg {
                width: "22",
                height: "22",
                view_box: "0 0 64 64",
                fill: "none",
                "xmlns": "http://www.w3.org/2000/svg",
                rect { x: "4", y: "4", width: "56", height: "56", rx: "12", fill: "url(#eb-gradient)" }
                path {
                    d: "M18 20h18c5 0 9 4 9 9s-4 9-9 9H18V20zm0 22h20c4 0 8 3 8 8H18v-8z",
                    fill: "white",
                }
                defs {
                    linearGradient {
                        id: "eb-gradient",
                        "x1": "4",
                        "y1": "4",
                        "x2": "60",
                        "y2": "60",
                        "gradientUnits": "userSpaceOnUse",
                        stop { "stop-color": "#602A80" }
                        stop { "offset": "1", "stop-color": "#A46BD1" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ShowcasePhone() -> Element {
    rsx! {
        div {
            class: "relative mx-auto w-full max-w-sm",
            div {
                class: "rounded-[2.5rem] border border-slate-200 dark:border-white/10 p-3 bg-slate-50 dark:bg-white/[0.03] shadow-lg",
                div {
                    class: "rounded-[2rem] overflow-hidden bg-black aspect-[9/19.5]",
                    div {
                        class: "h-full w-full flex flex-col",
                        div { class: "h-10", style: "background-color: var(--accent);" }
                        div {
                            class: "flex-1 grid place-items-center text-white/90 text-sm",
                            div {
                                class: "text-center",
                                div { class: "text-3xl font-bold", "Taskly" }
                                div { class: "mt-2 opacity-80", "Demo Preview" }
                            }
                        }
                        div { class: "h-16 bg-slate-900/90" }
                    }
                }
            }
            div {
                class: "absolute inset-0 -z-10 blur-2xl opacity-30",
                style: "background: radial-gradient(600px circle at 50% 0, #602A80, transparent 40%);",
            }
        }
    }
}
