use leptos::prelude::*;

use crate::content::{EducationEntry, ExperienceEntry, HonorEntry, Portfolio, Project, SkillCategory};
use crate::sections::Section;
use crate::variant::Theme;

#[component]
pub fn SectionFrame(section: Section, theme: &'static Theme, children: Children) -> impl IntoView {
    view! {
        <section id=section.anchor() class="mb-10 scroll-mt-20">
            <h2 class=theme.heading>{section.title()}</h2>
            {children()}
        </section>
    }
}

/// Renders one content section. Returns `None` for [`Section::Contact`],
/// which needs page state and is rendered by the caller.
pub fn static_section(portfolio: &Portfolio, section: Section, theme: &'static Theme) -> Option<AnyView> {
    let body = match section {
        Section::About => view! { <About summary=portfolio.profile.summary.clone() theme /> }.into_any(),
        Section::Projects => view! { <Projects projects=portfolio.projects.clone() theme /> }.into_any(),
        Section::Experience => {
            view! { <Experience entries=portfolio.experience.clone() theme /> }.into_any()
        }
        Section::Skills => view! { <Skills categories=portfolio.skills.clone() /> }.into_any(),
        Section::Education => {
            view! { <Education entries=portfolio.education.clone() theme /> }.into_any()
        }
        Section::Honors => view! { <Honors honors=portfolio.honors.clone() /> }.into_any(),
        Section::Contact => return None,
    };
    Some(
        view! {
            <SectionFrame section theme>
                {body}
            </SectionFrame>
        }
        .into_any(),
    )
}

#[component]
fn About(summary: String, theme: &'static Theme) -> impl IntoView {
    view! {
        <div class=theme.panel>
            <p class="leading-relaxed">{summary}</p>
        </div>
    }
}

#[component]
fn Projects(projects: Vec<Project>, theme: &'static Theme) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {projects
                .into_iter()
                .map(|p| {
                    view! {
                        <div>
                            <div class="font-bold text-lg mb-1">{p.name}</div>
                            <div class=format!("{} mb-2", theme.muted)>{p.description}</div>
                            <BulletList items=p.bullets />
                            <a
                                href=p.link
                                class=format!("{} text-sm", theme.link)
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "View on GitHub →"
                            </a>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Experience(entries: Vec<ExperienceEntry>, theme: &'static Theme) -> impl IntoView {
    view! {
        <div>
            {entries
                .into_iter()
                .map(|e| {
                    view! {
                        <div class="mb-6">
                            <div class="font-bold text-lg">{e.role}</div>
                            <div class=format!("{} text-sm mb-2", theme.muted)>
                                {format!("{} • {}", e.organization, e.time)}
                            </div>
                            <BulletList items=e.bullets />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Skills(categories: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
            {categories
                .into_iter()
                .map(|c| {
                    view! {
                        <div>
                            <span class="font-semibold">{format!("{}:", c.name)}</span>
                            <span class="ml-2">{c.skills.join(", ")}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Education(entries: Vec<EducationEntry>, theme: &'static Theme) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {entries
                .into_iter()
                .map(|e| {
                    let coursework = (!e.coursework.is_empty())
                        .then(|| {
                            view! {
                                <div class="mt-1">
                                    {format!("Relevant coursework: {}", e.coursework.join(", "))}
                                </div>
                            }
                        });
                    view! {
                        <div>
                            <div class="font-bold">{e.degree}</div>
                            <div class=theme.muted>{format!("{} • {}", e.institution, e.time)}</div>
                            {coursework}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Honors(honors: Vec<HonorEntry>) -> impl IntoView {
    let items = honors.into_iter().map(|h| h.text).collect::<Vec<_>>();
    view! { <BulletList items /> }
}

#[component]
fn BulletList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="ml-6 list-disc space-y-1 mb-2">
            {items.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
        </ul>
    }
}
