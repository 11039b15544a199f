use crate::components::{Badge, BadgeList, BadgeVariant, Card, Glyph, PageHero};
use dioxus::prelude::*;
use folio_catalog::ProjectSelection;
use folio_domain::constants::ALL_FILTER;
use folio_domain::content::{Domain, Icon, Project};
use folio_domain::route::Route;

/// Link that applies `label`. Labels contain no reserved query characters.
fn filter_href(label: &str) -> String {
    if label == ALL_FILTER {
        Route::Projects.path().to_owned()
    } else {
        format!("{}?domain={label}", Route::Projects.path())
    }
}

#[component]
pub fn ProjectsPage(selection: ProjectSelection<'static>) -> Element {
    rsx! {
        PageHero {
            badge: "Projects",
            title: "Selected Work",
            lead: "A collection of projects showcasing my expertise in backend development, system design, and distributed architectures.",
        }

        section { class: "section-filter",
            div { class: "container filter-bar",
                for label in Domain::filter_labels() {
                    FilterButton { label, active: selection.is_active(label) }
                }
            }
        }

        if selection.shows_featured_heading() {
            section { class: "section-tail",
                div { class: "container",
                    div { class: "list-heading",
                        Glyph { icon: Icon::Star }
                        h2 { "Featured" }
                    }
                    div { class: "grid grid-2",
                        for project in selection.featured.iter().copied() {
                            ProjectCard { project, featured: true }
                        }
                    }
                }
            }
        }

        section { class: "section-tail",
            div { class: "container",
                if selection.shows_more_heading() {
                    h2 { class: "list-heading", "More Projects" }
                }
                div { class: "grid grid-3",
                    for project in selection.others.iter().copied() {
                        ProjectCard { project, featured: false }
                    }
                }
                if selection.is_empty() {
                    p { class: "muted empty", "No projects found in this category." }
                }
            }
        }
    }
}

#[component]
fn FilterButton(label: &'static str, active: bool) -> Element {
    let class = if active { "button button-small button-accent active" } else { "button button-small button-outline" };
    let aria_pressed = if active { "true" } else { "false" };

    rsx! {
        a { class, href: filter_href(label), "aria-pressed": aria_pressed, "{label}" }
    }
}

#[component]
fn ProjectCard(project: &'static Project, featured: bool) -> Element {
    let class = if featured { "project featured" } else { "project" };

    rsx! {
        Card { class,
            div { class: "project-top",
                Badge { variant: BadgeVariant::Outline, {project.domain.label()} }
                div { class: "project-links",
                    if let Some(github) = project.github {
                        a { href: github, target: "_blank", rel: "noopener noreferrer", "aria-label": "GitHub",
                            Glyph { icon: Icon::Github }
                        }
                    }
                    if let Some(demo) = project.demo {
                        a { href: demo, target: "_blank", rel: "noopener noreferrer", "aria-label": "Live demo",
                            Glyph { icon: Icon::ExternalLink }
                        }
                    }
                }
            }
            h3 { {project.title} }
            p { class: "muted small grow", {project.description} }
            p { class: "accent small role", "Role: " {project.role} }
            BadgeList { items: project.tech }
        }
    }
}
