use crate::components::{
    Badge, BadgeList, BadgeVariant, ButtonLink, ButtonVariant, Card, Glyph, SectionHeading,
};
use dioxus::prelude::*;
use folio_domain::content::{Icon, SiteContent};
use folio_domain::route::Route;

#[component]
pub fn HomePage(content: &'static SiteContent) -> Element {
    rsx! {
        section { class: "section hero hero-home",
            div { class: "container narrow centered",
                Badge { "Open to opportunities" }
                h1 { class: "hero-title",
                    "Senior Software"
                    span { class: "accent", " Engineer" }
                }
                p { class: "lead",
                    "I build robust backend systems, APIs, and scalable architectures. Passionate about clean code, performance optimization, and solving complex engineering challenges."
                }
                div { class: "actions",
                    ButtonLink { href: Route::Projects.path(),
                        "View Projects"
                        Glyph { icon: Icon::ArrowRight }
                    }
                    ButtonLink { href: Route::Contact.path(), variant: ButtonVariant::Outline, "Contact Me" }
                }
            }
        }

        section { class: "section tinted",
            div { class: "container grid grid-4",
                for item in content.highlights.iter() {
                    Card { class: "highlight",
                        div { class: "icon-tile", Glyph { icon: item.icon } }
                        h3 { {item.title} }
                        p { class: "muted small", {item.description} }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Featured Projects",
                    subtitle: "A selection of projects that showcase my expertise in backend development and system design.",
                }
                div { class: "grid grid-3",
                    for project in content.featured_projects() {
                        Card { class: "project-teaser",
                            h3 { {project.title} }
                            p { class: "muted small grow", {project.summary} }
                            BadgeList { items: project.tech }
                            a { class: "text-link", href: Route::Projects.path(),
                                "Learn more"
                                Glyph { icon: Icon::ArrowRight }
                            }
                        }
                    }
                }
                div { class: "actions centered",
                    ButtonLink { href: Route::Projects.path(), variant: ButtonVariant::Outline,
                        "View All Projects"
                        Glyph { icon: Icon::ArrowRight }
                    }
                }
            }
        }

        section { class: "section tinted",
            div { class: "container",
                SectionHeading {
                    title: "Tech Snapshot",
                    subtitle: "My primary technology stack for building reliable, scalable systems.",
                }
                div { class: "grid grid-4",
                    for group in content.tech_snapshot.iter() {
                        Card {
                            h3 { class: "eyebrow", {group.title} }
                            BadgeList { items: group.items, variant: BadgeVariant::Secondary }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                Card { class: "cta",
                    h2 { "Interested in working together?" }
                    p { class: "muted",
                        "I'm currently open to new opportunities. Whether you have a project in mind or just want to connect, feel free to reach out."
                    }
                    ButtonLink { href: Route::Contact.path(),
                        "Get In Touch"
                        Glyph { icon: Icon::ArrowRight }
                    }
                }
            }
        }
    }
}
