use crate::components::{BadgeList, BadgeVariant, Card, Glyph, PageHero, SectionHeading};
use dioxus::prelude::*;
use folio_domain::content::SiteContent;

const INTRODUCTION: [&str; 3] = [
    "I'm a Senior Software Engineer with a passion for building robust backend systems and APIs. Over the past 8+ years, I've worked across various domains, from fintech to e-commerce to AI, always focusing on delivering high-quality, maintainable solutions.",
    "My journey in software engineering started with a curiosity about how systems work at scale. Today, I specialize in designing and implementing distributed architectures that handle millions of requests while maintaining reliability and performance.",
    "I thrive in environments where I can solve complex technical problems, mentor team members, and contribute to architectural decisions. Whether it's optimizing a critical database query or designing a new microservice from scratch, I bring the same level of dedication and attention to detail.",
];

#[component]
pub fn AboutPage(content: &'static SiteContent) -> Element {
    rsx! {
        PageHero { badge: "About Me", title: "Building reliable software for over 8 years" }

        section { class: "section-tail",
            div { class: "container grid grid-2",
                div { class: "prose",
                    for paragraph in INTRODUCTION {
                        p { "{paragraph}" }
                    }
                }
                Card {
                    h3 { "Quick Facts" }
                    ul { class: "fact-list",
                        for fact in content.quick_facts.iter() {
                            li {
                                span { class: "accent", "→" }
                                span { "{fact}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section tinted",
            div { class: "container",
                SectionHeading {
                    title: "What I Do",
                    subtitle: "My approach to software engineering combines technical excellence with practical problem-solving.",
                }
                div { class: "grid grid-2",
                    for item in content.work_approach.iter() {
                        Card { class: "approach",
                            div { class: "icon-tile", Glyph { icon: item.icon } }
                            div {
                                h3 { {item.title} }
                                p { class: "muted small", {item.description} }
                            }
                        }
                    }
                }
            }
        }

        section { class: "section",
            div { class: "container grid grid-2",
                div {
                    h2 { "Focus Areas" }
                    p { class: "muted",
                        "These are the domains where I have deep expertise and continue to invest my learning efforts."
                    }
                    BadgeList { items: content.focus_areas }
                }
                div {
                    h2 { "Values & Practices" }
                    p { class: "muted",
                        "Principles that guide my work and help me deliver quality software consistently."
                    }
                    BadgeList { items: content.values, variant: BadgeVariant::Secondary }
                }
            }
        }
    }
}
