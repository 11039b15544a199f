use crate::components::{BadgeList, Card, Glyph, PageHero, SectionHeading};
use dioxus::prelude::*;
use folio_domain::content::{ExperienceItem, Icon, SiteContent};

#[component]
pub fn ExperiencePage(content: &'static SiteContent) -> Element {
    let study = &content.case_study;

    rsx! {
        PageHero {
            badge: "Experience",
            title: "Professional Background",
            lead: "A track record of delivering impactful solutions across fintech, data processing, and enterprise platforms.",
        }

        section { class: "section-tail",
            div { class: "container timeline",
                for job in content.experience.iter() {
                    Job { job }
                }
            }
        }

        section { class: "section tinted",
            div { class: "container",
                SectionHeading {
                    title: "Featured Case Study",
                    subtitle: "A detailed look at one of my most impactful projects.",
                }
                Card { class: "case-study",
                    h3 {
                        {study.title}
                        Glyph { icon: Icon::ExternalLink }
                    }
                    div { class: "grid grid-3",
                        div {
                            h4 { class: "eyebrow accent", "Problem" }
                            p { class: "muted small", {study.problem} }
                        }
                        div {
                            h4 { class: "eyebrow accent", "Solution" }
                            p { class: "muted small", {study.solution} }
                        }
                        div {
                            h4 { class: "eyebrow accent", "Results" }
                            ul { class: "dot-list",
                                for result in study.results.iter() {
                                    li { class: "muted small", "{result}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Job(job: &'static ExperienceItem) -> Element {
    rsx! {
        Card { class: "job",
            div { class: "job-header",
                div {
                    h3 { {job.role} }
                    p { class: "accent company", {job.company} }
                }
                div { class: "job-meta muted small",
                    span { Glyph { icon: Icon::Calendar } {job.period} }
                    span { Glyph { icon: Icon::MapPin } {job.location} }
                }
            }
            p { {job.description} }
            ul { class: "bullet-list",
                for highlight in job.highlights.iter() {
                    li { class: "muted small",
                        span { class: "accent", "•" }
                        span { "{highlight}" }
                    }
                }
            }
            BadgeList { items: job.tech }
        }
    }
}
