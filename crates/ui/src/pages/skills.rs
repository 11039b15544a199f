use crate::components::{BadgeList, BadgeVariant, Card, Glyph, PageHero, SectionHeading};
use dioxus::prelude::*;
use folio_domain::content::{SiteContent, SkillGroup, SkillLevel};

const fn level_class(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Expert => "icon level-expert",
        SkillLevel::Proficient => "icon level-proficient",
        SkillLevel::Familiar => "icon level-familiar",
    }
}

#[component]
pub fn SkillsPage(content: &'static SiteContent) -> Element {
    rsx! {
        PageHero {
            badge: "Skills",
            title: "Technical Expertise",
            lead: "A structured overview of my technical skills, organized by proficiency level and domain.",
        }

        section { class: "section-filter",
            div { class: "container legend",
                for level in SkillLevel::ALL {
                    div { class: "legend-item",
                        Glyph { icon: level.icon(), class: level_class(level) }
                        span { class: "muted small", {level.label()} }
                    }
                }
            }
        }

        section { class: "section-tail",
            div { class: "container grid grid-3",
                for group in content.skill_groups.iter() {
                    SkillCard { group }
                }
            }
        }

        section { class: "section tinted",
            div { class: "container",
                SectionHeading {
                    title: "Additional Competencies",
                    subtitle: "Soft skills and domain knowledge that complement my technical abilities.",
                }
                div { class: "grid grid-4",
                    for competency in content.competencies.iter() {
                        Card {
                            h3 { {competency.title} }
                            BadgeList { items: competency.items, variant: BadgeVariant::Secondary }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillCard(group: &'static SkillGroup) -> Element {
    rsx! {
        Card { class: "skill-group",
            h3 { {group.title} }
            p { class: "muted small", {group.description} }
            ul { class: "skill-list",
                for skill in group.skills.iter() {
                    li { class: "skill", "data-level": skill.level.label(),
                        span { {skill.name} }
                        Glyph { icon: skill.level.icon(), class: level_class(skill.level) }
                    }
                }
            }
        }
    }
}
