//! Shapes of the hand-authored content records.
//!
//! Records are `'static` constants: identity is the array position (or `id` for
//! projects), they are never mutated and never persisted.

use crate::constants::ALL_FILTER;
use serde::Serialize;

/// Glyph shown next to a record. The UI decides how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowLeft,
    ArrowRight,
    Calendar,
    CheckCircle,
    Circle,
    Clock,
    Code,
    Cpu,
    ExternalLink,
    Github,
    Globe,
    Home,
    Lightbulb,
    Linkedin,
    Mail,
    MapPin,
    Minus,
    Send,
    Server,
    Star,
    Target,
    Zap,
}

/// Project category used by the projects filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Domain {
    Infrastructure,
    Data,
    #[serde(rename = "AI/ML")]
    AiMl,
    Fintech,
}

impl Domain {
    pub const ALL: [Self; 4] = [Self::Infrastructure, Self::Data, Self::AiMl, Self::Fintech];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::Data => "Data",
            Self::AiMl => "AI/ML",
            Self::Fintech => "Fintech",
        }
    }

    /// Exact, case-sensitive label lookup.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|domain| domain.label() == label)
    }

    /// Filter bar labels: `All` followed by every domain.
    #[must_use]
    pub fn filter_labels() -> [&'static str; 5] {
        [
            ALL_FILTER,
            Self::Infrastructure.label(),
            Self::Data.label(),
            Self::AiMl.label(),
            Self::Fintech.label(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    /// One-line pitch used on the home page.
    pub summary: &'static str,
    pub description: &'static str,
    pub role: &'static str,
    pub tech: &'static [&'static str],
    pub domain: Domain,
    pub featured: bool,
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceItem {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub tech: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub title: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Expert,
    Proficient,
    Familiar,
}

impl SkillLevel {
    /// Legend order.
    pub const ALL: [Self; 3] = [Self::Expert, Self::Proficient, Self::Familiar];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Proficient => "Proficient",
            Self::Familiar => "Familiar",
        }
    }

    #[must_use]
    pub const fn icon(self) -> Icon {
        match self {
            Self::Expert => Icon::CheckCircle,
            Self::Proficient => Icon::Circle,
            Self::Familiar => Icon::Minus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [Skill],
}

/// Titled list of tags (competencies, tech snapshot groups).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Icon card with a title and a short text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMethod {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

/// Every record shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    pub highlights: &'static [Highlight],
    pub tech_snapshot: &'static [TagGroup],
    pub quick_facts: &'static [&'static str],
    pub work_approach: &'static [Highlight],
    pub focus_areas: &'static [&'static str],
    pub values: &'static [&'static str],
    pub experience: &'static [ExperienceItem],
    pub case_study: CaseStudy,
    pub projects: &'static [Project],
    pub skill_groups: &'static [SkillGroup],
    pub competencies: &'static [TagGroup],
    pub contact_methods: &'static [ContactMethod],
    pub availability: &'static [Availability],
    pub social_links: &'static [SocialLink],
}

impl SiteContent {
    /// Projects flagged as featured, in declaration order.
    pub fn featured_projects(&self) -> impl Iterator<Item = &'static Project> + use<> {
        self.projects.iter().filter(|project| project.featured)
    }
}
