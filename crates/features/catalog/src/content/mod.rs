//! The hand-authored records behind every page.

mod experience;
mod profile;
mod projects;
mod skills;

use crate::error::CatalogError;
use folio_domain::content::SiteContent;
use std::collections::HashSet;

/// Everything the site shows. Never mutated.
pub static CONTENT: SiteContent = SiteContent {
    highlights: profile::HIGHLIGHTS,
    tech_snapshot: profile::TECH_SNAPSHOT,
    quick_facts: profile::QUICK_FACTS,
    work_approach: profile::WORK_APPROACH,
    focus_areas: profile::FOCUS_AREAS,
    values: profile::VALUES,
    experience: experience::EXPERIENCE,
    case_study: experience::CASE_STUDY,
    projects: projects::PROJECTS,
    skill_groups: skills::SKILL_GROUPS,
    competencies: skills::COMPETENCIES,
    contact_methods: profile::CONTACT_METHODS,
    availability: profile::AVAILABILITY,
    social_links: profile::SOCIAL_LINKS,
};

/// Checks the invariants the pages rely on: unique non-empty project ids, titled records
/// and at least one tech badge per project.
pub(crate) fn check_content(content: &SiteContent) -> Result<(), CatalogError> {
    let mut ids = HashSet::with_capacity(content.projects.len());

    for project in content.projects {
        if project.id.is_empty() || project.title.is_empty() {
            return Err(invalid(format!("project '{}' has an empty id or title", project.title)));
        }
        if !ids.insert(project.id) {
            return Err(invalid(format!("duplicate project id '{}'", project.id)));
        }
        if project.tech.is_empty() {
            return Err(invalid(format!("project '{}' lists no technologies", project.id)));
        }
    }

    if let Some(group) = content.skill_groups.iter().find(|group| group.skills.is_empty()) {
        return Err(invalid(format!("skill group '{}' is empty", group.title)));
    }

    Ok(())
}

fn invalid(message: String) -> CatalogError {
    CatalogError::Content { message: message.into(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::content::{Domain, Project};

    const fn project(id: &'static str, tech: &'static [&'static str]) -> Project {
        Project {
            id,
            title: "Sample",
            summary: "",
            description: "",
            role: "Developer",
            tech,
            domain: Domain::Data,
            featured: false,
            github: None,
            demo: None,
        }
    }

    #[test]
    fn built_in_content_is_consistent() {
        check_content(&CONTENT).expect("built-in content");
        assert_eq!(CONTENT.projects.len(), 8);
        assert_eq!(CONTENT.featured_projects().count(), 3);
        assert_eq!(CONTENT.experience.len(), 3);
        assert_eq!(CONTENT.skill_groups.len(), 3);
        assert_eq!(CONTENT.competencies.len(), 4);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        static PROJECTS: [Project; 2] = [project("a", &["Rust"]), project("a", &["Go"])];
        let content = SiteContent { projects: &PROJECTS, ..CONTENT.clone() };

        let err = check_content(&content).expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate project id 'a'"), "{err}");
    }

    #[test]
    fn projects_need_tech() {
        static PROJECTS: [Project; 1] = [project("a", &[])];
        let content = SiteContent { projects: &PROJECTS, ..CONTENT.clone() };

        assert!(check_content(&content).is_err());
    }
}
