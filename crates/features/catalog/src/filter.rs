//! Category filter of the projects page.

use folio_domain::constants::ALL_FILTER;
use folio_domain::content::Project;
use serde::Deserialize;

/// Query parameter carrying the filter label.
pub const DOMAIN_PARAM: &str = "domain";

/// Label in effect for a request: missing or blank means `All`.
#[must_use]
pub fn active_label(requested: Option<&str>) -> &str {
    requested.filter(|label| !label.is_empty()).unwrap_or(ALL_FILTER)
}

/// Query string of a filtered listing, kept as raw pairs.
///
/// Repeated and unrelated keys never fail extraction; the first non-blank `domain` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DomainQuery(Vec<(String, String)>);

impl DomainQuery {
    /// First non-blank `domain` value, if any.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, value)| key == DOMAIN_PARAM && !value.is_empty())
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn label(&self) -> &str {
        active_label(self.requested())
    }
}

/// Projects whose domain label equals `label`, or every project for `All`.
///
/// Matching is exact and case-sensitive; an unknown label yields an empty list.
/// Order is preserved.
#[must_use]
pub fn filter_projects<'a>(projects: &'a [Project], label: &str) -> Vec<&'a Project> {
    if label == ALL_FILTER {
        return projects.iter().collect();
    }
    projects.iter().filter(|project| project.domain.label() == label).collect()
}

/// Filtered projects split the way the projects page lays them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSelection<'a> {
    /// Filter label in effect (`All` when none was requested).
    pub active: String,
    pub featured: Vec<&'a Project>,
    pub others: Vec<&'a Project>,
}

impl<'a> ProjectSelection<'a> {
    /// Applies `label` (missing or blank means `All`).
    #[must_use]
    pub fn new(projects: &'a [Project], label: Option<&str>) -> Self {
        let active = active_label(label);
        let (featured, others) =
            filter_projects(projects, active).into_iter().partition(|project| project.featured);

        Self { active: active.to_owned(), featured, others }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.others.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.featured.len() + self.others.len()
    }

    /// The "Featured" heading is shown only above a non-empty featured list.
    #[must_use]
    pub fn shows_featured_heading(&self) -> bool {
        !self.featured.is_empty()
    }

    /// "More Projects" separates the two lists, so it needs both.
    #[must_use]
    pub fn shows_more_heading(&self) -> bool {
        !self.featured.is_empty() && !self.others.is_empty()
    }

    #[must_use]
    pub fn is_active(&self, label: &str) -> bool {
        self.active == label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CONTENT;

    #[test]
    fn all_returns_everything_in_order() {
        let all = filter_projects(CONTENT.projects, ALL_FILTER);
        let ids: Vec<_> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn infrastructure_selection_splits_featured() {
        let selection = ProjectSelection::new(CONTENT.projects, Some("Infrastructure"));
        let featured: Vec<_> = selection.featured.iter().map(|p| p.id).collect();
        let others: Vec<_> = selection.others.iter().map(|p| p.id).collect();

        assert_eq!(featured, ["1"]);
        assert_eq!(others, ["5", "7"]);
        assert!(selection.shows_featured_heading());
        assert!(selection.shows_more_heading());
    }

    #[test]
    fn fintech_has_no_featured_heading() {
        let selection = ProjectSelection::new(CONTENT.projects, Some("Fintech"));
        assert!(!selection.shows_featured_heading());
        assert!(!selection.shows_more_heading());
        assert_eq!(selection.others.len(), 1);
    }

    #[test]
    fn unknown_label_is_empty() {
        let selection = ProjectSelection::new(CONTENT.projects, Some("Gaming"));
        assert!(selection.is_empty());
        assert_eq!(selection.active, "Gaming");
        assert!(!selection.shows_featured_heading());
    }

    #[test]
    fn missing_or_blank_label_means_all() {
        for label in [None, Some("")] {
            let selection = ProjectSelection::new(CONTENT.projects, label);
            assert_eq!(selection.active, ALL_FILTER);
            assert_eq!(selection.len(), CONTENT.projects.len());
        }
    }

    #[test]
    fn first_non_blank_domain_wins() {
        let query = DomainQuery(vec![
            ("page".into(), "2".into()),
            ("domain".into(), String::new()),
            ("domain".into(), "Data".into()),
            ("domain".into(), "Fintech".into()),
        ]);
        assert_eq!(query.requested(), Some("Data"));
        assert_eq!(query.label(), "Data");
    }

    #[test]
    fn query_without_domain_means_all() {
        assert_eq!(DomainQuery::default().label(), ALL_FILTER);
        assert_eq!(DomainQuery(vec![("domain".into(), String::new())]).label(), ALL_FILTER);
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!(filter_projects(CONTENT.projects, "data").is_empty());
        assert!(filter_projects(CONTENT.projects, "all").is_empty());
    }
}
