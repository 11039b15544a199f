//! Read-only JSON views of the catalog.

use crate::Catalog;
use crate::filter::{DomainQuery, filter_projects};
use axum::Json;
use axum::extract::{Query, State};
use folio_derive::{api_handler, api_model};
use folio_domain::constants::CONTENT_TAG;
use folio_domain::content::{ExperienceItem, Project, SkillGroup, TagGroup};
use folio_kernel::server::{SiteState, SiteStateError};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Project card data.
#[api_model]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub role: String,
    pub tech: Vec<String>,
    /// Domain label, e.g. `AI/ML`.
    pub domain: String,
    pub featured: bool,
    pub github: Option<String>,
    pub demo: Option<String>,
}

#[api_model]
pub struct ProjectsResponse {
    /// Filter label that was applied.
    pub domain: String,
    pub projects: Vec<ProjectDto>,
}

#[api_model]
pub struct JobDto {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub tech: Vec<String>,
}

#[api_model]
pub struct CaseStudyDto {
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub results: Vec<String>,
}

#[api_model]
pub struct ExperienceResponse {
    pub jobs: Vec<JobDto>,
    pub case_study: CaseStudyDto,
}

#[api_model]
pub struct SkillDto {
    pub name: String,
    /// `expert`, `proficient` or `familiar`.
    pub level: String,
}

#[api_model]
pub struct SkillGroupDto {
    pub title: String,
    pub description: String,
    pub skills: Vec<SkillDto>,
}

#[api_model]
pub struct CompetencyDto {
    pub title: String,
    pub items: Vec<String>,
}

#[api_model]
pub struct SkillsResponse {
    pub groups: Vec<SkillGroupDto>,
    pub competencies: Vec<CompetencyDto>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_owned(),
            title: project.title.to_owned(),
            summary: project.summary.to_owned(),
            description: project.description.to_owned(),
            role: project.role.to_owned(),
            tech: strings(project.tech),
            domain: project.domain.label().to_owned(),
            featured: project.featured,
            github: project.github.map(str::to_owned),
            demo: project.demo.map(str::to_owned),
        }
    }
}

impl From<&ExperienceItem> for JobDto {
    fn from(job: &ExperienceItem) -> Self {
        Self {
            company: job.company.to_owned(),
            role: job.role.to_owned(),
            period: job.period.to_owned(),
            location: job.location.to_owned(),
            description: job.description.to_owned(),
            highlights: strings(job.highlights),
            tech: strings(job.tech),
        }
    }
}

impl From<&SkillGroup> for SkillGroupDto {
    fn from(group: &SkillGroup) -> Self {
        Self {
            title: group.title.to_owned(),
            description: group.description.to_owned(),
            skills: group
                .skills
                .iter()
                .map(|skill| SkillDto {
                    name: skill.name.to_owned(),
                    level: skill.level.label().to_lowercase(),
                })
                .collect(),
        }
    }
}

impl From<&TagGroup> for CompetencyDto {
    fn from(group: &TagGroup) -> Self {
        Self { title: group.title.to_owned(), items: strings(group.items) }
    }
}

#[api_handler(
    get,
    path = "/api/projects",
    params(("domain" = Option<String>, Query, description = "Domain label, `All` when omitted")),
    responses((status = OK, description = "Projects in the requested domain", body = ProjectsResponse)),
    tag = CONTENT_TAG,
)]
pub async fn list_projects(
    State(state): State<SiteState>,
    Query(query): Query<DomainQuery>,
) -> Result<Json<ProjectsResponse>, SiteStateError> {
    let catalog = state.try_get_slice::<Catalog>()?;
    let active = query.label();
    let projects =
        filter_projects(catalog.content.projects, active).into_iter().map(ProjectDto::from).collect();

    Ok(Json(ProjectsResponse { domain: active.to_owned(), projects }))
}

#[api_handler(
    get,
    path = "/api/experience",
    responses((status = OK, description = "Work history and the featured case study", body = ExperienceResponse)),
    tag = CONTENT_TAG,
)]
pub async fn list_experience(
    State(state): State<SiteState>,
) -> Result<Json<ExperienceResponse>, SiteStateError> {
    let content = state.try_get_slice::<Catalog>()?.content;
    let study = &content.case_study;

    Ok(Json(ExperienceResponse {
        jobs: content.experience.iter().map(JobDto::from).collect(),
        case_study: CaseStudyDto {
            title: study.title.to_owned(),
            problem: study.problem.to_owned(),
            solution: study.solution.to_owned(),
            results: strings(study.results),
        },
    }))
}

#[api_handler(
    get,
    path = "/api/skills",
    responses((status = OK, description = "Skill groups and additional competencies", body = SkillsResponse)),
    tag = CONTENT_TAG,
)]
pub async fn list_skills(
    State(state): State<SiteState>,
) -> Result<Json<SkillsResponse>, SiteStateError> {
    let content = state.try_get_slice::<Catalog>()?.content;

    Ok(Json(SkillsResponse {
        groups: content.skill_groups.iter().map(SkillGroupDto::from).collect(),
        competencies: content.competencies.iter().map(CompetencyDto::from).collect(),
    }))
}

/// Content API routes, documented for the OpenAPI document.
pub fn router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new()
        .routes(routes!(list_projects))
        .routes(routes!(list_experience))
        .routes(routes!(list_skills))
}
