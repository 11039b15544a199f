use folio_domain::content::SkillLevel::{Expert, Familiar, Proficient};
use folio_domain::content::{Skill, SkillGroup, SkillLevel, TagGroup};

const fn skill(name: &'static str, level: SkillLevel) -> Skill {
    Skill { name, level }
}

pub(crate) const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Core Skills",
        description: "Technologies I use daily with deep expertise",
        skills: &[
            skill("Java", Expert),
            skill("Kotlin", Expert),
            skill("Spring Boot", Expert),
            skill("Python", Expert),
            skill("FastAPI", Proficient),
            skill("PostgreSQL", Expert),
            skill("Redis", Expert),
            skill("REST APIs", Expert),
            skill("Microservices", Expert),
            skill("System Design", Expert),
        ],
    },
    SkillGroup {
        title: "Working Knowledge",
        description: "Technologies I use regularly and can be productive with",
        skills: &[
            skill("Django", Proficient),
            skill("TypeScript", Proficient),
            skill("Node.js", Proficient),
            skill("GraphQL", Proficient),
            skill("MongoDB", Proficient),
            skill("Elasticsearch", Proficient),
            skill("Apache Kafka", Proficient),
            skill("RabbitMQ", Proficient),
            skill("gRPC", Proficient),
            skill("React", Familiar),
        ],
    },
    SkillGroup {
        title: "Tools & Practices",
        description: "Infrastructure, DevOps, and engineering practices",
        skills: &[
            skill("Docker", Expert),
            skill("Kubernetes", Proficient),
            skill("AWS", Proficient),
            skill("GCP", Familiar),
            skill("Terraform", Proficient),
            skill("CI/CD", Expert),
            skill("Git", Expert),
            skill("Linux", Expert),
            skill("Monitoring", Proficient),
            skill("Testing", Expert),
        ],
    },
];

pub(crate) const COMPETENCIES: &[TagGroup] = &[
    TagGroup {
        title: "Architecture",
        items: &["Domain-Driven Design", "Event Sourcing", "CQRS", "Clean Architecture"],
    },
    TagGroup {
        title: "Methodologies",
        items: &["Agile/Scrum", "Code Reviews", "TDD/BDD", "Pair Programming"],
    },
    TagGroup { title: "Observability", items: &["Prometheus", "Grafana", "Jaeger", "ELK Stack"] },
    TagGroup {
        title: "Security",
        items: &["OAuth2/OIDC", "JWT", "API Security", "Secrets Management"],
    },
];
