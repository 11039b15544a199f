use folio_domain::content::{CaseStudy, ExperienceItem};

pub(crate) const EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        company: "TechCorp Global",
        role: "Senior Software Engineer",
        period: "2021 – Present",
        location: "Remote",
        description: "Leading backend development for core platform services handling millions of daily transactions.",
        highlights: &[
            "Architected and implemented a new API gateway reducing latency by 40%",
            "Led migration from monolith to microservices, improving deployment frequency by 10x",
            "Mentored team of 4 junior developers, establishing code review best practices",
            "Designed event-driven architecture handling 50M+ daily events",
        ],
        tech: &["Kotlin", "Spring Boot", "Kafka", "PostgreSQL", "Kubernetes", "AWS"],
    },
    ExperienceItem {
        company: "DataFlow Systems",
        role: "Software Engineer",
        period: "2018 – 2021",
        location: "Berlin, Germany",
        description: "Built data processing pipelines and APIs for real-time analytics platform.",
        highlights: &[
            "Developed real-time data pipeline processing 1TB+ daily with 99.9% uptime",
            "Implemented custom caching layer reducing database load by 60%",
            "Created comprehensive API documentation and SDK for external developers",
            "Introduced automated testing increasing code coverage from 40% to 85%",
        ],
        tech: &["Python", "FastAPI", "Apache Spark", "Redis", "Docker", "GCP"],
    },
    ExperienceItem {
        company: "FinTech Innovations",
        role: "Junior Software Engineer",
        period: "2016 – 2018",
        location: "London, UK",
        description: "Contributed to payment processing systems and fraud detection services.",
        highlights: &[
            "Built RESTful APIs for payment processing serving 100K+ daily transactions",
            "Implemented fraud detection algorithms reducing false positives by 25%",
            "Optimized critical database queries improving response times by 3x",
            "Participated in 24/7 on-call rotation maintaining 99.95% SLA",
        ],
        tech: &["Java", "Spring", "MySQL", "RabbitMQ", "Jenkins"],
    },
];

pub(crate) const CASE_STUDY: CaseStudy = CaseStudy {
    title: "API Gateway Modernization",
    problem: "Legacy API gateway couldn't handle increasing traffic and lacked modern security features.",
    solution: "Designed and implemented a new gateway using Kotlin and Spring Cloud Gateway with OAuth2, rate limiting, and intelligent routing.",
    results: &[
        "40% reduction in average latency",
        "99.99% uptime over 12 months",
        "50K+ requests/second capacity",
        "Zero security incidents post-launch",
    ],
};
