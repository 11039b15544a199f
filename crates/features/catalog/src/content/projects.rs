use folio_domain::content::{Domain, Project};

pub(crate) const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "High-Performance API Gateway",
        summary: "Designed and implemented a custom API gateway handling 50K+ requests/second with intelligent rate limiting and caching.",
        description: "Custom API gateway with intelligent rate limiting, OAuth2 authentication, request/response transformation, and real-time analytics. Handles 50K+ requests per second with sub-10ms latency.",
        role: "Lead Engineer",
        tech: &["Kotlin", "Spring Boot", "Redis", "Kubernetes"],
        domain: Domain::Infrastructure,
        featured: true,
        github: None,
        demo: None,
    },
    Project {
        id: "2",
        title: "Real-time Data Pipeline",
        summary: "Built an event-driven data pipeline processing millions of events daily with exactly-once semantics.",
        description: "Event-driven data processing system with exactly-once semantics, processing millions of events daily. Includes dead letter queue handling and automatic retry mechanisms.",
        role: "Architect",
        tech: &["Python", "Kafka", "PostgreSQL", "Docker"],
        domain: Domain::Data,
        featured: true,
        github: None,
        demo: None,
    },
    Project {
        id: "3",
        title: "AI-Powered Search Service",
        summary: "Developed a semantic search service using embeddings for intelligent document retrieval.",
        description: "Semantic search engine using vector embeddings for intelligent document retrieval. Features auto-suggestions, relevance tuning, and multi-language support.",
        role: "Developer",
        tech: &["FastAPI", "OpenAI", "Elasticsearch", "AWS"],
        domain: Domain::AiMl,
        featured: true,
        github: None,
        demo: None,
    },
    Project {
        id: "4",
        title: "Payment Processing Platform",
        summary: "Multi-provider payment gateway with automatic failover and PCI-DSS compliance.",
        description: "Secure payment gateway integration supporting multiple providers with automatic failover, transaction monitoring, and PCI-DSS compliance.",
        role: "Developer",
        tech: &["Java", "Spring", "MySQL", "RabbitMQ"],
        domain: Domain::Fintech,
        featured: false,
        github: None,
        demo: None,
    },
    Project {
        id: "5",
        title: "Microservices Orchestration Layer",
        summary: "Service mesh with distributed tracing and circuit breakers across 50+ services.",
        description: "Service mesh implementation with distributed tracing, circuit breakers, and intelligent load balancing across 50+ microservices.",
        role: "Lead Engineer",
        tech: &["Kotlin", "Istio", "Jaeger", "Kubernetes"],
        domain: Domain::Infrastructure,
        featured: false,
        github: None,
        demo: None,
    },
    Project {
        id: "6",
        title: "Fraud Detection Engine",
        summary: "Real-time fraud scoring with ML models and a rule engine fallback.",
        description: "Real-time fraud detection system using ML models with rule engine fallback. Reduced false positives by 40% while maintaining 99.9% detection rate.",
        role: "Developer",
        tech: &["Python", "scikit-learn", "Redis", "PostgreSQL"],
        domain: Domain::AiMl,
        featured: false,
        github: None,
        demo: None,
    },
    Project {
        id: "7",
        title: "Configuration Management Service",
        summary: "Centralized configuration with feature flags and live updates.",
        description: "Centralized configuration service with feature flags, A/B testing support, and real-time updates without service restarts.",
        role: "Architect",
        tech: &["Java", "Spring Cloud Config", "Consul", "Vault"],
        domain: Domain::Infrastructure,
        featured: false,
        github: None,
        demo: None,
    },
    Project {
        id: "8",
        title: "Analytics Dashboard API",
        summary: "Analytics API aggregating metrics across billions of rows.",
        description: "High-performance analytics API with aggregated metrics, custom date ranges, and exportable reports. Handles complex queries across billions of rows.",
        role: "Developer",
        tech: &["Python", "FastAPI", "ClickHouse", "Redis"],
        domain: Domain::Data,
        featured: false,
        github: None,
        demo: None,
    },
];
