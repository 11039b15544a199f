use folio_domain::content::{Availability, ContactMethod, Highlight, Icon, SocialLink, TagGroup};

pub(crate) const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::Server,
        title: "8+ Years Experience",
        description: "Building production-grade systems at scale",
    },
    Highlight {
        icon: Icon::Code,
        title: "Backend & APIs",
        description: "Java, Kotlin, Spring, Python, FastAPI",
    },
    Highlight {
        icon: Icon::Cpu,
        title: "System Architecture",
        description: "Microservices, distributed systems, cloud",
    },
    Highlight {
        icon: Icon::Globe,
        title: "Remote Worldwide",
        description: "Available for remote opportunities globally",
    },
];

pub(crate) const TECH_SNAPSHOT: &[TagGroup] = &[
    TagGroup { title: "Languages", items: &["Java", "Kotlin", "Python", "TypeScript"] },
    TagGroup { title: "Frameworks", items: &["Spring Boot", "FastAPI", "Django"] },
    TagGroup { title: "Infrastructure", items: &["AWS", "Docker", "Kubernetes", "Terraform"] },
    TagGroup { title: "Databases", items: &["PostgreSQL", "Redis", "MongoDB", "Elasticsearch"] },
];

pub(crate) const QUICK_FACTS: &[&str] = &[
    "Based in Europe, working remotely with global teams",
    "Contributed to systems processing billions of transactions",
    "Active open-source contributor and tech blogger",
    "Speaker at local tech meetups and conferences",
    "Mentor for junior developers and code review enthusiast",
];

pub(crate) const WORK_APPROACH: &[Highlight] = &[
    Highlight {
        icon: Icon::Code,
        title: "Clean Architecture",
        description: "I prioritize maintainable, testable code with clear separation of concerns. Every system I build is designed for long-term scalability.",
    },
    Highlight {
        icon: Icon::Zap,
        title: "Performance First",
        description: "I profile, measure, and optimize. From database queries to API response times, I ensure systems run efficiently at scale.",
    },
    Highlight {
        icon: Icon::Target,
        title: "Problem Solver",
        description: "I enjoy tackling complex technical challenges. Breaking down ambiguous requirements into actionable engineering solutions is my strength.",
    },
    Highlight {
        icon: Icon::Lightbulb,
        title: "Continuous Learner",
        description: "Technology evolves rapidly. I dedicate time to learning new tools, patterns, and approaches to stay at the forefront of software engineering.",
    },
];

pub(crate) const FOCUS_AREAS: &[&str] = &[
    "Backend Development",
    "API Design",
    "System Architecture",
    "Distributed Systems",
    "Database Optimization",
    "Cloud Infrastructure",
    "AI/ML Integration",
    "DevOps Practices",
];

pub(crate) const VALUES: &[&str] = &[
    "Clean Code",
    "Test-Driven Development",
    "Code Reviews",
    "Documentation",
    "Reliability",
    "Observability",
    "Automation",
    "Mentorship",
];

pub(crate) const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: Icon::Mail,
        label: "Email",
        value: "hello@example.com",
        href: "mailto:hello@example.com",
        description: "Best for detailed inquiries",
    },
    ContactMethod {
        icon: Icon::Github,
        label: "GitHub",
        value: "@developer",
        href: "https://github.com",
        description: "Check out my open source work",
    },
    ContactMethod {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        value: "in/developer",
        href: "https://linkedin.com",
        description: "Let's connect professionally",
    },
    ContactMethod {
        icon: Icon::Send,
        label: "Telegram",
        value: "@developer",
        href: "https://t.me/username",
        description: "Quick messages and chats",
    },
];

pub(crate) const AVAILABILITY: &[Availability] = &[
    Availability { icon: Icon::MapPin, label: "Location", value: "Europe (CET timezone)" },
    Availability { icon: Icon::Clock, label: "Availability", value: "Open to opportunities" },
];

pub(crate) const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: Icon::Github, label: "GitHub", href: "https://github.com" },
    SocialLink { icon: Icon::Linkedin, label: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { icon: Icon::Mail, label: "Email", href: "mailto:hello@example.com" },
    SocialLink { icon: Icon::Send, label: "Telegram", href: "https://t.me/username" },
];
