//! Static workflow catalog.
//!
//! The catalog is the single source of truth for which workflows exist and
//! what evidence justifies suggesting each of them. It is plain static data,
//! initialized at compile time and never mutated, so scoring runs can share
//! it across threads without coordination.

use std::collections::BTreeMap;

/// Evidentiary weight class of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerTier {
    /// Near-certain indicators (a specific framework, a canonical folder)
    Strong,
    /// Corroborating but ambiguous tokens
    Medium,
    /// Generic hints
    Weak,
}

impl TriggerTier {
    /// Confidence contributed by a single matching trigger of this tier.
    pub fn weight(self) -> f32 {
        match self {
            Self::Strong => 0.9,
            Self::Medium => 0.7,
            Self::Weak => 0.5,
        }
    }

    /// Clause label used when synthesizing reasoning strings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong indicators",
            Self::Medium => "Supporting indicators",
            Self::Weak => "Additional indicators",
        }
    }
}

/// A tier together with its declared trigger tokens.
#[derive(Debug, Clone, Copy)]
pub struct TriggerSet {
    /// Weight class of every token in this set
    pub tier: TriggerTier,

    /// Trigger tokens, in declaration order
    pub tokens: &'static [&'static str],
}

/// A workflow template from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowTemplate {
    /// Unique workflow name
    pub name: &'static str,

    /// Category (frontend, backend, testing, ...)
    pub category: &'static str,

    /// Rough time estimate for running the workflow
    pub estimated_time: &'static str,

    /// What should already be in place before running it
    pub prerequisites: &'static [&'static str],

    /// What the workflow does
    pub description: &'static str,

    /// Trigger sets in strong, medium, weak order
    pub triggers: [TriggerSet; 3],
}

impl WorkflowTemplate {
    /// Look up the tokens declared for a given tier.
    pub fn tokens_for(&self, tier: TriggerTier) -> &'static [&'static str] {
        self.triggers
            .iter()
            .find(|set| set.tier == tier)
            .map_or(&[], |set| set.tokens)
    }
}

const fn tiers(
    strong: &'static [&'static str],
    medium: &'static [&'static str],
    weak: &'static [&'static str],
) -> [TriggerSet; 3] {
    [
        TriggerSet { tier: TriggerTier::Strong, tokens: strong },
        TriggerSet { tier: TriggerTier::Medium, tokens: medium },
        TriggerSet { tier: TriggerTier::Weak, tokens: weak },
    ]
}

/// The built-in workflow catalog.
///
/// Declaration order matters: suggestions with equal confidence keep this
/// order in ranked output.
pub static CATALOG: &[WorkflowTemplate] = &[
    // Frontend workflows
    WorkflowTemplate {
        name: "component-library",
        category: "frontend",
        estimated_time: "15-30 minutes",
        prerequisites: &["React/Vue/Angular", "components folder"],
        description: "Create comprehensive component library with documentation and testing",
        triggers: tiers(
            &["react", "vue", "angular", "components/"],
            &["jsx", "tsx", "vue", "svelte"],
            &["src/", "lib/"],
        ),
    },
    WorkflowTemplate {
        name: "storybook-setup",
        category: "frontend",
        estimated_time: "10-20 minutes",
        prerequisites: &["Component library", "React/Vue/Angular"],
        description: "Set up Storybook for component development and documentation",
        triggers: tiers(
            &["components/", "storybook"],
            &["react", "vue", "angular"],
            &["ui components", "design system"],
        ),
    },
    WorkflowTemplate {
        name: "frontend-testing",
        category: "testing",
        estimated_time: "20-40 minutes",
        prerequisites: &["Frontend framework", "Test files"],
        description: "Set up comprehensive frontend testing suite",
        triggers: tiers(
            &["jest", "vitest", "cypress", "playwright"],
            &["tests/", "__tests__", "spec/"],
            &["test", "spec"],
        ),
    },
    // Backend workflows
    WorkflowTemplate {
        name: "api-documentation",
        category: "backend",
        estimated_time: "20-45 minutes",
        prerequisites: &["API framework", "Route definitions"],
        description: "Generate comprehensive API documentation with OpenAPI/Swagger",
        triggers: tiers(
            &["express", "fastapi", "django", "api/", "routes/"],
            &["rest", "graphql", "api"],
            &["server", "backend"],
        ),
    },
    WorkflowTemplate {
        name: "database-schema",
        category: "database",
        estimated_time: "30-60 minutes",
        prerequisites: &["Database ORM", "Model definitions"],
        description: "Analyze and document database schema with relationships",
        triggers: tiers(
            &["prisma", "typeorm", "sqlalchemy", "models/", "schemas/"],
            &["database", "orm", "models"],
            &["data", "storage"],
        ),
    },
    WorkflowTemplate {
        name: "database-migration",
        category: "database",
        estimated_time: "15-30 minutes",
        prerequisites: &["Database setup", "Migration files"],
        description: "Set up database migration and seeding workflow",
        triggers: tiers(
            &["migrations/", "seeds/", "prisma"],
            &["database", "sql", "schema"],
            &["data", "storage"],
        ),
    },
    // Full-stack workflows
    WorkflowTemplate {
        name: "full-stack-documentation",
        category: "documentation",
        estimated_time: "45-90 minutes",
        prerequisites: &["Frontend + Backend", "API endpoints"],
        description: "Create comprehensive documentation for full-stack application",
        triggers: tiers(
            &["react", "express", "api/", "components/"],
            &["frontend", "backend", "full-stack"],
            &["web", "application"],
        ),
    },
    // Testing workflows
    WorkflowTemplate {
        name: "test-coverage",
        category: "testing",
        estimated_time: "25-45 minutes",
        prerequisites: &["Test framework", "Source code"],
        description: "Set up test coverage reporting and improve test coverage",
        triggers: tiers(
            &["jest", "vitest", "pytest", "coverage"],
            &["tests/", "__tests__", "testing"],
            &["test", "spec"],
        ),
    },
    WorkflowTemplate {
        name: "api-testing",
        category: "testing",
        estimated_time: "20-35 minutes",
        prerequisites: &["API endpoints", "Testing framework"],
        description: "Set up comprehensive API testing suite",
        triggers: tiers(
            &["express", "fastapi", "cypress", "playwright"],
            &["api/", "routes/", "testing"],
            &["api", "test"],
        ),
    },
    // Documentation workflows
    WorkflowTemplate {
        name: "documentation-generation",
        category: "documentation",
        estimated_time: "30-60 minutes",
        prerequisites: &["Source code", "README files"],
        description: "Generate comprehensive documentation from source code and existing docs",
        triggers: tiers(
            &["readme.md", "docs/", "documentation"],
            &[".md files", "comments", "docstrings"],
            &["docs", "documentation"],
        ),
    },
    WorkflowTemplate {
        name: "knowledge-base",
        category: "documentation",
        estimated_time: "45-75 minutes",
        prerequisites: &["Documentation files", "Project structure"],
        description: "Create searchable knowledge base from project documentation",
        triggers: tiers(
            &["docs/", "documentation", "readme.md"],
            &[".md files", "wiki", "knowledge"],
            &["docs", "information"],
        ),
    },
    // Deployment workflows
    WorkflowTemplate {
        name: "deployment-pipeline",
        category: "deployment",
        estimated_time: "30-60 minutes",
        prerequisites: &["Project structure", "CI/CD setup"],
        description: "Set up automated deployment pipeline with CI/CD",
        triggers: tiers(
            &[".github/", "dockerfile", "ci-cd"],
            &["deploy", "pipeline", "automation"],
            &["production", "release"],
        ),
    },
    WorkflowTemplate {
        name: "docker-setup",
        category: "deployment",
        estimated_time: "15-30 minutes",
        prerequisites: &["Application code", "Configuration"],
        description: "Set up Docker containerization for application",
        triggers: tiers(
            &["dockerfile", "docker-compose"],
            &["container", "deployment"],
            &["docker", "containerization"],
        ),
    },
    // Development workflows
    WorkflowTemplate {
        name: "code-quality",
        category: "development",
        estimated_time: "20-40 minutes",
        prerequisites: &["Source code", "Linting tools"],
        description: "Set up code quality tools and formatting standards",
        triggers: tiers(
            &["eslint", "prettier", "linting"],
            &["code quality", "formatting"],
            &["code", "quality"],
        ),
    },
    WorkflowTemplate {
        name: "performance-optimization",
        category: "development",
        estimated_time: "30-60 minutes",
        prerequisites: &["Application code", "Performance issues"],
        description: "Analyze and optimize application performance",
        triggers: tiers(
            &["performance", "optimization", "speed"],
            &["slow", "lag", "optimization"],
            &["performance", "improvement"],
        ),
    },
];

/// Look up a template by name.
pub fn template(name: &str) -> Option<&'static WorkflowTemplate> {
    CATALOG.iter().find(|t| t.name == name)
}

/// Group all catalog workflows by category.
///
/// Returns a sorted map so output is deterministic regardless of catalog
/// declaration order.
pub fn categories() -> BTreeMap<&'static str, Vec<&'static str>> {
    let mut map: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for tpl in CATALOG {
        map.entry(tpl.category).or_default().push(tpl.name);
    }
    map
}
