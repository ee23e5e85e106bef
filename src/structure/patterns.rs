//! Architecture and pattern detection from categorized structure.

use serde::{Deserialize, Serialize};

use super::{FileInfo, FolderInfo};

/// High-level project architecture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    /// Both frontend and backend folders present
    FullStack,
    /// Frontend folders only
    Frontend,
    /// Backend folders only
    Backend,
    /// Neither detected
    #[default]
    Unknown,
}

impl Architecture {
    /// Architecture label as a signal token, `None` for `Unknown`.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::FullStack => Some("full-stack"),
            Self::Frontend => Some("frontend"),
            Self::Backend => Some("backend"),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label().unwrap_or("unknown"))
    }
}

/// Labels derived from the project's layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSignals {
    /// Detected architecture
    pub architecture: Architecture,

    /// Framework-style patterns (component-based, api-driven, test-driven)
    pub frameworks: Vec<String>,

    /// Project-type labels (documentation-heavy, database-driven, ...)
    pub project_types: Vec<String>,

    /// Manifest-derived labels (nodejs-project, rust-project, ...)
    pub key_patterns: Vec<String>,
}

/// Derive structure signals from categorized folders and files.
pub fn detect(folders: &[FolderInfo], files: &[FileInfo]) -> StructureSignals {
    let mut signals = StructureSignals::default();

    let has_category =
        |category: &str| folders.iter().any(|f| f.category == Some(category));
    let has_folder = |name: &str| folders.iter().any(|f| f.name.eq_ignore_ascii_case(name));
    let has_file = |name: &str| files.iter().any(|f| f.name == name);

    // Architecture
    let frontend = has_category("frontend");
    let backend = has_category("backend");
    signals.architecture = match (frontend, backend) {
        (true, true) => Architecture::FullStack,
        (true, false) => Architecture::Frontend,
        (false, true) => Architecture::Backend,
        (false, false) => Architecture::Unknown,
    };

    // Framework patterns
    if has_folder("components") {
        signals.frameworks.push("component-based".to_string());
    }
    if has_folder("api") {
        signals.frameworks.push("api-driven".to_string());
    }
    if has_folder("tests") || has_folder("__tests__") {
        signals.frameworks.push("test-driven".to_string());
    }

    // Project types
    if has_folder("docs") {
        signals.project_types.push("documentation-heavy".to_string());
    }
    if has_folder("migrations") {
        signals.project_types.push("database-driven".to_string());
    }
    if has_folder(".github") {
        signals.project_types.push("ci-cd-enabled".to_string());
    }

    // Key patterns from manifest presence
    if has_file("package.json") {
        signals.key_patterns.push("nodejs-project".to_string());
    }
    if has_file("requirements.txt") {
        signals.key_patterns.push("python-project".to_string());
    }
    if has_file("Cargo.toml") {
        signals.key_patterns.push("rust-project".to_string());
    }
    if has_file("go.mod") {
        signals.key_patterns.push("go-project".to_string());
    }

    signals
}
