//! Manifest scanners for detecting project dependencies.
//!
//! This module contains scanners that detect and parse various dependency
//! manifests (package.json, requirements.txt, Cargo.toml, go.mod) into
//! normalized dependency signals for workflow matching.

mod cargo;
mod go_lang;
mod npm;
mod python;

pub use cargo::CargoScanner;
pub use go_lang::GoScanner;
pub use npm::NpmScanner;
pub use python::PythonScanner;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised while reading or parsing a single manifest.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Manifest could not be read
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// package.json was not valid JSON
    #[error("invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    /// Cargo.toml was not valid TOML
    #[error("invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),
}

/// How a dependency was declared in its manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    /// Regular runtime dependency
    Production,
    /// Development-only dependency
    Dev,
    /// Peer dependency (npm)
    Peer,
    /// Manifest did not distinguish
    Unknown,
}

impl DeclaredType {
    /// Stable lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Dev => "dev",
            Self::Peer => "peer",
            Self::Unknown => "unknown",
        }
    }
}

/// Technology category a dependency belongs to.
///
/// Names outside the mapping table resolve to `Uncategorized`; the variant is
/// explicit so an unknown name can never masquerade as a real category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyCategory {
    Frontend,
    Backend,
    Testing,
    Build,
    Database,
    Documentation,
    Uncategorized,
}

static CATEGORY_MAP: Lazy<BTreeMap<&'static str, DependencyCategory>> = Lazy::new(|| {
    use DependencyCategory::{Backend, Build, Database, Documentation, Frontend, Testing};

    let entries = [
        // Frontend frameworks
        ("react", Frontend),
        ("vue", Frontend),
        ("angular", Frontend),
        ("svelte", Frontend),
        ("next", Frontend),
        ("nuxt", Frontend),
        // Backend frameworks
        ("express", Backend),
        ("fastapi", Backend),
        ("django", Backend),
        ("flask", Backend),
        ("spring", Backend),
        ("rails", Backend),
        // Testing frameworks
        ("jest", Testing),
        ("vitest", Testing),
        ("pytest", Testing),
        ("mocha", Testing),
        ("cypress", Testing),
        ("playwright", Testing),
        // Build tools
        ("vite", Build),
        ("webpack", Build),
        ("rollup", Build),
        ("parcel", Build),
        ("esbuild", Build),
        // Database tools
        ("prisma", Database),
        ("typeorm", Database),
        ("sqlalchemy", Database),
        ("mongoose", Database),
        ("sequelize", Database),
        // Documentation tools
        ("storybook", Documentation),
        ("docusaurus", Documentation),
        ("vuepress", Documentation),
        ("gitbook", Documentation),
    ];

    entries.into_iter().collect()
});

impl DependencyCategory {
    /// Resolve a dependency name to its category (case-insensitive).
    pub fn for_name(name: &str) -> Self {
        CATEGORY_MAP.get(name.to_lowercase().as_str()).copied().unwrap_or(Self::Uncategorized)
    }

    /// Category label as a signal token, `None` for `Uncategorized`.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Frontend => Some("frontend"),
            Self::Backend => Some("backend"),
            Self::Testing => Some("testing"),
            Self::Build => Some("build"),
            Self::Database => Some("database"),
            Self::Documentation => Some("documentation"),
            Self::Uncategorized => None,
        }
    }

    /// Display name, with `Uncategorized` spelled out.
    pub fn display_name(self) -> &'static str {
        self.label().unwrap_or("uncategorized")
    }
}

/// A dependency detected in a manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySignal {
    /// Dependency name as declared
    pub name: String,

    /// How the manifest declared it
    pub declared_type: DeclaredType,

    /// Resolved technology category
    pub category: DependencyCategory,
}

impl DependencySignal {
    /// Create a signal, resolving the category from the mapping table.
    pub fn new(name: impl Into<String>, declared_type: DeclaredType) -> Self {
        let name = name.into();
        let category = DependencyCategory::for_name(&name);
        Self { name, declared_type, category }
    }
}

/// Trait for manifest scanners.
pub trait ManifestScanner: Send + Sync {
    /// Get the name of this scanner.
    fn name(&self) -> &str;

    /// Scan the directory and return detected dependencies.
    fn scan(&self, dir: &Path) -> Result<Vec<DependencySignal>, ScanError>;
}

/// Main dependency scanner that aggregates all manifest scanners.
///
/// Individual scanner failures are logged and degrade to empty output, so a
/// malformed manifest never aborts the analysis.
pub struct DependencyScanner {
    /// Root directory to scan
    root: PathBuf,

    /// Enabled scanners
    scanners: Vec<Box<dyn ManifestScanner>>,
}

impl DependencyScanner {
    /// Create a new dependency scanner for the given directory.
    pub fn new(root: &Path) -> Self {
        let scanners: Vec<Box<dyn ManifestScanner>> = vec![
            Box::new(NpmScanner),
            Box::new(PythonScanner),
            Box::new(CargoScanner),
            Box::new(GoScanner),
        ];

        Self { root: root.to_path_buf(), scanners }
    }

    /// Scan the project and return all detected dependencies.
    pub fn scan(&self) -> Vec<DependencySignal> {
        let mut all_signals = Vec::new();

        for scanner in &self.scanners {
            match scanner.scan(&self.root) {
                Ok(signals) => {
                    if !signals.is_empty() {
                        tracing::debug!(
                            scanner = scanner.name(),
                            count = signals.len(),
                            "Detected dependencies"
                        );
                        all_signals.extend(signals);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        scanner = scanner.name(),
                        error = %e,
                        "Manifest scanner failed"
                    );
                }
            }
        }

        all_signals
    }

    /// Get the number of scanners.
    pub fn scanner_count(&self) -> usize {
        self.scanners.len()
    }
}

/// Dependencies grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencySummary {
    /// Total number of detected dependencies
    pub total: usize,

    /// Dependency names per category, in detection order
    pub by_category: BTreeMap<String, Vec<String>>,
}

/// Summarize detected dependencies by category.
pub fn summarize(signals: &[DependencySignal]) -> DependencySummary {
    let mut summary = DependencySummary { total: signals.len(), ..Default::default() };

    for signal in signals {
        summary
            .by_category
            .entry(signal.category.display_name().to_string())
            .or_default()
            .push(signal.name.clone());
    }

    summary
}
