//! Project structure analysis.
//!
//! Walks the project tree, categorizes folders and files against fixed
//! tables, and derives architecture and pattern labels for workflow
//! matching.

mod patterns;

pub use patterns::{Architecture, StructureSignals};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// Default traversal depth below the project root.
const DEFAULT_MAX_DEPTH: usize = 3;

/// A categorized folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderInfo {
    /// Folder name (not the full path)
    pub name: String,

    /// Category from the folder table, if recognized
    pub category: Option<&'static str>,
}

/// A categorized file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// File name
    pub name: String,

    /// Lower-cased extension, empty when absent
    pub extension: String,

    /// Category from the file tables, if recognized
    pub category: Option<&'static str>,
}

/// Categorize a folder by its name.
fn categorize_folder(name: &str) -> Option<&'static str> {
    let category = match name.to_lowercase().as_str() {
        "components" | "pages" | "views" | "hooks" | "assets" | "public" | "styles" => "frontend",
        "src" => "source",
        "store" | "redux" => "state",
        "api" | "routes" | "controllers" | "services" | "models" | "schemas" | "middleware"
        | "utils" | "lib" => "backend",
        "tests" | "__tests__" | "test" | "spec" | "cypress" | "playwright" => "testing",
        "docs" | "documentation" => "documentation",
        "migrations" | "seeds" | "sql" => "database",
        "config" | "configs" | "settings" => "configuration",
        "docker" | "deploy" | ".github" | "scripts" => "deployment",
        _ => return None,
    };
    Some(category)
}

/// Categorize a file by exact name first, then by extension.
fn categorize_file(name: &str, extension: &str) -> Option<&'static str> {
    let by_name = match name {
        "package.json" | "requirements.txt" | "Cargo.toml" | "go.mod" | "tsconfig.json"
        | "jsconfig.json" | "vite.config.ts" | "vite.config.js" | "webpack.config.js"
        | "rollup.config.js" | "eslint.config.js" | ".eslintrc.json" | "prettier.config.js"
        | ".prettierrc" => Some("configuration"),
        "README.md" | "CHANGELOG.md" | "CONTRIBUTING.md" | "LICENSE" | "LICENSE.md" => {
            Some("documentation")
        }
        "schema.sql" | "database.sql" | "prisma.schema" => Some("database"),
        "Dockerfile" | "docker-compose.yml" | "docker-compose.yaml" => Some("deployment"),
        "jest.config.js" | "vitest.config.ts" | "pytest.ini" | "cypress.config.ts"
        | "playwright.config.ts" => Some("testing"),
        _ => None,
    };

    if by_name.is_some() {
        return by_name;
    }

    let category = match extension {
        "jsx" | "tsx" | "svelte" | "css" | "scss" | "sass" | "less" | "styl" => "frontend",
        "py" | "js" | "ts" | "go" | "rs" | "java" | "php" | "rb" | "cs" => "backend",
        "sql" | "prisma" => "database",
        "md" | "rst" | "txt" => "documentation",
        "json" | "yaml" | "yml" | "toml" | "ini" | "env" => "configuration",
        _ => return None,
    };
    Some(category)
}

/// Check if a directory should be skipped during traversal.
fn should_skip_dir(name: &str) -> bool {
    matches!(
        name,
        "node_modules"
            | ".git"
            | "target"
            | "dist"
            | "build"
            | ".next"
            | ".nuxt"
            | ".output"
            | "coverage"
            | ".cache"
            | ".turbo"
            | ".pnpm"
            | "vendor"
            | "__pycache__"
            | ".venv"
            | "venv"
    )
}

/// Structure analysis result: derived signals plus category counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureReport {
    /// Derived signals consumed by the matcher
    pub signals: StructureSignals,

    /// Total folders visited
    pub total_folders: usize,

    /// Total files visited
    pub total_files: usize,

    /// Folder count per category
    pub folder_categories: BTreeMap<String, usize>,

    /// File count per category
    pub file_categories: BTreeMap<String, usize>,
}

/// Analyzes a project directory's layout.
pub struct StructureAnalyzer {
    /// Root directory to analyze
    root: PathBuf,

    /// Maximum depth below the root
    max_depth: usize,
}

impl StructureAnalyzer {
    /// Create an analyzer for the given directory.
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf(), max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Override the traversal depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walk the tree and produce the structure report.
    ///
    /// Traversal failures (unreadable entries, permission errors) are
    /// skipped, never propagated: a partially readable tree degrades to
    /// fewer signals.
    pub fn analyze(&self) -> StructureReport {
        let mut folders = Vec::new();
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(self.max_depth)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                !(e.file_type().is_dir() && should_skip_dir(&name))
            });

        for entry in walker.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().to_string();

            if entry.file_type().is_dir() {
                folders.push(FolderInfo { category: categorize_folder(&name), name });
            } else if entry.file_type().is_file() {
                let extension = entry
                    .path()
                    .extension()
                    .map(|e| e.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                files.push(FileInfo {
                    category: categorize_file(&name, &extension),
                    name,
                    extension,
                });
            }
        }

        tracing::debug!(
            folders = folders.len(),
            files = files.len(),
            "Structure traversal complete"
        );

        let signals = patterns::detect(&folders, &files);

        StructureReport {
            signals,
            total_folders: folders.len(),
            total_files: files.len(),
            folder_categories: count_categories(folders.iter().map(|f| f.category)),
            file_categories: count_categories(files.iter().map(|f| f.category)),
        }
    }
}

fn count_categories<'a, I>(categories: I) -> BTreeMap<String, usize>
where
    I: Iterator<Item = Option<&'a str>>,
{
    let mut counts = BTreeMap::new();
    for category in categories.flatten() {
        *counts.entry(category.to_string()).or_insert(0) += 1;
    }
    counts
}
