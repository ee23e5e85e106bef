//! NPM/Yarn/PNPM/Bun package.json scanner.
//!
//! Scans package.json to detect declared JavaScript dependencies.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::{DeclaredType, DependencySignal, ManifestScanner, ScanError};

/// Scanner for package.json dependencies.
pub struct NpmScanner;

impl ManifestScanner for NpmScanner {
    fn name(&self) -> &str {
        "npm"
    }

    fn scan(&self, dir: &Path) -> Result<Vec<DependencySignal>, ScanError> {
        let manifest_path = dir.join("package.json");
        if !manifest_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&manifest_path)?;
        let package: PackageJson = serde_json::from_str(&content)?;

        let mut signals = Vec::new();

        for (names, declared_type) in [
            (&package.dependencies, DeclaredType::Production),
            (&package.dev_dependencies, DeclaredType::Dev),
            (&package.peer_dependencies, DeclaredType::Peer),
        ] {
            if let Some(deps) = names {
                for name in deps.keys() {
                    signals.push(DependencySignal::new(name.clone(), declared_type));
                }
            }
        }

        Ok(signals)
    }
}

/// Parsed package.json structure.
///
/// Version requirements are parsed but unused; only declaration sections
/// matter for signal extraction. A `BTreeMap` keeps detection order stable
/// across runs.
#[derive(Debug, Deserialize)]
struct PackageJson {
    /// Production dependencies
    dependencies: Option<BTreeMap<String, String>>,

    /// Dev dependencies
    #[serde(rename = "devDependencies")]
    dev_dependencies: Option<BTreeMap<String, String>>,

    /// Peer dependencies
    #[serde(rename = "peerDependencies")]
    peer_dependencies: Option<BTreeMap<String, String>>,
}
