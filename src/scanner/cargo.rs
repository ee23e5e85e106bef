//! Cargo/Rust manifest scanner.
//!
//! Scans Cargo.toml to detect declared Rust dependencies.

use std::path::Path;

use serde::Deserialize;

use super::{DeclaredType, DependencySignal, ManifestScanner, ScanError};

/// Scanner for Cargo.toml dependencies.
pub struct CargoScanner;

impl ManifestScanner for CargoScanner {
    fn name(&self) -> &str {
        "cargo"
    }

    fn scan(&self, dir: &Path) -> Result<Vec<DependencySignal>, ScanError> {
        let manifest_path = dir.join("Cargo.toml");
        if !manifest_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&manifest_path)?;
        let manifest: CargoToml = toml::from_str(&content)?;

        let mut signals = Vec::new();

        if let Some(deps) = &manifest.dependencies {
            for name in deps.keys() {
                signals.push(DependencySignal::new(name.clone(), DeclaredType::Production));
            }
        }

        if let Some(deps) = &manifest.dev_dependencies {
            for name in deps.keys() {
                signals.push(DependencySignal::new(name.clone(), DeclaredType::Dev));
            }
        }

        Ok(signals)
    }
}

/// Parsed Cargo.toml structure.
///
/// Dependency values may be version strings or detailed tables; only the
/// keys matter here, so both forms deserialize as opaque TOML values.
#[derive(Debug, Deserialize)]
struct CargoToml {
    /// [dependencies] table
    dependencies: Option<toml::value::Table>,

    /// [dev-dependencies] table
    #[serde(rename = "dev-dependencies")]
    dev_dependencies: Option<toml::value::Table>,
}
