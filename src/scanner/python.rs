//! Python requirements scanner.
//!
//! Scans requirements.txt to detect declared Python dependencies.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{DeclaredType, DependencySignal, ManifestScanner, ScanError};

/// Leading package name, before any version specifier or extras.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*").expect("valid regex"));

/// Scanner for requirements.txt dependencies.
pub struct PythonScanner;

impl ManifestScanner for PythonScanner {
    fn name(&self) -> &str {
        "python"
    }

    fn scan(&self, dir: &Path) -> Result<Vec<DependencySignal>, ScanError> {
        let manifest_path = dir.join("requirements.txt");
        if !manifest_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&manifest_path)?;

        let mut signals = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = NAME_RE.find(line) {
                signals.push(DependencySignal::new(name.as_str(), DeclaredType::Production));
            }
        }

        Ok(signals)
    }
}
