//! Go module scanner.
//!
//! Scans go.mod to detect declared Go dependencies.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{DeclaredType, DependencySignal, ManifestScanner, ScanError};

/// A require entry: module path followed by a version.
static REQUIRE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w./~-]+)\s+v[\w.+-]+").expect("valid regex"));

/// Scanner for go.mod dependencies.
pub struct GoScanner;

impl ManifestScanner for GoScanner {
    fn name(&self) -> &str {
        "go"
    }

    fn scan(&self, dir: &Path) -> Result<Vec<DependencySignal>, ScanError> {
        let manifest_path = dir.join("go.mod");
        if !manifest_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&manifest_path)?;

        let mut signals = Vec::new();
        let mut in_require_block = false;

        for line in content.lines() {
            let line = line.trim();

            if line.starts_with("require (") {
                in_require_block = true;
                continue;
            }
            if in_require_block && line.starts_with(')') {
                in_require_block = false;
                continue;
            }

            let candidate = if in_require_block {
                line
            } else if let Some(rest) = line.strip_prefix("require ") {
                rest.trim()
            } else {
                continue;
            };

            if let Some(caps) = REQUIRE_RE.captures(candidate) {
                let module_path = caps.get(1).map_or("", |m| m.as_str());
                // The final path segment is the recognizable name
                // (github.com/gin-gonic/gin -> gin).
                let name = module_path.rsplit('/').next().unwrap_or(module_path);
                signals.push(DependencySignal::new(name, DeclaredType::Production));
            }
        }

        Ok(signals)
    }
}
