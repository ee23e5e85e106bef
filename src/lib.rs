//! # Workscout
//!
//! Workflow discovery for your project - detect your stack and get ranked
//! workflow suggestions.
//!
//! Workscout inspects a project's manifest files and directory layout,
//! classifies the technologies and patterns it finds, and scores a catalog
//! of workflow templates (documentation, testing, deployment, ...) by how
//! well their trigger conditions match the detected signals.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install
//! cargo install workscout
//!
//! # Get suggestions for the current project
//! workscout suggest
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::map_unwrap_or)]
#![allow(clippy::option_if_let_else)]

pub mod config;
pub mod matcher;
pub mod report;
pub mod scanner;
pub mod structure;

// Re-export commonly used types
pub use config::Config;
pub use matcher::{
    filter_suggestions, SignalSet, TriggerTier, WorkflowMatcher, WorkflowSuggestion,
    WorkflowTemplate,
};
pub use scanner::{DeclaredType, DependencyCategory, DependencyScanner, DependencySignal};
pub use structure::{Architecture, StructureAnalyzer, StructureSignals};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "workscout";
