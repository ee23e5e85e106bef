//! Workscout - workflow discovery for your project.
//!
//! Workscout detects your project's stack from manifests and layout, then
//! ranks workflow suggestions by how well the evidence supports them.

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use workscout::{
    config::Config,
    matcher::{self, filter_suggestions, SignalSet, WorkflowMatcher},
    report, scanner,
    scanner::DependencyScanner,
    structure::StructureAnalyzer,
};

/// Workflow discovery for your project
#[derive(Parser)]
#[command(name = "workscout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest workflows for a project (default)
    Suggest {
        /// Directory to analyze
        #[arg(default_value = ".")]
        path: String,

        /// Only show suggestions from this category
        #[arg(short, long)]
        category: Option<String>,

        /// Minimum confidence to display (0.0 - 1.0)
        #[arg(short, long)]
        min_confidence: Option<f32>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Analyze a project without scoring workflows
    Analyze {
        /// Directory to analyze
        #[arg(default_value = ".")]
        path: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List all catalog workflows by category
    Workflows,

    /// Show full detail for a single workflow
    Show {
        /// Workflow name
        name: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    match cli.command {
        None => {
            cmd_suggest(".", None, None, "text")?;
        }
        Some(Commands::Suggest { path, category, min_confidence, format }) => {
            cmd_suggest(&path, category.as_deref(), min_confidence, &format)?;
        }
        Some(Commands::Analyze { path, format }) => {
            cmd_analyze(&path, &format)?;
        }
        Some(Commands::Workflows) => {
            cmd_workflows();
        }
        Some(Commands::Show { name }) => {
            cmd_show(&name);
        }
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Run the full pipeline and print ranked suggestions.
fn cmd_suggest(
    path: &str,
    category: Option<&str>,
    min_confidence: Option<f32>,
    format: &str,
) -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });
    let min_confidence = min_confidence.unwrap_or(config.suggest.min_confidence);

    let root = Path::new(path);
    let dependencies = DependencyScanner::new(root).scan();
    let structure = StructureAnalyzer::new(root)
        .with_max_depth(config.structure.max_depth)
        .analyze();

    let signals = SignalSet::from_analysis(&dependencies, &structure.signals);
    tracing::debug!(signals = signals.len(), "Flattened detection signals");

    let suggestions = WorkflowMatcher::new().suggest(&signals);
    let suggestions = filter_suggestions(&suggestions, category, min_confidence);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        print!("{}", report::render_suggestions(&suggestions));
    }

    Ok(())
}

/// Print analyzer output without scoring.
fn cmd_analyze(path: &str, format: &str) -> Result<()> {
    let config = Config::load().unwrap_or_default();

    let root = Path::new(path);
    let dependencies = DependencyScanner::new(root).scan();
    let summary = scanner::summarize(&dependencies);
    let structure = StructureAnalyzer::new(root)
        .with_max_depth(config.structure.max_depth)
        .analyze();

    if format == "json" {
        let analysis = serde_json::json!({
            "dependencies": dependencies,
            "summary": summary,
            "structure": structure,
        });
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", report::render_analysis(&summary, &structure));
    }

    Ok(())
}

/// List catalog workflows grouped by category.
fn cmd_workflows() {
    print!("{}", report::render_categories(matcher::categories()));
}

/// Show one workflow's full detail.
fn cmd_show(name: &str) {
    match matcher::template(name) {
        Some(tpl) => print!("{}", report::render_template(tpl)),
        None => println!("No workflow named '{name}'. Try 'workscout workflows'."),
    }
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
