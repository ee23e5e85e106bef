//! Plain-text rendering of analysis results and suggestions.

use crate::matcher::{WorkflowSuggestion, WorkflowTemplate};
use crate::scanner::DependencySummary;
use crate::structure::StructureReport;

/// Render ranked suggestions.
pub fn render_suggestions(suggestions: &[WorkflowSuggestion]) -> String {
    if suggestions.is_empty() {
        return "No workflow suggestions for this project.\n".to_string();
    }

    let mut out = String::from("=== Workflow Suggestions ===\n");

    for suggestion in suggestions {
        out.push_str(&format!("\n{}\n", suggestion.name));
        out.push_str(&format!("  Confidence: {:.2}\n", suggestion.confidence));
        out.push_str(&format!("  Category: {}\n", suggestion.category));
        out.push_str(&format!("  Estimated time: {}\n", suggestion.estimated_time));
        out.push_str(&format!("  Reasoning: {}\n", suggestion.reasoning));
        if !suggestion.prerequisites.is_empty() {
            out.push_str(&format!(
                "  Prerequisites: {}\n",
                suggestion.prerequisites.join(", ")
            ));
        }
        if !suggestion.matched_triggers.is_empty() {
            out.push_str(&format!(
                "  Matched triggers: {}\n",
                suggestion.matched_triggers.join(", ")
            ));
        }
    }

    out
}

/// Render analyzer output without scoring.
pub fn render_analysis(dependencies: &DependencySummary, structure: &StructureReport) -> String {
    let mut out = String::from("=== Dependency Analysis ===\n");
    out.push_str(&format!("Total dependencies: {}\n", dependencies.total));

    for (category, names) in &dependencies.by_category {
        out.push_str(&format!("  {category}: {}\n", names.join(", ")));
    }

    out.push_str("\n=== Structure Analysis ===\n");
    out.push_str(&format!("Total folders: {}\n", structure.total_folders));
    out.push_str(&format!("Total files: {}\n", structure.total_files));
    out.push_str(&format!("Architecture: {}\n", structure.signals.architecture));

    if !structure.signals.frameworks.is_empty() {
        out.push_str(&format!("Frameworks: {}\n", structure.signals.frameworks.join(", ")));
    }
    if !structure.signals.project_types.is_empty() {
        out.push_str(&format!(
            "Project types: {}\n",
            structure.signals.project_types.join(", ")
        ));
    }
    if !structure.signals.key_patterns.is_empty() {
        out.push_str(&format!(
            "Key patterns: {}\n",
            structure.signals.key_patterns.join(", ")
        ));
    }

    out
}

/// Render the catalog grouped by category.
pub fn render_categories<'a, I>(categories: I) -> String
where
    I: IntoIterator<Item = (&'a str, Vec<&'a str>)>,
{
    let mut out = String::from("=== Workflow Categories ===\n");
    for (category, workflows) in categories {
        out.push_str(&format!("{category}: {}\n", workflows.join(", ")));
    }
    out
}

/// Render a single template's full detail.
pub fn render_template(tpl: &WorkflowTemplate) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", tpl.name));
    out.push_str(&format!("  Category: {}\n", tpl.category));
    out.push_str(&format!("  Estimated time: {}\n", tpl.estimated_time));
    out.push_str(&format!("  Description: {}\n", tpl.description));
    out.push_str(&format!("  Prerequisites: {}\n", tpl.prerequisites.join(", ")));

    for set in &tpl.triggers {
        out.push_str(&format!(
            "  {} triggers: {}\n",
            set.tier.label(),
            set.tokens.join(", ")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher;

    #[test]
    fn test_render_empty_suggestions() {
        let out = render_suggestions(&[]);
        assert!(out.contains("No workflow suggestions"));
    }

    #[test]
    fn test_render_suggestions_contains_fields() {
        let suggestion = WorkflowSuggestion {
            name: "docker-setup".to_string(),
            confidence: 0.5,
            reasoning: "Additional indicators: docker".to_string(),
            category: "deployment".to_string(),
            estimated_time: "15-30 minutes".to_string(),
            prerequisites: vec!["Application code".to_string()],
            matched_triggers: vec!["docker".to_string()],
        };

        let out = render_suggestions(&[suggestion]);
        assert!(out.contains("docker-setup"));
        assert!(out.contains("Confidence: 0.50"));
        assert!(out.contains("Additional indicators: docker"));
    }

    #[test]
    fn test_render_template_lists_tiers() {
        let tpl = matcher::template("component-library").unwrap();
        let out = render_template(tpl);
        assert!(out.contains("Strong indicators: react"));
        assert!(out.contains("frontend"));
    }
}
