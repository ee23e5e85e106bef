//! Workflow matching and confidence scoring.
//!
//! This module is the decision core: it flattens detection results into a
//! signal set, scores every catalog template against it, and produces a
//! ranked list of workflow suggestions with human-readable reasoning.

mod catalog;

pub use catalog::{categories, template, TriggerSet, TriggerTier, WorkflowTemplate, CATALOG};

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::scanner::DependencySignal;
use crate::structure::StructureSignals;

/// Minimum confidence for a template to be emitted as a suggestion.
pub const SUGGESTION_FLOOR: f32 = 0.3;

/// Fallback reasoning for a suggestion with no matched tiers.
///
/// Unreachable while the suggestion floor exceeds zero, but kept so a
/// zero-trigger template can never emit an empty reasoning field.
const GENERIC_REASONING: &str = "General recommendation based on project structure";

/// Flattened, case-normalized set of detection tokens.
///
/// A dependency contributes its name and, when categorized, its category
/// label; structure contributes every derived pattern label plus the
/// architecture itself when known. Membership is the only queried property.
#[derive(Debug, Clone, Default)]
pub struct SignalSet {
    tokens: HashSet<String>,
}

impl SignalSet {
    /// Create an empty signal set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the signal set from both analyzer outputs.
    pub fn from_analysis(dependencies: &[DependencySignal], structure: &StructureSignals) -> Self {
        let mut signals = Self::new();

        for dep in dependencies {
            signals.insert(&dep.name);
            if let Some(category) = dep.category.label() {
                signals.insert(category);
            }
        }

        for label in &structure.frameworks {
            signals.insert(label);
        }
        for label in &structure.project_types {
            signals.insert(label);
        }
        for label in &structure.key_patterns {
            signals.insert(label);
        }
        if let Some(architecture) = structure.architecture.label() {
            signals.insert(architecture);
        }

        signals
    }

    /// Insert a token, normalizing to lower case.
    pub fn insert(&mut self, token: &str) {
        let token = token.trim();
        if !token.is_empty() {
            self.tokens.insert(token.to_lowercase());
        }
    }

    /// Check whether a token is present (case-insensitive).
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&token.to_lowercase())
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the set holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the normalized tokens (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SignalSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut signals = Self::new();
        for token in iter {
            signals.insert(token.as_ref());
        }
        signals
    }
}

/// A ranked workflow suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSuggestion {
    /// Workflow name from the catalog
    pub name: String,

    /// Confidence score in [0, 1]
    pub confidence: f32,

    /// Human-readable justification
    pub reasoning: String,

    /// Workflow category
    pub category: String,

    /// Rough time estimate
    pub estimated_time: String,

    /// Prerequisites from the catalog
    pub prerequisites: Vec<String>,

    /// Triggers that matched, in strong-to-weak tier order
    pub matched_triggers: Vec<String>,
}

/// Scores catalog templates against a signal set.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowMatcher {
    catalog: &'static [WorkflowTemplate],
}

impl WorkflowMatcher {
    /// Create a matcher over the built-in catalog.
    pub fn new() -> Self {
        Self { catalog: CATALOG }
    }

    /// Create a matcher over a custom catalog.
    pub fn with_catalog(catalog: &'static [WorkflowTemplate]) -> Self {
        Self { catalog }
    }

    /// Score every template and return suggestions ranked by confidence.
    ///
    /// Templates below the suggestion floor are dropped entirely. The sort is
    /// stable, so equal-confidence suggestions keep catalog declaration order.
    pub fn suggest(&self, signals: &SignalSet) -> Vec<WorkflowSuggestion> {
        let mut suggestions: Vec<WorkflowSuggestion> =
            self.catalog.iter().filter_map(|tpl| score_template(tpl, signals)).collect();

        suggestions.sort_by(|a, b| {
            b.confidence.partial_cmp(&a.confidence).unwrap_or(std::cmp::Ordering::Equal)
        });

        suggestions
    }

    /// Group the matcher's workflows by category.
    pub fn categories(&self) -> BTreeMap<&'static str, Vec<&'static str>> {
        let mut map: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        for tpl in self.catalog {
            map.entry(tpl.category).or_default().push(tpl.name);
        }
        map
    }

    /// Fetch a single template's full detail by name.
    pub fn template(&self, name: &str) -> Option<&'static WorkflowTemplate> {
        self.catalog.iter().find(|t| t.name == name)
    }
}

impl Default for WorkflowMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Score one template against the signal set.
///
/// Returns `None` when the weighted confidence stays below the suggestion
/// floor.
fn score_template(tpl: &WorkflowTemplate, signals: &SignalSet) -> Option<WorkflowSuggestion> {
    let mut raw = 0.0_f32;
    let mut matched_triggers = Vec::new();
    let mut reasoning_parts = Vec::new();

    // Tiers are declared strong -> medium -> weak, so a single pass yields
    // both the weighted score and the tier-ordered match list.
    for set in &tpl.triggers {
        let matched: Vec<&str> =
            set.tokens.iter().copied().filter(|token| signals.contains(token)).collect();

        if matched.is_empty() {
            continue;
        }

        raw += matched.len() as f32 * set.tier.weight();
        reasoning_parts.push(format!("{}: {}", set.tier.label(), matched.join(", ")));
        matched_triggers.extend(matched.iter().map(|t| (*t).to_string()));
    }

    let confidence = raw.min(1.0);
    if confidence < SUGGESTION_FLOOR {
        return None;
    }

    let reasoning = if reasoning_parts.is_empty() {
        GENERIC_REASONING.to_string()
    } else {
        reasoning_parts.join(" | ")
    };

    Some(WorkflowSuggestion {
        name: tpl.name.to_string(),
        confidence,
        reasoning,
        category: tpl.category.to_string(),
        estimated_time: tpl.estimated_time.to_string(),
        prerequisites: tpl.prerequisites.iter().map(|p| (*p).to_string()).collect(),
        matched_triggers,
    })
}

/// Filter suggestions by category and/or minimum confidence.
///
/// Both filters are inclusive and order-preserving.
pub fn filter_suggestions(
    suggestions: &[WorkflowSuggestion],
    category: Option<&str>,
    min_confidence: f32,
) -> Vec<WorkflowSuggestion> {
    suggestions
        .iter()
        .filter(|s| category.map_or(true, |c| s.category == c))
        .filter(|s| s.confidence >= min_confidence)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_stack_signals() -> SignalSet {
        ["react", "express", "jest", "component-based", "api-driven", "test-driven", "full-stack"]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_signal_set_normalizes_case() {
        let mut signals = SignalSet::new();
        signals.insert("React");
        signals.insert("  Express  ");
        signals.insert("");

        assert_eq!(signals.len(), 2);
        assert!(signals.contains("react"));
        assert!(signals.contains("EXPRESS"));
        assert!(!signals.contains(""));
    }

    #[test]
    fn test_signal_set_collapses_duplicates() {
        let signals: SignalSet = ["jest", "Jest", "JEST"].into_iter().collect();
        assert_eq!(signals.len(), 1);
    }

    #[test]
    fn test_empty_signals_yield_no_suggestions() {
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&SignalSet::new());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_component_library_scores_high() {
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&full_stack_signals());

        let suggestion =
            suggestions.iter().find(|s| s.name == "component-library").expect("emitted");
        assert!(suggestion.confidence >= 0.9);
        assert!(suggestion.reasoning.contains("react"));
    }

    #[test]
    fn test_confidence_capped_at_one() {
        // full-stack-documentation matches react + express (strong) plus
        // full-stack (medium): raw 2.5, capped to 1.0.
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&full_stack_signals());

        for suggestion in &suggestions {
            assert!(suggestion.confidence >= 0.0);
            assert!(suggestion.confidence <= 1.0);
        }

        let doc = suggestions.iter().find(|s| s.name == "full-stack-documentation").unwrap();
        assert!((doc.confidence - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_monotonicity_adding_signals() {
        let matcher = WorkflowMatcher::new();

        let mut signals = SignalSet::new();
        signals.insert("jest");
        let base = matcher
            .suggest(&signals)
            .into_iter()
            .find(|s| s.name == "frontend-testing")
            .unwrap()
            .confidence;

        signals.insert("cypress");
        let grown = matcher
            .suggest(&signals)
            .into_iter()
            .find(|s| s.name == "frontend-testing")
            .unwrap()
            .confidence;

        assert!(grown >= base);
    }

    #[test]
    fn test_suggestion_floor_drops_weak_only_misses() {
        // A signal matching nothing at all emits nothing.
        let signals: SignalSet = ["left-pad"].into_iter().collect();
        let matcher = WorkflowMatcher::new();
        assert!(matcher.suggest(&signals).is_empty());
    }

    #[test]
    fn test_single_weak_match_clears_floor() {
        // One weak match scores 0.5, above the 0.3 floor.
        let signals: SignalSet = ["docker"].into_iter().collect();
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&signals);

        let docker = suggestions.iter().find(|s| s.name == "docker-setup").unwrap();
        assert!((docker.confidence - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_matched_triggers_tier_order() {
        // frontend-testing: jest (strong), tests/ (medium), test (weak).
        let signals: SignalSet = ["jest", "tests/", "test"].into_iter().collect();
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&signals);

        let testing = suggestions.iter().find(|s| s.name == "frontend-testing").unwrap();
        assert_eq!(testing.matched_triggers, vec!["jest", "tests/", "test"]);
    }

    #[test]
    fn test_matched_triggers_subset_of_declared() {
        let matcher = WorkflowMatcher::new();
        let signals = full_stack_signals();

        for suggestion in matcher.suggest(&signals) {
            let tpl = matcher.template(&suggestion.name).unwrap();
            let declared: Vec<&str> =
                tpl.triggers.iter().flat_map(|set| set.tokens.iter().copied()).collect();

            for trigger in &suggestion.matched_triggers {
                assert!(declared.contains(&trigger.as_str()));
                assert!(signals.contains(trigger));
            }
        }
    }

    #[test]
    fn test_reasoning_joins_tiers_with_pipe() {
        let signals: SignalSet = ["jest", "tests/"].into_iter().collect();
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&signals);

        let testing = suggestions.iter().find(|s| s.name == "frontend-testing").unwrap();
        assert_eq!(
            testing.reasoning,
            "Strong indicators: jest | Supporting indicators: tests/"
        );
    }

    #[test]
    fn test_ranking_is_descending() {
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&full_stack_signals());
        assert!(!suggestions.is_empty());

        for pair in suggestions.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_equal_confidence_keeps_catalog_order() {
        // database-schema and database-migration both match only "database"
        // (medium, 0.7) from this set; catalog declares schema first.
        let signals: SignalSet = ["database"].into_iter().collect();
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&signals);

        let schema = suggestions.iter().position(|s| s.name == "database-schema").unwrap();
        let migration =
            suggestions.iter().position(|s| s.name == "database-migration").unwrap();
        assert!(schema < migration);
        assert!(
            (suggestions[schema].confidence - suggestions[migration].confidence).abs()
                < f32::EPSILON
        );
    }

    #[test]
    fn test_filter_by_category() {
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&full_stack_signals());

        let testing = filter_suggestions(&suggestions, Some("testing"), 0.0);
        assert!(!testing.is_empty());
        assert!(testing.iter().all(|s| s.category == "testing"));

        // Relative order preserved
        let names: Vec<&str> = suggestions
            .iter()
            .filter(|s| s.category == "testing")
            .map(|s| s.name.as_str())
            .collect();
        let filtered_names: Vec<&str> = testing.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, filtered_names);
    }

    #[test]
    fn test_filter_min_confidence_inclusive() {
        let matcher = WorkflowMatcher::new();
        let suggestions = matcher.suggest(&full_stack_signals());

        let high = filter_suggestions(&suggestions, None, 0.9);
        assert!(high.iter().all(|s| s.confidence >= 0.9));

        let all = filter_suggestions(&suggestions, None, 0.0);
        assert_eq!(all.len(), suggestions.len());
    }

    #[test]
    fn test_categories_listing() {
        let matcher = WorkflowMatcher::new();
        let cats = matcher.categories();
        assert!(cats["testing"].contains(&"frontend-testing"));
        assert!(cats["frontend"].contains(&"component-library"));
    }
}
