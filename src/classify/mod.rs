use tracing::debug;

use crate::model::{extend_unique, FeatureVector, OutputLang, Signals, SiteType};
use crate::vocab::{self, Rule};

/// Longest stated goal quoted back in the improved prompt, in characters.
pub const STATED_GOAL_MAX_CHARS: usize = 280;

/// Trim and lower-case raw input for pattern matching.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Collapse whitespace runs and cap the original text for quoting.
pub fn stated_goal(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(STATED_GOAL_MAX_CHARS).collect()
}

/// Classify free text into a feature vector. Hints play no part here.
pub fn classify(text: &str) -> FeatureVector {
    FeatureVector::assemble(detect(text))
}

/// Raw detection pass: every field keeps its own collect or first-wins policy.
pub fn detect(text: &str) -> Signals {
    let norm = normalize(text);

    let signals = Signals {
        stated_goal: stated_goal(text),
        audience: collect_labels(&vocab::AUDIENCE_RULES, &norm),
        site_type: detect_site_type(&norm),
        tone: collect_labels(&vocab::TONE_RULES, &norm),
        detected_features: collect_labels(&vocab::FEATURE_RULES, &norm),
        extra_features: Vec::new(),
        industries: collect_labels(&vocab::INDUSTRY_RULES, &norm),
        regions: collect_labels(&vocab::REGION_RULES, &norm),
        languages: collect_labels(&vocab::LANGUAGE_RULES, &norm),
        currency: first_label(&vocab::CURRENCY_RULES, &norm).map(str::to_string),
        payment_keyword: rule_matches(&vocab::PAYMENT_RULE, &norm),
        payments_override: None,
        compliance: collect_labels(&vocab::COMPLIANCE_RULES, &norm),
        project_mode: detect_project_mode(&norm),
        output_lang: OutputLang::default(),
    };

    debug!(
        site_type = %signals.site_type,
        project_mode = signals.project_mode,
        features = signals.detected_features.len(),
        "classified idea"
    );
    signals
}

/// Category tests run in fixed order; the first hit decides.
pub fn detect_site_type(norm: &str) -> SiteType {
    vocab::SITE_TYPE_RULES
        .iter()
        .find(|rule| rule.is_match(norm))
        .map(|rule| rule.label)
        .unwrap_or(SiteType::Generic)
}

pub fn detect_project_mode(norm: &str) -> bool {
    rule_matches(&vocab::PROJECT_MODE_RULE, norm)
}

fn rule_matches(rule: &Option<regex::Regex>, norm: &str) -> bool {
    rule.as_ref().is_some_and(|re| re.is_match(norm))
}

fn collect_labels(rules: &[Rule<&'static str>], norm: &str) -> Vec<String> {
    let mut out = Vec::new();
    let hits: Vec<&str> = rules
        .iter()
        .filter(|rule| rule.is_match(norm))
        .map(|rule| rule.label)
        .collect();
    extend_unique(&mut out, &hits);
    out
}

fn first_label(rules: &[Rule<&'static str>], norm: &str) -> Option<&'static str> {
    rules.iter().find(|rule| rule.is_match(norm)).map(|rule| rule.label)
}
