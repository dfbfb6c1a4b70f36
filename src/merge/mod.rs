use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::model::{extend_unique, sitemap, FeatureVector, OutputLang, Signals, SiteType};

/// Caller-supplied overrides and additions.
///
/// Scalars replace the classified value when present and valid. Lists are
/// appended to the classified sets, skipping entries already present. Keys
/// this struct does not know are kept in `unknown` and otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_payments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_lang: Option<String>,

    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub audience: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub tone: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub industries: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub compliance: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub user_stories: Vec<String>,
    #[serde(
        alias = "techSuggestions",
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tech: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub content_checklist: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub personas: Vec<String>,
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub kpis: Vec<String>,
    #[serde(
        alias = "questions",
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub clarifying_questions: Vec<String>,

    #[serde(flatten)]
    pub unknown: BTreeMap<String, Value>,
}

/// Accept `"x"`, `["x", "y"]` or `null`; drop blank entries.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let items = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    };
    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

fn pick(later: &Option<String>, earlier: &Option<String>) -> Option<String> {
    later
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| earlier.clone())
}

impl Hints {
    pub fn is_empty(&self) -> bool {
        self == &Hints::default()
    }

    /// Lay `other` over `self`: its scalars win, its list entries are appended.
    pub fn overlay(&self, other: &Hints) -> Hints {
        let mut out = self.clone();
        out.site_type = pick(&other.site_type, &self.site_type);
        out.currency = pick(&other.currency, &self.currency);
        out.output_lang = pick(&other.output_lang, &self.output_lang);
        out.project_mode = other.project_mode.or(self.project_mode);
        out.requires_payments = other.requires_payments.or(self.requires_payments);

        extend_unique(&mut out.audience, &other.audience);
        extend_unique(&mut out.tone, &other.tone);
        extend_unique(&mut out.features, &other.features);
        extend_unique(&mut out.industries, &other.industries);
        extend_unique(&mut out.regions, &other.regions);
        extend_unique(&mut out.languages, &other.languages);
        extend_unique(&mut out.compliance, &other.compliance);
        extend_unique(&mut out.pages, &other.pages);
        extend_unique(&mut out.user_stories, &other.user_stories);
        extend_unique(&mut out.tech, &other.tech);
        extend_unique(&mut out.content_checklist, &other.content_checklist);
        extend_unique(&mut out.milestones, &other.milestones);
        extend_unique(&mut out.personas, &other.personas);
        extend_unique(&mut out.kpis, &other.kpis);
        extend_unique(&mut out.clarifying_questions, &other.clarifying_questions);
        for (k, v) in &other.unknown {
            out.unknown.insert(k.clone(), v.clone());
        }
        out
    }

    /// Overlay a sequence of hint bags, earliest first.
    pub fn combine<'a, I>(sources: I) -> Hints
    where
        I: IntoIterator<Item = &'a Hints>,
    {
        sources
            .into_iter()
            .fold(Hints::default(), |acc, h| acc.overlay(h))
    }

    pub fn with_output_lang(mut self, lang: OutputLang) -> Self {
        self.output_lang = Some(lang.as_str().to_string());
        self
    }

    pub fn site_type(&self) -> Option<SiteType> {
        parse_or_ignore(self.site_type.as_deref(), "siteType")
    }

    pub fn output_lang(&self) -> Option<OutputLang> {
        parse_or_ignore(self.output_lang.as_deref(), "outputLang")
    }
}

fn parse_or_ignore<T: std::str::FromStr>(raw: Option<&str>, field: &str) -> Option<T> {
    let raw = raw?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!(field, value = raw, "ignoring invalid hint value");
            None
        }
    }
}

/// Build the final vector from the classifier's output and the hints.
///
/// The base vector is left untouched. Fields that depend on the site type,
/// payments or languages are re-derived after the overlay, then the hinted
/// entries for the derived lists are appended.
pub fn merge(base: &FeatureVector, hints: &Hints) -> FeatureVector {
    if !hints.unknown.is_empty() {
        debug!(keys = ?hints.unknown.keys().collect::<Vec<_>>(), "ignoring unknown hint keys");
    }

    let raw = base.signals();
    let mut signals = Signals {
        stated_goal: base.stated_goal.clone(),
        audience: base.audience.clone(),
        site_type: hints.site_type().unwrap_or(base.site_type),
        tone: base.tone.clone(),
        detected_features: base.detected_features.clone(),
        extra_features: raw.extra_features.clone(),
        industries: base.industries.clone(),
        regions: base.regions.clone(),
        languages: base.languages.clone(),
        currency: pick(&hints.currency, &Some(base.currency.clone())),
        payment_keyword: raw.payment_keyword,
        payments_override: hints.requires_payments.or(raw.payments_override),
        compliance: base.compliance.clone(),
        project_mode: hints.project_mode.unwrap_or(base.project_mode),
        output_lang: hints.output_lang().unwrap_or(base.output_lang),
    };

    extend_unique(&mut signals.audience, &hints.audience);
    extend_unique(&mut signals.tone, &hints.tone);
    extend_unique(&mut signals.extra_features, &hints.features);
    extend_unique(&mut signals.industries, &hints.industries);
    extend_unique(&mut signals.regions, &hints.regions);
    extend_unique(&mut signals.languages, &hints.languages);
    extend_unique(&mut signals.compliance, &hints.compliance);

    let mut merged = FeatureVector::assemble(signals);
    extend_unique(&mut merged.pages, &hints.pages);
    extend_unique(&mut merged.user_stories, &hints.user_stories);
    extend_unique(&mut merged.tech_suggestions, &hints.tech);
    extend_unique(&mut merged.content_checklist, &hints.content_checklist);
    extend_unique(&mut merged.milestones, &hints.milestones);
    extend_unique(&mut merged.personas, &hints.personas);
    extend_unique(&mut merged.kpis, &hints.kpis);
    extend_unique(&mut merged.clarifying_questions, &hints.clarifying_questions);
    merged.sitemap = sitemap(&merged.pages);
    merged
}
