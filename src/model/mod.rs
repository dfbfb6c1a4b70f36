use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::defaults;

/// ========================================
/// Closed enumerations
/// ========================================

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    Saas,
    Ecommerce,
    Portfolio,
    Restaurant,
    Blog,
    Event,
    Booking,
    #[default]
    Generic,
}

impl SiteType {
    pub const ALL: [SiteType; 8] = [
        SiteType::Saas,
        SiteType::Ecommerce,
        SiteType::Portfolio,
        SiteType::Restaurant,
        SiteType::Blog,
        SiteType::Event,
        SiteType::Booking,
        SiteType::Generic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SiteType::Saas => "saas",
            SiteType::Ecommerce => "ecommerce",
            SiteType::Portfolio => "portfolio",
            SiteType::Restaurant => "restaurant",
            SiteType::Blog => "blog",
            SiteType::Event => "event",
            SiteType::Booking => "booking",
            SiteType::Generic => "generic",
        }
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value `{0}`")]
pub struct UnknownValue(pub String);

impl FromStr for SiteType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SiteType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLang {
    #[default]
    En,
    Ar,
}

impl OutputLang {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputLang::En => "en",
            OutputLang::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, OutputLang::Ar)
    }
}

impl fmt::Display for OutputLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputLang {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(OutputLang::En),
            "ar" => Ok(OutputLang::Ar),
            _ => Err(UnknownValue(s.to_string())),
        }
    }
}

/// ========================================
/// Feature vector
/// ========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub name: String,
    pub path: String,
}

/// The merged, render-ready description of a website idea.
///
/// Built in one go by [`FeatureVector::assemble`]; the classifier and the hint
/// merger each produce a fresh value instead of editing an existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub audience: Vec<String>,
    pub site_type: SiteType,
    pub tone: Vec<String>,
    pub detected_features: Vec<String>,
    pub selected_features: Vec<String>,
    pub industries: Vec<String>,
    pub regions: Vec<String>,
    pub languages: Vec<String>,
    pub currency: String,
    pub requires_payments: bool,
    pub compliance: Vec<String>,
    pub pages: Vec<String>,
    pub sitemap: Vec<SitemapEntry>,
    pub user_stories: Vec<String>,
    pub kpis: Vec<String>,
    pub content_checklist: Vec<String>,
    pub milestones: Vec<String>,
    pub personas: Vec<String>,
    pub clarifying_questions: Vec<String>,
    pub tech_suggestions: Vec<String>,
    pub project_mode: bool,
    pub output_lang: OutputLang,
    pub stated_goal: String,
    /// Raw text-level facts kept so a hint overlay can re-derive the vector.
    #[serde(skip)]
    pub(crate) signals: Signals,
}

/// Text-derived facts plus scalar overrides, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signals {
    pub stated_goal: String,
    pub audience: Vec<String>,
    pub site_type: SiteType,
    pub tone: Vec<String>,
    pub detected_features: Vec<String>,
    pub extra_features: Vec<String>,
    pub industries: Vec<String>,
    pub regions: Vec<String>,
    pub languages: Vec<String>,
    pub currency: Option<String>,
    pub payment_keyword: bool,
    pub payments_override: Option<bool>,
    pub compliance: Vec<String>,
    pub project_mode: bool,
    pub output_lang: OutputLang,
}

impl FeatureVector {
    /// Apply fallbacks and site-type defaults to a set of signals.
    pub fn assemble(signals: Signals) -> Self {
        let site = signals.site_type;

        let audience = or_fallback(&signals.audience, &[defaults::FALLBACK_AUDIENCE]);
        let tone = or_fallback(&signals.tone, defaults::FALLBACK_TONE);
        let industries = or_fallback(&signals.industries, &[defaults::FALLBACK_INDUSTRY]);
        let regions = or_fallback(&signals.regions, &[defaults::FALLBACK_REGION]);
        let languages = or_fallback(&signals.languages, &[defaults::FALLBACK_LANGUAGE]);
        let detected_features = dedup(&signals.detected_features);
        let compliance = dedup(&signals.compliance);
        let currency = signals
            .currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| defaults::FALLBACK_CURRENCY.to_string());

        let mut selected_features = Vec::new();
        extend_unique(&mut selected_features, defaults::features(site));
        extend_unique(&mut selected_features, &detected_features);
        extend_unique(&mut selected_features, &signals.extra_features);

        let checkout_selected = contains(&selected_features, defaults::CHECKOUT_FEATURE);
        let requires_payments = signals
            .payments_override
            .unwrap_or(signals.payment_keyword || checkout_selected);
        let arabic = contains(&languages, defaults::ARABIC);
        let blog = contains(&selected_features, defaults::BLOG_FEATURE);
        let has_compliance = !compliance.is_empty();

        let mut pages = Vec::new();
        extend_unique(&mut pages, defaults::pages(site));
        if blog {
            push_unique(&mut pages, defaults::BLOG_PAGE);
        }
        if requires_payments {
            push_unique(&mut pages, defaults::payments_page(site));
        }

        let mut user_stories = Vec::new();
        extend_unique(&mut user_stories, defaults::BASE_USER_STORIES);
        extend_unique(&mut user_stories, defaults::user_stories(site));
        if requires_payments {
            push_unique(&mut user_stories, defaults::PAYMENT_USER_STORY);
        }
        if arabic {
            push_unique(&mut user_stories, defaults::ARABIC_USER_STORY);
        }

        let mut kpis = Vec::new();
        extend_unique(&mut kpis, defaults::BASE_KPIS);
        extend_unique(&mut kpis, defaults::kpis(site));
        if requires_payments {
            push_unique(&mut kpis, defaults::PAYMENT_KPI);
        }

        let mut content_checklist = Vec::new();
        extend_unique(&mut content_checklist, defaults::BASE_CONTENT_CHECKLIST);
        extend_unique(&mut content_checklist, defaults::content_checklist(site));
        if arabic {
            push_unique(&mut content_checklist, defaults::ARABIC_CONTENT_ITEM);
        }
        if has_compliance {
            push_unique(&mut content_checklist, defaults::COMPLIANCE_CONTENT_ITEM);
        }

        let mut milestones = Vec::new();
        extend_unique(&mut milestones, defaults::BASE_MILESTONES);
        extend_unique(&mut milestones, defaults::milestones(site));

        let mut personas = Vec::new();
        extend_unique(&mut personas, defaults::BASE_PERSONAS);
        extend_unique(&mut personas, defaults::personas(site));
        if arabic {
            push_unique(&mut personas, defaults::ARABIC_PERSONA);
        }

        let mut clarifying_questions = Vec::new();
        extend_unique(&mut clarifying_questions, defaults::BASE_QUESTIONS);
        if requires_payments {
            push_unique(&mut clarifying_questions, defaults::PAYMENT_QUESTION);
        }
        if arabic {
            push_unique(&mut clarifying_questions, defaults::ARABIC_QUESTION);
        }
        if let Some(q) = defaults::site_question(site) {
            push_unique(&mut clarifying_questions, q);
        }
        if has_compliance {
            push_unique(&mut clarifying_questions, defaults::COMPLIANCE_QUESTION);
        }

        let mut tech_suggestions = Vec::new();
        extend_unique(&mut tech_suggestions, defaults::BASE_TECH);
        if requires_payments {
            push_unique(&mut tech_suggestions, defaults::payment_gateway(&regions));
        }
        if arabic {
            push_unique(&mut tech_suggestions, defaults::I18N_TECH);
        }
        if blog {
            push_unique(&mut tech_suggestions, defaults::BLOG_TECH);
        }

        let sitemap = sitemap(&pages);

        Self {
            audience,
            site_type: site,
            tone,
            detected_features,
            selected_features,
            industries,
            regions,
            languages,
            currency,
            requires_payments,
            compliance,
            pages,
            sitemap,
            user_stories,
            kpis,
            content_checklist,
            milestones,
            personas,
            clarifying_questions,
            tech_suggestions,
            project_mode: signals.project_mode,
            output_lang: signals.output_lang,
            stated_goal: signals.stated_goal.clone(),
            signals,
        }
    }

    pub fn signals(&self) -> &Signals {
        &self.signals
    }

    pub fn has_arabic(&self) -> bool {
        contains(&self.languages, defaults::ARABIC)
    }
}

/// ========================================
/// Set helpers
/// ========================================

fn same(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

pub fn contains(set: &[String], item: &str) -> bool {
    set.iter().any(|s| same(s, item))
}

/// Append `item` unless an equal entry (case-insensitive, trimmed) exists.
/// Blank items are dropped.
pub fn push_unique(set: &mut Vec<String>, item: &str) -> bool {
    let item = item.trim();
    if item.is_empty() || contains(set, item) {
        return false;
    }
    set.push(item.to_string());
    true
}

pub fn extend_unique<S: AsRef<str>>(set: &mut Vec<String>, items: &[S]) {
    for item in items {
        push_unique(set, item.as_ref());
    }
}

fn dedup(items: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(items.len());
    extend_unique(&mut out, items);
    out
}

fn or_fallback(items: &[String], fallback: &[&str]) -> Vec<String> {
    let out = dedup(items);
    if out.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        out
    }
}

/// ========================================
/// Slugs & sitemap
/// ========================================

/// Lower-case, collapse every run of non-alphanumerics to one hyphen, trim
/// hyphens from both ends, prefix with `/`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 1);
    slug.push('/');
    let mut gap = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if gap && slug.len() > 1 {
                slug.push('-');
            }
            gap = false;
            slug.push(ch);
        } else {
            gap = true;
        }
    }
    slug
}

pub fn sitemap(pages: &[String]) -> Vec<SitemapEntry> {
    pages
        .iter()
        .map(|name| SitemapEntry { name: name.clone(), path: slugify(name) })
        .collect()
}
