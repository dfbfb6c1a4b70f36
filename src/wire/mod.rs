use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::engine::EngineOutput;
use crate::merge::Hints;
use crate::model::{FeatureVector, OutputLang};

/// ========================================
/// Request/Response shapes
/// ========================================

/// One improve-idea request as a transport would receive it.
///
/// Hints may arrive in up to four bags; they are overlaid in the order
/// `meta`, `brief`, `project`, `hints`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImproveRequest {
    #[serde(alias = "text", alias = "prompt")]
    pub idea: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Hints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief: Option<Hints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Hints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Hints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_details: Option<bool>,
    /// Caller identity for rate limiting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

impl ImproveRequest {
    pub fn new(idea: impl Into<String>) -> Self {
        Self { idea: idea.into(), ..Self::default() }
    }

    /// All hint bags overlaid into one.
    pub fn merged_hints(&self) -> Hints {
        Hints::combine(
            [&self.meta, &self.brief, &self.project, &self.hints]
                .into_iter()
                .flatten(),
        )
    }

    /// Request-level language. Invalid values are ignored.
    pub fn output_lang(&self) -> Option<OutputLang> {
        let raw = self.output_lang.as_deref()?;
        match raw.parse() {
            Ok(lang) => Some(lang),
            Err(_) => {
                debug!(value = raw, "ignoring invalid outputLang");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveResponse {
    pub improved_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint: Option<String>,
    pub processing_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FeatureVector>,
    /// Served from the response cache.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cached: bool,
}

impl ImproveResponse {
    pub fn from_output(out: EngineOutput, include_details: bool) -> Self {
        Self {
            improved_prompt: out.improved_prompt,
            blueprint: out.blueprint,
            processing_ms: out.processing_ms,
            details: include_details.then_some(out.detail),
            cached: false,
        }
    }
}

/// Identifies one saved run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStamp {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl RunStamp {
    pub fn now() -> Self {
        Self { id: Uuid::new_v4(), timestamp: Utc::now() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord<T> {
    pub run: RunStamp,
    #[serde(flatten)]
    pub body: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bags_overlay_in_order() {
        let req: ImproveRequest = serde_json::from_value(json!({
            "idea": "a shop",
            "meta": { "siteType": "blog", "features": "FAQ" },
            "brief": { "siteType": "event" },
            "project": { "currency": "sar", "features": ["Blog", "faq"] },
            "hints": { "siteType": "booking" }
        }))
        .unwrap();
        let h = req.merged_hints();
        assert_eq!(h.site_type.as_deref(), Some("booking"));
        assert_eq!(h.currency.as_deref(), Some("sar"));
        assert_eq!(h.features, vec!["FAQ", "Blog"]);
    }

    #[test]
    fn idea_accepts_text_alias_and_bad_lang_is_ignored() {
        let req: ImproveRequest =
            serde_json::from_value(json!({ "text": "x", "outputLang": "fr" })).unwrap();
        assert_eq!(req.idea, "x");
        assert_eq!(req.output_lang(), None);
        let ar = ImproveRequest { output_lang: Some("AR".into()), ..ImproveRequest::new("x") };
        assert_eq!(ar.output_lang(), Some(OutputLang::Ar));
    }

    #[test]
    fn details_are_optional_in_response() {
        let out = crate::engine::Engine::default().run("a blog", &Hints::default(), None);
        let lean = ImproveResponse::from_output(out.clone(), false);
        let v = serde_json::to_value(&lean).unwrap();
        assert!(v.get("details").is_none());
        assert!(v.get("cached").is_none());
        let full = ImproveResponse::from_output(out, true);
        assert!(full.details.is_some());
    }
}
