//! Classify, merge and render in one call.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::classify;
use crate::merge::{self, Hints};
use crate::model::{FeatureVector, OutputLang};
use crate::plan;
use crate::prompt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOutput {
    pub improved_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint: Option<String>,
    pub processing_ms: f64,
    pub detail: FeatureVector,
}

/// Stateless facade over the pure pipeline. Safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    default_lang: OutputLang,
}

impl Engine {
    pub fn new(default_lang: OutputLang) -> Self {
        Self { default_lang }
    }

    /// Output language precedence: explicit override, then a valid hint,
    /// then the engine default.
    pub fn resolve_lang(&self, hints: &Hints, lang_override: Option<OutputLang>) -> OutputLang {
        lang_override
            .or_else(|| hints.output_lang())
            .unwrap_or(self.default_lang)
    }

    /// Final feature vector without rendering.
    pub fn analyze(&self, text: &str, hints: &Hints, lang_override: Option<OutputLang>) -> FeatureVector {
        let lang = self.resolve_lang(hints, lang_override);
        let hints = hints.clone().with_output_lang(lang);
        merge::merge(&classify::classify(text), &hints)
    }

    pub fn run(&self, text: &str, hints: &Hints, lang_override: Option<OutputLang>) -> EngineOutput {
        let started = Instant::now();

        let detail = self.analyze(text, hints, lang_override);
        let improved_prompt = prompt::improved_prompt(&detail);
        let blueprint = plan::blueprint(&detail);

        let processing_ms = started.elapsed().as_secs_f64() * 1000.0;
        debug!(
            site_type = %detail.site_type,
            project_mode = detail.project_mode,
            lang = %detail.output_lang,
            processing_ms,
            "rendered brief"
        );

        EngineOutput { improved_prompt, blueprint, processing_ms, detail }
    }
}
