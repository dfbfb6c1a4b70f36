//! Improved-prompt renderer.
//!
//! Output is a plain-text document: one overview line followed by headed
//! sections, each separated by a blank line. Rendering is a pure function
//! of the feature vector; identical vectors give byte-identical text.

use crate::defaults;
use crate::i18n::{self, Msg};
use crate::model::{FeatureVector, OutputLang};

/// Accumulates blank-line separated blocks.
pub(crate) struct Doc {
    lang: OutputLang,
    blocks: Vec<String>,
}

impl Doc {
    pub(crate) fn new(lang: OutputLang) -> Self {
        Self { lang, blocks: Vec::new() }
    }

    pub(crate) fn line(&mut self, text: impl Into<String>) {
        self.blocks.push(text.into());
    }

    /// `Heading:` followed by one `- item` per entry. Items are translated.
    pub(crate) fn bullets<S: AsRef<str>>(&mut self, heading: Msg, items: &[S]) {
        let mut block = format!("{}:", heading.text(self.lang));
        for item in items {
            block.push_str("\n- ");
            block.push_str(i18n::label(item.as_ref(), self.lang));
        }
        self.blocks.push(block);
    }

    pub(crate) fn numbered<S: AsRef<str>>(&mut self, heading: Msg, items: &[S]) {
        let mut block = format!("{}:", heading.text(self.lang));
        for (i, item) in items.iter().enumerate() {
            block.push_str(&format!("\n{}. {}", i + 1, i18n::label(item.as_ref(), self.lang)));
        }
        self.blocks.push(block);
    }

    /// Bullets that are already in the output language.
    pub(crate) fn raw_bullets(&mut self, heading: Msg, items: &[String]) {
        let mut block = format!("{}:", heading.text(self.lang));
        for item in items {
            block.push_str("\n- ");
            block.push_str(item);
        }
        self.blocks.push(block);
    }

    pub(crate) fn finish(self) -> String {
        self.blocks.join("\n\n")
    }
}

pub fn overview(fv: &FeatureVector) -> String {
    let lang = fv.output_lang;
    Msg::Overview
        .text(lang)
        .replace("{site}", i18n::site_label(fv.site_type, lang))
        .replace("{audience}", &i18n::join(&fv.audience, lang))
}

/// Render the improved prompt in `fv.output_lang`.
pub fn improved_prompt(fv: &FeatureVector) -> String {
    let lang = fv.output_lang;
    let mut doc = Doc::new(lang);

    doc.line(overview(fv));
    doc.bullets(Msg::TargetAudience, &fv.audience);
    doc.bullets(Msg::PrimaryGoals, i18n::goals(lang));
    doc.bullets(Msg::ToneOfVoice, &fv.tone);
    doc.numbered(Msg::SiteStructure, defaults::sections(fv.site_type));
    doc.bullets(Msg::KeyFeatures, &fv.selected_features);
    doc.bullets(Msg::ContentCta, i18n::content_guidance(lang));
    doc.bullets(Msg::VisualStyle, i18n::visual_style(lang));

    if !fv.stated_goal.is_empty() {
        doc.raw_bullets(Msg::OriginalNotes, &[format!("\"{}\"", fv.stated_goal)]);
    }

    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::merge::{merge, Hints};
    use crate::model::SiteType;

    fn render(text: &str, lang: OutputLang) -> String {
        let hints = Hints::default().with_output_lang(lang);
        improved_prompt(&merge(&classify(text), &hints))
    }

    #[test]
    fn sections_come_in_fixed_order() {
        let out = render("A SaaS dashboard for developers", OutputLang::En);
        let order = [
            "Design a high-converting SaaS product website for Developers.",
            "Target audience:",
            "Primary goals:",
            "Tone of voice:",
            "Suggested site structure:",
            "Key features:",
            "Content & calls to action:",
            "Visual style:",
            "Notes from the original idea:",
        ];
        let mut at = 0;
        for heading in order {
            let pos = out[at..].find(heading).map(|p| p + at);
            assert!(pos.is_some(), "`{heading}` missing or out of order");
            at = pos.unwrap_or(at);
        }
        assert!(out.contains("\n\nTarget audience:\n- Developers"));
    }

    #[test]
    fn site_structure_is_numbered() {
        let out = render("an online store", OutputLang::En);
        let first = defaults::sections(SiteType::Ecommerce)[0];
        assert!(out.contains(&format!("Suggested site structure:\n1. {first}")));
    }

    #[test]
    fn notes_section_is_omitted_for_empty_goal() {
        let out = render("", OutputLang::En);
        assert!(!out.contains(Msg::OriginalNotes.en()));
        assert!(out.starts_with("Design a high-converting business website for"));
    }

    #[test]
    fn notes_quote_the_stated_goal() {
        let out = render("  a   bakery  ", OutputLang::En);
        assert!(out.ends_with("Notes from the original idea:\n- \"a bakery\""));
    }

    #[test]
    fn arabic_output_uses_arabic_headings() {
        let out = render("متجر إلكتروني للأزياء", OutputLang::Ar);
        assert!(out.contains(Msg::TargetAudience.ar().unwrap_or_default()));
        assert!(out.contains(Msg::SiteStructure.ar().unwrap_or_default()));
        assert!(!out.contains("Target audience:"));
        assert!(out.starts_with("صمّم موقع متجر إلكتروني"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render("Portfolio for a photographer, GDPR", OutputLang::En);
        let b = render("Portfolio for a photographer, GDPR", OutputLang::En);
        assert_eq!(a, b);
    }
}
