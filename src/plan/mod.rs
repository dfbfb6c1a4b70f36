//! Project-blueprint renderer. Only produced in project mode.

use crate::defaults;
use crate::i18n::{self, Msg};
use crate::model::FeatureVector;
use crate::prompt::Doc;

/// Scope lines as `Label: value, value`.
fn scope_summary(fv: &FeatureVector) -> Vec<String> {
    let lang = fv.output_lang;
    let field = |msg: Msg, value: String| format!("{}: {}", msg.text(lang), value);

    let payments = if fv.requires_payments { Msg::Yes } else { Msg::No };
    let mut lines = vec![
        field(Msg::Industries, i18n::join(&fv.industries, lang)),
        field(Msg::Regions, i18n::join(&fv.regions, lang)),
        field(Msg::Languages, i18n::join(&fv.languages, lang)),
        field(Msg::Currency, fv.currency.clone()),
        field(Msg::Payments, payments.text(lang).to_string()),
    ];
    if !fv.compliance.is_empty() {
        lines.push(field(Msg::Compliance, i18n::join(&fv.compliance, lang)));
    }
    lines
}

fn non_functional(fv: &FeatureVector) -> Vec<&'static str> {
    let mut items = defaults::NON_FUNCTIONAL.to_vec();
    if fv.has_arabic() {
        items.push(defaults::RTL_REQUIREMENT);
    }
    items
}

/// Render the blueprint, or `None` when project mode is off.
pub fn blueprint(fv: &FeatureVector) -> Option<String> {
    if !fv.project_mode {
        return None;
    }
    let lang = fv.output_lang;
    let mut doc = Doc::new(lang);

    doc.line(Msg::BlueprintTitle.text(lang));
    doc.raw_bullets(Msg::ScopeSummary, &scope_summary(fv));

    let sitemap: Vec<String> = fv
        .sitemap
        .iter()
        .map(|entry| format!("{} ({})", i18n::label(&entry.name, lang), entry.path))
        .collect();
    doc.raw_bullets(Msg::PagesSitemap, &sitemap);

    doc.bullets(Msg::UserStories, &fv.user_stories);
    doc.bullets(Msg::NonFunctional, &non_functional(fv));
    doc.bullets(Msg::Kpis, &fv.kpis);
    doc.bullets(Msg::TechStack, &fv.tech_suggestions);
    doc.bullets(Msg::ContentChecklist, &fv.content_checklist);
    doc.bullets(Msg::Milestones, &fv.milestones);
    doc.bullets(Msg::ClarifyingQuestions, &fv.clarifying_questions);

    Some(doc.finish())
}
