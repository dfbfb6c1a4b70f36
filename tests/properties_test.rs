use proptest::prelude::*;
use std::collections::HashSet;

use vibe_brief::classify::classify;
use vibe_brief::merge::merge;
use vibe_brief::model::slugify;
use vibe_brief::{Engine, Hints, OutputLang, SiteType};

const WORDS: &[&str] = &[
    "saas", "shop", "store", "portfolio", "restaurant", "blog", "event", "booking", "salon",
    "pricing", "faq", "testimonials", "newsletter", "gdpr", "egypt", "dubai", "europe", "arabic",
    "bilingual", "project", "mvp", "milestones", "students", "developers", "modern", "playful",
    "متجر", "مطعم", "مصر", "دفع", "مشروع", "the", "for", "and", "a", "with",
];

fn idea() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|w| w.join(" ")),
        ".{0,120}",
    ]
}

fn site_type() -> impl Strategy<Value = SiteType> {
    prop::sample::select(SiteType::ALL.to_vec())
}

fn no_dups(items: &[String]) -> bool {
    let mut seen = HashSet::new();
    items.iter().all(|s| seen.insert(s.trim().to_lowercase()))
}

proptest! {
    #[test]
    fn identical_input_renders_identical_output(text in idea(), lang in prop::bool::ANY) {
        let lang = if lang { OutputLang::Ar } else { OutputLang::En };
        let engine = Engine::default();
        let a = engine.run(&text, &Hints::default(), Some(lang));
        let b = engine.run(&text, &Hints::default(), Some(lang));
        prop_assert_eq!(a.improved_prompt, b.improved_prompt);
        prop_assert_eq!(a.blueprint, b.blueprint);
        prop_assert_eq!(
            serde_json::to_value(&a.detail).unwrap(),
            serde_json::to_value(&b.detail).unwrap()
        );
    }

    #[test]
    fn exactly_one_site_type(text in idea()) {
        let fv = classify(&text);
        prop_assert!(SiteType::ALL.contains(&fv.site_type));
    }

    #[test]
    fn fallbacks_keep_core_sets_non_empty(text in idea()) {
        let fv = merge(&classify(&text), &Hints::default());
        prop_assert!(!fv.audience.is_empty());
        prop_assert!(!fv.tone.is_empty());
        prop_assert!(!fv.industries.is_empty());
        prop_assert!(!fv.regions.is_empty());
        prop_assert!(!fv.languages.is_empty());
        prop_assert!(!fv.pages.is_empty());
        prop_assert_eq!(fv.sitemap.len(), fv.pages.len());
    }

    #[test]
    fn scalar_hints_win(
        text in idea(),
        site in site_type(),
        project in prop::bool::ANY,
        payments in prop::bool::ANY,
        currency in "[A-Z]{3}",
    ) {
        let hints = Hints {
            site_type: Some(site.as_str().to_string()),
            currency: Some(currency.clone()),
            project_mode: Some(project),
            requires_payments: Some(payments),
            output_lang: Some("ar".into()),
            ..Hints::default()
        };
        let fv = merge(&classify(&text), &hints);
        prop_assert_eq!(fv.site_type, site);
        prop_assert_eq!(fv.currency, currency);
        prop_assert_eq!(fv.project_mode, project);
        prop_assert_eq!(fv.requires_payments, payments);
        prop_assert_eq!(fv.output_lang, OutputLang::Ar);
    }

    #[test]
    fn set_hints_union_without_duplicates(
        text in idea(),
        extra in prop::collection::vec("[A-Za-z][A-Za-z ]{0,15}", 0..5),
    ) {
        let base = classify(&text);
        let hints = Hints {
            audience: extra.clone(),
            regions: extra.clone(),
            features: extra.clone(),
            kpis: extra.clone(),
            ..Hints::default()
        };
        let fv = merge(&base, &hints);

        let covers = |merged: &[String], parts: &[&[String]]| {
            parts.iter().all(|p| {
                p.iter().all(|x| merged.iter().any(|m| m.trim().eq_ignore_ascii_case(x.trim())))
            })
        };
        prop_assert!(covers(&fv.audience, &[base.audience.as_slice(), extra.as_slice()]));
        prop_assert!(covers(&fv.regions, &[base.regions.as_slice(), extra.as_slice()]));
        prop_assert!(covers(&fv.selected_features, &[base.selected_features.as_slice(), extra.as_slice()]));
        prop_assert!(covers(&fv.kpis, &[base.kpis.as_slice(), extra.as_slice()]));
        prop_assert!(no_dups(&fv.audience));
        prop_assert!(no_dups(&fv.regions));
        prop_assert!(no_dups(&fv.selected_features));
        prop_assert!(no_dups(&fv.kpis));
    }

    #[test]
    fn slugs_are_url_safe(name in "\\PC{0,40}") {
        let slug = slugify(&name);
        prop_assert!(slug.starts_with('/'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(!slug[1..].starts_with('-'));
        prop_assert_eq!(slugify(&name), slug.clone());
        prop_assert!(slug[1..].chars().all(|c| c == '-' || c.is_alphanumeric()));
    }
}

#[test]
fn cart_checkout_slug() {
    assert_eq!(slugify("Cart / Checkout"), "/cart-checkout");
}
