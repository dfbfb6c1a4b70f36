use serde_json::json;
use vibe_brief::i18n::Msg;
use vibe_brief::{defaults, Engine, Hints, OutputLang, SiteType};

fn hints(v: serde_json::Value) -> Hints {
    serde_json::from_value(v).unwrap()
}

#[test]
fn saas_landing_page_with_listed_features() {
    let out = Engine::default().run(
        "A SaaS landing page for time tracking. Pricing, FAQ, testimonials, blog.",
        &Hints::default(),
        Some(OutputLang::En),
    );
    let fv = &out.detail;
    assert_eq!(fv.site_type, SiteType::Saas);
    for f in ["Pricing with clear plan comparison", "FAQ", "Testimonials", "Blog"] {
        assert!(fv.selected_features.iter().any(|s| s == f), "missing feature {f}");
    }
    assert!(fv.pages.iter().any(|p| p == "Pricing"));
    assert!(fv.pages.iter().any(|p| p == "Blog"));
    assert!(out.improved_prompt.starts_with("Design a high-converting SaaS product website"));
}

#[test]
fn arabic_fashion_store_in_egypt() {
    let out = Engine::default().run(
        "متجر إلكتروني للأزياء في مصر مع سلة وشراء ودفع",
        &hints(json!({ "outputLang": "ar" })),
        None,
    );
    let fv = &out.detail;
    assert_eq!(fv.site_type, SiteType::Ecommerce);
    assert!(fv.regions.iter().any(|r| r == "Egypt"));
    assert_eq!(fv.currency, "EGP");
    assert!(fv.requires_payments);
    assert_eq!(fv.output_lang, OutputLang::Ar);

    let ar = |m: Msg| m.ar().unwrap_or_default();
    for heading in [Msg::TargetAudience, Msg::PrimaryGoals, Msg::KeyFeatures, Msg::VisualStyle] {
        assert!(out.improved_prompt.contains(ar(heading)), "missing {heading:?}");
    }
    assert!(!out.improved_prompt.contains(Msg::KeyFeatures.en()));
}

#[test]
fn empty_input_falls_back_everywhere() {
    let out = Engine::default().run("", &Hints::default(), None);
    let fv = &out.detail;
    assert_eq!(fv.site_type, SiteType::Generic);
    assert_eq!(fv.audience, vec![defaults::FALLBACK_AUDIENCE]);
    assert_eq!(fv.stated_goal, "");
    assert!(!out.improved_prompt.contains("Notes from the original idea"));
    assert!(out.blueprint.is_none());
}

#[test]
fn project_keywords_with_site_type_hint() {
    let out = Engine::default().run(
        "We need a project plan: MVP first, then milestones.",
        &hints(json!({ "siteType": "booking" })),
        None,
    );
    let fv = &out.detail;
    assert!(fv.project_mode);
    assert_eq!(fv.site_type, SiteType::Booking);
    assert!(fv.pages.iter().any(|p| p == "Book now"));

    let bp = out.blueprint.expect("blueprint in project mode");
    assert!(bp.contains("Pages & sitemap:"));
    assert!(bp.contains("- Book now (/book-now)"));
}

#[test]
fn request_language_beats_hint_language() {
    let out = Engine::default().run(
        "a portfolio",
        &hints(json!({ "outputLang": "ar" })),
        Some(OutputLang::En),
    );
    assert_eq!(out.detail.output_lang, OutputLang::En);
    assert!(out.improved_prompt.contains("Target audience:"));
}
