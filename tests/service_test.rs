use serde_json::json;
use std::sync::Arc;

use vibe_brief::config::Config;
use vibe_brief::service::Service;
use vibe_brief::store::{MemoryStore, Store};
use vibe_brief::wire::{ImproveRequest, ImproveResponse};
use vibe_brief::BriefError;

fn request(v: serde_json::Value) -> ImproveRequest {
    serde_json::from_value(v).unwrap()
}

#[test]
fn hint_bags_reach_the_engine() {
    let svc = Service::new(Config::default());
    let resp = svc
        .handle(&request(json!({
            "idea": "a website for my studio",
            "meta": { "siteType": "portfolio" },
            "project": { "projectMode": true, "features": "Newsletter signup" },
            "hints": { "outputLang": "ar" },
            "outputLang": "en",
            "includeDetails": true
        })))
        .unwrap();

    let fv = resp.details.expect("details requested");
    assert_eq!(fv.site_type.as_str(), "portfolio");
    assert!(fv.project_mode);
    assert!(fv.selected_features.iter().any(|f| f == "Newsletter signup"));
    assert_eq!(fv.output_lang.as_str(), "en");
    assert!(resp.blueprint.is_some());
}

#[test]
fn oversized_idea_is_rejected() {
    let svc = Service::new(Config { max_input_chars: 10, ..Config::default() });
    let err = svc.handle(&ImproveRequest::new("x".repeat(11))).unwrap_err();
    assert_eq!(err, BriefError::IdeaTooLong { len: 11, max: 10 });
}

#[test]
fn injected_store_is_shared_between_services() {
    let store: Arc<dyn Store<ImproveResponse>> = Arc::new(MemoryStore::<ImproveResponse>::new(8));
    let a = Service::with_store(Config::default(), store.clone());
    let b = Service::with_store(Config::default(), store.clone());

    assert!(!a.handle(&ImproveRequest::new("an event site")).unwrap().cached);
    assert!(b.handle(&ImproveRequest::new("an event site")).unwrap().cached);
    assert_eq!(store.len(), 1);
}

#[test]
fn zero_ttl_disables_reuse() {
    let svc = Service::new(Config { cache_ttl_secs: 0, ..Config::default() });
    svc.handle(&ImproveRequest::new("a blog")).unwrap();
    assert!(!svc.handle(&ImproveRequest::new("a blog")).unwrap().cached);
    assert_eq!(svc.cache().purge_expired(), 1);
}

#[test]
fn rate_limited_error_reports_retry() {
    let svc = Service::new(Config {
        rate_limit_max_requests: 1,
        rate_limit_window_secs: 30,
        ..Config::default()
    });
    let req = ImproveRequest { client: Some("10.0.0.1".into()), ..ImproveRequest::new("a blog") };
    svc.handle(&req).unwrap();
    match svc.handle(&req) {
        Err(BriefError::RateLimited { identity, retry_after_secs }) => {
            assert_eq!(identity, "10.0.0.1");
            assert!(retry_after_secs > 0 && retry_after_secs <= 30);
        }
        other => panic!("expected rate limit, got {other:?}"),
    }
}
