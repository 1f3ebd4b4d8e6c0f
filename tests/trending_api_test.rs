//! HTTP boundary tests for the trending endpoints.

mod common;

use std::sync::Arc;

use actix_web::{test, web, App};
use chrono::Utc;

use common::{post, InMemoryContentStore, ManualClock, StaticIdentityResolver};
use trending_service::cache::ResultCache;
use trending_service::config::TrendingConfig;
use trending_service::handlers::{get_trending, get_trending_kinds, TrendingHandlerState};
use trending_service::models::ContentKind;
use trending_service::services::trending::TrendingService;

fn handler_state(store: Arc<InMemoryContentStore>, clock: ManualClock) -> web::Data<TrendingHandlerState> {
    let cache = Arc::new(ResultCache::new(300, Box::new(clock.clone())));
    let service = Arc::new(TrendingService::new(
        store,
        Arc::new(StaticIdentityResolver::default()),
        cache,
        Arc::new(clock),
        TrendingConfig::default(),
    ));
    web::Data::new(TrendingHandlerState { service })
}

#[actix_web::test]
async fn get_trending_returns_ranked_items() {
    let clock = ManualClock::new(Utc::now());
    let now = Utc::now();
    let store = Arc::new(InMemoryContentStore::new(vec![
        post("slow", ContentKind::Post, 10, 10, 0, 0, now),
        post("fast", ContentKind::Post, 1, 10, 0, 0, now),
    ]));

    let app = test::init_service(
        App::new()
            .app_data(handler_state(store, clock))
            .service(get_trending),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/trending").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 2);
    assert_eq!(body["cached"], false);
    assert_eq!(body["items"][0]["body"], "fast");
    assert_eq!(body["items"][0]["velocity"], 10.0);
    assert_eq!(body["items"][0]["liked"], false);
    assert_eq!(body["items"][0]["saved"], false);
    assert_eq!(body["items"][1]["body"], "slow");
    assert_eq!(body["items"][1]["velocity"], 1.0);
}

#[actix_web::test]
async fn repeated_request_reports_cache_transparency_fields() {
    let clock = ManualClock::new(Utc::now());
    let now = Utc::now();
    let store = Arc::new(InMemoryContentStore::new(vec![post(
        "a",
        ContentKind::Post,
        1,
        3,
        0,
        0,
        now,
    )]));

    let app = test::init_service(
        App::new()
            .app_data(handler_state(store, clock.clone()))
            .service(get_trending),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/trending").to_request();
    let first: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(first["cached"], false);
    assert_eq!(first["cache_age_secs"], 0);

    clock.advance_secs(7);

    let req = test::TestRequest::get().uri("/api/v1/trending").to_request();
    let second: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(second["cached"], true);
    assert_eq!(second["cache_age_secs"], 7);
}

#[actix_web::test]
async fn oversized_limit_is_clamped_not_rejected() {
    let clock = ManualClock::new(Utc::now());
    let now = Utc::now();
    let candidates = (0..60)
        .map(|i| post(&format!("p{}", i), ContentKind::Post, 1, i, 0, 0, now))
        .collect();
    let store = Arc::new(InMemoryContentStore::new(candidates));

    let app = test::init_service(
        App::new()
            .app_data(handler_state(store, clock))
            .service(get_trending),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/trending?limit=100")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 50);
}

#[actix_web::test]
async fn invalid_kind_is_a_bad_request() {
    let clock = ManualClock::new(Utc::now());
    let store = Arc::new(InMemoryContentStore::new(vec![]));

    let app = test::init_service(
        App::new()
            .app_data(handler_state(store, clock))
            .service(get_trending),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/trending?kind=livestockz")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn invalid_viewer_id_is_a_bad_request() {
    let clock = ManualClock::new(Utc::now());
    let store = Arc::new(InMemoryContentStore::new(vec![]));

    let app = test::init_service(
        App::new()
            .app_data(handler_state(store, clock))
            .service(get_trending),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/trending?viewer_id=not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn kinds_endpoint_lists_available_filters() {
    let app = test::init_service(App::new().service(get_trending_kinds)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/trending/kinds")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = body["kinds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["post", "question", "market"]);
}
