use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use std::sync::Arc;
use tweetclean::http::{routes, AppState};
use tweetclean::lexicon::{load_lexicon_files, LexiconOptions};
use tweetclean::store::TweetStore;
use tweetclean::ResultPair;

mod common;
use common::Fixture;

fn state_for(fixture: &Fixture) -> AppState {
    let lexicons = load_lexicon_files(
        &fixture.slang_path,
        &fixture.profanity_path,
        &LexiconOptions::default(),
    )
    .expect("Failed to load lexicons");
    let store = TweetStore::new(fixture.db_path.clone()).expect("Failed to open store");
    AppState::new(
        Arc::new(lexicons),
        store,
        encoding_rs::WINDOWS_1252,
        fixture.temp_dir.path().join("audit.log"),
    )
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_root_banner() {
    let fixture = Fixture::new();
    let app = app!(state_for(&fixture));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(!body.is_empty());
}

#[actix_web::test]
async fn test_input_then_get() {
    let fixture = Fixture::new();
    let app = app!(state_for(&fixture));

    // Content type is deliberately absent
    let req = test::TestRequest::post()
        .uri("/input")
        .set_payload(r#"{"Tweet": "Kamu BDH bgt!!"}"#)
        .to_request();
    let pair: ResultPair = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pair, ResultPair::new("Kamu BDH bgt!!", "kamu ***** banget"));

    let req = test::TestRequest::get().uri("/get").to_request();
    let stored: Vec<ResultPair> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored, vec![pair]);
}

#[actix_web::test]
async fn test_input_rejects_bad_json() {
    let fixture = Fixture::new();
    let app = app!(state_for(&fixture));

    let req = test::TestRequest::post()
        .uri("/input")
        .set_payload(r#"{"text": "halo"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some());
}

#[actix_web::test]
async fn test_upload_cleans_every_row_in_order() {
    let fixture = Fixture::new();
    let app = app!(state_for(&fixture));

    // 0xE9 is Latin-1 'é'
    let mut csv = b"Tweet,HS\nyg bener aja,0\nRT USER: tolol,1\ncaf".to_vec();
    csv.extend_from_slice(b"\xE9 enak,0\nrusak,1,2\n");

    let req = test::TestRequest::post()
        .uri("/upload")
        .insert_header(("content-type", "text/csv"))
        .set_payload(csv)
        .to_request();
    let pairs: Vec<ResultPair> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        pairs,
        vec![
            ResultPair::new("yg bener aja", "yang bener aja"),
            ResultPair::new("RT USER: tolol", "user *****"),
            ResultPair::new("café enak", "caf enak"),
        ]
    );

    let req = test::TestRequest::get().uri("/get").to_request();
    let stored: Vec<ResultPair> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored, pairs);
}

#[actix_web::test]
async fn test_upload_without_tweet_column() {
    let fixture = Fixture::new();
    let app = app!(state_for(&fixture));

    let req = test::TestRequest::post()
        .uri("/upload")
        .set_payload("text\nhalo\n")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_delete_clears_and_audits() {
    let fixture = Fixture::new();
    let app = app!(state_for(&fixture));

    for tweet in ["satu", "dua"] {
        let req = test::TestRequest::post()
            .uri("/input")
            .set_payload(format!(r#"{{"Tweet": "{}"}}"#, tweet))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::delete().uri("/delete").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["Status"], "All data has been deleted");

    let req = test::TestRequest::get().uri("/get").to_request();
    let stored: Vec<ResultPair> = test::call_and_read_body_json(&app, req).await;
    assert!(stored.is_empty());

    let audit = std::fs::read_to_string(fixture.temp_dir.path().join("audit.log"))
        .expect("Audit log should exist");
    assert!(audit.contains("Deleted all stored tweets (2 rows)"));
}

#[actix_web::test]
async fn test_docs_json() {
    let fixture = Fixture::new();
    let app = app!(state_for(&fixture));

    let req = test::TestRequest::get().uri("/docs.json").to_request();
    let doc: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(doc["swagger"], "2.0");
    assert!(doc["paths"]["/upload"]["post"].is_object());
}

#[actix_web::test]
async fn test_oversized_upload_rejected_by_payload_limit() {
    let fixture = Fixture::new();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&fixture)))
            .app_data(web::PayloadConfig::new(64))
            .configure(routes),
    )
    .await;

    let mut csv = b"Tweet\n".to_vec();
    csv.extend(std::iter::repeat(b'a').take(256));
    let req = test::TestRequest::post()
        .uri("/upload")
        .insert_header(("content-length", csv.len().to_string()))
        .set_payload(csv)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let req = test::TestRequest::get().uri("/get").to_request();
    let stored: Vec<ResultPair> = test::call_and_read_body_json(&app, req).await;
    assert!(stored.is_empty());
}
