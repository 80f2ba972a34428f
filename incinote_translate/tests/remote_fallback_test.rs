//! Remote translation against a local stub server.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use incinote_core::{FixedClock, generate_with_clock};
use incinote_translate::{
    OfflineGlossary, Provider, RemoteTranslator, TextTransform, TranslationConfig, Translator,
    transform_notes,
};
use serde_json::{Value, json};
use std::collections::BTreeMap;

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

fn config_for(endpoint: String) -> TranslationConfig {
    TranslationConfig {
        provider: Provider::Remote,
        endpoint,
        timeout_secs: 2,
        ..TranslationConfig::default()
    }
}

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn glossary() -> OfflineGlossary {
    OfflineGlossary::new(&BTreeMap::new()).expect("default glossary should compile")
}

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn remote(endpoint: String) -> RemoteTranslator {
    RemoteTranslator::new(&config_for(endpoint), glossary()).expect("remote translator")
}

#[tokio::test]
async fn server_error_falls_back_to_offline() {
    let router = Router::new().route(
        "/translate",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let translator = remote(spawn_stub(router).await);

    let text = "Impact déclaré : high.\n- Étape 1 : restart pod";
    assert!(translator.try_translate(text).await.is_err());
    assert_eq!(translator.transform(text).await, glossary().translate(text));
}

#[tokio::test]
async fn unreachable_endpoint_falls_back_to_offline() {
    let translator = remote("http://127.0.0.1:9".to_string());
    let text = "slow login for all users";
    assert_eq!(translator.transform(text).await, glossary().translate(text));
}

#[tokio::test]
async fn malformed_body_falls_back_to_offline() {
    let router = Router::new().route(
        "/translate",
        post(|| async { Json(json!({"unexpected": true})) }),
    );
    let translator = remote(spawn_stub(router).await);
    assert_eq!(translator.transform("error").await, "[Brouillon FR] erreur");
}

#[tokio::test]
async fn successful_response_is_used_verbatim() {
    let router = Router::new().route(
        "/translate",
        post(|Json(body): Json<Value>| async move {
            let echoed = format!(
                "{}|{}|{}|{}",
                body["q"].as_str().unwrap_or_default(),
                body["source"].as_str().unwrap_or_default(),
                body["target"].as_str().unwrap_or_default(),
                body["format"].as_str().unwrap_or_default(),
            );
            Json(json!({ "translatedText": echoed }))
        }),
    );
    let translator = remote(format!("{}/", spawn_stub(router).await));

    assert_eq!(translator.transform("hello").await, "hello|en|fr|text");
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn notes_are_transformed_field_by_field() {
    let clock = FixedClock(
        chrono::NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid test timestamp"),
    );
    let (_, notes) = generate_with_clock("app: Checkout\nimpact: high", &clock);

    let translator = Translator::from_config(&TranslationConfig::default())
        .expect("offline translator should build");
    assert_eq!(translator.name(), "offline");

    let translated = transform_notes(&translator, &notes).await;
    assert_eq!(translated.title, "[Brouillon FR] Checkout: – impact élevé");
    assert!(translated.user_comment.starts_with("[Brouillon FR] Bonjour,"));
    assert!(translated.work_notes.contains("Impact déclaré : élevé"));
    assert!(!translated.description.starts_with("[Brouillon FR] [Brouillon FR]"));
}
