//! End-to-end smoke tests for the full phonehubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repos, real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use phonehub_adapter_http_axum::router;
use phonehub_adapter_http_axum::state::AppState;
use phonehub_adapter_storage_sqlite_sqlx::{
    Config, SqliteAccountRepository, SqliteNotificationRepository, SqliteOwnershipRepository,
    SqlitePhoneRepository, SqliteSdCardRepository, SqliteSimSlotRepository,
};
use phonehub_app::services::code_allocator::CodeAllocator;
use phonehub_app::services::token::TokenService;
use tower::ServiceExt;

const TEST_SECRET: &str = "integration-test-secret";

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config::new("sqlite::memory:")
        .build()
        .await
        .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        SqlitePhoneRepository::new(pool.clone()),
        SqliteSimSlotRepository::new(pool.clone()),
        SqliteSdCardRepository::new(pool.clone()),
        SqliteAccountRepository::new(pool.clone()),
        SqliteOwnershipRepository::new(pool.clone()),
        SqliteNotificationRepository::new(pool),
        CodeAllocator::default(),
        TokenService::new(TEST_SECRET, 3600),
    );

    router::build(state)
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn telemetry(model_tag: &str, sims: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "phone_info": {
            "manufacturer": "Google",
            "model_tag": model_tag,
            "model_number": "GVU6C",
            "os_version": "14",
            "api_version": "34",
            "cpu": "Tensor G2",
            "firmware": "TQ3A.230901.001",
            "bootloader": "slider-1.3",
            "supported_archs": ["arm64-v8a", "armeabi-v7a"]
        },
        "sim_info": sims,
        "sd_info": []
    })
}

async fn register_and_login(app: &axum::Router, email: &str) -> (u32, String) {
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/register",
            serde_json::json!({"name": "Alice", "email": email, "password": "s3cret"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let profile = json_body(resp).await;
    let code = u32::try_from(profile["code"].as_u64().unwrap()).unwrap();

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/login",
            serde_json::json!({"email": email, "password": "s3cret"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let token = json_body(resp).await["token"].as_str().unwrap().to_string();

    (code, token)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Telemetry ingestion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_phone_once_across_repeated_reports() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(post_json("/api/telemetry", telemetry("panther", serde_json::json!([]))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let first = json_body(resp).await;
    assert_eq!(first["created"], true);

    let resp = app
        .clone()
        .oneshot(post_json("/api/telemetry", telemetry("panther", serde_json::json!([]))))
        .await
        .unwrap();
    let second = json_body(resp).await;
    assert_eq!(second["created"], false);
    assert_eq!(first["phone_id"], second["phone_id"]);
}

#[tokio::test]
async fn should_detach_sim_omitted_from_next_report() {
    let app = app().await;
    let (_, token) = register_and_login(&app, "alice@example.com").await;

    let sims = serde_json::json!([{"phone_number": "79990000000", "operator": "MTS"}]);
    app.clone()
        .oneshot(post_json("/api/telemetry", telemetry("panther", sims)))
        .await
        .unwrap();

    // Same device reports again without the card.
    app.clone()
        .oneshot(post_json("/api/telemetry", telemetry("panther", serde_json::json!([]))))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(get_with_token("/api/devices", &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let inventory = json_body(resp).await;

    let sim_cards = inventory["sim_cards"].as_array().unwrap();
    assert_eq!(sim_cards.len(), 1, "detached card is kept, not deleted");
    assert!(sim_cards[0]["phone_id"].is_null());
}

#[tokio::test]
async fn should_relink_sim_when_it_moves_between_phones() {
    let app = app().await;
    let (_, token) = register_and_login(&app, "alice@example.com").await;

    let card = serde_json::json!([{"phone_number": "79990000000", "operator": "MTS"}]);
    app.clone()
        .oneshot(post_json("/api/telemetry", telemetry("panther", card.clone())))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_json("/api/telemetry", telemetry("cheetah", card)))
        .await
        .unwrap();

    let inventory = json_body(
        app.clone()
            .oneshot(get_with_token("/api/devices", &token))
            .await
            .unwrap(),
    )
    .await;

    let phones = inventory["phones"].as_array().unwrap();
    assert_eq!(phones.len(), 2);
    let sim_cards = inventory["sim_cards"].as_array().unwrap();
    assert_eq!(sim_cards.len(), 1, "the card record migrates, not duplicates");

    let second_phone = phones
        .iter()
        .find(|p| p["model_tag"] == "Pixel 7 Pro")
        .unwrap();
    assert_eq!(sim_cards[0]["phone_id"], second_phone["id"]);
}

#[tokio::test]
async fn should_skip_empty_slot_entries() {
    let app = app().await;
    let (_, token) = register_and_login(&app, "alice@example.com").await;

    let sims = serde_json::json!([
        {"phone_number": "79990000000", "operator": "MTS"},
        {"phone_number": "", "operator": ""}
    ]);
    app.clone()
        .oneshot(post_json("/api/telemetry", telemetry("panther", sims)))
        .await
        .unwrap();

    let inventory = json_body(
        app.clone()
            .oneshot(get_with_token("/api/devices", &token))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(inventory["sim_cards"].as_array().unwrap().len(), 1);
    // The slot count still reflects both reported entries.
    assert_eq!(inventory["phones"][0]["sim_slots"], 2);
}

// ---------------------------------------------------------------------------
// Accounts, ownership, profile echo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_link_owner_and_echo_profile() {
    let app = app().await;
    let (code, token) = register_and_login(&app, "alice@example.com").await;

    let mut report = telemetry("panther", serde_json::json!([]));
    report["account_code"] = serde_json::json!(code);
    report["user_info_needed"] = serde_json::json!(true);

    let resp = app
        .clone()
        .oneshot(post_json("/api/telemetry", report))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let outcome = json_body(resp).await;
    assert_eq!(outcome["owner"]["email"], "alice@example.com");
    assert_eq!(outcome["owner"]["code"], code);

    // The accounts listing shows the link.
    let accounts = json_body(
        app.clone()
            .oneshot(get_with_token("/api/accounts", &token))
            .await
            .unwrap(),
    )
    .await;
    let entry = accounts
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["email"] == "alice@example.com")
        .unwrap();
    assert_eq!(entry["phone_ids"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_fail_report_with_unknown_code_but_keep_device() {
    let app = app().await;
    let (_, token) = register_and_login(&app, "alice@example.com").await;

    let mut report = telemetry("panther", serde_json::json!([]));
    report["account_code"] = serde_json::json!(10_000);

    let resp = app
        .clone()
        .oneshot(post_json("/api/telemetry", report))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The device write committed before the failed link.
    let inventory = json_body(
        app.clone()
            .oneshot(get_with_token("/api/devices", &token))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(inventory["phones"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_registration_email() {
    let app = app().await;
    register_and_login(&app, "alice@example.com").await;

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/register",
            serde_json::json!({"name": "Bob", "email": "alice@example.com", "password": "other"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_reject_login_with_wrong_password() {
    let app = app().await;
    register_and_login(&app, "alice@example.com").await;

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/login",
            serde_json::json!({"email": "alice@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Guarded listings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_listings_without_token() {
    let app = app().await;

    for uri in ["/api/devices", "/api/accounts", "/api/notifications/GVU6C"] {
        let resp = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_record_and_list_notifications_per_model() {
    let app = app().await;
    let (_, token) = register_and_login(&app, "alice@example.com").await;

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/notifications",
            serde_json::json!({
                "model_number": "GVU6C",
                "notification_source": "org.example.mail",
                "sender": "inbox",
                "body": "hello",
                "timestamp": 1_700_000_000
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let feed = json_body(
        app.clone()
            .oneshot(get_with_token("/api/notifications/GVU6C", &token))
            .await
            .unwrap(),
    )
    .await;
    let feed = feed.as_array().unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["sender"], "inbox");
}
