mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, delete, get, post_json, put_json, token_for};

/// Create a profile and return its id.
async fn create_profile(app: axum::Router, token: &str, body: serde_json::Value) -> i64 {
    let response = post_json(app, "/api/v1/profiles", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a bill for a profile and return its id.
async fn create_bill(app: axum::Router, token: &str, body: serde_json::Value) -> i64 {
    let response = post_json(app, "/api/v1/bills", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_profile_returns_full_record(pool: PgPool) {
    let app = build_test_app(pool);
    let token = token_for("landlord@test.com", "Land Lord");

    let response = post_json(
        app,
        "/api/v1/profiles",
        &token,
        json!({
            "tenant_name": "Ali Khan",
            "contact_number": "3001234567",
            "room_label": "A-12",
            "rent": 20000,
            "security_deposit": 50000,
            "move_in_date": "2026-01-15",
            "description": "Second floor"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["tenant_name"], "Ali Khan");
    assert_eq!(body["contact_number"], "3001234567");
    assert_eq!(body["room_label"], "A-12");
    assert_eq!(body["rent"], 20000);
    assert_eq!(body["security_deposit"], 50000);
    assert_eq!(body["move_in_date"], "2026-01-15");
    assert_eq!(body["description"], "Second floor");
    assert!(body["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_profile_defaults_room_label(pool: PgPool) {
    let app = build_test_app(pool);
    let token = token_for("landlord@test.com", "Land Lord");

    let response = post_json(
        app,
        "/api/v1/profiles",
        &token,
        json!({ "tenant_name": "Ali", "contact_number": "3001234567" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["room_label"], "Unknown");
    assert!(body["rent"].is_null());
    assert!(body["description"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_profile_rejects_missing_required_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let token = token_for("landlord@test.com", "Land Lord");

    for body in [
        json!({}),
        json!({ "tenant_name": "Ali" }),
        json!({ "contact_number": "3001234567" }),
        json!({ "tenant_name": "   ", "contact_number": "3001234567" }),
    ] {
        let response = post_json(app.clone(), "/api/v1/profiles", &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_profile_rejects_negative_amounts(pool: PgPool) {
    let app = build_test_app(pool);
    let token = token_for("landlord@test.com", "Land Lord");

    let response = post_json(
        app,
        "/api/v1/profiles",
        &token,
        json!({ "tenant_name": "Ali", "contact_number": "3001234567", "rent": -1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_profiles_newest_first_with_latest_bill_preview(pool: PgPool) {
    let app = build_test_app(pool);
    let token = token_for("landlord@test.com", "Land Lord");

    let first = create_profile(
        app.clone(),
        &token,
        json!({ "tenant_name": "Ali", "contact_number": "3001234567" }),
    )
    .await;
    let second = create_profile(
        app.clone(),
        &token,
        json!({ "tenant_name": "Sara", "contact_number": "3017654321" }),
    )
    .await;

    // Two bills on the first profile; only the newest should surface.
    create_bill(
        app.clone(),
        &token,
        json!({ "profile_id": first, "rent": 10000, "contact_number": "3001234567" }),
    )
    .await;
    let newest_bill = create_bill(
        app.clone(),
        &token,
        json!({ "profile_id": first, "rent": 11000, "contact_number": "3001234567" }),
    )
    .await;

    let response = get(app, "/api/v1/profiles", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let profiles = body.as_array().unwrap();
    assert_eq!(profiles.len(), 2);

    // Newest profile first.
    assert_eq!(profiles[0]["id"].as_i64().unwrap(), second);
    assert_eq!(profiles[1]["id"].as_i64().unwrap(), first);

    // Preview: at most one bill, and it is the latest.
    assert_eq!(profiles[0]["bills"].as_array().unwrap().len(), 0);
    let preview = profiles[1]["bills"].as_array().unwrap();
    assert_eq!(preview.len(), 1);
    assert_eq!(preview[0]["id"].as_i64().unwrap(), newest_bill);
    assert_eq!(preview[0]["total"], 11000);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_detail_embeds_five_most_recent_bills(pool: PgPool) {
    let app = build_test_app(pool);
    let token = token_for("landlord@test.com", "Land Lord");

    let id = create_profile(
        app.clone(),
        &token,
        json!({ "tenant_name": "Ali", "contact_number": "3001234567" }),
    )
    .await;

    let mut bill_ids = Vec::new();
    for rent in [1000, 2000, 3000, 4000, 5000, 6000, 7000] {
        let bill = create_bill(
            app.clone(),
            &token,
            json!({ "profile_id": id, "rent": rent, "contact_number": "3001234567" }),
        )
        .await;
        bill_ids.push(bill);
    }

    let response = get(app, &format!("/api/v1/profiles/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["tenant_name"], "Ali");
    let bills = body["bills"].as_array().unwrap();
    assert_eq!(bills.len(), 5);

    // Newest first: the last five created, in reverse creation order.
    let got: Vec<i64> = bills.iter().map(|b| b["id"].as_i64().unwrap()).collect();
    let expected: Vec<i64> = bill_ids.iter().rev().take(5).copied().collect();
    assert_eq!(got, expected);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_profile_replaces_all_editable_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let token = token_for("landlord@test.com", "Land Lord");

    let id = create_profile(
        app.clone(),
        &token,
        json!({
            "tenant_name": "Ali",
            "contact_number": "3001234567",
            "room_label": "A-12",
            "rent": 20000,
            "description": "Old note"
        }),
    )
    .await;

    // Full replace: omitted optional fields are cleared.
    let response = put_json(
        app,
        &format!("/api/v1/profiles/{id}"),
        &token,
        json!({ "tenant_name": "Ali Khan", "contact_number": "3009998877" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["tenant_name"], "Ali Khan");
    assert_eq!(body["contact_number"], "3009998877");
    assert!(body["rent"].is_null());
    assert!(body["description"].is_null());
    // Room label is fixed at creation and survives updates untouched.
    assert_eq!(body["room_label"], "A-12");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_profile_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let token = token_for("landlord@test.com", "Land Lord");

    let response = put_json(
        app,
        "/api/v1/profiles/9999",
        &token,
        json!({ "tenant_name": "Ali", "contact_number": "3001234567" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_profile_cascades_to_bills(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = token_for("landlord@test.com", "Land Lord");

    let id = create_profile(
        app.clone(),
        &token,
        json!({ "tenant_name": "Ali", "contact_number": "3001234567" }),
    )
    .await;
    create_bill(
        app.clone(),
        &token,
        json!({ "profile_id": id, "rent": 10000, "contact_number": "3001234567" }),
    )
    .await;

    let response = delete(app.clone(), &format!("/api/v1/profiles/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Profile deleted successfully");

    let (bills_left,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bills")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(bills_left, 0);

    // Deleting again reports 404.
    let response = delete(app, &format!("/api/v1/profiles/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
