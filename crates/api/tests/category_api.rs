//! HTTP-level integration tests for the `/category` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json, test_store};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_category_returns_201() {
    let store = test_store();
    let user_id = common::seed_user(&store, "alice").await;

    let response = post_json(
        build_test_app(store),
        "/category",
        json!({"name": "Personal", "userId": user_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Category created successfully");
    assert_eq!(json["data"]["name"], "Personal");
    assert_eq!(json["data"]["userId"], user_id);
    assert!(json["data"]["id"].is_number());
}

#[tokio::test]
async fn create_category_for_unknown_user_returns_404() {
    let store = test_store();
    let response = post_json(
        build_test_app(store.clone()),
        "/category",
        json!({"name": "Orphan", "userId": 77}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "User with ID 77 not found");

    let response = get(build_test_app(store), "/category").await;
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[tokio::test]
async fn create_category_validates_name() {
    let store = test_store();
    let user_id = common::seed_user(&store, "alice").await;

    let response = post_json(
        build_test_app(store.clone()),
        "/category",
        json!({"name": "   ", "userId": user_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Category name cannot be blank");

    let response = post_json(
        build_test_app(store),
        "/category",
        json!({"name": "x".repeat(51), "userId": user_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Category name cannot be longer than 50 characters"
    );
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_category_round_trips() {
    let store = test_store();
    let user_id = common::seed_user(&store, "alice").await;
    let id = common::seed_category(&store, user_id, "Work").await;

    let response = get(build_test_app(store.clone()), &format!("/category/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], format!("Category with ID {id} found successfully"));
    assert_eq!(json["data"], json!({"id": id, "name": "Work", "userId": user_id}));

    let response = get(build_test_app(store), "/category").await;
    let json = body_json(response).await;
    assert_eq!(json["message"], "Retrieved all categories");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_unknown_category_returns_404() {
    let response = get(build_test_app(test_store()), "/category/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Category with ID 5 not found");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_category_renames_and_reassigns() {
    let store = test_store();
    let alice = common::seed_user(&store, "alice").await;
    let bobby = common::seed_user(&store, "bobby").await;
    let id = common::seed_category(&store, alice, "Work").await;

    let response = put_json(
        build_test_app(store),
        &format!("/category/{id}"),
        json!({"name": "Chores", "userId": bobby}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        format!("Category updated successfully for category with ID {id}")
    );
    assert_eq!(json["data"]["name"], "Chores");
    assert_eq!(json["data"]["userId"], bobby);
}

#[tokio::test]
async fn update_category_errors() {
    let store = test_store();
    let alice = common::seed_user(&store, "alice").await;
    let id = common::seed_category(&store, alice, "Work").await;

    let response = put_json(
        build_test_app(store.clone()),
        "/category/99",
        json!({"name": "Chores", "userId": alice}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Category with ID 99 not found");

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/category/{id}"),
        json!({"name": "Chores", "userId": 404}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "User with ID 404 not found");

    let response = get(build_test_app(store), &format!("/category/{id}")).await;
    assert_eq!(body_json(response).await["data"]["name"], "Work");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_category_with_notes_returns_409() {
    let store = test_store();
    let user_id = common::seed_user(&store, "alice").await;
    let id = common::seed_category(&store, user_id, "Work").await;
    let note_id = common::seed_note(&store, user_id, id, "Todo").await;

    let response = delete(build_test_app(store.clone()), &format!("/category/{id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["message"],
        format!("Category with ID {id} is still referenced by 1 note")
    );

    let response = delete(build_test_app(store.clone()), &format!("/note/{note_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(build_test_app(store.clone()), &format!("/category/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(store), &format!("/category/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_category_returns_404_and_keeps_categories() {
    let store = test_store();
    let user_id = common::seed_user(&store, "alice").await;
    common::seed_category(&store, user_id, "Work").await;
    common::seed_category(&store, user_id, "Home").await;

    let before = body_json(get(build_test_app(store.clone()), "/category").await).await;

    let response = delete(build_test_app(store.clone()), "/category/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Category with ID 999 not found");

    let after = body_json(get(build_test_app(store), "/category").await).await;
    assert_eq!(after["data"], before["data"]);
    assert_eq!(after["data"].as_array().map(Vec::len), Some(2));
}
