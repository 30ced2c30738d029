//! Lote endpoint tests.

use actix_web::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::test_helpers::{
    create_lote, create_test_app, create_test_pool, delete, get, id_of, post, put,
    test_result_payload,
};

#[actix_rt::test]
async fn test_create_lote_defaults() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post(&app, "/api/lotes/", json!({ "name": "Batch-001" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Batch-001");
    assert_eq!(body["status"], "Open");
    assert_eq!(body["test_results"], json!([]));
    assert!(Uuid::parse_str(&id_of(&body)).is_ok());
    assert!(body["created_at"].is_string());
}

#[actix_rt::test]
async fn test_duplicate_lote_name_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    create_lote(&app, "Batch-001").await;
    let (status, body) = post(&app, "/api/lotes", json!({ "name": "Batch-001" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "CONFLICT");
    assert!(body["message"].as_str().unwrap().contains("Batch-001"));

    let (_, list) = get(&app, "/api/lotes/").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_list_lotes_empty() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, "/api/lotes/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[actix_rt::test]
async fn test_list_lotes_pagination() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    for name in ["Batch-001", "Batch-002", "Batch-003"] {
        create_lote(&app, name).await;
    }

    let (_, all) = get(&app, "/api/lotes/").await;
    let names: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Batch-001", "Batch-002", "Batch-003"]);

    let (status, page) = get(&app, "/api/lotes/?skip=1&limit=1").await;
    assert_eq!(status, StatusCode::OK);
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["name"], "Batch-002");

    let (status, _) = get(&app, "/api/lotes/?skip=-1").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn test_get_lote_unknown_returns_404() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, &format!("/api/lotes/{}", Uuid::now_v7())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_rt::test]
async fn test_get_lote_malformed_id_returns_422() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, "/api/lotes/not-a-uuid").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_rt::test]
async fn test_create_lote_invalid_body_returns_422() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, _) = post(&app, "/api/lotes/", json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post(&app, "/api/lotes/", json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = get(&app, "/api/lotes/").await;
    assert_eq!(list, json!([]));
}

#[actix_rt::test]
async fn test_update_lote_status() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let lote = create_lote(&app, "Batch-001").await;
    let id = id_of(&lote);

    let (status, body) = put(
        &app,
        &format!("/api/lotes/{}/status", id),
        json!({ "status": "Closed" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Closed");
    assert_eq!(body["name"], "Batch-001");

    let (_, fetched) = get(&app, &format!("/api/lotes/{}", id)).await;
    assert_eq!(fetched["status"], "Closed");
}

#[actix_rt::test]
async fn test_update_status_unknown_lote_returns_404() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, _) = put(
        &app,
        &format!("/api/lotes/{}/status", Uuid::now_v7()),
        json!({ "status": "Closed" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_lote_nests_its_test_results() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let lote = create_lote(&app, "Batch-001").await;
    let other = create_lote(&app, "Batch-002").await;
    let id = id_of(&lote);

    let (status, _) = post(
        &app,
        &format!("/api/lotes/{}/test_results/", id),
        test_result_payload("SN-0001", &[("Boot Test", "Approved")]),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, fetched) = get(&app, &format!("/api/lotes/{}", id)).await;
    let results = fetched["test_results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["equipment_serial"], "SN-0001");
    assert_eq!(results[0]["lote_id"], id.as_str());
    assert_eq!(results[0]["test_result_items"].as_array().unwrap().len(), 1);

    let (_, fetched_other) = get(&app, &format!("/api/lotes/{}", id_of(&other))).await;
    assert_eq!(fetched_other["test_results"], json!([]));
}

#[actix_rt::test]
async fn test_delete_lote_removes_its_results() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let lote = create_lote(&app, "Batch-001").await;
    let id = id_of(&lote);
    let (_, result) = post(
        &app,
        &format!("/api/lotes/{}/test_results", id),
        test_result_payload("SN-0001", &[("Boot Test", "Approved")]),
    )
    .await;
    let result_id = id_of(&result);

    let (status, body) = delete(&app, &format!("/api/lotes/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = get(&app, &format!("/api/lotes/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, &format!("/api/test_results/{}", result_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The serial is free again once its result is gone.
    create_lote(&app, "Batch-002").await;
    let (_, lotes) = get(&app, "/api/lotes").await;
    let new_id = lotes[0]["id"].as_str().unwrap().to_string();
    let (status, _) = post(
        &app,
        &format!("/api/lotes/{}/test_results", new_id),
        test_result_payload("SN-0001", &[]),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_rt::test]
async fn test_delete_unknown_lote_returns_404() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, _) = delete(&app, &format!("/api/lotes/{}", Uuid::now_v7())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
