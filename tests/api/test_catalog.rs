//! Test class and test item endpoint tests.

use actix_web::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::test_helpers::{create_test_app, create_test_pool, delete, get, id_of, post};

#[actix_rt::test]
async fn test_create_test_class() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post(&app, "/api/test_classes/", json!({ "name": "Notebook" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Notebook");
    assert_eq!(body["test_items"], json!([]));
}

#[actix_rt::test]
async fn test_duplicate_test_class_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    post(&app, "/api/test_classes/", json!({ "name": "Notebook" })).await;
    let (status, body) = post(&app, "/api/test_classes/", json!({ "name": "Notebook" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "CONFLICT");

    let (_, list) = get(&app, "/api/test_classes/").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_add_items_to_class() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (_, class) = post(&app, "/api/test_classes/", json!({ "name": "Notebook" })).await;
    let class_id = id_of(&class);

    let (status, item) = post(
        &app,
        &format!("/api/test_classes/{}/test_items/", class_id),
        json!({ "name": "Boot Test", "description": "Powers on to the OS" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["name"], "Boot Test");
    assert_eq!(item["description"], "Powers on to the OS");
    assert_eq!(item["test_class_id"], class_id.as_str());

    post(
        &app,
        &format!("/api/test_classes/{}/test_items", class_id),
        json!({ "name": "Keyboard", "description": "" }),
    )
    .await;

    let (status, fetched) = get(&app, &format!("/api/test_classes/{}", class_id)).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = fetched["test_items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Boot Test", "Keyboard"]);

    let (status, by_id) = get(&app, &format!("/api/test_items/{}", id_of(&item))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id["name"], "Boot Test");
}

#[actix_rt::test]
async fn test_add_item_to_unknown_class_returns_404() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, _) = post(
        &app,
        &format!("/api/test_classes/{}/test_items/", Uuid::now_v7()),
        json!({ "name": "Boot Test", "description": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_add_item_missing_description_returns_422() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (_, class) = post(&app, "/api/test_classes/", json!({ "name": "Notebook" })).await;

    let (status, _) = post(
        &app,
        &format!("/api/test_classes/{}/test_items/", id_of(&class)),
        json!({ "name": "Boot Test" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn test_list_test_classes_with_items() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, empty) = get(&app, "/api/test_classes/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, json!([]));

    let (_, notebook) = post(&app, "/api/test_classes/", json!({ "name": "Notebook" })).await;
    post(&app, "/api/test_classes/", json!({ "name": "Desktop" })).await;
    post(
        &app,
        &format!("/api/test_classes/{}/test_items/", id_of(&notebook)),
        json!({ "name": "Boot Test", "description": "" }),
    )
    .await;

    let (_, list) = get(&app, "/api/test_classes/").await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Notebook");
    assert_eq!(list[0]["test_items"].as_array().unwrap().len(), 1);
    assert_eq!(list[1]["name"], "Desktop");
    assert_eq!(list[1]["test_items"], json!([]));
}

#[actix_rt::test]
async fn test_delete_class_removes_its_items() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (_, class) = post(&app, "/api/test_classes/", json!({ "name": "Notebook" })).await;
    let class_id = id_of(&class);
    let (_, item) = post(
        &app,
        &format!("/api/test_classes/{}/test_items/", class_id),
        json!({ "name": "Boot Test", "description": "" }),
    )
    .await;

    let (status, _) = delete(&app, &format!("/api/test_classes/{}", class_id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/api/test_classes/{}", class_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, &format!("/api/test_items/{}", id_of(&item))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, &format!("/api/test_classes/{}", class_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_delete_test_item() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (_, class) = post(&app, "/api/test_classes/", json!({ "name": "Notebook" })).await;
    let class_id = id_of(&class);
    let (_, item) = post(
        &app,
        &format!("/api/test_classes/{}/test_items/", class_id),
        json!({ "name": "Boot Test", "description": "" }),
    )
    .await;
    let item_id = id_of(&item);

    let (status, _) = delete(&app, &format!("/api/test_items/{}", item_id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/api/test_items/{}", item_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, fetched) = get(&app, &format!("/api/test_classes/{}", class_id)).await;
    assert_eq!(fetched["test_items"], json!([]));

    let (status, _) = delete(&app, &format!("/api/test_items/{}", item_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
