//! Test catalog API handlers: classes, and item creation under a class.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateTestClassRequest, CreateTestItemRequest, PaginationParams, TestClassResponse,
    TestItemResponse,
};

fn test_class_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Test class {}", id))
}

/// Create a test class.
#[utoipa::path(
    post,
    path = "/api/test_classes",
    tag = "Test Catalog",
    request_body = CreateTestClassRequest,
    responses(
        (status = 201, description = "Test class created", body = TestClassResponse),
        (status = 400, description = "Test class name already registered", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_class(
    pool: web::Data<DbPool>,
    body: web::Json<CreateTestClassRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    if pool.get_test_class_by_name(&req.name).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Test class {} already registered",
            req.name
        )));
    }

    let class = pool.create_test_class(req.name).await?;

    Ok(HttpResponse::Created().json(class))
}

/// List test classes with their items.
#[utoipa::path(
    get,
    path = "/api/test_classes",
    tag = "Test Catalog",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of test classes", body = [TestClassResponse]),
    )
)]
pub async fn list_test_classes(
    pool: web::Data<DbPool>,
    query: web::Query<PaginationParams>,
) -> AppResult<HttpResponse> {
    let (offset, limit) = query.resolve()?;
    let classes = pool.list_test_classes(offset, limit).await?;

    Ok(HttpResponse::Ok().json(classes))
}

/// Get a test class by ID.
#[utoipa::path(
    get,
    path = "/api/test_classes/{test_class_id}",
    tag = "Test Catalog",
    params(("test_class_id" = Uuid, Path, description = "Test class UUID")),
    responses(
        (status = 200, description = "Test class with its items", body = TestClassResponse),
        (status = 404, description = "Test class not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_test_class(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let test_class_id = path.into_inner();
    let class = pool
        .get_test_class(test_class_id)
        .await?
        .ok_or_else(|| test_class_not_found(test_class_id))?;

    Ok(HttpResponse::Ok().json(class))
}

/// Delete a test class. Its items are deleted with it.
#[utoipa::path(
    delete,
    path = "/api/test_classes/{test_class_id}",
    tag = "Test Catalog",
    params(("test_class_id" = Uuid, Path, description = "Test class UUID")),
    responses(
        (status = 204, description = "Test class and its items deleted"),
        (status = 404, description = "Test class not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_test_class(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let test_class_id = path.into_inner();
    pool.delete_test_class(test_class_id)
        .await?
        .ok_or_else(|| test_class_not_found(test_class_id))?;

    Ok(HttpResponse::NoContent().finish())
}

/// Add an item to a test class.
#[utoipa::path(
    post,
    path = "/api/test_classes/{test_class_id}/test_items",
    tag = "Test Catalog",
    params(("test_class_id" = Uuid, Path, description = "Test class UUID")),
    request_body = CreateTestItemRequest,
    responses(
        (status = 201, description = "Test item created", body = TestItemResponse),
        (status = 404, description = "Test class not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_item_for_class(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<CreateTestItemRequest>,
) -> AppResult<HttpResponse> {
    let test_class_id = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let item = pool
        .create_test_item(test_class_id, req)
        .await?
        .ok_or_else(|| test_class_not_found(test_class_id))?;

    Ok(HttpResponse::Created().json(item))
}

/// Configure test class routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/test_classes")
            .route(web::get().to(list_test_classes))
            .route(web::post().to(create_test_class)),
    )
    .service(
        web::resource("/test_classes/{test_class_id}")
            .route(web::get().to(get_test_class))
            .route(web::delete().to(delete_test_class)),
    )
    .service(
        web::resource("/test_classes/{test_class_id}/test_items")
            .route(web::post().to(create_test_item_for_class)),
    );
}
