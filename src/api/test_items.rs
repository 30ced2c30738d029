//! Test item API handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::TestItemResponse;

/// Get a test item by ID.
#[utoipa::path(
    get,
    path = "/api/test_items/{test_item_id}",
    tag = "Test Catalog",
    params(("test_item_id" = Uuid, Path, description = "Test item UUID")),
    responses(
        (status = 200, description = "Test item", body = TestItemResponse),
        (status = 404, description = "Test item not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_test_item(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let test_item_id = path.into_inner();
    let item = pool
        .get_test_item(test_item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test item {}", test_item_id)))?;

    Ok(HttpResponse::Ok().json(item))
}

/// Delete a test item.
#[utoipa::path(
    delete,
    path = "/api/test_items/{test_item_id}",
    tag = "Test Catalog",
    params(("test_item_id" = Uuid, Path, description = "Test item UUID")),
    responses(
        (status = 204, description = "Test item deleted"),
        (status = 404, description = "Test item not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_test_item(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let test_item_id = path.into_inner();
    pool.delete_test_item(test_item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test item {}", test_item_id)))?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure test item routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/test_items/{test_item_id}")
            .route(web::get().to(get_test_item))
            .route(web::delete().to(delete_test_item)),
    );
}
