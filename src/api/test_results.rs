//! Test result API handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{CreateTestResultRequest, PaginationParams, TestResultResponse};

/// Record a test result, with its item outcomes, for a lote.
///
/// The lote check, the serial uniqueness check and all writes run in one
/// transaction, so an unknown lote is reported before a taken serial.
#[utoipa::path(
    post,
    path = "/api/lotes/{lote_id}/test_results",
    tag = "Test Results",
    params(("lote_id" = Uuid, Path, description = "Lote UUID")),
    request_body = CreateTestResultRequest,
    responses(
        (status = 201, description = "Test result recorded", body = TestResultResponse),
        (status = 400, description = "Equipment serial already registered", body = crate::error::ErrorResponse),
        (status = 404, description = "Lote not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_result_for_lote(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<CreateTestResultRequest>,
) -> AppResult<HttpResponse> {
    let lote_id = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let result = pool
        .create_test_result(lote_id, req)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Lote {}", lote_id)))?;

    Ok(HttpResponse::Created().json(result))
}

/// List test results with their item outcomes.
#[utoipa::path(
    get,
    path = "/api/test_results",
    tag = "Test Results",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of test results", body = [TestResultResponse]),
    )
)]
pub async fn list_test_results(
    pool: web::Data<DbPool>,
    query: web::Query<PaginationParams>,
) -> AppResult<HttpResponse> {
    let (offset, limit) = query.resolve()?;
    let results = pool.list_test_results(offset, limit).await?;

    Ok(HttpResponse::Ok().json(results))
}

/// Get a test result by ID.
#[utoipa::path(
    get,
    path = "/api/test_results/{test_result_id}",
    tag = "Test Results",
    params(("test_result_id" = Uuid, Path, description = "Test result UUID")),
    responses(
        (status = 200, description = "Test result with its items", body = TestResultResponse),
        (status = 404, description = "Test result not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_test_result(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let test_result_id = path.into_inner();
    let result = pool
        .get_test_result(test_result_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test result {}", test_result_id)))?;

    Ok(HttpResponse::Ok().json(result))
}

/// Delete a test result and its item outcomes.
#[utoipa::path(
    delete,
    path = "/api/test_results/{test_result_id}",
    tag = "Test Results",
    params(("test_result_id" = Uuid, Path, description = "Test result UUID")),
    responses(
        (status = 204, description = "Test result deleted"),
        (status = 404, description = "Test result not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_test_result(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let test_result_id = path.into_inner();
    pool.delete_test_result(test_result_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test result {}", test_result_id)))?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure test result routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/lotes/{lote_id}/test_results")
            .route(web::post().to(create_test_result_for_lote)),
    )
    .service(web::resource("/test_results").route(web::get().to(list_test_results)))
    .service(
        web::resource("/test_results/{test_result_id}")
            .route(web::get().to(get_test_result))
            .route(web::delete().to(delete_test_result)),
    );
}
