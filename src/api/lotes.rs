//! Lote API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{CreateLoteRequest, LoteResponse, PaginationParams, UpdateLoteStatusRequest};

fn lote_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Lote {}", id))
}

/// Create a lote.
///
/// Names are unique; a taken name is rejected before insert, and the unique
/// index catches concurrent creates that slip past the check.
#[utoipa::path(
    post,
    path = "/api/lotes",
    tag = "Lotes",
    request_body = CreateLoteRequest,
    responses(
        (status = 201, description = "Lote created", body = LoteResponse),
        (status = 400, description = "Lote name already registered", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_lote(
    pool: web::Data<DbPool>,
    body: web::Json<CreateLoteRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    if pool.get_lote_by_name(&req.name).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Lote {} already registered",
            req.name
        )));
    }

    let lote = pool.create_lote(req.name).await?;

    Ok(HttpResponse::Created().json(lote))
}

/// List lotes with their test results.
#[utoipa::path(
    get,
    path = "/api/lotes",
    tag = "Lotes",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of lotes", body = [LoteResponse]),
    )
)]
pub async fn list_lotes(
    pool: web::Data<DbPool>,
    query: web::Query<PaginationParams>,
) -> AppResult<HttpResponse> {
    let (offset, limit) = query.resolve()?;
    let lotes = pool.list_lotes(offset, limit).await?;

    Ok(HttpResponse::Ok().json(lotes))
}

/// Get a lote by ID.
#[utoipa::path(
    get,
    path = "/api/lotes/{lote_id}",
    tag = "Lotes",
    params(("lote_id" = Uuid, Path, description = "Lote UUID")),
    responses(
        (status = 200, description = "Lote with its test results", body = LoteResponse),
        (status = 404, description = "Lote not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_lote(pool: web::Data<DbPool>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let lote_id = path.into_inner();
    let lote = pool
        .get_lote(lote_id)
        .await?
        .ok_or_else(|| lote_not_found(lote_id))?;

    Ok(HttpResponse::Ok().json(lote))
}

/// Replace a lote's status.
#[utoipa::path(
    put,
    path = "/api/lotes/{lote_id}/status",
    tag = "Lotes",
    params(("lote_id" = Uuid, Path, description = "Lote UUID")),
    request_body = UpdateLoteStatusRequest,
    responses(
        (status = 200, description = "Updated lote", body = LoteResponse),
        (status = 404, description = "Lote not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_lote_status(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateLoteStatusRequest>,
) -> AppResult<HttpResponse> {
    let lote_id = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let lote = pool
        .update_lote_status(lote_id, req.status)
        .await?
        .ok_or_else(|| lote_not_found(lote_id))?;

    Ok(HttpResponse::Ok().json(lote))
}

/// Delete a lote with all of its test results.
#[utoipa::path(
    delete,
    path = "/api/lotes/{lote_id}",
    tag = "Lotes",
    params(("lote_id" = Uuid, Path, description = "Lote UUID")),
    responses(
        (status = 204, description = "Lote deleted"),
        (status = 404, description = "Lote not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_lote(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let lote_id = path.into_inner();
    let deleted = pool
        .delete_lote(lote_id)
        .await?
        .ok_or_else(|| lote_not_found(lote_id))?;

    info!("Lote {} ({}) removed via API", deleted.id, deleted.name);

    Ok(HttpResponse::NoContent().finish())
}

/// Configure lote routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/lotes")
            .route(web::get().to(list_lotes))
            .route(web::post().to(create_lote)),
    )
    .service(
        web::resource("/lotes/{lote_id}")
            .route(web::get().to(get_lote))
            .route(web::delete().to(delete_lote)),
    )
    .service(web::resource("/lotes/{lote_id}/status").route(web::put().to(update_lote_status)));
}
