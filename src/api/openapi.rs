//! OpenAPI documentation configuration.

use actix_web::{HttpResponse, get};
use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SGT Server",
        version = "0.3.0",
        description = "Record-keeping API for equipment test campaigns: lotes, test catalogs and test results"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Lote endpoints
        api::lotes::create_lote,
        api::lotes::list_lotes,
        api::lotes::get_lote,
        api::lotes::update_lote_status,
        api::lotes::delete_lote,
        // Catalog endpoints
        api::test_classes::create_test_class,
        api::test_classes::list_test_classes,
        api::test_classes::get_test_class,
        api::test_classes::delete_test_class,
        api::test_classes::create_test_item_for_class,
        api::test_items::get_test_item,
        api::test_items::delete_test_item,
        // Test result endpoints
        api::test_results::create_test_result_for_lote,
        api::test_results::list_test_results,
        api::test_results::get_test_result,
        api::test_results::delete_test_result,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            models::PaginationParams,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Lotes
            models::CreateLoteRequest,
            models::UpdateLoteStatusRequest,
            models::LoteResponse,
            // Catalog
            models::CreateTestClassRequest,
            models::CreateTestItemRequest,
            models::TestClassResponse,
            models::TestItemResponse,
            // Test Results
            models::TestResultItemStatus,
            models::CreateTestResultItemRequest,
            models::CreateTestResultRequest,
            models::TestResultItemResponse,
            models::TestResultResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Lotes", description = "Equipment batches and their status"),
        (name = "Test Catalog", description = "Test classes and the items they group"),
        (name = "Test Results", description = "Per-equipment test runs and item outcomes")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
#[get("/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
