//! API endpoint modules.

pub mod health;
pub mod lotes;
pub mod openapi;
pub mod test_classes;
pub mod test_items;
pub mod test_results;

use actix_web::web;

use crate::error::extractor_error;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use lotes::configure_routes as configure_lote_routes;
pub use test_classes::configure_routes as configure_test_class_routes;
pub use test_items::configure_routes as configure_test_item_routes;
pub use test_results::configure_routes as configure_test_result_routes;

/// Configure every route served under the `/api` scope.
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .service(openapi::openapi_json)
        .configure(configure_lote_routes)
        .configure(configure_test_class_routes)
        .configure(configure_test_item_routes)
        .configure(configure_test_result_routes);
}

/// Configure extractor error handling, the root banner and the `/api` scope.
///
/// Shared by the server binary and the integration tests so both route
/// requests identically.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| extractor_error(err)))
        .app_data(web::PathConfig::default().error_handler(|err, _req| extractor_error(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| extractor_error(err)))
        .route("/", web::get().to(health::root))
        .service(web::scope("/api").configure(configure_api_routes));
}
