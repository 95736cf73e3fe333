// API layer - HTTP endpoints
pub mod health;
pub mod items;
pub mod json_errors;

pub use health::HealthApi;
pub use items::ItemsApi;
pub use json_errors::JsonErrors;

use poem::http::Method;
use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;
use crate::config::AppSettings;

/// Compose the full HTTP application
///
/// ```text
/// /health           HealthApi
/// /api/v1/items...  ItemsApi
/// /openapi.json     OpenAPI document
/// /docs             Swagger UI
/// ```
pub fn build_app(app_data: &AppData) -> impl Endpoint + use<> {
    let settings = &app_data.settings;

    let api_service = OpenApiService::new(
        (
            HealthApi::new(settings.environment()),
            ItemsApi::new(app_data.db.clone(), app_data.item_store.clone()),
        ),
        "Scaffold API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://localhost:{}", settings.server_port()));

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .with(JsonErrors)
        .with(cors(settings))
        .with(Tracing)
}

/// CORS policy from the configured origin list
fn cors(settings: &AppSettings) -> Cors {
    let cors = Cors::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(["Content-Type", "Authorization"])
        .allow_credentials(true);

    if settings.allows_any_origin() {
        cors
    } else {
        cors.allow_origins(settings.cors_origins().iter().map(String::as_str))
    }
}
