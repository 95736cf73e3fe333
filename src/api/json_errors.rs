use poem::http::StatusCode;
use poem::web::Json;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::types::dto::common::{ErrorResponse, FieldErrorDetail, ValidationErrorResponse};

/// Middleware that turns framework errors into JSON error bodies
///
/// Handler errors already carry a JSON body and pass through untouched.
/// Everything else that is not a success (unmatched routes, unparseable
/// payloads, unexpected failures) is rewritten:
///
/// * 404 → `{"error": "Not Found"}`
/// * 405 → `{"error": "Method Not Allowed"}`
/// * other 4xx → `{"error": "Invalid request", "details": [...]}`
/// * 5xx → `{"error": "Internal Server Error", "message": <original text>}`
pub struct JsonErrors;

impl<E: Endpoint> Middleware<E> for JsonErrors {
    type Output = JsonErrorsEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        JsonErrorsEndpoint { inner: ep }
    }
}

pub struct JsonErrorsEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for JsonErrorsEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let resp = match self.inner.call(req).await {
            Ok(output) => output.into_response(),
            Err(err) => err.into_response(),
        };

        let status = resp.status();
        if !(status.is_client_error() || status.is_server_error()) || is_json(&resp) {
            return Ok(resp);
        }

        let message = resp.into_body().into_string().await.unwrap_or_default();
        Ok(json_error(status, message))
    }
}

fn is_json(resp: &Response) -> bool {
    resp.content_type()
        .is_some_and(|content_type| content_type.starts_with("application/json"))
}

fn json_error(status: StatusCode, message: String) -> Response {
    match status {
        StatusCode::NOT_FOUND => Json(ErrorResponse::new("Not Found"))
            .with_status(status)
            .into_response(),
        StatusCode::METHOD_NOT_ALLOWED => Json(ErrorResponse::new("Method Not Allowed"))
            .with_status(status)
            .into_response(),
        status if status.is_client_error() => Json(ValidationErrorResponse {
            error: "Invalid request".to_string(),
            details: vec![FieldErrorDetail {
                field: "request".to_string(),
                message,
            }],
        })
        .with_status(status)
        .into_response(),
        _ => {
            tracing::error!("Unhandled error ({}): {}", status, message);
            Json(ErrorResponse::with_message("Internal Server Error", message))
                .with_status(status)
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::{handler, test::TestClient, EndpointExt, Route};

    #[handler]
    fn boom() -> Result<String> {
        Err(poem::Error::from_string("disk on fire", StatusCode::INTERNAL_SERVER_ERROR))
    }

    #[handler]
    fn teapot() -> Result<String> {
        Err(poem::Error::from_string("short and stout", StatusCode::BAD_REQUEST))
    }

    #[handler]
    fn ok() -> &'static str {
        "fine"
    }

    fn app() -> impl Endpoint {
        Route::new()
            .at("/boom", boom)
            .at("/bad", teapot)
            .at("/ok", ok)
            .with(JsonErrors)
    }

    #[tokio::test]
    async fn test_unmatched_route_becomes_json_404() {
        let resp = TestClient::new(app()).get("/missing").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(serde_json::json!({"error": "Not Found"})).await;
    }

    #[tokio::test]
    async fn test_internal_error_keeps_message() {
        let resp = TestClient::new(app()).get("/boom").send().await;
        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(serde_json::json!({
            "error": "Internal Server Error",
            "message": "disk on fire",
        }))
        .await;
    }

    #[tokio::test]
    async fn test_client_error_gets_details() {
        let resp = TestClient::new(app()).get("/bad").send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(serde_json::json!({
            "error": "Invalid request",
            "details": [{"field": "request", "message": "short and stout"}],
        }))
        .await;
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let resp = TestClient::new(app()).get("/ok").send().await;
        resp.assert_status_is_ok();
        resp.assert_text("fine").await;
    }
}
