// SPDX-License-Identifier: MIT

//! HTTP API for expression evaluation
//!
//! Exposes `POST /api/v1/calculate` taking `{"expression": "..."}` and
//! returning either `{"result": "..."}` or `{"error": "..."}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::CalcError;
use crate::expr;

pub async fn serve(port: u16) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = router();

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/v1/calculate", post(calculate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct CalculateRequest {
    expression: String,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Evaluate the posted expression.
///
/// Invalid expressions are the client's fault (422); everything else,
/// including an undecodable body and division by zero, reports as a
/// generic server error (500).
async fn calculate(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> (StatusCode, Json<CalculateResponse>) {
    let Ok(Json(request)) = payload else {
        return internal_error();
    };

    match expr::evaluate(&request.expression) {
        Ok(value) => (
            StatusCode::OK,
            Json(CalculateResponse {
                result: Some(format!("{:.6}", value)),
                error: None,
            }),
        ),
        Err(CalcError::InvalidExpression) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(CalculateResponse {
                result: None,
                error: Some("Expression is not valid".to_string()),
            }),
        ),
        Err(CalcError::DivisionByZero) => internal_error(),
    }
}

fn internal_error() -> (StatusCode, Json<CalculateResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(CalculateResponse {
            result: None,
            error: Some("Internal server error".to_string()),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn post_expression(expression: &str) -> (StatusCode, CalculateResponse) {
        let payload = Ok(Json(CalculateRequest {
            expression: expression.to_string(),
        }));
        let (status, Json(body)) = calculate(payload).await;
        (status, body)
    }

    #[tokio::test]
    async fn test_calculate_addition() {
        let (status, body) = post_expression("2+2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.result.as_deref(), Some("4.000000"));
        assert!(body.error.is_none());
    }

    #[tokio::test]
    async fn test_calculate_subtraction() {
        let (status, body) = post_expression("5-3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.result.as_deref(), Some("2.000000"));
    }

    #[tokio::test]
    async fn test_calculate_multiplication() {
        let (status, body) = post_expression("3*4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.result.as_deref(), Some("12.000000"));
    }

    #[tokio::test]
    async fn test_calculate_division() {
        let (status, body) = post_expression("10/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.result.as_deref(), Some("5.000000"));
    }

    #[tokio::test]
    async fn test_calculate_division_by_zero_is_server_error() {
        let (status, body) = post_expression("1/0").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
        assert!(body.result.is_none());
    }

    #[tokio::test]
    async fn test_calculate_invalid_characters_is_client_error() {
        let (status, body) = post_expression("2+a2").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.as_deref(), Some("Expression is not valid"));
    }

    #[tokio::test]
    async fn test_calculate_missing_closing_paren_is_client_error() {
        let (status, body) = post_expression("(1+2").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.as_deref(), Some("Expression is not valid"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let Json(body) = health_check().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
