//! Request/response DTOs and the error-to-HTTP mapping
//!
//! Error bodies are `{"error": "..."}`, except `NotFound` which answers
//! `{"message": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::orders::{OrderError, OrderStatusInfo};

// ============================================================================
// Requests
// ============================================================================

/// Body of `PUT /api/orders/{id}/status`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(example = "Mixing")]
    pub current_status: String,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Missing required fields: category")]
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "No orders found")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DuplicateCheckResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderStatusResponse {
    #[schema(example = "Mixing")]
    pub status: String,
    #[serde(rename = "estimatedCompletion")]
    #[schema(example = "N/A")]
    pub estimated_completion: String,
}

impl From<OrderStatusInfo> for OrderStatusResponse {
    fn from(info: OrderStatusInfo) -> Self {
        Self {
            status: info.current_status,
            estimated_completion: info.estimated_completion,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActiveOrdersResponse {
    #[serde(rename = "activeOrders")]
    #[schema(example = 3)]
    pub active_orders: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusResponse {
    #[schema(example = "Order status updated")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i64,
}

// ============================================================================
// Errors
// ============================================================================

/// Handler error: a store error, or a request axum could not extract
#[derive(Debug)]
pub enum ApiError {
    Order(OrderError),
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(msg: impl ToString) -> Self {
        ApiError::BadRequest(msg.to_string())
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        ApiError::Order(e)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Order(e) => e.into_response(),
            ApiError::BadRequest(msg) => {
                tracing::warn!(code = "BAD_REQUEST", "Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg })).into_response()
            }
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code = self.code(), "Order store failure: {}", self);
        } else {
            tracing::warn!(code = self.code(), "Order request rejected: {}", self);
        }

        match self {
            OrderError::NotFound(message) => {
                (status, Json(MessageResponse { message })).into_response()
            }
            other => (
                status,
                Json(ErrorResponse {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::ValidationError;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_message() {
        let resp = OrderError::NotFound("No orders found".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["message"], "No orders found");
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let err = OrderError::from(ValidationError::MissingFields(vec!["paint_type"]));
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await["error"],
            "Missing required fields: paint_type"
        );
    }

    #[tokio::test]
    async fn test_store_error_maps_to_500_with_driver_message() {
        let resp = OrderError::Store(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await["error"],
            sqlx::Error::PoolTimedOut.to_string()
        );
    }

    #[tokio::test]
    async fn test_bad_request() {
        let resp = ApiError::bad_request("invalid order id").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"], "invalid order id");
    }

    #[test]
    fn test_camel_case_wire_names() {
        let status = OrderStatusResponse::from(OrderStatusInfo {
            current_status: "Mixing".to_string(),
            estimated_completion: "2h".to_string(),
        });
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "Mixing");
        assert_eq!(json["estimatedCompletion"], "2h");

        let json = serde_json::to_value(ActiveOrdersResponse { active_orders: 4 }).unwrap();
        assert_eq!(json["activeOrders"], 4);
    }
}
