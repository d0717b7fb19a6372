//! Order handlers: thin glue between HTTP and the order store

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::orders::{DuplicateKey, NewOrder, Order};

use super::super::state::AppState;
use super::super::types::{
    ActiveOrdersResponse, ApiError, ApiResult, DuplicateCheckResponse, ErrorResponse,
    MessageResponse, OrderStatusResponse, UpdateStatusRequest, UpdateStatusResponse,
};

/// List the 10 most recently started orders
///
/// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Most recent orders, newest first", body = [Order]),
        (status = 404, description = "No orders exist yet", body = MessageResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Order>>> {
    let orders = state.orders.list_recent().await?;
    Ok(Json(orders))
}

/// Create an order
///
/// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = NewOrder,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Store error, nothing persisted", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let Json(new_order) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let order = state.orders.create(new_order).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Advisory duplicate check
///
/// GET /api/orders/duplicate
#[utoipa::path(
    get,
    path = "/api/orders/duplicate",
    params(DuplicateKey),
    responses(
        (status = 200, description = "Whether a matching order exists", body = DuplicateCheckResponse),
        (status = 400, description = "Missing query parameter", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn check_duplicate(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DuplicateKey>, QueryRejection>,
) -> ApiResult<Json<DuplicateCheckResponse>> {
    let Query(key) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let exists = state.orders.check_duplicate(&key).await?;
    Ok(Json(DuplicateCheckResponse { exists }))
}

/// Status lookup by transaction id
///
/// GET /api/orders/status/{transaction_id}
#[utoipa::path(
    get,
    path = "/api/orders/status/{transaction_id}",
    params(("transaction_id" = String, Path, description = "Caller-supplied transaction id")),
    responses(
        (status = 200, description = "Current status and estimate", body = OrderStatusResponse),
        (status = 404, description = "No order with this transaction id", body = MessageResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order_status(
    State(state): State<Arc<AppState>>,
    Path(transaction_id): Path<String>,
) -> ApiResult<Json<OrderStatusResponse>> {
    let info = state.orders.get_status(&transaction_id).await?;
    Ok(Json(info.into()))
}

/// Count orders that are waiting or mixing
///
/// GET /api/orders/active/count
#[utoipa::path(
    get,
    path = "/api/orders/active/count",
    responses(
        (status = 200, description = "Active order count", body = ActiveOrdersResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn count_active_orders(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ActiveOrdersResponse>> {
    let active_orders = state.orders.count_active().await?;
    Ok(Json(ActiveOrdersResponse { active_orders }))
}

/// Replace an order's status
///
/// PUT /api/orders/{id}/status
///
/// Succeeds even when no order has this id.
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    params(("id" = i64, Path, description = "Order primary key")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateStatusResponse>> {
    let Path(id) = id.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    state.orders.update_status(id, &req.current_status).await?;

    Ok(Json(UpdateStatusResponse {
        message: "Order status updated".to_string(),
        id,
    }))
}
