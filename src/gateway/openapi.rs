//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    ActiveOrdersResponse, DuplicateCheckResponse, ErrorResponse, MessageResponse,
    OrderStatusResponse, UpdateStatusRequest, UpdateStatusResponse,
};
use crate::orders::{NewOrder, Order};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Paint Orders API",
        version = "1.0.0",
        description = "Order intake and status tracking for a paint-mixing shop.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::orders::list_orders,
        crate::gateway::handlers::orders::create_order,
        crate::gateway::handlers::orders::check_duplicate,
        crate::gateway::handlers::orders::get_order_status,
        crate::gateway::handlers::orders::count_active_orders,
        crate::gateway::handlers::orders::update_order_status,
    ),
    components(
        schemas(
            HealthResponse,
            Order,
            NewOrder,
            UpdateStatusRequest,
            UpdateStatusResponse,
            DuplicateCheckResponse,
            OrderStatusResponse,
            ActiveOrdersResponse,
            ErrorResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Order intake, lookups and status updates"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Paint Orders API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("Paint Orders API"));
        assert!(json.contains("estimatedCompletion"));
    }

    #[test]
    fn test_order_endpoints_registered() {
        let paths = ApiDoc::openapi().paths.paths;
        assert!(paths.contains_key("/api/health"));
        assert!(paths.contains_key("/api/orders"));
        assert!(paths.contains_key("/api/orders/duplicate"));
        assert!(paths.contains_key("/api/orders/status/{transaction_id}"));
        assert!(paths.contains_key("/api/orders/active/count"));
        assert!(paths.contains_key("/api/orders/{id}/status"));
    }
}
