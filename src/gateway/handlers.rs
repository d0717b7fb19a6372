//! HTTP handlers
//!
//! - [`orders`]: order store operations
//! - [`health`]: liveness and database health

pub mod health;
pub mod orders;

pub use health::{HealthResponse, health_check, root};
pub use orders::{
    check_duplicate, count_active_orders, create_order, get_order_status, list_orders,
    update_order_status,
};
