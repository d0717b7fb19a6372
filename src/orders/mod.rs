//! Order management
//!
//! - [`models`]: persisted `Order` and intake payloads
//! - [`validation`]: required-field checks and defaults
//! - [`repository`]: the PostgreSQL order store
//! - [`error`]: store error taxonomy

pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

pub use error::OrderError;
pub use models::{DuplicateKey, NewOrder, Order, OrderStatusInfo, defaults, status};
pub use repository::{OrderRepository, RECENT_ORDERS_LIMIT};
pub use validation::{ValidatedOrder, ValidationError};
