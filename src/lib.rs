//! Paint Orders - order tracking backend for a paint-mixing shop
//!
//! Clients submit paint orders, look up their status by transaction id and
//! query recent or active work. All state lives in one PostgreSQL table.
//!
//! # Modules
//!
//! - [`orders`] - Order model, intake validation and the PostgreSQL order store
//! - [`db`] - Connection pool and schema bootstrap
//! - [`gateway`] - axum HTTP binding and OpenAPI docs
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;

// Convenient re-exports at crate root
pub use db::Database;
pub use orders::{
    DuplicateKey, NewOrder, Order, OrderError, OrderRepository, OrderStatusInfo, ValidationError,
};
