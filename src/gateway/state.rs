use std::sync::Arc;

use crate::db::Database;
use crate::orders::OrderRepository;

/// Shared gateway state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Order store (owns a handle to the pool)
    pub orders: OrderRepository,
    /// Database handle for health checks
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            orders: OrderRepository::new(db.pool().clone()),
            db,
        }
    }
}
