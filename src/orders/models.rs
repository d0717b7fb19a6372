//! Order records and intake payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default values applied at order creation
pub mod defaults {
    pub const COLOUR_CODE: &str = "Pending";
    pub const PRIORITY: &str = "Standard";
    pub const ESTIMATED_COMPLETION: &str = "N/A";
    pub const CURRENT_STATUS: &str = "Pending";
}

/// Well-known values of `current_status`.
///
/// The column itself is free-form text: any string is accepted by
/// status updates. These are the values the shop floor uses.
pub mod status {
    pub const PENDING: &str = "Pending";
    pub const WAITING: &str = "Waiting";
    pub const MIXING: &str = "Mixing";
    pub const COMPLETED: &str = "Completed";

    /// Statuses counted as "active" work on the floor
    pub const ACTIVE: [&str; 2] = [WAITING, MIXING];
}

/// A persisted paint order (one row of the `orders` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Order {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "TX1")]
    pub transaction_id: String,
    #[schema(example = "A. Painter")]
    pub customer_name: String,
    #[schema(example = "555-0101")]
    pub client_contact: String,
    #[schema(example = "Acrylic")]
    pub paint_type: String,
    #[schema(example = "Pending")]
    pub colour_code: String,
    #[schema(example = "Retail")]
    pub category: String,
    #[schema(example = "Standard")]
    pub priority: String,
    pub start_time: DateTime<Utc>,
    #[schema(example = "N/A")]
    pub estimated_completion: String,
    #[schema(example = "Pending")]
    pub current_status: String,
}

/// Order intake payload
///
/// Every field is optional at the serde layer so that a missing field is
/// reported as a validation failure rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewOrder {
    #[schema(example = "TX1")]
    pub transaction_id: Option<String>,
    #[schema(example = "A. Painter")]
    pub customer_name: Option<String>,
    #[schema(example = "555-0101")]
    pub client_contact: Option<String>,
    #[schema(example = "Acrylic")]
    pub paint_type: Option<String>,
    #[schema(example = "Retail")]
    pub category: Option<String>,
    pub colour_code: Option<String>,
    pub estimated_completion: Option<String>,
    pub current_status: Option<String>,
}

/// Status pair returned by a transaction-id lookup
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct OrderStatusInfo {
    pub current_status: String,
    pub estimated_completion: String,
}

/// Fields used by the advisory duplicate check
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DuplicateKey {
    pub customer_name: String,
    pub client_contact: String,
    pub paint_type: String,
    pub category: String,
}
