//! Intake validation
//!
//! `ValidatedOrder` can only be built through [`ValidatedOrder::new`], so a
//! value of that type always has every required field present and every
//! default applied.

use chrono::{DateTime, Utc};

use super::models::{NewOrder, defaults};

/// Intake validation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Order ready for insertion: required fields checked, defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    transaction_id: String,
    customer_name: String,
    client_contact: String,
    paint_type: String,
    colour_code: String,
    category: String,
    priority: &'static str,
    start_time: DateTime<Utc>,
    estimated_completion: String,
    current_status: String,
}

/// Treat absent and empty the same way
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ValidatedOrder {
    /// Validate an intake payload and apply defaults.
    ///
    /// `start_time` is captured by the caller once per create so that the
    /// stored timestamp matches the start of the operation.
    pub fn new(order: NewOrder, start_time: DateTime<Utc>) -> Result<Self, ValidationError> {
        let transaction_id = non_empty(order.transaction_id);
        let customer_name = non_empty(order.customer_name);
        let client_contact = non_empty(order.client_contact);
        let paint_type = non_empty(order.paint_type);
        let category = non_empty(order.category);

        match (
            transaction_id,
            customer_name,
            client_contact,
            paint_type,
            category,
        ) {
            (
                Some(transaction_id),
                Some(customer_name),
                Some(client_contact),
                Some(paint_type),
                Some(category),
            ) => Ok(Self {
                transaction_id,
                customer_name,
                client_contact,
                paint_type,
                colour_code: non_empty(order.colour_code)
                    .unwrap_or_else(|| defaults::COLOUR_CODE.to_string()),
                category,
                priority: defaults::PRIORITY,
                start_time,
                estimated_completion: non_empty(order.estimated_completion)
                    .unwrap_or_else(|| defaults::ESTIMATED_COMPLETION.to_string()),
                current_status: non_empty(order.current_status)
                    .unwrap_or_else(|| defaults::CURRENT_STATUS.to_string()),
            }),
            (transaction_id, customer_name, client_contact, paint_type, category) => {
                let missing = [
                    ("transaction_id", transaction_id.is_none()),
                    ("customer_name", customer_name.is_none()),
                    ("client_contact", client_contact.is_none()),
                    ("paint_type", paint_type.is_none()),
                    ("category", category.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(ValidationError::MissingFields(missing))
            }
        }
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }
    pub fn client_contact(&self) -> &str {
        &self.client_contact
    }
    pub fn paint_type(&self) -> &str {
        &self.paint_type
    }
    pub fn colour_code(&self) -> &str {
        &self.colour_code
    }
    pub fn category(&self) -> &str {
        &self.category
    }
    pub fn priority(&self) -> &str {
        self.priority
    }
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
    pub fn estimated_completion(&self) -> &str {
        &self.estimated_completion
    }
    pub fn current_status(&self) -> &str {
        &self.current_status
    }
}
