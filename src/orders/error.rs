//! Order store error types

use thiserror::Error;

use super::validation::ValidationError;

/// Errors surfaced by the order store
#[derive(Error, Debug)]
pub enum OrderError {
    /// Caller input rejected before touching the database
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The query ran but matched nothing
    #[error("{0}")]
    NotFound(String),

    /// Any failure reported by PostgreSQL or the pool
    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

impl OrderError {
    /// Error code for API responses and logs
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::Validation(_) => "VALIDATION_ERROR",
            OrderError::NotFound(_) => "NOT_FOUND",
            OrderError::Store(_) => "STORE_ERROR",
        }
    }

    /// HTTP status code for the transport layer
    pub fn http_status(&self) -> u16 {
        match self {
            OrderError::Validation(_) => 400,
            OrderError::NotFound(_) => 404,
            OrderError::Store(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_status() {
        let validation = OrderError::from(ValidationError::MissingFields(vec!["category"]));
        assert_eq!(validation.code(), "VALIDATION_ERROR");
        assert_eq!(validation.http_status(), 400);
        assert_eq!(validation.to_string(), "Missing required fields: category");

        let not_found = OrderError::NotFound("No orders found".to_string());
        assert_eq!(not_found.code(), "NOT_FOUND");
        assert_eq!(not_found.http_status(), 404);

        let store = OrderError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(store.code(), "STORE_ERROR");
        assert_eq!(store.http_status(), 500);
        // underlying driver message is surfaced as-is
        assert_eq!(store.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }
}
