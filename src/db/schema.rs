//! Bootstrap DDL for the `orders` table
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so running it against an
//! existing database is a no-op.

use sqlx::PgPool;

pub const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id                   BIGSERIAL PRIMARY KEY,
    transaction_id       TEXT        NOT NULL,
    customer_name        TEXT        NOT NULL,
    client_contact       TEXT        NOT NULL,
    paint_type           TEXT        NOT NULL,
    colour_code          TEXT        NOT NULL DEFAULT 'Pending',
    category             TEXT        NOT NULL,
    priority             TEXT        NOT NULL DEFAULT 'Standard',
    start_time           TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    estimated_completion TEXT        NOT NULL DEFAULT 'N/A',
    current_status       TEXT        NOT NULL DEFAULT 'Pending'
)
"#;

pub const CREATE_ORDERS_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_orders_start_time ON orders (start_time DESC)",
    "CREATE INDEX IF NOT EXISTS idx_orders_transaction_id ON orders (transaction_id)",
    "CREATE INDEX IF NOT EXISTS idx_orders_current_status ON orders (current_status)",
];

/// Create the `orders` table and its indexes if missing
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing orders schema...");

    sqlx::query(CREATE_ORDERS_TABLE).execute(pool).await?;
    for ddl in CREATE_ORDERS_INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!("Orders schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_table_has_all_columns() {
        for column in [
            "id",
            "transaction_id",
            "customer_name",
            "client_contact",
            "paint_type",
            "colour_code",
            "category",
            "priority",
            "start_time",
            "estimated_completion",
            "current_status",
        ] {
            assert!(
                CREATE_ORDERS_TABLE.contains(column),
                "missing column {}",
                column
            );
        }
    }

    #[test]
    fn test_ddl_is_idempotent() {
        assert!(CREATE_ORDERS_TABLE.contains("IF NOT EXISTS"));
        assert!(CREATE_ORDERS_INDEXES.iter().all(|d| d.contains("IF NOT EXISTS")));
    }
}
