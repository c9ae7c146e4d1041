//! Integration tests for the infrastructure components
//!
//! These tests verify that the MySQL database is properly configured and
//! accessible from the application. They need a running MySQL instance and
//! the five `DB_*`/`MYSQL_*` environment variables, so they are ignored by
//! default; run them with `cargo test -- --ignored`.

use common::database::{DatabaseConfig, connect, health_check};
use sqlx::Row;

/// Test that verifies MySQL is accessible and can perform basic operations
#[tokio::test]
#[ignore]
async fn test_infrastructure_integration() -> Result<(), Box<dyn std::error::Error>> {
    // Build the connection pool from the environment and wait for liveness
    let db_config = DatabaseConfig::from_env()?;
    let pool = connect(&db_config).await?;

    // Verify MySQL connectivity
    assert!(health_check(&pool).await?, "Database health check failed");

    // Perform a simple query to test database connectivity
    let row = sqlx::query("SELECT 1 AS result").fetch_one(&pool).await?;

    let result: i64 = row.get("result");
    assert_eq!(result, 1, "MySQL simple query test failed");

    Ok(())
}
