//! Repositories for database operations

use anyhow::{Context, Result};
use sqlx::{MySqlPool, Row};

use crate::models::User;

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: MySqlPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Get all users, in the order the database returns them
    pub async fn get_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT id, username, email, created_at, is_active FROM users")
            .fetch_all(&self.pool)
            .await
            .context("error querying users")?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            // Decoded positionally: the indices must stay in lockstep with
            // the SELECT column list above.
            let user = User {
                id: row.try_get(0).context("error decoding user id")?,
                username: row.try_get(1).context("error decoding username")?,
                email: row.try_get(2).context("error decoding email")?,
                created_at: row.try_get(3).context("error decoding created_at")?,
                is_active: row.try_get(4).context("error decoding is_active")?,
            };
            users.push(user);
        }

        Ok(users)
    }
}
