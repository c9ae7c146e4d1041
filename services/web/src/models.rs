//! Models for the user directory

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A row of the externally owned `users` table
///
/// Records are read-only for this service: each one is built fresh from a
/// database row per request and discarded once the response is serialized.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn user_list_serializes_in_order_with_expected_fields() {
        let users = vec![
            User {
                id: 1,
                username: "alice".to_string(),
                email: "alice@x.com".to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
                is_active: true,
            },
            User {
                id: 2,
                username: "bob".to_string(),
                email: "bob@x.com".to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap(),
                is_active: false,
            },
        ];

        let value = serde_json::to_value(&users).unwrap();
        assert_eq!(
            value,
            json!([
                {
                    "id": 1,
                    "username": "alice",
                    "email": "alice@x.com",
                    "created_at": "2024-01-01T09:30:00Z",
                    "is_active": true
                },
                {
                    "id": 2,
                    "username": "bob",
                    "email": "bob@x.com",
                    "created_at": "2024-02-01T09:30:00Z",
                    "is_active": false
                }
            ])
        );
    }
}
