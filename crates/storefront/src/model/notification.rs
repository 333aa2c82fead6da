use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub notification_id: i32,
    pub title: String,
    pub body: String,
    // human-readable order reference, not a foreign key
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: Option<NaiveDateTime>,
}
