use crate::model::Notification;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct NotificationResponse {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    #[serde(rename = "is_read")]
    pub is_read: bool,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

impl From<Notification> for NotificationResponse {
    fn from(value: Notification) -> Self {
        NotificationResponse {
            id: value.notification_id,
            title: value.title,
            body: value.body,
            link: value.link,
            is_read: value.is_read,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
