use crate::common::{lenient, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, alias = "isRead", alias = "read", deserialize_with = "lenient::or_default")]
    pub is_read: bool,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

/// Payload of `GET /api/notifications`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationList {
    #[serde(default, alias = "notifications", alias = "data")]
    pub items: Vec<Notification>,
    #[serde(default, alias = "unreadCount", deserialize_with = "lenient::opt_number")]
    pub unread_count: Option<u32>,
}

impl NotificationList {
    /// Unread counter as reported by the server, or counted locally when absent
    pub fn unread(&self) -> u32 {
        self.unread_count
            .unwrap_or_else(|| self.items.iter().filter(|n| !n.is_read).count() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_payload() {
        let json = r#"{
            "notifications": [
                {"id": 1, "title": "Đơn hàng mới", "isRead": false, "createdAt": "2024-05-01T08:00:00Z"},
                {"id": 2, "title": "Hết hàng", "isRead": true}
            ],
            "unreadCount": 1
        }"#;
        let list: NotificationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.unread(), 1);
        assert!(list.items[1].is_read);
    }

    #[test]
    fn test_unread_counted_when_missing() {
        let json = r#"{"items":[{"id":"a"},{"id":"b","is_read":true},{"id":"c"}]}"#;
        let list: NotificationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.unread(), 2);
    }
}
