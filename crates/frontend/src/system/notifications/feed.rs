//! Local copy of the notification feed and its unread counter.

use contracts::common::EntityId;
use contracts::system::notifications::{Notification, NotificationList};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFeed {
    pub items: Vec<Notification>,
    pub unread_count: u32,
}

impl NotificationFeed {
    /// Replace local state with a successful poll
    pub fn apply_poll(&mut self, list: NotificationList) {
        self.unread_count = list.unread();
        self.items = list.items;
    }

    /// Returns `true` if the item was unread
    pub fn mark_read(&mut self, id: &EntityId) -> bool {
        match self.items.iter_mut().find(|n| &n.id == id) {
            Some(item) if !item.is_read => {
                item.is_read = true;
                self.unread_count = self.unread_count.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_read = true;
        }
        self.unread_count = 0;
    }

    /// Returns `true` if an item was removed
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let Some(index) = self.items.iter().position(|n| &n.id == id) else {
            return false;
        };
        let removed = self.items.remove(index);
        if !removed.is_read {
            self.unread_count = self.unread_count.saturating_sub(1);
        }
        true
    }

    pub fn badge_text(&self) -> Option<String> {
        match self.unread_count {
            0 => None,
            n if n > 99 => Some("99+".to_string()),
            n => Some(n.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, is_read: bool) -> Notification {
        Notification {
            id: EntityId::Int(id),
            title: format!("Thông báo {}", id),
            message: String::new(),
            kind: None,
            is_read,
            created_at: None,
        }
    }

    fn feed() -> NotificationFeed {
        let mut feed = NotificationFeed::default();
        feed.apply_poll(NotificationList {
            items: vec![item(1, false), item(2, true), item(3, false)],
            unread_count: None,
        });
        feed
    }

    #[test]
    fn test_poll_counts_unread_when_server_omits_it() {
        assert_eq!(feed().unread_count, 2);
    }

    #[test]
    fn test_mark_read_decrements_once() {
        let mut feed = feed();
        assert!(feed.mark_read(&EntityId::Int(1)));
        assert_eq!(feed.unread_count, 1);

        assert!(!feed.mark_read(&EntityId::Int(1)));
        assert_eq!(feed.unread_count, 1);

        assert!(!feed.mark_read(&EntityId::Int(2)));
        assert_eq!(feed.unread_count, 1);
    }

    #[test]
    fn test_mark_read_never_below_zero() {
        let mut feed = NotificationFeed {
            items: vec![item(1, false)],
            unread_count: 0,
        };
        feed.mark_read(&EntityId::Int(1));
        assert_eq!(feed.unread_count, 0);
    }

    #[test]
    fn test_mark_all_read() {
        let mut feed = feed();
        feed.mark_all_read();
        assert_eq!(feed.unread_count, 0);
        assert!(feed.items.iter().all(|n| n.is_read));
    }

    #[test]
    fn test_remove_read_keeps_counter() {
        let mut feed = feed();
        assert!(feed.remove(&EntityId::Int(2)));
        assert_eq!(feed.unread_count, 2);
        assert_eq!(feed.items.len(), 2);
    }

    #[test]
    fn test_remove_unread_decrements() {
        let mut feed = feed();
        assert!(feed.remove(&EntityId::Int(3)));
        assert_eq!(feed.unread_count, 1);
    }

    #[test]
    fn test_remove_unknown_changes_nothing() {
        let mut feed = feed();
        let before = feed.clone();
        assert!(!feed.remove(&EntityId::Int(42)));
        assert_eq!(feed, before);
    }

    #[test]
    fn test_badge_text() {
        let mut feed = NotificationFeed::default();
        assert_eq!(feed.badge_text(), None);
        feed.unread_count = 5;
        assert_eq!(feed.badge_text().as_deref(), Some("5"));
        feed.unread_count = 120;
        assert_eq!(feed.badge_text().as_deref(), Some("99+"));
    }
}
