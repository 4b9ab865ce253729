pub mod api;
pub mod feed;
pub mod widget;

pub use widget::NotificationBell;
