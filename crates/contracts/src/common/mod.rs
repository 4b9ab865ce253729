//! Common types used by every endpoint

pub mod entity_id;
pub mod lenient;
pub mod list_payload;
pub mod list_query;

// Re-exports
pub use entity_id::EntityId;
pub use list_payload::ListPayload;
pub use list_query::ListQuery;
