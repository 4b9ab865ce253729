pub mod api;
pub mod context;
pub mod guard;
pub mod preferences;
pub mod session;

pub use context::AuthSession;
