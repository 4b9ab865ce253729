//! HTTP access to the retail backend.
//!
//! - `client`: `ApiClient` (base URL, bearer token, timeout)
//! - `scope`: `RequestScope`, aborts in-flight requests of an unmounted page
//! - `error`: `ApiError` taxonomy and user-facing messages
//! - `url`: base URL normalization and path/query helpers

pub mod client;
pub mod error;
pub mod scope;
pub mod url;

pub use client::ApiClient;
pub use error::ApiError;
pub use scope::RequestScope;
