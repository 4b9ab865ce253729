//! Wire contracts shared between the admin frontend and the retail REST backend.
//!
//! Everything here is a plain serde DTO. The backend owns validation, ID
//! assignment and lifecycle; the only rules encoded here are decoding
//! tolerances and display fallbacks.

pub mod common;
pub mod dashboards;
pub mod domain;
pub mod system;
