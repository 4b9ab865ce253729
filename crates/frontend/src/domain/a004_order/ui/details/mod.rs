pub mod draft;
pub mod view;

pub use view::{OrderCreate, OrderView};
