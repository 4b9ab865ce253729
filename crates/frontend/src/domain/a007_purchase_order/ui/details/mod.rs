mod draft;
mod view;

pub use draft::{PurchaseDraft, PurchaseDraftLine};
pub use view::{PurchaseOrderCreate, PurchaseOrderView};
