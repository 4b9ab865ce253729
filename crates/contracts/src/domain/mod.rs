pub mod a001_product;
pub mod a002_category;
pub mod a003_customer;
pub mod a004_order;
pub mod a005_promotion;
pub mod a006_inventory;
pub mod a007_purchase_order;
