pub mod form_field;
pub mod list_status;
pub mod page_header;
pub mod stat_card;
pub mod status_badge;
