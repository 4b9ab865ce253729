pub mod alert;
pub mod api;
pub mod components;
pub mod date_utils;
pub mod form;
pub mod icons;
pub mod list_controller;
pub mod list_state;
pub mod modal;
pub mod number_format;
pub mod page_frame;
pub mod storage;
