pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod html;
pub mod page_data;
pub mod query;
pub mod request_tracker;
pub mod scheduler;
pub mod state;
pub mod storage;
