//! Location-scoped indicator reports with map, chart and table steps.

pub mod api;
pub mod chart;
pub mod controller;
pub mod drilldown;
pub mod filter;
pub mod indicator;
pub mod page;
pub mod popup;
pub mod state;
pub mod ui;

pub use ui::LocationReport;
