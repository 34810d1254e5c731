pub mod d410_location_reports;

pub use d410_location_reports::LocationReport;
