pub mod d410_location_reports;
