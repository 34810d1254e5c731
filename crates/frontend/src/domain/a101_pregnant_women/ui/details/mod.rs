pub mod display;
pub mod loader;
pub mod model;
pub mod page;
pub mod record;
pub mod view_model;
pub mod visits;

pub use page::PregnantWomanDetails;
