pub mod list;
pub mod request;
pub mod sections;
pub mod visits;

pub use list::{PregnantWomanListRow, PregnantWomenListRequest, PregnantWomenListResponse};
pub use request::{DetailsRequest, Subsection, PREGNANT_WOMEN_SECTION};
pub use sections::*;
pub use visits::{AncVisitDto, PncVisitDto, VisitsPayload};
