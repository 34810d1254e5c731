pub mod filter;
pub mod location;
pub mod response;

pub use filter::{ReportFilterState, NATIONAL_LEVEL};
pub use location::{LocationDto, LocationsResponse};
pub use response::{
    ChartPoint, ChartReportData, ChartSeries, IndicatorLine, LocationRanking, MapReportData,
    ReportResponse, Step,
};
