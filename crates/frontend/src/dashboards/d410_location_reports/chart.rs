//! Chart configuration and Y-axis scaling.
//!
//! The chart widget receives [`ChartOptions`] as JSON; formatting callbacks
//! are expressed as d3 format strings rather than functions.

use crate::shared::date_utils::format_timestamp_ms;
use contracts::dashboards::d410_location_reports::{ChartPoint, ChartSeries};
use serde::Serialize;

pub const CHART_HEIGHT: u32 = 450;
pub const TOOLTIP_HEADER_FORMAT: &str = "%b %Y";

/// Y bounds forced onto the chart, `[lower, upper]`.
pub type AxisBounds = [f64; 2];

fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor).round() / factor
}

/// Padded Y range over every series.
///
/// Extremes are scaled by 100 for percentage indicators and rounded up, the
/// range is padded by a tenth of the span on both sides, and the bounds are
/// scaled back with two decimals (percentages) or none. The lower bound is 0
/// when the padded minimum is negative or `force_zero` is set. `None` when no
/// series has a value.
pub fn y_axis_range(series: &[ChartSeries], use_percentage: bool, force_zero: bool) -> Option<AxisBounds> {
    let (multiplier, precision) = if use_percentage { (100.0, 2) } else { (1.0, 0) };
    let values = series
        .iter()
        .flat_map(|line| line.values.iter().filter_map(|point| point.y));

    let (min, max) = values.fold(None, |acc: Option<(f64, f64)>, y| match acc {
        None => Some((y, y)),
        Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
    })?;

    let max = (max * multiplier).ceil();
    let min = (min * multiplier).ceil();
    let range = max - min;
    let padded_min = min - range / 10.0;

    let lower = if padded_min < 0.0 || force_zero {
        0.0
    } else {
        round_to(padded_min / multiplier, precision)
    };
    let upper = round_to((max + range / 10.0) / multiplier, precision);
    Some([lower, upper])
}

/// X values of the first series.
pub fn chart_ticks(series: &[ChartSeries]) -> Vec<i64> {
    series
        .first()
        .map(|line| line.values.iter().map(|point| point.x).collect())
        .unwrap_or_default()
}

/// Point of the first series at `x`.
pub fn point_at(series: &[ChartSeries], x: i64) -> Option<&ChartPoint> {
    series.first()?.values.iter().find(|point| point.x == x)
}

pub fn tooltip_header(x: i64) -> String {
    format_timestamp_ms(x, TOOLTIP_HEADER_FORMAT)
}

/// Per-page axis formats and caption text.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFormat {
    pub x_axis_tick_format: String,
    pub y_axis_tick_format: String,
    pub caption_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub chart: LineChart,
    pub caption: Caption,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub height: u32,
    pub margin: Margin,
    pub use_interactive_guideline: bool,
    pub clip_voronoi: bool,
    pub tooltips: bool,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_y: Option<AxisBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    pub axis_label: String,
    pub show_max_min: bool,
    /// d3 time format applied to the millisecond timestamp
    pub tick_format: String,
    pub tick_values: Vec<i64>,
    pub axis_label_distance: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub axis_label: String,
    /// d3 number format
    pub tick_format: String,
    pub axis_label_distance: i32,
    pub force_y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    pub enable: bool,
    pub html: String,
    pub css: CaptionCss,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionCss {
    #[serde(rename = "text-align")]
    pub text_align: &'static str,
    pub margin: &'static str,
    pub width: &'static str,
}

pub fn chart_options(format: &ChartFormat, ticks: Vec<i64>, force_y: Option<AxisBounds>) -> ChartOptions {
    ChartOptions {
        chart: LineChart {
            chart_type: "lineChart",
            height: CHART_HEIGHT,
            margin: Margin {
                top: 20,
                right: 60,
                bottom: 60,
                left: 80,
            },
            use_interactive_guideline: true,
            clip_voronoi: false,
            tooltips: true,
            x_axis: XAxis {
                axis_label: String::new(),
                show_max_min: true,
                tick_format: format.x_axis_tick_format.clone(),
                tick_values: ticks,
                axis_label_distance: -100,
            },
            y_axis: YAxis {
                axis_label: String::new(),
                tick_format: format.y_axis_tick_format.clone(),
                axis_label_distance: 20,
                force_y: vec![0.0],
            },
            force_y,
        },
        caption: Caption {
            enable: true,
            html: format!(
                "<i class=\"fa fa-info-circle\"></i>{}",
                format.caption_content
            ),
            css: CaptionCss {
                text_align: "center",
                margin: "0 auto",
                width: "900px",
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(i64, Option<f64>)]) -> ChartSeries {
        ChartSeries {
            key: "Total".into(),
            values: values
                .iter()
                .map(|(x, y)| ChartPoint {
                    x: *x,
                    y: *y,
                    ..Default::default()
                })
                .collect(),
            color: None,
        }
    }

    #[test]
    fn test_percentage_range() {
        let data = vec![
            series(&[(1, Some(0.5)), (2, Some(0.6))]),
            series(&[(1, Some(0.7)), (2, None)]),
        ];
        // min 50, max 70, range 20: [48, 72] scaled back.
        assert_eq!(y_axis_range(&data, true, false), Some([0.48, 0.72]));
        assert_eq!(y_axis_range(&data, true, true), Some([0.0, 0.72]));
    }

    #[test]
    fn test_count_range_clamps_to_zero() {
        let data = vec![series(&[(1, Some(5.0)), (2, Some(105.0))])];
        // padded min is 5 - 10 < 0.
        assert_eq!(y_axis_range(&data, false, false), Some([0.0, 115.0]));
    }

    #[test]
    fn test_count_range_rounds_to_integer() {
        let data = vec![series(&[(1, Some(100.0)), (2, Some(113.0))])];
        // range 13: lower 98.7 -> 99, upper 114.3 -> 114.
        assert_eq!(y_axis_range(&data, false, false), Some([99.0, 114.0]));
    }

    #[test]
    fn test_empty_series_has_no_range() {
        assert_eq!(y_axis_range(&[], true, false), None);
        assert_eq!(y_axis_range(&[series(&[(1, None)])], true, false), None);
    }

    #[test]
    fn test_ticks_and_point_lookup() {
        let data = vec![series(&[(10, Some(1.0)), (20, Some(2.0))])];
        assert_eq!(chart_ticks(&data), vec![10, 20]);
        assert_eq!(point_at(&data, 20).and_then(|p| p.y), Some(2.0));
        assert!(point_at(&data, 30).is_none());
    }

    #[test]
    fn test_chart_options_json() {
        let format = ChartFormat {
            x_axis_tick_format: "%b %Y".into(),
            y_axis_tick_format: ".2%".into(),
            caption_content: " Percentage of women".into(),
        };
        let json = serde_json::to_value(chart_options(&format, vec![1, 2], Some([0.0, 0.5]))).unwrap();
        assert_eq!(json["chart"]["type"], "lineChart");
        assert_eq!(json["chart"]["height"], 450);
        assert_eq!(json["chart"]["margin"]["left"], 80);
        assert_eq!(json["chart"]["useInteractiveGuideline"], true);
        assert_eq!(json["chart"]["xAxis"]["axisLabelDistance"], -100);
        assert_eq!(json["chart"]["xAxis"]["tickValues"][1], 2);
        assert_eq!(json["chart"]["yAxis"]["tickFormat"], ".2%");
        assert_eq!(json["chart"]["forceY"][1], 0.5);
        assert_eq!(
            json["caption"]["html"],
            "<i class=\"fa fa-info-circle\"></i> Percentage of women"
        );
        assert_eq!(json["caption"]["css"]["text-align"], "center");
    }

    #[test]
    fn test_tooltip_header() {
        // 2019-02-01T00:00:00Z
        assert_eq!(tooltip_header(1_548_979_200_000), "Feb 2019");
    }
}
