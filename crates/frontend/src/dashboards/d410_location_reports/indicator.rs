//! Config-driven indicator reports: a share of eligible beneficiaries
//! (`in_month` out of `all`) per location and month.

use contracts::dashboards::d410_location_reports::{ChartPoint, IndicatorLine};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorReport {
    /// Route segment and API endpoint.
    pub endpoint: &'static str,
    pub section_slug: &'static str,
    pub title: &'static str,
    pub numerator_label: &'static str,
    pub denominator_label: &'static str,
    pub percent_label: &'static str,
    pub caption: &'static str,
    pub use_percentage: bool,
}

pub const INDICATOR_REPORTS: [IndicatorReport; 2] = [
    IndicatorReport {
        endpoint: "institutional_deliveries",
        section_slug: "maternal_child",
        title: "Institutional Deliveries",
        numerator_label: "Total number of institutional deliveries in the given month: ",
        denominator_label: "Total number of pregnant women who delivered in the given month: ",
        percent_label: "% institutional deliveries in the given month: ",
        caption: " Of the total number of women enrolled for Anganwadi services who gave birth \
                  in the given month, the percentage of whom delivered in a public or private \
                  medical facility.",
        use_percentage: true,
    },
    IndicatorReport {
        endpoint: "early_initiation",
        section_slug: "maternal_child",
        title: "Early Initiation of Breastfeeding",
        numerator_label: "Total number of children breastfed within an hour of birth: ",
        denominator_label: "Total number of children born in the given month: ",
        percent_label: "% children breastfed within an hour of birth: ",
        caption: " Of the total number of children born in the given month, the percentage who \
                  were put to the breast within one hour of birth.",
        use_percentage: true,
    },
];

pub fn find_report(endpoint: &str) -> Option<&'static IndicatorReport> {
    INDICATOR_REPORTS.iter().find(|r| r.endpoint == endpoint)
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count_text(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}", v.round() as i64))
        .unwrap_or_else(|| "N/A".to_string())
}

fn percent_text(part: Option<f64>, total: Option<f64>) -> String {
    match (part, total) {
        (Some(part), Some(total)) if total > 0.0 => format!("{:.2}%", part * 100.0 / total),
        _ => "N/A".to_string(),
    }
}

impl IndicatorReport {
    fn lines(&self, part: Option<f64>, total: Option<f64>) -> Vec<IndicatorLine> {
        vec![
            IndicatorLine::new(self.numerator_label, count_text(part)),
            IndicatorLine::new(self.denominator_label, count_text(total)),
            IndicatorLine::new(self.percent_label, percent_text(part, total)),
        ]
    }

    pub fn popup_lines(&self, row: &Value) -> Vec<IndicatorLine> {
        self.lines(number(row.get("in_month")), number(row.get("all")))
    }

    pub fn tooltip_lines(&self, point: Option<&ChartPoint>) -> Vec<IndicatorLine> {
        match point {
            Some(point) => self.lines(
                number(point.extra.get("in_month")),
                number(point.extra.get("all")),
            ),
            None => self.lines(None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_popup_lines() {
        let report = find_report("institutional_deliveries").unwrap();
        let lines = report.popup_lines(&json!({"in_month": 3, "all": "8"}));
        assert_eq!(lines[0].indicator_value, "3");
        assert_eq!(lines[1].indicator_value, "8");
        assert_eq!(lines[2].indicator_value, "37.50%");
    }

    #[test]
    fn test_missing_values_render_not_available() {
        let report = &INDICATOR_REPORTS[1];
        let lines = report.popup_lines(&json!({"all": 0}));
        assert_eq!(lines[0].indicator_value, "N/A");
        assert_eq!(lines[2].indicator_value, "N/A");
        assert_eq!(report.tooltip_lines(None).len(), 3);
        assert!(find_report("unknown").is_none());
    }
}
