//! Derived display fields of one list row.

use crate::shared::html::escape_html;
use contracts::domain::a101_pregnant_women::{PregnantWomanListRow, PREGNANT_WOMEN_SECTION};
use contracts::shared::FieldValue;

const DETAILS_TYPE_TOKEN: &str = "details_type";
const BENEFICIARY_ID_TOKEN: &str = "beneficiary_id";

/// Fill a details route template and append the month filter.
pub fn details_url(template: &str, id: &str, month: u32, year: i32) -> String {
    let url = template
        .replacen(DETAILS_TYPE_TOKEN, PREGNANT_WOMEN_SECTION, 1)
        .replacen(BENEFICIARY_ID_TOKEN, &urlencoding::encode(id), 1);
    format!("{}?month={}&year={}", url, month, year)
}

/// Anchor around the row name pointing at its details page.
pub fn display_name(row: &PregnantWomanListRow, template: &str, month: u32, year: i32) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        escape_html(&details_url(template, &row.id, month, year)),
        escape_html(&row.name)
    )
}

pub fn display_risk(value: Option<&FieldValue>) -> &'static str {
    if value.is_some_and(FieldValue::is_affirmative) {
        "Yes"
    } else {
        "No"
    }
}

fn cell(value: &Option<FieldValue>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// Column of the list table: server sort key and header title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListColumn {
    pub name: &'static str,
    pub title: &'static str,
}

pub const LIST_COLUMNS: [ListColumn; 5] = [
    ListColumn {
        name: "name",
        title: "Name",
    },
    ListColumn {
        name: "age",
        title: "Age",
    },
    ListColumn {
        name: "pregMonth",
        title: "Preg. Month",
    },
    ListColumn {
        name: "highRiskPregnancy",
        title: "High Risk Pregnancy",
    },
    ListColumn {
        name: "noOfAncCheckUps",
        title: "No. Of ANC Check-Ups",
    },
];

/// Plain-text cells for the non-name columns, in [`LIST_COLUMNS`] order.
pub fn plain_cells(row: &PregnantWomanListRow) -> [String; 4] {
    [
        cell(&row.age),
        cell(&row.preg_month),
        display_risk(row.high_risk_pregnancy.as_ref()).to_string(),
        cell(&row.no_of_anc_check_ups),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "/a/icds/aaa/unified_beneficiary_details/details_type/beneficiary_id/";

    fn row() -> PregnantWomanListRow {
        PregnantWomanListRow {
            id: "abc123".to_string(),
            name: "Asha <Devi>".to_string(),
            age: Some(FieldValue::Number(24.0)),
            preg_month: Some(FieldValue::Number(6.0)),
            high_risk_pregnancy: Some(FieldValue::Number(1.0)),
            no_of_anc_check_ups: None,
        }
    }

    #[test]
    fn test_details_url_fills_template() {
        assert_eq!(
            details_url(TEMPLATE, "abc123", 5, 2019),
            "/a/icds/aaa/unified_beneficiary_details/pregnant_women/abc123/?month=5&year=2019"
        );
    }

    #[test]
    fn test_display_name_follows_filter_and_escapes() {
        let html = display_name(&row(), TEMPLATE, 7, 2020);
        assert_eq!(
            html,
            "<a href=\"/a/icds/aaa/unified_beneficiary_details/pregnant_women/abc123/?month=7&amp;year=2020\">Asha &lt;Devi&gt;</a>"
        );
    }

    #[test]
    fn test_display_risk() {
        assert_eq!(display_risk(Some(&FieldValue::Number(1.0))), "Yes");
        assert_eq!(display_risk(Some(&FieldValue::Flag(true))), "Yes");
        assert_eq!(display_risk(Some(&FieldValue::Text("1".into()))), "Yes");
        assert_eq!(display_risk(Some(&FieldValue::Number(0.0))), "No");
        assert_eq!(display_risk(Some(&FieldValue::Number(2.0))), "No");
        assert_eq!(display_risk(None), "No");
    }

    #[test]
    fn test_plain_cells() {
        assert_eq!(plain_cells(&row()), ["24", "6", "Yes", ""].map(String::from));
    }

    #[test]
    fn test_column_titles() {
        let titles: Vec<&str> = LIST_COLUMNS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Name",
                "Age",
                "Preg. Month",
                "High Risk Pregnancy",
                "No. Of ANC Check-Ups"
            ]
        );
    }
}
