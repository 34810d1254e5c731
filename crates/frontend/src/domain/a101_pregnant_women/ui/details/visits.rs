//! ANC/PNC visit grid: placeholder padding and per-cell markers.

use contracts::domain::a101_pregnant_women::{AncVisitDto, PncVisitDto};
use contracts::shared::FieldValue;

/// The visit grids always show at least this many columns.
pub const MIN_VISIT_SLOTS: usize = 4;

pub const NOT_DONE: &str = "Not Done";

/// Icon shown for a recorded observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitMarker {
    NotRecorded,
    Negative,
    Positive,
}

impl VisitMarker {
    pub fn icon_class(&self) -> &'static str {
        match self {
            VisitMarker::NotRecorded => "fa fa-minus black",
            VisitMarker::Negative => "fa fa-times red",
            VisitMarker::Positive => "fa fa-check green",
        }
    }
}

/// absent -> not recorded, `0`/`false` -> negative, anything else -> positive
pub fn classify(value: Option<&FieldValue>) -> VisitMarker {
    match value {
        None => VisitMarker::NotRecorded,
        Some(v) if v.is_negative() => VisitMarker::Negative,
        Some(_) => VisitMarker::Positive,
    }
}

pub fn date_label(date: Option<&str>) -> String {
    date.unwrap_or(NOT_DONE).to_string()
}

/// Visit with a date and a fixed list of observation fields.
pub trait VisitRecord: Clone + Default {
    fn date(&self) -> Option<&str>;

    /// `(row label, value)` in display order.
    fn observations(&self) -> Vec<(&'static str, Option<&FieldValue>)>;
}

impl VisitRecord for AncVisitDto {
    fn date(&self) -> Option<&str> {
        self.anc_date.as_deref()
    }

    fn observations(&self) -> Vec<(&'static str, Option<&FieldValue>)> {
        vec![
            ("ANC Location", self.anc_location.as_ref()),
            ("PW Weight", self.pw_weight.as_ref()),
            ("Blood Pressure", self.blood_pressure.as_ref()),
            ("Hb", self.hb.as_ref()),
            ("Abdominal Examination", self.abdominal_examination.as_ref()),
            ("Abnormalities Detected", self.abnormalities_detected.as_ref()),
        ]
    }
}

impl VisitRecord for PncVisitDto {
    fn date(&self) -> Option<&str> {
        self.pnc_date.as_deref()
    }

    fn observations(&self) -> Vec<(&'static str, Option<&FieldValue>)> {
        vec![
            ("Postpartum Haemorrhage", self.postpartum_heamorrhage.as_ref()),
            ("Fever", self.fever.as_ref()),
            ("Convulsions", self.convulsions.as_ref()),
            ("Abdominal Pain", self.abdominal_pain.as_ref()),
            ("Painful Urination", self.painful_urination.as_ref()),
            ("Congested Breasts", self.congested_breasts.as_ref()),
            ("Painful Nipples", self.painful_nipples.as_ref()),
            ("Other Breast Issues", self.other_breasts_issues.as_ref()),
            ("Managing Breast Problems", self.managing_breast_problems.as_ref()),
            ("Increasing Food Intake", self.increasing_food_intake.as_ref()),
            (
                "Possible Maternal Complications",
                self.possible_maternal_complications.as_ref(),
            ),
            (
                "Beneficiary Started Eating",
                self.beneficiary_started_eating.as_ref(),
            ),
        ]
    }
}

/// One column of a visit grid.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitSlot<V> {
    pub visit: V,
    pub placeholder: bool,
}

impl<V: VisitRecord> VisitSlot<V> {
    pub fn recorded(visit: V) -> Self {
        Self {
            visit,
            placeholder: false,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            visit: V::default(),
            placeholder: true,
        }
    }

    pub fn date_label(&self) -> String {
        date_label(self.visit.date())
    }

    pub fn cells(&self) -> Vec<VisitCell> {
        self.visit
            .observations()
            .into_iter()
            .map(|(label, value)| VisitCell {
                label,
                marker: classify(value),
                text: value
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect()
    }
}

/// Rendered observation: icon marker plus the raw value as text.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitCell {
    pub label: &'static str,
    pub marker: VisitMarker,
    pub text: String,
}

/// Replace the placeholders with `incoming` visits and pad back to
/// [`MIN_VISIT_SLOTS`].
pub fn merge_visits<V: VisitRecord>(slots: &mut Vec<VisitSlot<V>>, incoming: Vec<V>) {
    slots.retain(|slot| !slot.placeholder);
    slots.extend(incoming.into_iter().map(VisitSlot::recorded));
    pad_visits(slots);
}

pub fn pad_visits<V: VisitRecord>(slots: &mut Vec<VisitSlot<V>>) {
    while slots.len() < MIN_VISIT_SLOTS {
        slots.push(VisitSlot::placeholder());
    }
}

/// Labels of the observation rows, taken from an empty visit.
pub fn observation_labels<V: VisitRecord>() -> Vec<&'static str> {
    V::default()
        .observations()
        .into_iter()
        .map(|(label, _)| label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pnc(date: &str, fever: f64) -> PncVisitDto {
        PncVisitDto {
            pnc_date: Some(date.to_string()),
            fever: Some(FieldValue::Number(fever)),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(None), VisitMarker::NotRecorded);
        assert_eq!(classify(Some(&FieldValue::Number(0.0))), VisitMarker::Negative);
        assert_eq!(classify(Some(&FieldValue::Flag(false))), VisitMarker::Negative);
        assert_eq!(classify(Some(&FieldValue::Number(2.0))), VisitMarker::Positive);
        assert_eq!(classify(Some(&FieldValue::Flag(true))), VisitMarker::Positive);
        assert_eq!(classify(Some(&FieldValue::from("0"))), VisitMarker::Positive);
        assert_eq!(classify(Some(&FieldValue::from("yes"))), VisitMarker::Positive);
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(VisitMarker::NotRecorded.icon_class(), "fa fa-minus black");
        assert_eq!(VisitMarker::Negative.icon_class(), "fa fa-times red");
        assert_eq!(VisitMarker::Positive.icon_class(), "fa fa-check green");
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label(None), "Not Done");
        assert_eq!(date_label(Some("2019-03-01")), "2019-03-01");
    }

    #[test]
    fn test_merge_pads_to_four() {
        let mut slots: Vec<VisitSlot<PncVisitDto>> = Vec::new();
        merge_visits(&mut slots, vec![pnc("2019-01-01", 1.0)]);
        assert_eq!(slots.len(), 4);
        assert!(!slots[0].placeholder);
        assert!(slots[1..].iter().all(|s| s.placeholder));
        assert!(slots[1..].iter().all(|s| s.visit == PncVisitDto::default()));
    }

    #[test]
    fn test_merge_keeps_more_than_four() {
        let mut slots: Vec<VisitSlot<PncVisitDto>> = Vec::new();
        let visits = (1..=5).map(|d| pnc(&format!("2019-01-0{}", d), 0.0)).collect();
        merge_visits(&mut slots, visits);
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(|s| !s.placeholder));
    }

    #[test]
    fn test_merge_appends_before_placeholders() {
        let mut slots: Vec<VisitSlot<PncVisitDto>> = Vec::new();
        pad_visits(&mut slots);
        merge_visits(&mut slots, vec![pnc("2019-01-01", 1.0)]);
        merge_visits(&mut slots, vec![pnc("2019-02-01", 0.0)]);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].date_label(), "2019-01-01");
        assert_eq!(slots[1].date_label(), "2019-02-01");
        assert_eq!(slots[2].date_label(), "Not Done");
    }

    #[test]
    fn test_placeholder_cells_are_not_recorded() {
        let slot: VisitSlot<AncVisitDto> = VisitSlot::placeholder();
        let cells = slot.cells();
        assert_eq!(cells.len(), observation_labels::<AncVisitDto>().len());
        assert!(cells.iter().all(|c| c.marker == VisitMarker::NotRecorded));
        assert!(cells.iter().all(|c| c.text == "-"));
    }

    #[test]
    fn test_recorded_cells() {
        let slot = VisitSlot::recorded(pnc("2019-01-01", 0.0));
        let fever = slot
            .cells()
            .into_iter()
            .find(|c| c.label == "Fever")
            .unwrap();
        assert_eq!(fever.marker, VisitMarker::Negative);
        assert_eq!(fever.text, "0");
    }
}
