use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::metric::parse_metric;
use super::model::{parse_date, DatasetRecord, Field, FieldKind, LIVE, NOT_APPLICABLE};

// ---------------------------------------------------------------------------
// SortState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Sort key and direction chosen by the user. Defaults to most recently
/// updated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Field,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            key: Field::LastUpdate,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn new(key: Field, direction: SortDirection) -> Self {
        SortState { key, direction }
    }

    /// Header click: the same key flips direction, a new key starts descending.
    pub fn toggle(&mut self, key: Field) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Descending;
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Ascending
    }
}

// ---------------------------------------------------------------------------
// Comparators
// ---------------------------------------------------------------------------

/// Position of a date field on the timeline. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DateKey {
    /// Absent or unparseable: least recent.
    Missing,
    Dated(NaiveDateTime),
    /// More recent than any dated value.
    Live,
}

fn date_key(raw: Option<&str>) -> DateKey {
    match raw {
        Some(LIVE) => DateKey::Live,
        Some(s) => parse_date(s).map_or(DateKey::Missing, DateKey::Dated),
        None => DateKey::Missing,
    }
}

/// Absent values count as zero. `NaN` sorts above every number and equals
/// itself, which keeps the order total.
fn compare_magnitudes(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.map_or(0.0, parse_metric);
    let b = b.map_or(0.0, parse_metric);
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

fn text_value(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| *v != NOT_APPLICABLE)
}

/// Compare two records under `sort`.
///
/// Dates and magnitudes follow the direction entirely. For text fields an
/// absent or `"N/A"` value goes last in both directions.
pub fn compare(a: &DatasetRecord, b: &DatasetRecord, sort: &SortState) -> Ordering {
    let va = sort.key.value(a);
    let vb = sort.key.value(b);

    match sort.key.kind() {
        FieldKind::Date => sort.direction.apply(date_key(va).cmp(&date_key(vb))),
        FieldKind::Magnitude => sort.direction.apply(compare_magnitudes(va, vb)),
        FieldKind::Text => match (text_value(va), text_value(vb)) {
            (Some(x), Some(y)) => sort
                .direction
                .apply(x.to_lowercase().cmp(&y.to_lowercase())),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
        },
    }
}

/// Stable sort of `indices` (into `records`) under `sort`.
pub fn sort_indices(records: &[DatasetRecord], indices: &mut [usize], sort: &SortState) {
    indices.sort_by(|&i, &j| compare(&records[i], &records[j], sort));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DatasetStatus, DatasetType};

    fn rec(id: &str) -> DatasetRecord {
        DatasetRecord::new(id, id, DatasetType::File, DatasetStatus::Active)
    }

    fn with_update(id: &str, last_update: Option<&str>) -> DatasetRecord {
        let mut r = rec(id);
        r.last_update = last_update.map(str::to_string);
        r
    }

    fn ids(records: &[DatasetRecord], sort: SortState) -> Vec<String> {
        let mut idx: Vec<usize> = (0..records.len()).collect();
        sort_indices(records, &mut idx, &sort);
        idx.into_iter().map(|i| records[i].id.clone()).collect()
    }

    #[test]
    fn default_sort_is_last_update_descending() {
        let s = SortState::default();
        assert_eq!(s.key, Field::LastUpdate);
        assert_eq!(s.direction, SortDirection::Descending);
    }

    #[test]
    fn toggle_flips_or_resets() {
        let mut s = SortState::default();
        s.toggle(Field::LastUpdate);
        assert!(s.is_ascending());
        s.toggle(Field::Name);
        assert_eq!(s, SortState::new(Field::Name, SortDirection::Descending));
        s.toggle(Field::Name);
        assert_eq!(s, SortState::new(Field::Name, SortDirection::Ascending));
    }

    #[test]
    fn live_is_most_recent_and_missing_least_recent() {
        let recs = vec![
            with_update("dated", Some("2023-06-01")),
            with_update("live", Some("Live")),
            with_update("none", None),
            with_update("older", Some("2022-01-01")),
            with_update("junk", Some("someday")),
        ];
        let asc = SortState::new(Field::LastUpdate, SortDirection::Ascending);
        let desc = SortState::new(Field::LastUpdate, SortDirection::Descending);
        assert_eq!(ids(&recs, asc), ["none", "junk", "older", "dated", "live"]);
        assert_eq!(ids(&recs, desc), ["live", "dated", "older", "none", "junk"]);
    }

    #[test]
    fn two_live_values_keep_input_order() {
        let recs = vec![
            with_update("x", Some("Live")),
            with_update("y", Some("2023-01-01")),
            with_update("z", Some("Live")),
        ];
        let desc = SortState::new(Field::LastUpdate, SortDirection::Descending);
        assert_eq!(ids(&recs, desc), ["x", "z", "y"]);
    }

    #[test]
    fn magnitudes_compare_after_unit_normalisation() {
        let mut a = rec("a");
        a.size = "1GB".to_string();
        let mut b = rec("b");
        b.size = "500MB".to_string();
        let mut c = rec("c");
        c.size = "2TB".to_string();
        let mut d = rec("d");
        d.size = "N/A".to_string();
        let recs = vec![a, b, c, d];

        let desc = SortState::new(Field::Size, SortDirection::Descending);
        assert_eq!(ids(&recs, desc), ["c", "a", "b", "d"]);
        let asc = SortState::new(Field::Size, SortDirection::Ascending);
        assert_eq!(ids(&recs, asc), ["d", "b", "a", "c"]);
    }

    #[test]
    fn record_counts_mix_k_and_m() {
        let mut a = rec("a");
        a.records = "800K".to_string();
        let mut b = rec("b");
        b.records = "1.1M".to_string();
        let mut c = rec("c");
        c.records = "850".to_string();
        let recs = vec![a, b, c];
        let asc = SortState::new(Field::Records, SortDirection::Ascending);
        assert_eq!(ids(&recs, asc), ["c", "a", "b"]);
    }

    #[test]
    fn unparseable_magnitudes_sort_above_numbers() {
        let mut a = rec("a");
        a.size = "lots".to_string();
        let mut b = rec("b");
        b.size = "5GB".to_string();
        let mut c = rec("c");
        c.size = "huge".to_string();
        let recs = vec![a, b, c];
        let asc = SortState::new(Field::Size, SortDirection::Ascending);
        assert_eq!(ids(&recs, asc), ["b", "a", "c"]);
    }

    #[test]
    fn text_compares_case_insensitively() {
        let recs = vec![rec("beta"), rec("Alpha"), rec("gamma")];
        let asc = SortState::new(Field::Name, SortDirection::Ascending);
        assert_eq!(ids(&recs, asc), ["Alpha", "beta", "gamma"]);
        let desc = SortState::new(Field::Name, SortDirection::Descending);
        assert_eq!(ids(&recs, desc), ["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn not_applicable_text_is_last_in_both_directions() {
        let mut a = rec("a");
        a.sensitivity = Some("N/A".to_string());
        let mut b = rec("b");
        b.sensitivity = Some("High".to_string());
        let c = rec("c");
        let mut d = rec("d");
        d.sensitivity = Some("low".to_string());
        let recs = vec![a, b, c, d];

        let asc = SortState::new(Field::Sensitivity, SortDirection::Ascending);
        assert_eq!(ids(&recs, asc), ["b", "d", "a", "c"]);
        let desc = SortState::new(Field::Sensitivity, SortDirection::Descending);
        assert_eq!(ids(&recs, desc), ["d", "b", "a", "c"]);
    }

    #[test]
    fn equal_keys_keep_input_order_in_both_directions() {
        let mut recs = Vec::new();
        for id in ["p", "q", "r"] {
            let mut r = rec(id);
            r.owner = Some("Ops".to_string());
            recs.push(r);
        }
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(ids(&recs, SortState::new(Field::Owner, direction)), ["p", "q", "r"]);
        }
    }
}
