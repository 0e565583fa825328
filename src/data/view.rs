use super::filter::{filtered_indices, SearchField, StatusFilter};
use super::metric::parse_trend;
use super::model::{DatasetRecord, DatasetStatus};
use super::sort::{sort_indices, SortState};

/// Size of the trending widget.
pub const DEFAULT_TRENDING_LIMIT: usize = 7;

// ---------------------------------------------------------------------------
// DatasetViewModel – filter + sort for one view
// ---------------------------------------------------------------------------

/// Query state of one dataset view (table, card grid, dashboard list).
///
/// Stateless with respect to the records: every call to [`view_indices`]
/// re-evaluates the whole pipeline.
///
/// [`view_indices`]: DatasetViewModel::view_indices
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetViewModel {
    pub search_term: String,
    pub search_fields: Vec<SearchField>,
    pub status: StatusFilter,
    pub sort: SortState,
}

impl DatasetViewModel {
    pub fn new(search_fields: Vec<SearchField>) -> Self {
        DatasetViewModel {
            search_term: String::new(),
            search_fields,
            status: None,
            sort: SortState::default(),
        }
    }

    /// Indices into `records` in display order.
    pub fn view_indices(&self, records: &[DatasetRecord]) -> Vec<usize> {
        let mut indices =
            filtered_indices(records, &self.search_term, &self.search_fields, self.status);
        sort_indices(records, &mut indices, &self.sort);
        indices
    }

    /// Records in display order.
    pub fn view<'a>(&self, records: &'a [DatasetRecord]) -> Vec<&'a DatasetRecord> {
        self.view_indices(records)
            .into_iter()
            .map(|i| &records[i])
            .collect()
    }
}

/// Filter `records` by `search_term` over `search_fields`, then sort.
pub fn view<'a>(
    records: &'a [DatasetRecord],
    search_term: &str,
    search_fields: &[SearchField],
    sort: SortState,
) -> Vec<&'a DatasetRecord> {
    let vm = DatasetViewModel {
        search_term: search_term.to_string(),
        search_fields: search_fields.to_vec(),
        status: None,
        sort,
    };
    vm.view(records)
}

/// Presentation window: the first `n` rows of a view.
pub fn take<T>(rows: Vec<T>, n: usize) -> Vec<T> {
    rows.into_iter().take(n).collect()
}

// ---------------------------------------------------------------------------
// Trending subset
// ---------------------------------------------------------------------------

/// Active datasets with a positive trend, strongest first, at most `limit`.
pub fn trending_indices(records: &[DatasetRecord], limit: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.status == DatasetStatus::Active && r.trend.starts_with('+'))
        .map(|(i, _)| i)
        .collect();

    // Descending; an unreadable trend ("+?") sinks to the bottom.
    indices.sort_by(|&i, &j| {
        let a = parse_trend(&records[i].trend);
        let b = parse_trend(&records[j].trend);
        b.partial_cmp(&a)
            .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
    });
    indices.truncate(limit);
    indices
}

pub fn trending(records: &[DatasetRecord], limit: usize) -> Vec<&DatasetRecord> {
    trending_indices(records, limit)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DatasetType, Field};
    use crate::data::sort::SortDirection;

    fn rec(id: &str, status: DatasetStatus, trend: &str) -> DatasetRecord {
        let mut r = DatasetRecord::new(id, id, DatasetType::Stream, status);
        r.trend = trend.to_string();
        r
    }

    fn ids(rows: &[&DatasetRecord]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn trending_keeps_active_positive_trends() {
        let recs = vec![
            rec("a", DatasetStatus::Active, "+5.2%"),
            rec("b", DatasetStatus::Active, "-2.4%"),
            rec("c", DatasetStatus::Paused, "+30%"),
            rec("d", DatasetStatus::Active, "+18.3%"),
            rec("e", DatasetStatus::Active, "N/A"),
            rec("f", DatasetStatus::Active, "0.0%"),
        ];
        assert_eq!(ids(&trending(&recs, 7)), ["d", "a"]);
    }

    #[test]
    fn trending_is_truncated_and_stable() {
        let recs: Vec<_> = (0..10)
            .map(|i| rec(&format!("r{i}"), DatasetStatus::Active, if i % 2 == 0 { "+1%" } else { "+2%" }))
            .collect();
        let top = trending(&recs, 7);
        assert_eq!(top.len(), 7);
        assert_eq!(ids(&top), ["r1", "r3", "r5", "r7", "r9", "r0", "r2"]);
    }

    #[test]
    fn trending_unreadable_values_go_last() {
        let recs = vec![
            rec("x", DatasetStatus::Active, "+?"),
            rec("y", DatasetStatus::Active, "+1%"),
        ];
        assert_eq!(ids(&trending(&recs, 7)), ["y", "x"]);
    }

    #[test]
    fn view_model_filters_then_sorts() {
        let recs = vec![
            rec("alpha", DatasetStatus::Active, "+1%"),
            rec("beta", DatasetStatus::Paused, "+1%"),
            rec("alphabet", DatasetStatus::Active, "+1%"),
        ];
        let mut vm = DatasetViewModel::new(vec![SearchField::Name]);
        vm.search_term = "ALPHA".to_string();
        vm.sort = SortState::new(Field::Name, SortDirection::Descending);
        assert_eq!(ids(&vm.view(&recs)), ["alphabet", "alpha"]);

        vm.search_term.clear();
        vm.status = Some(DatasetStatus::Paused);
        assert_eq!(vm.view_indices(&recs), vec![1]);
    }

    #[test]
    fn take_is_a_prefix() {
        let recs = vec![
            rec("a", DatasetStatus::Active, "+1%"),
            rec("b", DatasetStatus::Active, "+1%"),
            rec("c", DatasetStatus::Active, "+1%"),
        ];
        let sort = SortState::new(Field::Id, SortDirection::Ascending);
        let rows = view(&recs, "", &[SearchField::Name], sort);
        assert_eq!(ids(&take(rows, 2)), ["a", "b"]);
        assert_eq!(take(vec![1, 2], 5), vec![1, 2]);
    }
}
