use serde::{Deserialize, Serialize};

use super::model::{DatasetRecord, DatasetStatus, Field};

// ---------------------------------------------------------------------------
// Search fields: which attributes a free-text search looks at
// ---------------------------------------------------------------------------

/// A record attribute that participates in free-text search.
///
/// Each view chooses its own set: the datasets table searches name, type
/// and owner while the catalog cards search name, description and owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Name,
    Type,
    Status,
    Owner,
    Description,
    Sensitivity,
}

impl SearchField {
    pub fn field(self) -> Field {
        match self {
            SearchField::Name => Field::Name,
            SearchField::Type => Field::Type,
            SearchField::Status => Field::Status,
            SearchField::Owner => Field::Owner,
            SearchField::Description => Field::Description,
            SearchField::Sensitivity => Field::Sensitivity,
        }
    }
}

/// Status selection: `None` means "All".
pub type StatusFilter = Option<DatasetStatus>;

/// Whether `record` contains `needle` (already lowercased) in any of `fields`.
/// Absent fields never match.
pub fn matches_search(record: &DatasetRecord, needle: &str, fields: &[SearchField]) -> bool {
    fields.iter().any(|f| {
        f.field()
            .value(record)
            .is_some_and(|v| v.to_lowercase().contains(needle))
    })
}

/// Return indices of records that pass the search term and status filter.
///
/// An empty search term lets every record through; otherwise the
/// case-insensitive term has to be a substring of one of `fields`.
pub fn filtered_indices(
    records: &[DatasetRecord],
    search_term: &str,
    fields: &[SearchField],
    status: StatusFilter,
) -> Vec<usize> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| status.map_or(true, |s| rec.status == s))
        .filter(|(_, rec)| needle.is_empty() || matches_search(rec, &needle, fields))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DatasetType;

    fn sample() -> Vec<DatasetRecord> {
        let mut a = DatasetRecord::new("a", "Web Analytics", DatasetType::Stream, DatasetStatus::Error);
        a.owner = Some("Marketing".to_string());
        a.description = Some("Page views and bounce rate".to_string());
        let mut b = DatasetRecord::new("b", "Employee Directory", DatasetType::Database, DatasetStatus::Active);
        b.owner = Some("HR".to_string());
        let c = DatasetRecord::new("c", "Audit Logs", DatasetType::Log, DatasetStatus::Active);
        vec![a, b, c]
    }

    #[test]
    fn empty_term_keeps_everything() {
        let recs = sample();
        assert_eq!(filtered_indices(&recs, "", &[SearchField::Name], None), vec![0, 1, 2]);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let recs = sample();
        assert_eq!(filtered_indices(&recs, "DIRECTORY", &[SearchField::Name], None), vec![1]);
    }

    #[test]
    fn only_configured_fields_participate() {
        let recs = sample();
        assert!(filtered_indices(&recs, "database", &[SearchField::Name], None).is_empty());
        assert_eq!(
            filtered_indices(&recs, "database", &[SearchField::Name, SearchField::Type], None),
            vec![1]
        );
        assert_eq!(
            filtered_indices(&recs, "bounce", &[SearchField::Name, SearchField::Description], None),
            vec![0]
        );
    }

    #[test]
    fn missing_fields_never_match() {
        let recs = sample();
        // "c" has no owner; "hr" only matches b.
        assert_eq!(filtered_indices(&recs, "hr", &[SearchField::Owner], None), vec![1]);
    }

    #[test]
    fn unmatched_term_yields_nothing() {
        let recs = sample();
        let all = [SearchField::Name, SearchField::Type, SearchField::Owner];
        assert!(filtered_indices(&recs, "zzz", &all, None).is_empty());
    }

    #[test]
    fn status_filter_combines_with_search() {
        let recs = sample();
        let fields = [SearchField::Name];
        assert_eq!(filtered_indices(&recs, "", &fields, Some(DatasetStatus::Active)), vec![1, 2]);
        assert_eq!(filtered_indices(&recs, "logs", &fields, Some(DatasetStatus::Active)), vec![2]);
        assert!(filtered_indices(&recs, "web", &fields, Some(DatasetStatus::Active)).is_empty());
    }
}
