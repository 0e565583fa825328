/// Data layer: catalog types, loading, and the dataset view-model.
///
/// Architecture:
/// ```text
///  .json / .csv / built-in sample
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<DatasetRecord>, unique ids
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ──▶ │   sort    │  search term + status → ordered indices
///   └──────────┘      └──────────┘
///        │                  │ metric: "2.5TB" → MB, "45K" → 45000
///        ▼                  ▼
///   ┌──────────────────────────┐
///   │ view: DatasetViewModel,   │  table / cards / dashboard / trending
///   │ take(n), trending         │
///   └──────────────────────────┘
/// ```

pub mod filter;
pub mod kpi;
pub mod loader;
pub mod metric;
pub mod mock;
pub mod model;
pub mod sort;
pub mod view;
