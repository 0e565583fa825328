//! Runtime configuration: an optional JSON file plus environment overrides.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::filter::SearchField;
use crate::data::kpi::TimeRange;
use crate::data::view::DEFAULT_TRENDING_LIMIT;

/// Path of the JSON config file.
pub const CONFIG_ENV: &str = "INSIGHTBOARD_CONFIG";
/// Catalog to open at startup; overrides `catalog_path` from the file.
pub const CATALOG_ENV: &str = "INSIGHTBOARD_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Catalog file (`.json` / `.csv`); the built-in sample when absent.
    pub catalog_path: Option<PathBuf>,
    /// Rows shown in the dashboard table.
    pub dashboard_rows: usize,
    /// Entries in the trending widget.
    pub trending_limit: usize,
    /// Initial range of the main chart.
    pub time_range: TimeRange,
    pub dashboard_search_fields: Vec<SearchField>,
    pub table_search_fields: Vec<SearchField>,
    pub catalog_search_fields: Vec<SearchField>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_path: None,
            dashboard_rows: 5,
            trending_limit: DEFAULT_TRENDING_LIMIT,
            time_range: TimeRange::Month,
            dashboard_search_fields: vec![SearchField::Name],
            table_search_fields: vec![SearchField::Name, SearchField::Type, SearchField::Owner],
            catalog_search_fields: vec![
                SearchField::Name,
                SearchField::Description,
                SearchField::Owner,
            ],
        }
    }
}

impl AppConfig {
    /// Read a config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load from the process environment: the file named by
    /// `INSIGHTBOARD_CONFIG` if set, then `INSIGHTBOARD_CATALOG`.
    pub fn load() -> Result<Self> {
        let mut cfg = match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(catalog) = env::var_os(CATALOG_ENV) {
            cfg.catalog_path = Some(PathBuf::from(catalog));
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_dashboard_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.dashboard_rows, 5);
        assert_eq!(cfg.trending_limit, 7);
        assert_eq!(cfg.time_range, TimeRange::Month);
        assert_eq!(cfg.dashboard_search_fields, vec![SearchField::Name]);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            f,
            r#"{{ "dashboardRows": 3, "timeRange": "Week", "tableSearchFields": ["name", "sensitivity"] }}"#
        )
        .unwrap();

        let cfg = AppConfig::from_file(f.path()).unwrap();
        assert_eq!(cfg.dashboard_rows, 3);
        assert_eq!(cfg.time_range, TimeRange::Week);
        assert_eq!(
            cfg.table_search_fields,
            vec![SearchField::Name, SearchField::Sensitivity]
        );
        assert_eq!(cfg.trending_limit, 7);
        assert_eq!(cfg.catalog_path, None);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(f, r#"{{ "dashboardRows": "many" }}"#).unwrap();
        assert!(AppConfig::from_file(f.path()).is_err());
    }
}
