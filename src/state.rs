use chrono::Local;

use insightboard::config::AppConfig;
use insightboard::data::filter::StatusFilter;
use insightboard::data::kpi::{kpi_cards, KpiCard, KpiKey, TimeRange};
use insightboard::data::model::{Catalog, DatasetRecord, DatasetStatus, Field};
use insightboard::data::view::{take, trending_indices, DatasetViewModel};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Datasets,
    Catalog,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Datasets, Page::Catalog];

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Datasets => "Datasets",
            Page::Catalog => "Catalog",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub page: Page,

    /// Search box text, shared by every page.
    pub search_term: String,

    /// Per-page query state.
    pub dashboard_view: DatasetViewModel,
    pub table_view: DatasetViewModel,
    pub catalog_view: DatasetViewModel,

    /// Indices into `catalog.records()` in display order (cached).
    pub dashboard_rows: Vec<usize>,
    pub table_rows: Vec<usize>,
    pub catalog_rows: Vec<usize>,
    pub trending_rows: Vec<usize>,

    pub kpis: Vec<KpiCard>,
    pub active_kpi: KpiKey,
    pub time_range: TimeRange,

    /// Field grouped in the breakdown donut, and its colours.
    pub breakdown_field: Field,
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let mut state = Self {
            dashboard_view: DatasetViewModel::new(config.dashboard_search_fields.clone()),
            table_view: DatasetViewModel::new(config.table_search_fields.clone()),
            catalog_view: DatasetViewModel::new(config.catalog_search_fields.clone()),
            time_range: config.time_range,
            config,
            catalog: Catalog::default(),
            page: Page::Dashboard,
            search_term: String::new(),
            dashboard_rows: Vec::new(),
            table_rows: Vec::new(),
            catalog_rows: Vec::new(),
            trending_rows: Vec::new(),
            kpis: Vec::new(),
            active_kpi: KpiKey::Requests,
            breakdown_field: Field::Type,
            color_map: ColorMap::new(Field::Type, &[]),
            status_message: None,
        };
        state.set_catalog(catalog);
        state
    }

    /// Ingest a newly loaded catalog and recompute every derived view.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.rebuild_color_map();
        self.refresh();
        self.status_message = None;
    }

    pub fn record(&self, index: usize) -> &DatasetRecord {
        &self.catalog.records()[index]
    }

    /// Recompute cached rows and KPI cards after any input change.
    pub fn refresh(&mut self) {
        let records = self.catalog.records();
        self.dashboard_rows = take(
            self.dashboard_view.view_indices(records),
            self.config.dashboard_rows,
        );
        self.table_rows = self.table_view.view_indices(records);
        self.catalog_rows = self.catalog_view.view_indices(records);
        self.trending_rows = trending_indices(records, self.config.trending_limit);
        self.kpis = kpi_cards(&self.catalog);
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        for view in [
            &mut self.dashboard_view,
            &mut self.table_view,
            &mut self.catalog_view,
        ] {
            view.search_term = self.search_term.clone();
        }
        log::debug!("search term set to {term:?}");
        self.refresh();
    }

    /// Header click on the table of `page`.
    pub fn sort_by(&mut self, page: Page, key: Field) {
        let view = match page {
            Page::Dashboard => &mut self.dashboard_view,
            Page::Datasets => &mut self.table_view,
            Page::Catalog => &mut self.catalog_view,
        };
        view.sort.toggle(key);
        log::debug!("{} sorted by {:?}", page.label(), view.sort);
        self.refresh();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.table_view.status = status;
        self.refresh();
    }

    /// Switch a dataset's status; failures end up in `status_message`.
    pub fn change_status(&mut self, id: &str, status: DatasetStatus) {
        let today = Local::now().date_naive();
        match self.catalog.set_status(id, status, today) {
            Ok(()) => {
                log::info!("dataset {id} is now {status}");
                self.rebuild_color_map();
                self.refresh();
            }
            Err(e) => {
                log::warn!("status change refused: {e}");
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn set_breakdown_field(&mut self, field: Field) {
        self.breakdown_field = field;
        self.rebuild_color_map();
    }

    /// Rebuild the colour map from the current `breakdown_field`.
    pub fn rebuild_color_map(&mut self) {
        let values: Vec<String> = self
            .catalog
            .breakdown(self.breakdown_field)
            .into_iter()
            .map(|(value, _)| value)
            .collect();
        self.color_map = ColorMap::new(self.breakdown_field, &values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insightboard::data::mock::sample_catalog;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), sample_catalog())
    }

    fn ids(state: &AppState, rows: &[usize]) -> Vec<String> {
        rows.iter().map(|&i| state.record(i).id.clone()).collect()
    }

    #[test]
    fn initial_views_are_populated() {
        let s = state();
        assert_eq!(s.dashboard_rows.len(), 5);
        assert_eq!(s.table_rows.len(), s.catalog.len());
        assert_eq!(s.trending_rows.len(), 7);
        assert_eq!(s.kpis.len(), 4);
        // Live datasets lead the default (lastUpdate, descending) order.
        assert_eq!(
            ids(&s, &s.table_rows[..3]),
            ["ds_015", "ds_011", "ds_001"]
        );
    }

    #[test]
    fn trending_widget_orders_by_trend() {
        let s = state();
        assert_eq!(
            ids(&s, &s.trending_rows[..3]),
            ["ds_019", "ds_005", "ds_011"]
        );
    }

    #[test]
    fn search_uses_each_pages_fields() {
        let mut s = state();
        s.set_search_term("devops");
        // Owner is searched by the table and catalog, not the dashboard.
        assert!(s.dashboard_rows.is_empty());
        assert_eq!(ids(&s, &s.table_rows), ["ds_015", "ds_004"]);
        assert_eq!(s.catalog_rows.len(), 2);

        s.set_search_term("bounce rate");
        assert!(s.table_rows.is_empty());
        assert_eq!(ids(&s, &s.catalog_rows), ["ds_009"]);
    }

    #[test]
    fn sort_toggle_only_touches_one_page() {
        let mut s = state();
        s.sort_by(Page::Datasets, Field::Size);
        assert_eq!(s.record(s.table_rows[0]).id, "ds_012");
        assert_eq!(s.record(s.dashboard_rows[0]).id, "ds_015");
        s.sort_by(Page::Datasets, Field::Size);
        assert_eq!(s.record(s.table_rows[0]).id, "ds_007");
    }

    #[test]
    fn status_filter_limits_the_table() {
        let mut s = state();
        s.set_status_filter(Some(DatasetStatus::Error));
        assert_eq!(ids(&s, &s.table_rows), ["ds_009"]);
        s.set_status_filter(None);
        assert_eq!(s.table_rows.len(), s.catalog.len());
    }

    #[test]
    fn status_change_refreshes_kpis_and_reports_refusals() {
        let mut s = state();
        let before = s.catalog.active_count();
        s.change_status("ds_002", DatasetStatus::Paused);
        assert_eq!(s.catalog.active_count(), before - 1);
        let trending = s.kpis.iter().find(|k| k.key == KpiKey::Trending).unwrap();
        assert_eq!(trending.value, (before - 1).to_string());
        assert!(s.status_message.is_none());

        s.change_status("ds_004", DatasetStatus::Active);
        assert!(s.status_message.is_some());
    }
}
