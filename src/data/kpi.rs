use serde::{Deserialize, Serialize};

use super::mock;
use super::model::Catalog;

/// Headline metric shown as a card on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KpiKey {
    Requests,
    Trending,
    Latency,
    Users,
}

impl KpiKey {
    pub const ALL: [KpiKey; 4] = [
        KpiKey::Requests,
        KpiKey::Trending,
        KpiKey::Latency,
        KpiKey::Users,
    ];

    /// Heading of the main chart while this KPI is selected.
    pub fn chart_title(self) -> &'static str {
        match self {
            KpiKey::Requests => "Total Requests",
            KpiKey::Trending => "Top Dataset Trends",
            KpiKey::Latency => "Average Response",
            KpiKey::Users => "Concurrent Users",
        }
    }

    pub fn chart_description(self) -> &'static str {
        match self {
            KpiKey::Requests => "Requests served across all datasets.",
            KpiKey::Trending => "Performance of top 3 trending datasets.",
            KpiKey::Latency => "Average API response time in milliseconds.",
            KpiKey::Users => "Users connected at the same time.",
        }
    }
}

/// Window of the main chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    Day,
    Week,
    Month,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Day, TimeRange::Week, TimeRange::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Day => "Day",
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
        }
    }

    /// X-axis labels for the full range.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            TimeRange::Month => &[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            TimeRange::Week => &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            TimeRange::Day => &[
                "00:00", "02:00", "04:00", "06:00", "08:00", "10:00", "12:00", "14:00", "16:00",
                "18:00", "20:00", "22:00",
            ],
        }
    }
}

/// One line of the main chart. `color` is RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub color: [u8; 3],
}

/// Content of a KPI card.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub key: KpiKey,
    pub title: String,
    pub value: String,
    pub change: String,
    /// Whether the change is good news (drives the badge colour).
    pub positive: bool,
    pub icon: &'static str,
    pub color: [u8; 3],
}

/// Cards for every KPI. The trending card is derived from `catalog`; the
/// others are static figures.
pub fn kpi_cards(catalog: &Catalog) -> Vec<KpiCard> {
    let active = catalog.active_count();
    let share = if catalog.is_empty() {
        0.0
    } else {
        (active as f64 / catalog.len() as f64 * 100.0).round()
    };

    vec![
        KpiCard {
            key: KpiKey::Requests,
            title: "Total Requests".to_string(),
            value: "2.5M".to_string(),
            change: "+12.5%".to_string(),
            positive: true,
            icon: "Zap",
            color: [0x22, 0xd3, 0xee],
        },
        KpiCard {
            key: KpiKey::Trending,
            title: "Trending Datasets".to_string(),
            value: active.to_string(),
            change: format!("{share}% of all datasets"),
            positive: true,
            icon: "TrendingUp",
            color: [0xc0, 0x84, 0xfc],
        },
        KpiCard {
            key: KpiKey::Latency,
            title: "Avg. Response".to_string(),
            value: "24ms".to_string(),
            change: "-2.4%".to_string(),
            positive: false,
            icon: "Activity",
            color: [0x2d, 0xd4, 0xbf],
        },
        KpiCard {
            key: KpiKey::Users,
            title: "Concurrent Users".to_string(),
            value: "842".to_string(),
            change: "+4.3%".to_string(),
            positive: true,
            icon: "Users",
            color: [0xfb, 0x92, 0x3c],
        },
    ]
}

/// Series for the main chart.
pub fn chart_series(key: KpiKey, range: TimeRange) -> Vec<ChartSeries> {
    mock::series(key, range)
}

/// Axis labels cut to the number of points actually plotted.
pub fn axis_labels(range: TimeRange, len: usize) -> Vec<&'static str> {
    range.labels().iter().take(len).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DatasetRecord, DatasetStatus, DatasetType};

    fn catalog(statuses: &[DatasetStatus]) -> Catalog {
        let records = statuses
            .iter()
            .enumerate()
            .map(|(i, &s)| DatasetRecord::new(&format!("d{i}"), "x", DatasetType::File, s))
            .collect();
        Catalog::from_records(records).unwrap()
    }

    fn trending_card(catalog: &Catalog) -> KpiCard {
        kpi_cards(catalog)
            .into_iter()
            .find(|c| c.key == KpiKey::Trending)
            .unwrap()
    }

    #[test]
    fn trending_card_counts_active_datasets() {
        let card = trending_card(&catalog(&[
            DatasetStatus::Active,
            DatasetStatus::Paused,
            DatasetStatus::Active,
        ]));
        assert_eq!(card.value, "2");
        assert_eq!(card.change, "67% of all datasets");
    }

    #[test]
    fn trending_card_rounds_halves_up() {
        let card = trending_card(&catalog(&[
            DatasetStatus::Active,
            DatasetStatus::Active,
            DatasetStatus::Active,
            DatasetStatus::Error,
            DatasetStatus::Error,
            DatasetStatus::Error,
            DatasetStatus::Error,
            DatasetStatus::Error,
        ]));
        // 3/8 = 37.5%
        assert_eq!(card.change, "38% of all datasets");
    }

    #[test]
    fn empty_catalog_has_zero_share() {
        let card = trending_card(&Catalog::default());
        assert_eq!(card.value, "0");
        assert_eq!(card.change, "0% of all datasets");
    }

    #[test]
    fn axis_labels_follow_series_length() {
        assert_eq!(axis_labels(TimeRange::Week, 3), ["Mon", "Tue", "Wed"]);
        assert_eq!(axis_labels(TimeRange::Week, 20).len(), 7);
        let s = chart_series(KpiKey::Requests, TimeRange::Day);
        assert_eq!(axis_labels(TimeRange::Day, s[0].values.len()).len(), 12);
    }
}
