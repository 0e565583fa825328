//! Built-in sample catalog and chart series used when no catalog file is
//! configured.

use super::kpi::{ChartSeries, KpiKey, TimeRange};
use super::model::{Catalog, DatasetRecord, DatasetStatus, DatasetType};

use super::model::DatasetStatus::{Active, Archived, Error, Paused};
use super::model::DatasetType::{Database, File, Log, Static, Stream};

type Row = (
    &'static str,
    &'static str,
    DatasetType,
    DatasetStatus,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

// id, name, type, status, trend, records, size, created, lastUpdate, owner,
// sensitivity, description, downloads
const ROWS: [Row; 21] = [
    ("ds_002", "Product Catalog (Staging)", Database, Active, "+5.2%", "1.2K", "150MB", "2023-02-01", "2023-11-10", "Data Ops", "Medium",
     "Product IDs, SKUs, pricing, images, and inventory data.", "120+"),
    ("ds_003", "Quarterly Sales Projections", File, Active, "-2.4%", "850", "25MB", "2023-03-20", "2023-11-01", "Finance Team", "High",
     "Revenue forecasts, regional sales targets, and market analysis.", "85+"),
    ("ds_004", "API Gateway Logs (Jan)", Log, Archived, "0.0%", "150M", "25.6TB", "2023-01-31", "2023-02-01", "DevOps", "Medium",
     "API call details, response times, error rates, and user agents.", "15M+"),
    ("ds_005", "Customer Support Tickets", Database, Active, "+18.3%", "45.2K", "2.2GB", "2022-11-10", "2023-11-11", "Support Team", "High",
     "Ticket ID, customer name, issue description, status, and resolution.", "4.5K+"),
    ("ds_006", "Marketing Campaign ROI", Static, Active, "+8.1%", "5.6K", "110MB", "2023-04-05", "2023-10-28", "Marketing", "Medium",
     "Campaign ID, spend, impressions, clicks, conversions, and revenue.", "560+"),
    ("ds_007", "IoT Sensor Data (Factory A)", Stream, Paused, "N/A", "N/A", "N/A", "2023-05-15", "2023-11-05", "Ops", "Low",
     "Temperature, pressure, humidity readings from factory sensors.", "N/A"),
    ("ds_008", "Employee Directory", Database, Active, "+1.0%", "1.8K", "90MB", "2022-01-01", "2023-11-11", "HR", "High",
     "Employee ID, name, department, title, contact information, and start date.", "180+"),
    ("ds_009", "Web Analytics (Main Site)", Stream, Error, "-5.5%", "800K", "500GB", "2023-06-01", "2023-11-12", "Marketing", "Medium",
     "Page views, unique visitors, bounce rate, session duration, and referral sources.", "80K+"),
    ("ds_010", "Financial Transactions Q3", Static, Active, "+3.2%", "1.1M", "1.5GB", "2023-10-01", "2023-11-01", "Finance Team", "Confidential",
     "Transaction ID, amount, date, payment method, and product details.", "110K+"),
    ("ds_012", "Internal Audit Logs (Q1)", Log, Active, "+0.5%", "200M", "30.0TB", "2023-01-01", "2023-03-31", "Security", "High",
     "User actions, system events, access attempts, and security incidents.", "20M+"),
    ("ds_013", "Customer Feedback Survey", File, Active, "+7.8%", "1.5K", "35MB", "2023-09-01", "2023-11-10", "Customer Success", "Medium",
     "Survey responses, customer sentiment, product suggestions, and satisfaction scores.", "150+"),
    ("ds_014", "Supply Chain Data", Database, Active, "+4.1%", "50K", "3.5GB", "2023-08-10", "2023-11-09", "Operations", "High",
     "Supplier information, inventory levels, shipment tracking, and logistics data.", "5K+"),
    ("ds_015", "Website Performance Logs", Log, Active, "+9.2%", "10M", "700GB", "2023-04-15", "Live", "DevOps", "Low",
     "Page load times, server response, network requests, and error logs.", "1M+"),
    ("ds_011", "User Engagement Metrics", Stream, Active, "+15.0%", "3.1M", "1.8TB", "2023-07-20", "Live", "Product Team", "Medium",
     "User sessions, clicks, page views, conversion funnels, and feature usage.", "310K+"),
    ("ds_001", "Real-time User Activity", Stream, Active, "+12.5%", "2.5M", "1.2TB", "2023-01-15", "Live", "Alex Moran", "High",
     "Live user actions, navigation paths, and interactive events.", "250K+"),
    ("ds_016", "LinkedIn People Profiles", Database, Active, "+10%", "68.3K+", "10GB", "2023-10-01", "2023-11-15", "Marketing", "High",
     "ID, Name, City, Country code, Position, About, Posts, Current company, and more.", "6.7K+"),
    ("ds_017", "Amazon Products", Static, Active, "+15%", "21.3K+", "5GB", "2023-09-20", "2023-11-14", "E-commerce", "Medium",
     "Title, Seller name, Brand, Description, Initial price, Currency, Reviews count, and more.", "3K+"),
    ("ds_018", "LinkedIn Company Information", Database, Active, "+8%", "20.1K+", "8GB", "2023-10-05", "2023-11-13", "Sales", "Medium",
     "ID, Name, Country code, Locations, Followers, Employees in linkedin, About, Specialties, and more.", "2.4K+"),
    ("ds_019", "Instagram - Profiles", Stream, Active, "+20%", "12.6K+", "3GB", "2023-11-01", "2023-11-16", "Social Media", "Medium",
     "Account, Fbid, ID, Followers, Posts count, Is business account, Is professional account, Is verified, and more.", "1.5K+"),
    ("ds_020", "Crunchbase Companies Information", Database, Active, "+12%", "10.3K+", "6GB", "2023-09-15", "2023-11-10", "Business Dev", "Medium",
     "Name, URL, ID, Cb rank, Region, About, Industries, Operating status, and more.", "1.1K+"),
    ("ds_021", "LinkedIn Job Listings Information", Static, Active, "+7%", "9.6K+", "4GB", "2023-10-20", "2023-11-12", "HR", "Medium",
     "URL, job posting id, job title, Company name, Company id, Job location, Job summary, Job seniority level, and more.", "1.5K+"),
];

/// The sample datasets, in catalog order.
pub fn sample_records() -> Vec<DatasetRecord> {
    ROWS.iter()
        .map(
            |&(id, name, kind, status, trend, records, size, created, last_update, owner, sensitivity, description, downloads)| {
                DatasetRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    kind,
                    status,
                    trend: trend.to_string(),
                    records: records.to_string(),
                    size: size.to_string(),
                    created: Some(created.to_string()),
                    last_update: Some(last_update.to_string()),
                    owner: Some(owner.to_string()),
                    sensitivity: Some(sensitivity.to_string()),
                    description: Some(description.to_string()),
                    downloads: Some(downloads.to_string()),
                }
            },
        )
        .collect()
}

/// The sample datasets as a catalog. Ids in [`ROWS`] are unique.
pub fn sample_catalog() -> Catalog {
    Catalog::from_records(sample_records()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

const BLUE: [u8; 3] = [0x3b, 0x82, 0xf6];
const PINK: [u8; 3] = [0xec, 0x48, 0x99];
const TEAL: [u8; 3] = [0x14, 0xb8, 0xa6];
const CYAN: [u8; 3] = [0x22, 0xd3, 0xee];
const ORANGE: [u8; 3] = [0xfb, 0x92, 0x3c];
const GREEN: [u8; 3] = [0x2d, 0xd4, 0xbf];

fn single(label: &str, color: [u8; 3], values: &[f64]) -> Vec<ChartSeries> {
    vec![ChartSeries {
        label: label.to_string(),
        values: values.to_vec(),
        color,
    }]
}

/// Time series shown in the main chart for `key` over `range`.
pub fn series(key: KpiKey, range: TimeRange) -> Vec<ChartSeries> {
    use super::kpi::TimeRange::{Day, Month, Week};

    match (key, range) {
        (KpiKey::Requests, Month) => single("Requests", CYAN, &[
            4000.0, 3000.0, 2000.0, 2780.0, 1890.0, 2390.0, 3490.0, 3000.0, 3500.0, 4100.0, 4300.0, 4500.0,
        ]),
        (KpiKey::Requests, Week) => single("Requests", CYAN, &[
            820.0, 932.0, 901.0, 1120.0, 1290.0, 1250.0, 1100.0,
        ]),
        (KpiKey::Requests, Day) => single("Requests", CYAN, &[
            110.0, 100.0, 120.0, 180.0, 250.0, 300.0, 280.0, 310.0, 350.0, 320.0, 280.0, 200.0,
        ]),
        (KpiKey::Users, Month) => single("Users", ORANGE, &[
            500.0, 520.0, 510.0, 550.0, 580.0, 620.0, 650.0, 680.0, 700.0, 710.0, 730.0, 750.0,
        ]),
        (KpiKey::Users, Week) => single("Users", ORANGE, &[
            680.0, 700.0, 710.0, 730.0, 750.0, 740.0, 720.0,
        ]),
        (KpiKey::Users, Day) => single("Users", ORANGE, &[
            300.0, 250.0, 280.0, 350.0, 450.0, 550.0, 600.0, 620.0, 650.0, 630.0, 580.0, 450.0,
        ]),
        (KpiKey::Latency, Month) => single("Latency (ms)", GREEN, &[
            30.0, 28.0, 32.0, 30.0, 25.0, 22.0, 24.0, 28.0, 26.0, 30.0, 32.0, 28.0,
        ]),
        (KpiKey::Latency, Week) => single("Latency (ms)", GREEN, &[
            32.0, 30.0, 28.0, 25.0, 28.0, 30.0, 29.0,
        ]),
        (KpiKey::Latency, Day) => single("Latency (ms)", GREEN, &[
            20.0, 22.0, 25.0, 30.0, 35.0, 40.0, 38.0, 35.0, 32.0, 28.0, 25.0, 22.0,
        ]),
        (KpiKey::Trending, Month) => trending_series([
            &[0.7, 0.6, 0.8, 0.75, 0.9, 0.85, 0.95, 0.8, 0.7, 0.75, 0.8, 0.9],
            &[0.5, 0.55, 0.6, 0.65, 0.7, 0.6, 0.65, 0.75, 0.8, 0.7, 0.65, 0.7],
            &[0.3, 0.4, 0.35, 0.5, 0.45, 0.55, 0.5, 0.4, 0.3, 0.4, 0.5, 0.4],
        ]),
        (KpiKey::Trending, Week) => trending_series([
            &[0.8, 0.75, 0.85, 0.9, 0.8, 0.7, 0.9],
            &[0.6, 0.65, 0.7, 0.75, 0.7, 0.6, 0.7],
            &[0.4, 0.45, 0.5, 0.4, 0.3, 0.35, 0.4],
        ]),
        (KpiKey::Trending, Day) => trending_series([
            &[0.7, 0.75, 0.8, 0.85, 0.9, 0.88, 0.92, 0.85, 0.8, 0.75, 0.7, 0.65],
            &[0.5, 0.55, 0.6, 0.62, 0.65, 0.6, 0.58, 0.63, 0.6, 0.55, 0.5, 0.48],
            &[0.3, 0.32, 0.35, 0.38, 0.4, 0.37, 0.39, 0.35, 0.3, 0.28, 0.25, 0.2],
        ]),
    }
}

fn trending_series(data: [&[f64]; 3]) -> Vec<ChartSeries> {
    ["Dataset A", "Dataset B", "Dataset C"]
        .into_iter()
        .zip([BLUE, PINK, TEAL])
        .zip(data)
        .map(|((label, color), values)| ChartSeries {
            label: label.to_string(),
            values: values.to_vec(),
            color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_complete() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), ROWS.len());
        assert!(catalog.get("ds_001").is_some());
    }

    #[test]
    fn every_series_matches_its_axis() {
        for key in KpiKey::ALL {
            for range in TimeRange::ALL {
                for s in series(key, range) {
                    assert!(
                        s.values.len() <= range.labels().len(),
                        "{key:?}/{range:?} has more points than labels"
                    );
                }
            }
        }
        assert_eq!(series(KpiKey::Trending, TimeRange::Week).len(), 3);
    }
}
