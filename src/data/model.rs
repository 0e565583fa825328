use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel for "value does not apply" in magnitude, trend and text fields.
pub const NOT_APPLICABLE: &str = "N/A";

/// Sentinel for "continuously current" in date fields.
pub const LIVE: &str = "Live";

/// Errors raised while building or mutating a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("unknown dataset type '{0}'")]
    UnknownType(String),
    #[error("unknown dataset status '{0}'")]
    UnknownStatus(String),
    #[error("unknown dataset field '{0}'")]
    UnknownField(String),
    #[error("duplicate dataset id '{0}'")]
    DuplicateId(String),
    #[error("no dataset with id '{0}'")]
    UnknownId(String),
    #[error("dataset '{id}' cannot change from {from} to {to}")]
    StatusLocked {
        id: String,
        from: DatasetStatus,
        to: DatasetStatus,
    },
}

// ---------------------------------------------------------------------------
// DatasetType / DatasetStatus – closed enumerations
// ---------------------------------------------------------------------------

/// Kind of data source behind a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DatasetType {
    Stream,
    Database,
    File,
    Log,
    Static,
}

impl DatasetType {
    pub const ALL: [DatasetType; 5] = [
        DatasetType::Stream,
        DatasetType::Database,
        DatasetType::File,
        DatasetType::Log,
        DatasetType::Static,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetType::Stream => "Stream",
            DatasetType::Database => "Database",
            DatasetType::File => "File",
            DatasetType::Log => "Log",
            DatasetType::Static => "Static",
        }
    }

    /// Name of the icon shown next to datasets of this type.
    pub fn icon_name(self) -> &'static str {
        match self {
            DatasetType::Stream => "Server",
            DatasetType::Database => "Database",
            DatasetType::File => "FileText",
            DatasetType::Log => "HardDrive",
            DatasetType::Static => "Cloud",
        }
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownType(s.to_string()))
    }
}

/// Lifecycle state of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DatasetStatus {
    Active,
    Paused,
    Archived,
    Error,
}

impl DatasetStatus {
    pub const ALL: [DatasetStatus; 4] = [
        DatasetStatus::Active,
        DatasetStatus::Paused,
        DatasetStatus::Archived,
        DatasetStatus::Error,
    ];

    /// Statuses a user may switch a dataset to.
    pub const SELECTABLE: [DatasetStatus; 3] = [
        DatasetStatus::Active,
        DatasetStatus::Paused,
        DatasetStatus::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetStatus::Active => "Active",
            DatasetStatus::Paused => "Paused",
            DatasetStatus::Archived => "Archived",
            DatasetStatus::Error => "Error",
        }
    }

    /// Archived datasets are frozen; switching to the current status is a no-op.
    pub fn can_change_to(self, next: DatasetStatus) -> bool {
        self != DatasetStatus::Archived && self != next
    }
}

impl fmt::Display for DatasetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetStatus::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// DatasetRecord – one catalog entry
// ---------------------------------------------------------------------------

fn not_applicable() -> String {
    NOT_APPLICABLE.to_string()
}

/// One entry in the dataset catalog.
///
/// Magnitude and trend fields hold either a suffixed number or `"N/A"`;
/// date fields hold an ISO date or `"Live"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DatasetType,
    pub status: DatasetStatus,
    /// Signed percentage, e.g. `"+5.2%"`.
    #[serde(default = "not_applicable")]
    pub trend: String,
    /// Record (or view) count, e.g. `"2.5M"`.
    #[serde(default = "not_applicable")]
    pub records: String,
    /// Storage size, e.g. `"150MB"`.
    #[serde(default = "not_applicable")]
    pub size: String,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub sensitivity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub downloads: Option<String>,
}

impl DatasetRecord {
    /// Minimal record; every optional field empty and magnitudes `"N/A"`.
    pub fn new(id: &str, name: &str, kind: DatasetType, status: DatasetStatus) -> Self {
        DatasetRecord {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            status,
            trend: not_applicable(),
            records: not_applicable(),
            size: not_applicable(),
            created: None,
            last_update: None,
            owner: None,
            sensitivity: None,
            description: None,
            downloads: None,
        }
    }

    /// Replace blank cells with their sentinel / absent form.
    pub fn normalized(mut self) -> Self {
        for field in [&mut self.trend, &mut self.records, &mut self.size] {
            if field.trim().is_empty() {
                *field = not_applicable();
            }
        }
        for field in [
            &mut self.created,
            &mut self.last_update,
            &mut self.owner,
            &mut self.sensitivity,
            &mut self.description,
            &mut self.downloads,
        ] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Field – addressable record attributes
// ---------------------------------------------------------------------------

/// Comparator family used when sorting by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// ISO dates with the `"Live"` sentinel.
    Date,
    /// Suffixed magnitudes compared after unit normalisation.
    Magnitude,
    /// Everything else, compared case-insensitively.
    Text,
}

/// A named attribute of [`DatasetRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    Name,
    Type,
    Status,
    Trend,
    Records,
    Size,
    Created,
    LastUpdate,
    Owner,
    Sensitivity,
    Description,
    Downloads,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Id,
        Field::Name,
        Field::Type,
        Field::Status,
        Field::Trend,
        Field::Records,
        Field::Size,
        Field::Created,
        Field::LastUpdate,
        Field::Owner,
        Field::Sensitivity,
        Field::Description,
        Field::Downloads,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Created | Field::LastUpdate => FieldKind::Date,
            Field::Size | Field::Records => FieldKind::Magnitude,
            _ => FieldKind::Text,
        }
    }

    /// Raw value of this field in `record`, `None` when absent.
    pub fn value(self, record: &DatasetRecord) -> Option<&str> {
        match self {
            Field::Id => Some(&record.id),
            Field::Name => Some(&record.name),
            Field::Type => Some(record.kind.as_str()),
            Field::Status => Some(record.status.as_str()),
            Field::Trend => Some(&record.trend),
            Field::Records => Some(&record.records),
            Field::Size => Some(&record.size),
            Field::Created => record.created.as_deref(),
            Field::LastUpdate => record.last_update.as_deref(),
            Field::Owner => record.owner.as_deref(),
            Field::Sensitivity => record.sensitivity.as_deref(),
            Field::Description => record.description.as_deref(),
            Field::Downloads => record.downloads.as_deref(),
        }
    }

    /// Key used in files and configuration (`lastUpdate`, `type`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Type => "type",
            Field::Status => "status",
            Field::Trend => "trend",
            Field::Records => "records",
            Field::Size => "size",
            Field::Created => "created",
            Field::LastUpdate => "lastUpdate",
            Field::Owner => "owner",
            Field::Sensitivity => "sensitivity",
            Field::Description => "description",
            Field::Downloads => "downloads",
        }
    }

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "Name",
            Field::Type => "Type",
            Field::Status => "Status",
            Field::Trend => "Trend",
            Field::Records => "Records",
            Field::Size => "Size",
            Field::Created => "Created",
            Field::LastUpdate => "Last Update",
            Field::Owner => "Owner",
            Field::Sensitivity => "Sensitivity",
            Field::Description => "Description",
            Field::Downloads => "Downloads",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Parse a calendar date (`2023-11-10`) or an RFC 3339 / ISO date-time.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Display form of a date field: `"Live"` as is, dates as `Nov 10, 2023`.
pub fn format_date(raw: &str) -> String {
    if raw == LIVE {
        return raw.to_string();
    }
    match parse_date(raw) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete collection of datasets
// ---------------------------------------------------------------------------

/// Validated collection of datasets with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<DatasetRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn from_records(records: Vec<DatasetRecord>) -> Result<Self, ModelError> {
        let mut seen = HashSet::with_capacity(records.len());
        for rec in &records {
            if !seen.insert(rec.id.as_str()) {
                return Err(ModelError::DuplicateId(rec.id.clone()));
            }
        }
        Ok(Catalog { records })
    }

    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DatasetRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of datasets currently `Active`.
    pub fn active_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == DatasetStatus::Active)
            .count()
    }

    /// Number of datasets per distinct value of `field`, sorted by value.
    /// Absent values are counted under `"N/A"`.
    pub fn breakdown(&self, field: Field) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for rec in &self.records {
            let key = field.value(rec).unwrap_or(NOT_APPLICABLE);
            *counts.entry(key).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(value, n)| (value.to_string(), n))
            .collect()
    }

    /// Switch the status of dataset `id`, stamping `lastUpdate` with `today`.
    pub fn set_status(
        &mut self,
        id: &str,
        status: DatasetStatus,
        today: NaiveDate,
    ) -> Result<(), ModelError> {
        let rec = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ModelError::UnknownId(id.to_string()))?;

        if !rec.status.can_change_to(status) {
            return Err(ModelError::StatusLocked {
                id: id.to_string(),
                from: rec.status,
                to: status,
            });
        }
        rec.status = status;
        rec.last_update = Some(today.format("%Y-%m-%d").to_string());
        Ok(())
    }
}
