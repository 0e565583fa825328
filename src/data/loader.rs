use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{Catalog, DatasetRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Load a dataset catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "id": "...", "name": "...", "type": "Stream", ... }, ...]`
/// * `.csv`  – header row with the same camelCase field names
pub fn load_file(path: &Path) -> Result<Catalog> {
    let records = match extension(path).as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    let records: Vec<DatasetRecord> = records.into_iter().map(DatasetRecord::normalized).collect();
    let catalog = Catalog::from_records(records)
        .with_context(|| format!("validating {}", path.display()))?;
    log::debug!("parsed {} datasets from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Write `records` to `path` as pretty JSON or CSV, by extension.
pub fn save_file(path: &Path, records: &[DatasetRecord]) -> Result<()> {
    match extension(path).as_str() {
        "json" => save_json(path, records),
        "csv" => save_csv(path, records),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<DatasetRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON dataset array")
}

fn save_json(path: &Path, records: &[DatasetRecord]) -> Result<()> {
    let text = serde_json::to_string_pretty(records).context("serializing datasets")?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// CSV layout: header row with field names (`id,name,type,status,...`).
/// Empty optional cells read as absent; empty magnitude cells as `"N/A"`.
fn load_csv(path: &Path) -> Result<Vec<DatasetRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize().enumerate() {
        let record: DatasetRecord = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }
    Ok(records)
}

fn save_csv(path: &Path, records: &[DatasetRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    for record in records {
        writer.serialize(record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}
