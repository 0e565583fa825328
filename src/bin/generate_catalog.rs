use std::path::PathBuf;

use anyhow::{Context, Result};

use insightboard::data::{loader::save_file, mock};

/// Writes the built-in sample catalog as JSON and CSV into the directory given
/// as the first argument (current directory by default).
fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let records = mock::sample_records();
    for name in ["sample_catalog.json", "sample_catalog.csv"] {
        let path = out_dir.join(name);
        save_file(&path, &records)?;
        println!("Wrote {} datasets to {}", records.len(), path.display());
    }
    Ok(())
}
