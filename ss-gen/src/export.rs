//! Writing the event table to disk.
use std::fs;
use std::path::Path;

use ss_core::prelude::*;

use crate::errors::ExportError;

/// Write `records` as CSV (header row first) to `path`, creating the parent directory if needed.
#[instrument(skip(records), fields(rows = records.len()))]
pub fn export_events(path: &Path, records: &[EventRecord]) -> EmptyResult {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).context(ExportError::CreateDir(dir.to_path_buf()))?;
    }

    let mut writer = csv::Writer::from_path(path).context(ExportError::Write(path.to_path_buf()))?;
    for record in records {
        writer.serialize(record).context(ExportError::Write(path.to_path_buf()))?;
    }
    writer.flush().context(ExportError::Write(path.to_path_buf()))?;

    debug!("wrote {} events to {}", records.len(), path.display());
    Ok(())
}
