use std::path::Path;

use ss_core::prelude::*;

/// Read every row of an exported event table.
#[instrument]
pub fn read_events(path: &Path) -> Result<Vec<EventRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("could not open event table {}", path.display()))?;

    let headers = reader.headers().with_context(|| format!("could not read header of {}", path.display()))?;
    let missing: Vec<_> = EVENT_COLUMNS.iter().filter(|c| !headers.iter().any(|h| h == **c)).collect();
    ensure!(missing.is_empty(), "{} is missing columns {missing:?}", path.display());

    let records = reader
        .deserialize()
        .collect::<Result<Vec<EventRecord>, _>>()
        .with_context(|| format!("malformed row in {}", path.display()))?;
    info!("loaded {} events from {}", records.len(), path.display());
    Ok(records)
}
