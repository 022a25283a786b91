//! Export CLI command

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{OutlayError, OutlayResult};
use crate::export::{ExportFormat, Snapshot};
use crate::storage::Store;

/// Export the portfolio snapshot to stdout or a file
pub fn handle_export_command(
    store: &Store,
    format: &str,
    output: Option<PathBuf>,
) -> OutlayResult<()> {
    let format: ExportFormat = format.parse()?;
    let snapshot = Snapshot::from_portfolio(store.portfolio());

    match output {
        Some(path) => {
            let mut file = File::create(&path).map_err(|e| {
                OutlayError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            snapshot.write(format, &mut file)?;
            file.flush()
                .map_err(|e| OutlayError::Export(e.to_string()))?;
            eprintln!("Exported snapshot to {}.", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            snapshot.write(format, &mut handle)?;
        }
    }

    Ok(())
}
