//! YAML snapshot export

use std::io::Write;

use super::Snapshot;
use crate::error::{OutlayError, OutlayResult};

/// Write a snapshot as YAML
pub fn write_snapshot<W: Write>(snapshot: &Snapshot, writer: &mut W) -> OutlayResult<()> {
    serde_yaml::to_writer(writer, snapshot).map_err(|e| OutlayError::Export(e.to_string()))?;
    Ok(())
}
