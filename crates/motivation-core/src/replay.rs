//! Recorded host event streams, one JSON [`HostEvent`] per line.
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ReplayError;
use crate::events::HostEvent;

/// Read every event from a JSON Lines stream.
///
/// # Errors
///
/// Returns [`ReplayError::InvalidEvent`] with the 1-based line number of the
/// first line that does not decode, or an IO error from the reader.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<HostEvent>, ReplayError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ReplayError::InvalidEvent {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Open `path` and read every event from it.
///
/// # Errors
///
/// Returns [`ReplayError::OpenFailed`] if the file cannot be opened, otherwise
/// the errors of [`read_events`].
pub fn read_events_file(path: &Path) -> Result<Vec<HostEvent>, ReplayError> {
    let file = File::open(path).map_err(|source| ReplayError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    read_events(BufReader::new(file))
}
