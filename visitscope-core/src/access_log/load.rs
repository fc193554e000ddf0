use crate::access_log::{AggregateState, Aggregator, AnalyzeError};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub lines_read: usize,
    /// Lines that did not have the access log shape.
    pub skipped: usize,
}

#[derive(Debug)]
pub struct LoadedLog {
    pub state: AggregateState,
    pub stats: LoadStats,
}

/// Read the whole access log at `path` into a fresh aggregate.
pub fn load_log(path: &Path) -> Result<LoadedLog, AnalyzeError> {
    let file = File::open(path).map_err(|e| AnalyzeError::read_log(path, e))?;
    let loaded = load_reader(BufReader::new(file), path)?;

    tracing::info!(
        path = %path.display(),
        lines = loaded.stats.lines_read,
        visits = loaded.state.total_visits(),
        skipped = loaded.stats.skipped,
        "access log loaded"
    );

    Ok(loaded)
}

/// Same as [`load_log`] for an already opened reader; `origin` is only used
/// in error messages.
pub fn load_reader<R: BufRead>(reader: R, origin: &Path) -> Result<LoadedLog, AnalyzeError> {
    let mut aggregator = Aggregator::new();
    let mut stats = LoadStats::default();

    aggregator.reset();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AnalyzeError::read_log(origin, e))?;
        stats.lines_read += 1;

        match aggregator.ingest(&line) {
            Ok(true) => {}
            Ok(false) => stats.skipped += 1,
            Err(source) => return Err(AnalyzeError::line(origin, idx + 1, source)),
        }
    }

    if stats.skipped > 0 {
        tracing::debug!(skipped = stats.skipped, "skipped lines without access log shape");
    }

    Ok(LoadedLog {
        state: aggregator.into_state(),
        stats,
    })
}
