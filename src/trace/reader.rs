use super::line::parse_line;
use super::timeline::Timeline;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Read a trace file into an ordered [`Timeline`].
///
/// Blank and malformed lines are skipped. Only I/O failures are errors.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_timeline(path: &Path) -> Result<Timeline> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let timeline = read_timeline_from(BufReader::new(file)).map_err(io_err)?;
    info!(lanes = timeline.len(), "read timeline");
    Ok(timeline)
}

/// Same as [`read_timeline`] over any buffered reader.
pub fn read_timeline_from<R: BufRead>(reader: R) -> std::io::Result<Timeline> {
    let mut timeline = Timeline::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some((label, tokens)) => {
                let ticks = tokens.len();
                if timeline.insert(label.as_str(), tokens) {
                    debug!(line_no = idx + 1, %label, ticks, "lane redefined, keeping last");
                }
            }
            None => debug!(line_no = idx + 1, "skipping unparsable line"),
        }
    }
    Ok(timeline)
}
