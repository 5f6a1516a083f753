use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input trace could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Renderer was handed a timeline without lanes.
    #[error("timeline has no lanes to render")]
    EmptyTimeline,
    /// Chart output could not be written.
    #[error("failed to write chart: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
