use std::path::PathBuf;

/// Failures surfaced by the evaluator. Everything else (malformed rows,
/// an automaton that died out) is folded into the metrics instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid arguments: {0}")]
    Argument(String),

    #[error("unable to open grid file {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write metrics file {}: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to export frame {}: {source}", .path.display())]
    FrameExport {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
