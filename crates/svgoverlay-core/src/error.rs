use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Diagram file not found: {}", path.display())]
    MissingDiagram { path: PathBuf },

    #[error("Companion macro file not found: {}", path.display())]
    MissingCompanion { path: PathBuf },

    #[error("Failed to parse SVG: {0}")]
    Svg(#[from] roxmltree::Error),

    #[error("No `\\begin{{picture}}(w,h)` canvas declaration found")]
    MissingCanvas,

    #[error("Invalid number in {context}: {value:?}")]
    InvalidNumber { context: &'static str, value: String },

    #[error("Refusing to overwrite the input diagram: {}", path.display())]
    OutputOverwritesInput { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification used by callers that only care about why an overlay is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The diagram or its companion macro file does not exist.
    MissingInput,
    /// One of the two documents could not be parsed far enough to extract labels or the canvas.
    Parse,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingDiagram { .. } | Error::MissingCompanion { .. } => {
                ErrorKind::MissingInput
            }
            Error::Svg(_) | Error::MissingCanvas | Error::InvalidNumber { .. } => ErrorKind::Parse,
            Error::OutputOverwritesInput { .. } | Error::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
