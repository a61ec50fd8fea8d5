use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the CLI before any file is converted
#[derive(Debug, Error)]
pub enum AppError {
    #[error("delimiter must be single byte character, got {delimiter:?}")]
    InvalidDelimiter { delimiter: String },

    #[error("directory {path:?} does not exist")]
    OutputDirMissing { path: PathBuf },

    #[error("cannot expand {path:?}: home directory is unknown")]
    HomeDirUnavailable { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Setup(#[from] tabconv::TabconvError),
}
