use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering or publishing a stylesheet
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("Format '{format}' does not accept {option}")]
    InvalidOption { format: String, option: String },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
