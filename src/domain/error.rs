//! Domain error types.

/// Top-level error type for bidindex.
///
/// Absent keys are not errors: searches return `Option`/empty results so a
/// miss can never be mistaken for a found-but-empty record.
#[derive(Debug, thiserror::Error)]
pub enum BidIndexError {
    #[error("bid source error: {reason}")]
    Source { reason: String },

    #[error("row {row} has no column {column}")]
    MissingColumn { column: usize, row: usize },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&BidIndexError> for std::process::ExitCode {
    fn from(err: &BidIndexError) -> Self {
        let code: u8 = match err {
            BidIndexError::Io(_) => 1,
            BidIndexError::ConfigParse { .. } | BidIndexError::ConfigMissing { .. } => 2,
            BidIndexError::Source { .. } | BidIndexError::MissingColumn { .. } => 3,
        };
        std::process::ExitCode::from(code)
    }
}
