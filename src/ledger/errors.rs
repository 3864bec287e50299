/// Errors from writing a report.
use thiserror::Error;

/// The only ways a report can fail: the output stream or JSON encoding.
///
/// Unknown sort keys and empty record sets are not errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output stream failed (closed pipe, full disk, …).
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded as JSON.
    #[error("Failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::Json(_) => 1,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}
