use domain::printer::PrintJobState;
use thiserror::Error;

/// Failures surfaced to the caller of a print job. Never retried internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrintError {
    #[error("Render surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("Print command failed: {0}")]
    PrintCommandFailed(String),
}

impl PrintError {
    /// State the job was in when it failed
    pub fn stage(&self) -> PrintJobState {
        match self {
            Self::SurfaceUnavailable(_) => PrintJobState::Created,
            Self::PrintCommandFailed(_) => PrintJobState::Rendered,
        }
    }
}
