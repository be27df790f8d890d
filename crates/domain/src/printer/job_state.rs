use serde::{Deserialize, Serialize};

/// Lifecycle of a single label print invocation.
///
/// Linear: each state has exactly one successor, plus `Failed` which is
/// reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintJobState {
    /// Call started, surface not yet opened
    #[default]
    Created,
    /// Surface opened with the label document
    SurfaceOpened,
    /// Surface signalled the document is loaded
    ContentLoaded,
    /// Fonts ready (or the wait was skipped)
    AssetsReady,
    /// Settle delay elapsed
    Rendered,
    /// Print command issued
    Printed,
    /// Completion event or fallback timer fired
    Completed,
    /// Surface unavailable or print command failed
    Failed,
}

impl PrintJobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// The single forward successor, `None` for terminal states
    pub fn successor(&self) -> Option<Self> {
        match self {
            Self::Created => Some(Self::SurfaceOpened),
            Self::SurfaceOpened => Some(Self::ContentLoaded),
            Self::ContentLoaded => Some(Self::AssetsReady),
            Self::AssetsReady => Some(Self::Rendered),
            Self::Rendered => Some(Self::Printed),
            Self::Printed => Some(Self::Completed),
            Self::Completed | Self::Failed => None,
        }
    }

    /// Transition to the next forward state
    pub fn to_next(&self) -> Result<Self, &'static str> {
        self.successor()
            .ok_or("Cannot advance from a terminal state")
    }

    /// Transition to failed state
    pub fn to_failed(&self) -> Result<Self, &'static str> {
        if self.is_terminal() {
            Err("Cannot fail a job that already finished")
        } else {
            Ok(Self::Failed)
        }
    }
}

impl std::fmt::Display for PrintJobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::SurfaceOpened => "surface_opened",
            Self::ContentLoaded => "content_loaded",
            Self::AssetsReady => "assets_ready",
            Self::Rendered => "rendered",
            Self::Printed => "printed",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
