use std::time::Duration;

/// Fixed waits used by the print lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintTimings {
    /// Unconditional wait between assets ready and the print command
    pub settle_delay: Duration,
    /// Upper bound on waiting for the after-print event
    pub fallback_timeout: Duration,
    /// Upper bound on waiting for fonts/assets; the job proceeds on expiry
    pub assets_timeout: Duration,
}

impl PrintTimings {
    pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);
    pub const DEFAULT_FALLBACK_TIMEOUT: Duration = Duration::from_millis(1000);
    pub const DEFAULT_ASSETS_TIMEOUT: Duration = Duration::from_millis(5000);
}

impl Default for PrintTimings {
    fn default() -> Self {
        Self {
            settle_delay: Self::DEFAULT_SETTLE_DELAY,
            fallback_timeout: Self::DEFAULT_FALLBACK_TIMEOUT,
            assets_timeout: Self::DEFAULT_ASSETS_TIMEOUT,
        }
    }
}
