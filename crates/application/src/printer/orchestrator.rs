use domain::label::{LabelData, LabelSettings};
use domain::printer::{PrintJob, PrintTimings, SurfaceProvider};
use std::sync::Arc;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use super::builder::LabelBuilder;
use super::error::PrintError;
use super::guard::SurfaceGuard;

/// Which signal ended the completion race
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionSignal {
    AfterPrint,
    Fallback,
}

/// Drives a single label through the render surface lifecycle.
///
/// Holds only immutable configuration, so concurrent `print_label` calls are
/// independent: each opens and owns its own surface.
pub struct PrintOrchestrator {
    provider: Arc<dyn SurfaceProvider>,
    settings: LabelSettings,
    timings: PrintTimings,
}

impl PrintOrchestrator {
    pub fn new(provider: Arc<dyn SurfaceProvider>, settings: LabelSettings) -> Self {
        Self {
            provider,
            settings,
            timings: PrintTimings::default(),
        }
    }

    pub fn with_timings(mut self, timings: PrintTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn timings(&self) -> PrintTimings {
        self.timings
    }

    /// Print one label. Resolves `Ok(true)` once the job completes, either by
    /// the surface's after-print event or by the fallback timer.
    pub async fn print_label(&self, data: LabelData) -> Result<bool, PrintError> {
        let mut job = PrintJob::new(data);
        let code = job.data().code().clone();
        let document = LabelBuilder::for_label(job.data(), &self.settings);
        debug!(code = %code, state = %job.state(), "Print job created");

        let surface = match self.provider.open(&document).await {
            Ok(surface) => surface,
            Err(e) => {
                mark_failed(&mut job);
                error!(code = %code, error = %e, "❌ Render surface unavailable");
                return Err(PrintError::SurfaceUnavailable(e.to_string()));
            }
        };
        let mut surface = SurfaceGuard::new(surface);
        advance(&mut job);

        surface.wait_loaded().await;
        advance(&mut job);

        match timeout(self.timings.assets_timeout, surface.wait_assets_ready()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!(code = %code, error = %e, "⚠️ Asset readiness failed, continuing");
            }
            Err(_) => {
                warn!(
                    code = %code,
                    timeout = ?self.timings.assets_timeout,
                    "⚠️ Assets not ready in time, continuing"
                );
            }
        }
        advance(&mut job);

        sleep(self.timings.settle_delay).await;
        advance(&mut job);

        if let Err(e) = surface.print().await {
            mark_failed(&mut job);
            surface.close();
            error!(code = %code, error = %e, "❌ Print command failed");
            return Err(PrintError::PrintCommandFailed(e.to_string()));
        }
        advance(&mut job);

        let signal = tokio::select! {
            _ = surface.wait_after_print() => CompletionSignal::AfterPrint,
            _ = sleep(self.timings.fallback_timeout) => CompletionSignal::Fallback,
        };
        surface.close();
        advance(&mut job);

        info!(code = %code, signal = ?signal, "✅ Label printed");
        Ok(true)
    }
}

fn advance(job: &mut PrintJob) {
    match job.advance() {
        Ok(state) => debug!(code = %job.data().code(), state = %state, "Print job advanced"),
        Err(e) => error!(code = %job.data().code(), state = %job.state(), "Invalid transition: {}", e),
    }
}

fn mark_failed(job: &mut PrintJob) {
    if let Err(e) = job.fail() {
        error!(code = %job.data().code(), state = %job.state(), "Invalid transition: {}", e);
    }
}
