use chrono::{DateTime, Utc};
use domain::barcode::BarcodeCode;
use domain::label::LabelData;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::orchestrator::PrintOrchestrator;

/// Result of one queued print job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintOutcome {
    pub code: BarcodeCode,
    pub success: bool,
    pub error: Option<String>,
    pub finished_at: DateTime<Utc>,
}

/// Runs queued labels through the orchestrator one at a time.
///
/// Failed jobs are reported, not retried; re-submitting is up to the caller.
pub struct PrintQueue {
    orchestrator: Arc<PrintOrchestrator>,
    job_rx: mpsc::Receiver<LabelData>,
    outcome_tx: Option<mpsc::Sender<PrintOutcome>>,
}

impl PrintQueue {
    pub fn new(orchestrator: Arc<PrintOrchestrator>, job_rx: mpsc::Receiver<LabelData>) -> Self {
        Self {
            orchestrator,
            job_rx,
            outcome_tx: None,
        }
    }

    pub fn with_outcomes(mut self, outcome_tx: mpsc::Sender<PrintOutcome>) -> Self {
        self.outcome_tx = Some(outcome_tx);
        self
    }

    pub async fn run(mut self) {
        info!("🖨️ Print queue started");

        while let Some(label) = self.job_rx.recv().await {
            let code = label.code().clone();
            let outcome = match self.orchestrator.print_label(label).await {
                Ok(success) => PrintOutcome {
                    code,
                    success,
                    error: None,
                    finished_at: Utc::now(),
                },
                Err(e) => {
                    error!(code = %code, stage = %e.stage(), "❌ Queued print failed: {}", e);
                    PrintOutcome {
                        code,
                        success: false,
                        error: Some(e.to_string()),
                        finished_at: Utc::now(),
                    }
                }
            };

            if let Some(tx) = &self.outcome_tx {
                if tx.send(outcome).await.is_err() {
                    warn!("Outcome receiver dropped, outcomes will no longer be reported");
                    self.outcome_tx = None;
                }
            }
        }

        // All senders dropped
        info!("🖨️ Print job channel closed. PrintQueue shutting down.");
    }
}
