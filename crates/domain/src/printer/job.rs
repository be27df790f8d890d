use serde::{Deserialize, Serialize};

use super::job_state::PrintJobState;
use crate::label::LabelData;

/// One print invocation. Lives only for the duration of the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintJob {
    data: LabelData,
    state: PrintJobState,
}

impl PrintJob {
    pub fn new(data: LabelData) -> Self {
        Self {
            data,
            state: PrintJobState::Created,
        }
    }

    pub fn data(&self) -> &LabelData {
        &self.data
    }

    pub fn state(&self) -> PrintJobState {
        self.state
    }

    /// Move to the next forward state and return it
    pub fn advance(&mut self) -> Result<PrintJobState, &'static str> {
        self.state = self.state.to_next()?;
        Ok(self.state)
    }

    /// Mark the job failed, returning the state it failed in
    pub fn fail(&mut self) -> Result<PrintJobState, &'static str> {
        let stage = self.state;
        self.state = self.state.to_failed()?;
        Ok(stage)
    }
}
