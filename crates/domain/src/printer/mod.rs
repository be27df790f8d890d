mod document;
mod job;
mod job_state;
mod surface;
mod timings;

pub use document::LabelDocument;
pub use job::PrintJob;
pub use job_state::PrintJobState;
pub use surface::{RenderSurface, SurfaceError, SurfaceProvider};
pub use timings::PrintTimings;
