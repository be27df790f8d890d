pub mod builder;
pub mod error;
pub mod escpos;
pub mod guard;
pub mod orchestrator;
pub mod queue;

pub use builder::LabelBuilder;
pub use error::PrintError;
pub use escpos::EscPosBuilder;
pub use guard::SurfaceGuard;
pub use orchestrator::{CompletionSignal, PrintOrchestrator};
pub use queue::{PrintOutcome, PrintQueue};
