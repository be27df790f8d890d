pub mod file_surface;
pub mod mock_surface;
pub mod network_surface;

pub use file_surface::FileSurfaceProvider;
pub use mock_surface::{AfterPrint, MockBehavior, MockSurfaceProvider};
pub use network_surface::NetworkSurfaceProvider;

use crate::config::{PrinterConfig, PrinterKind};
use domain::printer::SurfaceProvider;
use std::sync::Arc;
use std::time::Duration;

/// Factory for creating render surface providers
pub struct SurfaceFactory;

impl SurfaceFactory {
    /// Create a surface provider from printer configuration
    pub fn create_provider(config: &PrinterConfig) -> Arc<dyn SurfaceProvider> {
        match config.kind {
            PrinterKind::File => Arc::new(FileSurfaceProvider::new(&config.spool_dir)),
            PrinterKind::Network => Arc::new(
                NetworkSurfaceProvider::new(&config.host, config.port)
                    .with_timeout(Duration::from_millis(config.connect_timeout_ms)),
            ),
        }
    }
}
