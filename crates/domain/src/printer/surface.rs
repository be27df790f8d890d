use async_trait::async_trait;
use thiserror::Error;

use super::document::LabelDocument;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Surface unavailable: {0}")]
    Unavailable(String),
    #[error("Command failed: {0}")]
    CommandFailed(String),
    #[error("Assets failed: {0}")]
    AssetsFailed(String),
    #[error("I/O error: {0}")]
    Io(String),
}

/// Host-provided factory for render surfaces (print window, spool dir, raw socket)
#[async_trait]
pub trait SurfaceProvider: Send + Sync {
    /// Open a fresh surface showing `document`.
    ///
    /// Every successful call hands out a surface owned exclusively by the caller.
    async fn open(&self, document: &LabelDocument) -> Result<Box<dyn RenderSurface>, SurfaceError>;
}

/// An opened surface. Exclusively owned by the print job that opened it.
#[async_trait]
pub trait RenderSurface: Send {
    /// Resolves once the document is fully loaded
    async fn wait_loaded(&mut self);

    /// Resolves once fonts and other visual assets are ready
    async fn wait_assets_ready(&mut self) -> Result<(), SurfaceError>;

    /// Issue the print command
    async fn print(&mut self) -> Result<(), SurfaceError>;

    /// Resolves when the surface reports the print dialog/job finished.
    /// May never resolve.
    async fn wait_after_print(&mut self);

    /// Release the surface. Must be a no-op when already closed.
    fn close(&mut self);
}
