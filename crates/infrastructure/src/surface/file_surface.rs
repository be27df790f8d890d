use async_trait::async_trait;
use domain::printer::{LabelDocument, RenderSurface, SurfaceError, SurfaceProvider};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

const PENDING_DIR: &str = "pending";
const PRINTED_DIR: &str = "printed";

/// Spool-directory surface: the document is staged under `pending/` on open
/// and moved to `printed/` by the print command, where a print daemon or
/// shared-folder watcher picks it up.
pub struct FileSurfaceProvider {
    spool_dir: PathBuf,
}

impl FileSurfaceProvider {
    pub fn new(spool_dir: impl Into<PathBuf>) -> Self {
        Self {
            spool_dir: spool_dir.into(),
        }
    }

    pub fn pending_dir(&self) -> PathBuf {
        self.spool_dir.join(PENDING_DIR)
    }

    pub fn printed_dir(&self) -> PathBuf {
        self.spool_dir.join(PRINTED_DIR)
    }
}

#[async_trait]
impl SurfaceProvider for FileSurfaceProvider {
    async fn open(&self, document: &LabelDocument) -> Result<Box<dyn RenderSurface>, SurfaceError> {
        let pending_dir = self.pending_dir();
        let printed_dir = self.printed_dir();
        for dir in [&pending_dir, &printed_dir] {
            fs::create_dir_all(dir).await.map_err(|e| {
                error!("Failed to prepare spool directory {:?}: {}", dir, e);
                SurfaceError::Unavailable(e.to_string())
            })?;
        }

        let file_name = format!("{}-{}.html", document.code, uuid::Uuid::new_v4());
        let pending = pending_dir.join(&file_name);
        fs::write(&pending, document.markup.as_bytes()).await.map_err(|e| {
            error!("Failed to stage label {:?}: {}", pending, e);
            SurfaceError::Unavailable(e.to_string())
        })?;

        info!("Label staged at {:?}", pending);
        Ok(Box::new(FileSurface {
            pending,
            printed: printed_dir.join(file_name),
            state: FileState::Staged,
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileState {
    Staged,
    Printed,
    Closed,
}

pub struct FileSurface {
    pending: PathBuf,
    printed: PathBuf,
    state: FileState,
}

impl FileSurface {
    pub fn printed_path(&self) -> &Path {
        &self.printed
    }
}

#[async_trait]
impl RenderSurface for FileSurface {
    async fn wait_loaded(&mut self) {
        // Written in full by open()
    }

    async fn wait_assets_ready(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }

    async fn print(&mut self) -> Result<(), SurfaceError> {
        if self.state != FileState::Staged {
            return Err(SurfaceError::CommandFailed(format!(
                "label {:?} is not staged",
                self.pending
            )));
        }

        fs::rename(&self.pending, &self.printed).await.map_err(|e| {
            error!("Failed to spool label {:?}: {}", self.pending, e);
            SurfaceError::CommandFailed(e.to_string())
        })?;
        self.state = FileState::Printed;
        info!("Label spooled to {:?}", self.printed);
        Ok(())
    }

    async fn wait_after_print(&mut self) {
        // The rename is the whole print; nothing further to wait for
    }

    fn close(&mut self) {
        if self.state == FileState::Staged {
            // Never printed: drop the staged file so it is not picked up later.
            // Blocking, but a single unlink; close also runs from Drop where
            // there may be no runtime to hand the work to.
            if let Err(e) = std::fs::remove_file(&self.pending) {
                warn!("Failed to remove staged label {:?}: {}", self.pending, e);
            }
        }
        self.state = FileState::Closed;
    }
}
