use async_trait::async_trait;
use domain::printer::{LabelDocument, RenderSurface, SurfaceError, SurfaceProvider};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

/// When a mock surface fires its after-print event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AfterPrint {
    #[default]
    Immediate,
    Delayed(Duration),
    Never,
}

/// Scripted behaviour for surfaces handed out by [`MockSurfaceProvider`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBehavior {
    pub fail_open: bool,
    pub fail_assets: bool,
    pub stall_assets: bool,
    pub fail_print: bool,
    pub after_print: AfterPrint,
}

/// Call counters shared by a provider and every surface it opened
#[derive(Debug, Default)]
pub struct MockSurfaceStats {
    pub opens: AtomicUsize,
    pub prints: AtomicUsize,
    pub close_calls: AtomicUsize,
}

impl MockSurfaceStats {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn prints(&self) -> usize {
        self.prints.load(Ordering::SeqCst)
    }

    /// Every call to `close`, including redundant ones
    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Default)]
pub struct MockSurfaceProvider {
    pub behavior: MockBehavior,
    pub stats: Arc<MockSurfaceStats>,
    pub documents: Arc<Mutex<Vec<LabelDocument>>>,
}

impl MockSurfaceProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }
}

#[async_trait]
impl SurfaceProvider for MockSurfaceProvider {
    async fn open(&self, document: &LabelDocument) -> Result<Box<dyn RenderSurface>, SurfaceError> {
        if self.behavior.fail_open {
            return Err(SurfaceError::Unavailable("popup blocked".to_string()));
        }
        self.stats.opens.fetch_add(1, Ordering::SeqCst);
        self.documents.lock().await.push(document.clone());

        Ok(Box::new(MockSurface {
            behavior: self.behavior,
            stats: self.stats.clone(),
            closed: false,
        }))
    }
}

pub struct MockSurface {
    behavior: MockBehavior,
    stats: Arc<MockSurfaceStats>,
    closed: bool,
}

#[async_trait]
impl RenderSurface for MockSurface {
    async fn wait_loaded(&mut self) {}

    async fn wait_assets_ready(&mut self) -> Result<(), SurfaceError> {
        if self.behavior.stall_assets {
            std::future::pending::<()>().await;
        }
        if self.behavior.fail_assets {
            return Err(SurfaceError::AssetsFailed("font failed to load".to_string()));
        }
        Ok(())
    }

    async fn print(&mut self) -> Result<(), SurfaceError> {
        if self.closed {
            return Err(SurfaceError::CommandFailed("surface closed".to_string()));
        }
        if self.behavior.fail_print {
            return Err(SurfaceError::CommandFailed("print dialog crashed".to_string()));
        }
        self.stats.prints.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn wait_after_print(&mut self) {
        match self.behavior.after_print {
            AfterPrint::Immediate => {}
            AfterPrint::Delayed(delay) => tokio::time::sleep(delay).await,
            AfterPrint::Never => std::future::pending::<()>().await,
        }
    }

    fn close(&mut self) {
        self.stats.close_calls.fetch_add(1, Ordering::SeqCst);
        self.closed = true;
    }
}
