use async_trait::async_trait;
use domain::printer::{LabelDocument, RenderSurface, SurfaceError, SurfaceProvider};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{error, info};

/// Raw TCP print endpoint (JetDirect style, usually port 9100).
///
/// Sends the document's ESC/POS commands; the printer draws the EAN-13
/// symbol itself.
///
/// Such printers never report completion, so jobs sent here always finish
/// through the fallback timer.
pub struct NetworkSurfaceProvider {
    address: String,
    timeout: Duration,
}

impl NetworkSurfaceProvider {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            address: format!("{}:{}", host, port),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl SurfaceProvider for NetworkSurfaceProvider {
    async fn open(&self, document: &LabelDocument) -> Result<Box<dyn RenderSurface>, SurfaceError> {
        info!("Connecting to printer at {}", self.address);
        match tokio::time::timeout(self.timeout, TcpStream::connect(&self.address)).await {
            Ok(Ok(stream)) => {
                info!("Connected to printer!");
                Ok(Box::new(NetworkSurface {
                    stream: Some(stream),
                    payload: document.commands.clone(),
                }))
            }
            Ok(Err(e)) => Err(SurfaceError::Unavailable(e.to_string())),
            Err(_) => Err(SurfaceError::Unavailable("Connection timed out".to_string())),
        }
    }
}

pub struct NetworkSurface {
    stream: Option<TcpStream>,
    payload: Vec<u8>,
}

#[async_trait]
impl RenderSurface for NetworkSurface {
    async fn wait_loaded(&mut self) {}

    async fn wait_assets_ready(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }

    async fn print(&mut self) -> Result<(), SurfaceError> {
        let Some(stream) = &mut self.stream else {
            return Err(SurfaceError::CommandFailed("Not connected".to_string()));
        };

        let result = match stream.write_all(&self.payload).await {
            Ok(()) => stream.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            error!("Failed to write to printer: {}", e);
            self.stream = None; // Invalidate connection
            return Err(SurfaceError::CommandFailed(e.to_string()));
        }
        Ok(())
    }

    async fn wait_after_print(&mut self) {
        std::future::pending::<()>().await
    }

    fn close(&mut self) {
        // Dropping the stream closes the socket
        self.stream = None;
    }
}
