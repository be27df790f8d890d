use domain::printer::RenderSurface;
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// Owns an opened surface and guarantees it is closed exactly once.
///
/// Closing happens on the first explicit [`SurfaceGuard::close`] or on drop,
/// whichever comes first.
pub struct SurfaceGuard {
    surface: Box<dyn RenderSurface>,
    closed: bool,
}

impl SurfaceGuard {
    pub fn new(surface: Box<dyn RenderSurface>) -> Self {
        Self {
            surface,
            closed: false,
        }
    }

    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.surface.close();
        debug!("Render surface closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Deref for SurfaceGuard {
    type Target = dyn RenderSurface;

    fn deref(&self) -> &Self::Target {
        self.surface.as_ref()
    }
}

impl DerefMut for SurfaceGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface.as_mut()
    }
}

impl Drop for SurfaceGuard {
    fn drop(&mut self) {
        self.close();
    }
}
