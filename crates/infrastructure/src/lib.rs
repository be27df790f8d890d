//! Infrastructure layer - External integrations

pub mod config;
pub mod surface;

pub use config::AppConfig;
pub use surface::{FileSurfaceProvider, MockSurfaceProvider, NetworkSurfaceProvider, SurfaceFactory};
