//! VisualKit Application
//!
//! Wires a drawing surface, the item factory and the render strategies
//! together and writes the resulting scene to disk.

mod app;
mod config;

pub use app::{App, AppError, AppResult};
pub use config::{AppConfig, OutputFormat};
