//! Application configuration.

use crate::app::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use visualkit_core::SerializableColor;
use visualkit_render::DEFAULT_CONTAINER_ID;

/// What the application writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// HTML page with the SVG attached to the container element.
    #[default]
    Html,
    /// Standalone SVG document.
    Svg,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Svg => "svg",
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Id of the host element the SVG root is attached to.
    pub container_id: String,
    /// Surface background (None = transparent).
    pub background_color: Option<SerializableColor>,
    /// Shape type tags to create and render, in order.
    pub shapes: Vec<String>,
    /// Output file (None = `visualkit.<ext>` for the chosen format).
    pub output_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "VisualKit".to_string(),
            width: 500,
            height: 500,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            background_color: None,
            shapes: vec!["circle".to_string(), "rect".to_string()],
            output_path: None,
            format: OutputFormat::Html,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(AppError::Config)
    }

    /// Where the output is written.
    pub fn output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => PathBuf::from(format!("visualkit.{}", self.format.extension())),
        }
    }

    /// Load a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_json(&json)
    }
}
