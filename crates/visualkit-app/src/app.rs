//! Scene construction and output.

use crate::config::{AppConfig, OutputFormat};
use kurbo::Rect;
use peniko::Color;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;
use visualkit_core::{RenderError, VisualItem, VisualItemsFactory, shared};
use visualkit_render::{HostPage, SvgSurface};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid config: {0}")]
    Config(#[source] serde_json::Error),
    #[error("Failed to render '{item}': {source}")]
    Render {
        item: String,
        #[source]
        source: RenderError,
    },
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Main application struct.
pub struct App {
    config: AppConfig,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Create the configured items on a fresh surface and render each once.
    pub fn build_scene(&self) -> AppResult<Rc<RefCell<SvgSurface>>> {
        let mut surface = SvgSurface::new(self.config.width, self.config.height);
        if let Some(background) = self.config.background_color {
            surface = surface.with_background(Color::from(background));
        }
        let (svg, handle) = shared(surface);

        let factory = VisualItemsFactory::new();
        let items: Vec<VisualItem> = self
            .config
            .shapes
            .iter()
            .map(|tag| factory.create_visual(tag, &handle))
            .collect();

        for item in &items {
            item.render().map_err(|source| AppError::Render {
                item: item.id().to_string(),
                source,
            })?;
        }
        log::info!("Rendered {} visual items", items.len());

        self.check_bounds(&svg.borrow());
        Ok(svg)
    }

    /// Serialize the scene in the configured format.
    pub fn render_output(&self) -> AppResult<String> {
        let svg = self.build_scene()?;
        let surface = svg.borrow();
        Ok(match self.config.format {
            OutputFormat::Html => HostPage::new(self.config.title.as_str())
                .with_container_id(self.config.container_id.as_str())
                .render(&surface),
            OutputFormat::Svg => surface.to_svg_string(),
        })
    }

    /// Build the scene and write it to the configured output path.
    pub fn run(&self) -> AppResult<PathBuf> {
        let output = self.render_output()?;
        let path = self.config.output_path();
        std::fs::write(&path, output).map_err(|source| AppError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    fn check_bounds(&self, surface: &SvgSurface) {
        let Some(bounds) = surface.content_bounds() else {
            return;
        };
        let canvas = Rect::new(
            0.0,
            0.0,
            f64::from(surface.width()),
            f64::from(surface.height()),
        );
        if canvas.union(bounds) != canvas {
            log::warn!(
                "Scene bounds {:?} exceed the {}x{} surface",
                bounds,
                surface.width(),
                surface.height()
            );
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
