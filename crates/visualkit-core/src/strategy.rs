//! Interchangeable render strategies.

use crate::color::DEFAULT_FILL;
use crate::geometry::Geometry;
use crate::style::StyleOptions;
use crate::surface::{DrawingSurface, Element, ElementId, SurfaceError, SurfaceHandle};
use std::cell::RefMut;
use thiserror::Error;

/// Render errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Visual item '{0}' has no render strategy")]
    MissingStrategy(String),
    #[error("The {strategy} strategy cannot render {found} geometry")]
    GeometryMismatch {
        strategy: &'static str,
        found: &'static str,
    },
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// An algorithm that draws an item's geometry onto a surface.
pub trait RenderStrategy {
    /// Draw `geometry` styled with `options`. Returns the id of the new element.
    fn render(&self, geometry: &Geometry, options: &StyleOptions) -> RenderResult<ElementId>;

    /// Short name of this strategy.
    fn name(&self) -> &'static str;
}

fn borrow_surface(
    surface: &SurfaceHandle,
) -> RenderResult<RefMut<'_, dyn DrawingSurface + 'static>> {
    surface
        .try_borrow_mut()
        .map_err(|_| RenderError::Surface(SurfaceError::Busy))
}

/// Apply the resolved fill and enable dragging on a freshly drawn element.
fn finish_element(
    surface: &mut dyn DrawingSurface,
    id: ElementId,
    options: &StyleOptions,
) -> RenderResult<ElementId> {
    let element = Element::new(surface, id)
        .attr(&options.resolve(DEFAULT_FILL))?
        .drag()?;
    Ok(element.id())
}

/// Draws box geometry as a rounded rectangle.
pub struct BoxStrategy {
    surface: SurfaceHandle,
}

impl BoxStrategy {
    pub fn new(surface: SurfaceHandle) -> Self {
        Self { surface }
    }
}

impl RenderStrategy for BoxStrategy {
    fn render(&self, geometry: &Geometry, options: &StyleOptions) -> RenderResult<ElementId> {
        let Geometry::Box(b) = geometry else {
            return Err(RenderError::GeometryMismatch {
                strategy: self.name(),
                found: geometry.kind_name(),
            });
        };

        let mut surface = borrow_surface(&self.surface)?;
        let (x, y) = (b.origin.x, b.origin.y);
        let id = surface.rect(x, y, b.width, b.height, b.rx, b.ry);
        log::debug!("Drew rect {} at ({}, {})", id, x, y);
        finish_element(&mut *surface, id, options)
    }

    fn name(&self) -> &'static str {
        "box"
    }
}

/// Draws circle geometry.
pub struct CircleStrategy {
    surface: SurfaceHandle,
}

impl CircleStrategy {
    pub fn new(surface: SurfaceHandle) -> Self {
        Self { surface }
    }
}

impl RenderStrategy for CircleStrategy {
    fn render(&self, geometry: &Geometry, options: &StyleOptions) -> RenderResult<ElementId> {
        let Geometry::Circle(c) = geometry else {
            return Err(RenderError::GeometryMismatch {
                strategy: self.name(),
                found: geometry.kind_name(),
            });
        };

        let mut surface = borrow_surface(&self.surface)?;
        let id = surface.circle(c.center.x, c.center.y, c.radius);
        log::debug!("Drew circle {} at ({}, {})", id, c.center.x, c.center.y);
        finish_element(&mut *surface, id, options)
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}
