//! Visual items.

use crate::geometry::Geometry;
use crate::strategy::{RenderError, RenderResult, RenderStrategy};
use crate::style::StyleOptions;
use crate::surface::ElementId;

/// A shape instance: geometry, style and the strategy used to draw it.
///
/// An item starts without a strategy; [`VisualItem::render`] fails until
/// one is assigned with [`VisualItem::set_strategy`].
pub struct VisualItem {
    id: String,
    geometry: Geometry,
    options: StyleOptions,
    strategy: Option<Box<dyn RenderStrategy>>,
}

impl VisualItem {
    /// Create an item with empty geometry, default options and no strategy.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            geometry: Geometry::Empty,
            options: StyleOptions::default(),
            strategy: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    pub fn options(&self) -> &StyleOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: StyleOptions) {
        self.options = options;
    }

    /// The currently assigned strategy, if any.
    pub fn strategy(&self) -> Option<&dyn RenderStrategy> {
        self.strategy.as_deref()
    }

    /// Replace the render strategy. Compatibility with the geometry is only
    /// checked when rendering.
    pub fn set_strategy(&mut self, strategy: Box<dyn RenderStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Draw this item with its current strategy.
    pub fn render(&self) -> RenderResult<ElementId> {
        let strategy = self
            .strategy
            .as_deref()
            .ok_or_else(|| RenderError::MissingStrategy(self.id.clone()))?;
        strategy.render(&self.geometry, &self.options)
    }
}

impl std::fmt::Debug for VisualItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualItem")
            .field("id", &self.id)
            .field("geometry", &self.geometry)
            .field("options", &self.options)
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}
