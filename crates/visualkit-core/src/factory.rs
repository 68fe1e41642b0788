//! Factory for pre-configured visual items.

use crate::geometry::{BoxGeometry, CircleGeometry, Geometry};
use crate::item::VisualItem;
use crate::strategy::{BoxStrategy, CircleStrategy, RenderStrategy};
use crate::style::StyleOptions;
use crate::surface::SurfaceHandle;
use kurbo::Point;
use std::str::FromStr;
use thiserror::Error;

/// Suffix appended to the type tag to build an item id.
const ID_SUFFIX: &str = "1";

/// Unrecognized shape type tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown shape type: {0}")]
pub struct UnknownShapeKind(pub String);

/// Shapes the factory knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Circle,
}

impl ShapeKind {
    /// The type tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
        }
    }

    /// Number of positional geometry values for this kind.
    pub fn arity(self) -> usize {
        match self {
            ShapeKind::Rect => BoxGeometry::ARITY,
            ShapeKind::Circle => CircleGeometry::ARITY,
        }
    }

    /// Default geometry for new items of this kind.
    pub fn default_geometry(self) -> Geometry {
        match self {
            ShapeKind::Rect => {
                Geometry::Box(BoxGeometry::new(Point::new(100.0, 100.0), 100.0, 100.0))
            }
            ShapeKind::Circle => {
                Geometry::Circle(CircleGeometry::new(Point::new(100.0, 100.0), 40.0))
            }
        }
    }
}

impl FromStr for ShapeKind {
    type Err = UnknownShapeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" => Ok(ShapeKind::Rect),
            "circle" => Ok(ShapeKind::Circle),
            other => Err(UnknownShapeKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Builds visual items with default geometry, style and a matching strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisualItemsFactory;

impl VisualItemsFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create an item for a type tag.
    ///
    /// Unknown tags still produce an item (with the accent style), but with
    /// empty geometry and no strategy, so rendering it fails.
    pub fn create_visual(&self, type_tag: &str, surface: &SurfaceHandle) -> VisualItem {
        match type_tag.parse::<ShapeKind>() {
            Ok(kind) => self.create_kind(kind, surface),
            Err(err) => {
                log::warn!("{}; item has no geometry or strategy", err);
                let mut item = VisualItem::new(format!("{type_tag}{ID_SUFFIX}"));
                item.set_options(StyleOptions::accent());
                item
            }
        }
    }

    /// Create an item of a known kind.
    pub fn create_kind(&self, kind: ShapeKind, surface: &SurfaceHandle) -> VisualItem {
        let mut item = VisualItem::new(format!("{}{ID_SUFFIX}", kind.tag()));
        item.set_options(StyleOptions::accent());
        item.set_geometry(kind.default_geometry());
        let strategy: Box<dyn RenderStrategy> = match kind {
            ShapeKind::Rect => Box::new(BoxStrategy::new(surface.clone())),
            ShapeKind::Circle => Box::new(CircleStrategy::new(surface.clone())),
        };
        item.set_strategy(strategy);
        log::debug!("Created visual item {}", item.id());
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ACCENT_FILL;
    use crate::strategy::RenderError;
    use crate::surface::{DrawCall, RecordingSurface, shared};

    #[test]
    fn test_parse_kind() {
        assert_eq!("rect".parse::<ShapeKind>(), Ok(ShapeKind::Rect));
        assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!(
            "triangle".parse::<ShapeKind>(),
            Err(UnknownShapeKind("triangle".to_string()))
        );
    }

    #[test]
    fn test_supported_kinds_match_arity_and_strategy() {
        let (_, handle) = shared(RecordingSurface::new());
        let factory = VisualItemsFactory::new();

        for (tag, arity, strategy) in [("rect", 6, "box"), ("circle", 3, "circle")] {
            let item = factory.create_visual(tag, &handle);
            assert_eq!(item.id(), format!("{tag}1"));
            assert_eq!(item.geometry().values().len(), arity);
            assert_eq!(item.strategy().map(|s| s.name()), Some(strategy));
            assert_eq!(item.options().fill, Some(ACCENT_FILL));
        }
    }

    #[test]
    fn test_unknown_tag_produces_incomplete_item() {
        let (recording, handle) = shared(RecordingSurface::new());
        let item = VisualItemsFactory::new().create_visual("triangle", &handle);

        assert_eq!(item.id(), "triangle1");
        assert!(item.geometry().is_empty());
        assert!(item.strategy().is_none());
        assert_eq!(
            item.render(),
            Err(RenderError::MissingStrategy("triangle1".to_string()))
        );
        assert!(recording.borrow().calls().is_empty());
    }

    #[test]
    fn test_ids_are_not_unique() {
        let (_, handle) = shared(RecordingSurface::new());
        let factory = VisualItemsFactory::new();
        let a = factory.create_visual("rect", &handle);
        let b = factory.create_visual("rect", &handle);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_circle_scenario() {
        let (recording, handle) = shared(RecordingSurface::new());
        let item = VisualItemsFactory::new().create_visual("circle", &handle);

        let id = item.render().unwrap();

        let surface = recording.borrow();
        let draws: Vec<_> = surface.draw_calls().collect();
        assert_eq!(draws.len(), 1);
        assert_eq!(
            *draws[0],
            DrawCall::Circle {
                id,
                x: 100.0,
                y: 100.0,
                radius: 40.0
            }
        );
        assert_eq!(surface.fill_of(id), Some(ACCENT_FILL));
        assert!(surface.is_draggable(id));
    }

    #[test]
    fn test_rect_scenario() {
        let (recording, handle) = shared(RecordingSurface::new());
        let item = VisualItemsFactory::new().create_visual("rect", &handle);

        let id = item.render().unwrap();

        let surface = recording.borrow();
        let draws: Vec<_> = surface.draw_calls().collect();
        assert_eq!(draws.len(), 1);
        assert_eq!(
            *draws[0],
            DrawCall::Rect {
                id,
                x: 100.0,
                y: 100.0,
                width: 100.0,
                height: 100.0,
                rx: 0.0,
                ry: 0.0
            }
        );
        assert_eq!(surface.fill_of(id), Some(ACCENT_FILL));
        assert!(surface.is_draggable(id));
    }
}
