//! VisualKit Core Library
//!
//! Visual items whose drawing algorithm is an interchangeable render strategy,
//! and a factory that builds pre-configured items for each supported shape.

pub mod color;
pub mod factory;
pub mod geometry;
pub mod item;
pub mod strategy;
pub mod style;
pub mod surface;

pub use color::{ACCENT_FILL, ColorError, DEFAULT_FILL, SerializableColor};
pub use factory::{ShapeKind, UnknownShapeKind, VisualItemsFactory};
pub use geometry::{BoxGeometry, CircleGeometry, Geometry, GeometryError};
pub use item::VisualItem;
pub use strategy::{BoxStrategy, CircleStrategy, RenderError, RenderResult, RenderStrategy};
pub use style::{StyleAttrs, StyleOptions};
pub use surface::{
    DrawCall, DrawingSurface, Element, ElementId, RecordingSurface, SurfaceError, SurfaceHandle,
    SurfaceResult, shared,
};
