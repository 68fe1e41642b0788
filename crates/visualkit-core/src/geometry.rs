//! Geometry records for the supported shapes.

use crate::factory::ShapeKind;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geometry construction errors.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{kind} geometry expects {expected} values, got {found}")]
    Arity {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Rectangle geometry with elliptical corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    /// Top-left corner position.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Horizontal corner radius (0 = sharp corners).
    pub rx: f64,
    /// Vertical corner radius (0 = sharp corners).
    pub ry: f64,
}

impl BoxGeometry {
    /// Number of positional values a box is described by.
    pub const ARITY: usize = 6;

    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
            rx: 0.0,
            ry: 0.0,
        }
    }

    /// Set both corner radii.
    pub fn with_corner_radii(mut self, rx: f64, ry: f64) -> Self {
        self.rx = rx;
        self.ry = ry;
        self
    }

    /// Get the box as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, (self.width, self.height))
    }
}

/// Circle geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    pub center: Point,
    pub radius: f64,
}

impl CircleGeometry {
    /// Number of positional values a circle is described by.
    pub const ARITY: usize = 3;

    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}

/// The geometry an item carries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Box(BoxGeometry),
    Circle(CircleGeometry),
    /// No geometry assigned yet.
    #[default]
    Empty,
}

impl Geometry {
    /// Build a geometry record from positional values.
    ///
    /// Box order is `x, y, width, height, rx, ry`; circle order is `x, y, radius`.
    pub fn from_values(kind: ShapeKind, values: &[f64]) -> Result<Self, GeometryError> {
        let expected = kind.arity();
        if values.len() != expected {
            return Err(GeometryError::Arity {
                kind: kind.tag(),
                expected,
                found: values.len(),
            });
        }

        Ok(match kind {
            ShapeKind::Rect => {
                let origin = Point::new(values[0], values[1]);
                let rect = BoxGeometry::new(origin, values[2], values[3]);
                Geometry::Box(rect.with_corner_radii(values[4], values[5]))
            }
            ShapeKind::Circle => {
                let center = Point::new(values[0], values[1]);
                Geometry::Circle(CircleGeometry::new(center, values[2]))
            }
        })
    }

    /// Positional view of this geometry, in the same order `from_values` accepts.
    pub fn values(&self) -> Vec<f64> {
        match self {
            Geometry::Box(b) => vec![b.origin.x, b.origin.y, b.width, b.height, b.rx, b.ry],
            Geometry::Circle(c) => vec![c.center.x, c.center.y, c.radius],
            Geometry::Empty => Vec::new(),
        }
    }

    /// Number of positional values.
    pub fn arity(&self) -> usize {
        match self {
            Geometry::Box(_) => BoxGeometry::ARITY,
            Geometry::Circle(_) => CircleGeometry::ARITY,
            Geometry::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Geometry::Empty)
    }

    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Box(_) => "box",
            Geometry::Circle(_) => "circle",
            Geometry::Empty => "empty",
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Geometry::Box(b) => Some(b.as_rect()),
            Geometry::Circle(c) => Some(c.bounds()),
            Geometry::Empty => None,
        }
    }
}
