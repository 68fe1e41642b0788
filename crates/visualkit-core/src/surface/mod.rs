//! Drawing surface abstraction.
//!
//! A drawing surface turns draw commands into elements and hands back an id
//! for each one. Styling and drag behavior are applied to elements by id, or
//! through the chaining [`Element`] handle.

mod recording;

pub use recording::{DrawCall, RecordingSurface};

use crate::style::StyleAttrs;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier of a drawn element.
pub type ElementId = Uuid;

/// Surface errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),
    #[error("Surface is already borrowed")]
    Busy,
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Trait for drawing backends.
///
/// Every draw call creates a new element, even when called with identical
/// arguments.
pub trait DrawingSurface {
    /// Draw a rectangle with elliptical corner radii `rx`/`ry`.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, rx: f64, ry: f64) -> ElementId;

    /// Draw a circle centered at (`x`, `y`).
    fn circle(&mut self, x: f64, y: f64, radius: f64) -> ElementId;

    /// Apply style attributes to an element.
    fn attr(&mut self, id: ElementId, attrs: &StyleAttrs) -> SurfaceResult<()>;

    /// Enable pointer dragging on an element.
    fn drag(&mut self, id: ElementId) -> SurfaceResult<()>;
}

/// Shared handle to a drawing surface.
///
/// The surface outlives the strategies drawing on it, so strategies hold a
/// clone of this handle rather than the surface itself.
pub type SurfaceHandle = Rc<RefCell<dyn DrawingSurface>>;

/// Wrap a surface into a [`SurfaceHandle`].
///
/// Returns the concrete handle as well, so callers can still reach
/// backend-specific methods (serialization, inspection) after drawing.
pub fn shared<S: DrawingSurface + 'static>(surface: S) -> (Rc<RefCell<S>>, SurfaceHandle) {
    let concrete = Rc::new(RefCell::new(surface));
    let handle: SurfaceHandle = concrete.clone();
    (concrete, handle)
}

/// A drawn element, for chaining style and interaction calls.
pub struct Element<'a> {
    surface: &'a mut dyn DrawingSurface,
    id: ElementId,
}

impl<'a> Element<'a> {
    pub fn new(surface: &'a mut dyn DrawingSurface, id: ElementId) -> Self {
        Self { surface, id }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Apply style attributes.
    pub fn attr(self, attrs: &StyleAttrs) -> SurfaceResult<Self> {
        self.surface.attr(self.id, attrs)?;
        Ok(self)
    }

    /// Enable dragging.
    pub fn drag(self) -> SurfaceResult<Self> {
        self.surface.drag(self.id)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ACCENT_FILL;

    #[test]
    fn test_element_chain() {
        let mut surface = RecordingSurface::new();
        let id = surface.circle(10.0, 10.0, 5.0);
        let element = Element::new(&mut surface, id)
            .attr(&StyleAttrs { fill: ACCENT_FILL })
            .and_then(Element::drag)
            .unwrap();
        assert_eq!(element.id(), id);

        assert_eq!(surface.calls().len(), 3);
        assert_eq!(surface.fill_of(id), Some(ACCENT_FILL));
        assert!(surface.is_draggable(id));
    }

    #[test]
    fn test_unknown_element() {
        let mut surface = RecordingSurface::new();
        let id = Uuid::new_v4();
        assert_eq!(surface.drag(id), Err(SurfaceError::UnknownElement(id)));
    }

    #[test]
    fn test_shared_handle_reaches_same_surface() {
        let (concrete, handle) = shared(RecordingSurface::new());
        handle.borrow_mut().rect(0.0, 0.0, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(concrete.borrow().draw_count(), 1);
    }
}
