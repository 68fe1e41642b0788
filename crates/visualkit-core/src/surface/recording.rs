//! In-memory recording surface.

use super::{DrawingSurface, ElementId, SurfaceError, SurfaceResult};
use crate::color::SerializableColor;
use crate::style::StyleAttrs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A single command received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    Rect {
        id: ElementId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        ry: f64,
    },
    Circle {
        id: ElementId,
        x: f64,
        y: f64,
        radius: f64,
    },
    Attr {
        id: ElementId,
        attrs: StyleAttrs,
    },
    Drag {
        id: ElementId,
    },
}

impl DrawCall {
    /// Whether this call created a new element.
    pub fn is_draw(&self) -> bool {
        matches!(self, DrawCall::Rect { .. } | DrawCall::Circle { .. })
    }
}

#[derive(Debug, Default, Clone)]
struct ElementState {
    fill: Option<SerializableColor>,
    draggable: bool,
}

/// Surface that records every command, for testing and dry runs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    elements: HashMap<ElementId, ElementState>,
}

impl RecordingSurface {
    /// Create a new empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Only the commands that created elements.
    pub fn draw_calls(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|call| call.is_draw())
    }

    /// Number of elements drawn so far.
    pub fn draw_count(&self) -> usize {
        self.draw_calls().count()
    }

    /// Fill last applied to an element.
    pub fn fill_of(&self, id: ElementId) -> Option<SerializableColor> {
        self.elements.get(&id).and_then(|e| e.fill)
    }

    pub fn is_draggable(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|e| e.draggable)
    }

    /// Serialize the command log to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.calls)
    }

    fn element_mut(&mut self, id: ElementId) -> SurfaceResult<&mut ElementState> {
        self.elements
            .get_mut(&id)
            .ok_or(SurfaceError::UnknownElement(id))
    }

    fn push_element(&mut self, call: impl FnOnce(ElementId) -> DrawCall) -> ElementId {
        let id = Uuid::new_v4();
        self.elements.insert(id, ElementState::default());
        self.calls.push(call(id));
        id
    }
}

impl DrawingSurface for RecordingSurface {
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, rx: f64, ry: f64) -> ElementId {
        self.push_element(|id| DrawCall::Rect {
            id,
            x,
            y,
            width,
            height,
            rx,
            ry,
        })
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) -> ElementId {
        self.push_element(|id| DrawCall::Circle { id, x, y, radius })
    }

    fn attr(&mut self, id: ElementId, attrs: &StyleAttrs) -> SurfaceResult<()> {
        self.element_mut(id)?.fill = Some(attrs.fill);
        self.calls.push(DrawCall::Attr { id, attrs: *attrs });
        Ok(())
    }

    fn drag(&mut self, id: ElementId) -> SurfaceResult<()> {
        self.element_mut(id)?.draggable = true;
        self.calls.push(DrawCall::Drag { id });
        Ok(())
    }
}
