//! SVG drawing surface.

use kurbo::{Point, Rect};
use peniko::Color;
use uuid::Uuid;
use visualkit_core::{
    DrawingSurface, ElementId, SerializableColor, StyleAttrs, SurfaceError, SurfaceResult,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Attribute marking an element as draggable in the host page.
const DRAGGABLE_ATTR: &str = "data-draggable";

/// Primitive geometry of an SVG element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SvgShape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        ry: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
}

impl SvgShape {
    pub fn bounds(&self) -> Rect {
        match *self {
            SvgShape::Rect {
                x,
                y,
                width,
                height,
                ..
            } => Rect::from_origin_size(Point::new(x, y), (width, height)),
            SvgShape::Circle { cx, cy, r } => Rect::new(cx - r, cy - r, cx + r, cy + r),
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            SvgShape::Rect { .. } => "rect",
            SvgShape::Circle { .. } => "circle",
        }
    }
}

/// An element drawn on an [`SvgSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub id: ElementId,
    pub shape: SvgShape,
    /// Fill color (None = SVG default, black).
    pub fill: Option<SerializableColor>,
    pub draggable: bool,
}

impl SvgElement {
    fn write(&self, out: &mut String) {
        let tag = self.shape.tag();
        let id = self.id.simple();
        out.push_str(&format!("  <{tag} id=\"el-{id}\""));
        match self.shape {
            SvgShape::Rect {
                x,
                y,
                width,
                height,
                rx,
                ry,
            } => out.push_str(&format!(
                " x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" rx=\"{rx}\" ry=\"{ry}\""
            )),
            SvgShape::Circle { cx, cy, r } => {
                out.push_str(&format!(" cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\""))
            }
        }
        if let Some(fill) = self.fill {
            out.push_str(&format!(" fill=\"{}\"", fill.to_hex()));
        }
        if self.draggable {
            out.push_str(&format!(" {DRAGGABLE_ATTR}=\"true\""));
        }
        out.push_str("/>\n");
    }
}

/// Drawing surface that builds an SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: Option<Color>,
    elements: Vec<SvgElement>,
}

impl SvgSurface {
    /// Create an empty surface of the given size in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
            elements: Vec::new(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Elements in draw order.
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Union of the bounds of every drawn element.
    pub fn content_bounds(&self) -> Option<Rect> {
        self.elements
            .iter()
            .map(|e| e.shape.bounds())
            .reduce(|acc, bounds| acc.union(bounds))
    }

    /// Serialize the surface as a standalone SVG document.
    pub fn to_svg_string(&self) -> String {
        log::debug!("Serializing {} SVG elements", self.elements.len());
        let mut out = format!(
            "<svg xmlns=\"{SVG_NAMESPACE}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"",
            w = self.width,
            h = self.height,
        );
        if let Some(background) = self.background {
            let background = SerializableColor::from(background).to_hex();
            out.push_str(&format!(" style=\"background-color: {background}\""));
        }
        out.push_str(">\n");
        for element in &self.elements {
            element.write(&mut out);
        }
        out.push_str("</svg>\n");
        out
    }

    fn push(&mut self, shape: SvgShape) -> ElementId {
        let id = Uuid::new_v4();
        self.elements.push(SvgElement {
            id,
            shape,
            fill: None,
            draggable: false,
        });
        id
    }

    fn element_mut(&mut self, id: ElementId) -> SurfaceResult<&mut SvgElement> {
        self.elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(SurfaceError::UnknownElement(id))
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(500, 500)
    }
}

impl DrawingSurface for SvgSurface {
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, rx: f64, ry: f64) -> ElementId {
        self.push(SvgShape::Rect {
            x,
            y,
            width,
            height,
            rx,
            ry,
        })
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) -> ElementId {
        self.push(SvgShape::Circle {
            cx: x,
            cy: y,
            r: radius,
        })
    }

    fn attr(&mut self, id: ElementId, attrs: &StyleAttrs) -> SurfaceResult<()> {
        self.element_mut(id)?.fill = Some(attrs.fill);
        Ok(())
    }

    fn drag(&mut self, id: ElementId) -> SurfaceResult<()> {
        self.element_mut(id)?.draggable = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visualkit_core::{ACCENT_FILL, VisualItemsFactory, shared};

    #[test]
    fn test_rect_markup() {
        let mut surface = SvgSurface::new(500, 500);
        let id = surface.rect(100.0, 100.0, 100.0, 100.0, 0.0, 0.0);
        surface.attr(id, &StyleAttrs { fill: ACCENT_FILL }).unwrap();
        surface.drag(id).unwrap();

        let svg = surface.to_svg_string();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("width=\"500\" height=\"500\" viewBox=\"0 0 500 500\""));
        assert!(svg.contains("x=\"100\" y=\"100\" width=\"100\" height=\"100\" rx=\"0\" ry=\"0\""));
        assert!(svg.contains("fill=\"#f44336\" data-draggable=\"true\"/>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_undragged_element_has_no_marker() {
        let mut surface = SvgSurface::new(100, 100);
        surface.circle(10.0, 20.0, 5.5);
        let svg = surface.to_svg_string();
        assert!(svg.contains("cx=\"10\" cy=\"20\" r=\"5.5\"/>"));
        assert!(!svg.contains(DRAGGABLE_ATTR));
        assert!(!svg.contains("fill="));
    }

    #[test]
    fn test_background() {
        let background = Color::from_rgba8(250, 250, 250, 255);
        let surface = SvgSurface::new(10, 10).with_background(background);
        assert!(surface.to_svg_string().contains("background-color: #fafafa"));
    }

    #[test]
    fn test_unknown_element() {
        let mut surface = SvgSurface::default();
        let id = Uuid::new_v4();
        assert_eq!(surface.drag(id), Err(SurfaceError::UnknownElement(id)));
    }

    #[test]
    fn test_content_bounds() {
        let mut surface = SvgSurface::default();
        assert!(surface.content_bounds().is_none());
        surface.circle(100.0, 100.0, 40.0);
        surface.rect(100.0, 100.0, 100.0, 100.0, 0.0, 0.0);
        let bounds = surface.content_bounds().unwrap();
        assert!((bounds.x0 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 200.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_factory_items_on_svg_surface() {
        let (svg, handle) = shared(SvgSurface::default());
        let factory = VisualItemsFactory::new();
        let circle = factory.create_visual("circle", &handle);

        circle.render().unwrap();
        circle.render().unwrap();

        let surface = svg.borrow();
        assert_eq!(surface.elements().len(), 2);
        for element in surface.elements() {
            assert_eq!(element.fill, Some(ACCENT_FILL));
            assert!(element.draggable);
            assert_eq!(
                element.shape,
                SvgShape::Circle {
                    cx: 100.0,
                    cy: 100.0,
                    r: 40.0
                }
            );
        }
        assert_ne!(surface.elements()[0].id, surface.elements()[1].id);
    }
}
