//! Host page embedding a drawing surface.

use crate::svg::SvgSurface;

/// Id of the element the SVG root is attached to.
pub const DEFAULT_CONTAINER_ID: &str = "container";

/// Pointer-drag behavior for elements carrying the draggable marker.
const DRAG_SCRIPT: &str = r#"(function () {
  document.querySelectorAll('[data-draggable="true"]').forEach(function (el) {
    var start = null, dx = 0, dy = 0;
    el.style.cursor = 'move';
    el.addEventListener('pointerdown', function (ev) {
      start = { x: ev.clientX - dx, y: ev.clientY - dy };
      el.setPointerCapture(ev.pointerId);
    });
    el.addEventListener('pointermove', function (ev) {
      if (!start) return;
      dx = ev.clientX - start.x;
      dy = ev.clientY - start.y;
      el.setAttribute('transform', 'translate(' + dx + ' ' + dy + ')');
    });
    el.addEventListener('pointerup', function (ev) {
      start = null;
      el.releasePointerCapture(ev.pointerId);
    });
  });
})();"#;

/// An HTML document with a single container holding the SVG root.
#[derive(Debug, Clone)]
pub struct HostPage {
    title: String,
    container_id: String,
}

impl HostPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }

    /// Set the container element id.
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Render the page with the surface attached to the container.
    pub fn render(&self, surface: &SvgSurface) -> String {
        let drag_script = if surface.elements().iter().any(|e| e.draggable) {
            format!("<script>\n{DRAG_SCRIPT}\n</script>\n")
        } else {
            String::new()
        };

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<div id=\"{container}\">\n{svg}</div>\n{drag_script}</body>\n</html>\n",
            title = escape_html(&self.title),
            container = escape_html(&self.container_id),
            svg = surface.to_svg_string(),
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use visualkit_core::DrawingSurface;

    #[test]
    fn test_svg_inside_container() {
        let mut surface = SvgSurface::default();
        surface.circle(100.0, 100.0, 40.0);
        let html = HostPage::new("Shapes").render(&surface);

        let container = html.find("<div id=\"container\">").unwrap();
        let svg = html.find("<svg").unwrap();
        let close = html.find("</div>").unwrap();
        assert!(container < svg && svg < close);
        assert!(html.contains("<title>Shapes</title>"));
    }

    #[test]
    fn test_drag_script_only_when_needed() {
        let mut surface = SvgSurface::default();
        let id = surface.rect(0.0, 0.0, 10.0, 10.0, 0.0, 0.0);
        let page = HostPage::new("Shapes");
        assert!(!page.render(&surface).contains("<script>"));

        surface.drag(id).unwrap();
        assert!(page.render(&surface).contains("<script>"));
    }

    #[test]
    fn test_custom_container_and_escaping() {
        let page = HostPage::new("a < b").with_container_id("stage");
        let html = page.render(&SvgSurface::default());
        assert!(html.contains("<div id=\"stage\">"));
        assert!(html.contains("<title>a &lt; b</title>"));
        assert_eq!(page.container_id(), "stage");
    }
}
