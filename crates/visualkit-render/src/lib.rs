//! VisualKit Render Library
//!
//! Drawing surface implementations for VisualKit. The default surface keeps
//! drawn elements as SVG nodes and serializes them on demand.

mod page;
mod svg;

pub use page::{DEFAULT_CONTAINER_ID, HostPage};
pub use svg::{SvgElement, SvgShape, SvgSurface};
