//! Style options carried by items and the resolved attributes applied to elements.

use crate::color::{ACCENT_FILL, SerializableColor};
use serde::{Deserialize, Serialize};

/// Style options of a visual item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Fill color (None = use the strategy's fallback).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<SerializableColor>,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The options the factory gives every item.
    pub fn accent() -> Self {
        Self::new().with_fill(ACCENT_FILL)
    }

    pub fn with_fill(mut self, fill: SerializableColor) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Resolve these options into element attributes.
    pub fn resolve(&self, fallback_fill: SerializableColor) -> StyleAttrs {
        StyleAttrs {
            fill: self.fill.unwrap_or(fallback_fill),
        }
    }
}

/// Attributes applied to a drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAttrs {
    pub fill: SerializableColor,
}
