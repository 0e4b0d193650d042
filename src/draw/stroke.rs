//! Committed stroke: a path paired with the style it was drawn with.

use super::path::VectorPath;
use super::properties::PathProperties;
use crate::util::Rect;

/// A finished stroke. The path/properties pairing is fixed at commit time.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub path: VectorPath,
    pub properties: PathProperties,
}

impl Stroke {
    pub fn new(path: VectorPath, properties: PathProperties) -> Self {
        Self { path, properties }
    }

    /// Damage rectangle covering the painted footprint of this stroke.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.path.bounding_box(self.properties.stroke_width)
    }
}
