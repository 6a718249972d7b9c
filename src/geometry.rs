//! Shared spatial helpers for rules: bounding boxes, overlap, aspect gating.

use crate::document::{Dimensions, Element};

/// The 9:16 vertical (portrait) aspect ratio.
pub(crate) const PORTRAIT_9_16: f32 = 9.0 / 16.0;

/// Tolerance when matching a canvas against a named aspect ratio.
pub(crate) const ASPECT_TOLERANCE: f32 = 0.01;

/// Axis-aligned bounding box in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Standard AABB intersection test: NOT(disjoint on either axis).
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x + self.width <= other.x
            || other.x + other.width <= self.x
            || self.y + self.height <= other.y
            || other.y + other.height <= self.y)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// The element's bounding box, if it has an explicit extent.
///
/// Elements without width/height (common for text before the editor derives
/// font metrics) need no area-based check.
pub(crate) fn element_rect(el: &Element) -> Option<Rect> {
    let (width, height) = (el.width?, el.height?);
    Some(Rect { x: el.x, y: el.y, width, height })
}

/// Whether the canvas is (within tolerance) the 9:16 vertical format.
pub(crate) fn is_portrait_9_16(dims: &Dimensions) -> bool {
    (dims.aspect_ratio() - PORTRAIT_9_16).abs() < ASPECT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Element, ElementKind};

    #[test]
    fn overlap_is_symmetric_and_edges_do_not_touch() {
        let a = Rect { x: 0.0, y: 0.0, width: 100.0, height: 100.0 };
        let b = Rect { x: 50.0, y: 50.0, width: 100.0, height: 100.0 };
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        // Sharing an edge is not an intersection.
        let c = Rect { x: 100.0, y: 0.0, width: 50.0, height: 100.0 };
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));

        let d = Rect { x: 500.0, y: 500.0, width: 10.0, height: 10.0 };
        assert!(!a.intersects(&d));
    }

    #[test]
    fn aspect_gating_accepts_common_vertical_canvases() {
        assert!(is_portrait_9_16(&Dimensions::new(1080.0, 1920.0)));
        assert!(is_portrait_9_16(&Dimensions::new(720.0, 1280.0)));
        assert!(!is_portrait_9_16(&Dimensions::new(1200.0, 628.0)));
        assert!(!is_portrait_9_16(&Dimensions::new(1080.0, 1080.0)));
    }

    #[test]
    fn elements_without_extent_have_no_rect() {
        let el = Element::new("t", ElementKind::Text).with_text("hi");
        assert!(element_rect(&el).is_none());

        let el = el.with_frame(10.0, 20.0, 30.0, 40.0);
        let rect = element_rect(&el).unwrap();
        assert_eq!(rect.bottom(), 60.0);
    }
}
