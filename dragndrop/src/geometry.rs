// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-rectangle test used to hit-test drop anchors.

use kurbo::{Point, Rect};

/// Returns true if `pt` lies strictly inside `rect`.
///
/// Points exactly on an edge are outside. This differs from [`Rect::contains`],
/// which includes the top and left edges.
/// `rect` is expected to be normalized (`x0 <= x1`, `y0 <= y1`).
#[inline]
pub fn point_in_rect(pt: Point, rect: Rect) -> bool {
    rect.y0 < pt.y && pt.y < rect.y1 && rect.x0 < pt.x && pt.x < rect.x1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_points_are_inside() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(point_in_rect(Point::new(20.0, 30.0), r));
        assert!(point_in_rect(Point::new(10.5, 39.5), r));
    }

    #[test]
    fn edges_and_corners_are_outside() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(!point_in_rect(Point::new(10.0, 30.0), r));
        assert!(!point_in_rect(Point::new(30.0, 30.0), r));
        assert!(!point_in_rect(Point::new(20.0, 20.0), r));
        assert!(!point_in_rect(Point::new(20.0, 40.0), r));
        assert!(!point_in_rect(Point::new(10.0, 20.0), r));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(5.0, 5.0, 5.0, 5.0);
        assert!(!point_in_rect(Point::new(5.0, 5.0), r));
    }
}
