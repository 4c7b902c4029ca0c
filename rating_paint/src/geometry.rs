// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Star outlines and item layout.

use kurbo::{BezPath, Point, Rect, Vec2};

/// Inner-to-outer radius ratio of a regular five-pointed star.
pub const STAR_INNER_RATIO: f64 = 0.381_966_011_250_105_1;

// Unit vectors for the ten star vertices, clockwise from the top. Even entries
// are outer points, odd entries the inner notches.
const STAR_DIRECTIONS: [(f64, f64); 10] = [
    (0.0, -1.0),
    (0.587_785_252_292_473_1, -0.809_016_994_374_947_5),
    (0.951_056_516_295_153_5, -0.309_016_994_374_947_4),
    (0.951_056_516_295_153_5, 0.309_016_994_374_947_4),
    (0.587_785_252_292_473_1, 0.809_016_994_374_947_5),
    (0.0, 1.0),
    (-0.587_785_252_292_473_1, 0.809_016_994_374_947_5),
    (-0.951_056_516_295_153_5, 0.309_016_994_374_947_4),
    (-0.951_056_516_295_153_5, -0.309_016_994_374_947_4),
    (-0.587_785_252_292_473_1, -0.809_016_994_374_947_5),
];

/// Builds a closed five-pointed star with one point facing up.
///
/// ```rust
/// use kurbo::{Point, Shape};
/// use rating_paint::{STAR_INNER_RATIO, star_path};
///
/// let star = star_path(Point::new(10.0, 10.0), 10.0, 10.0 * STAR_INNER_RATIO);
/// let bounds = star.bounding_box();
/// assert!((bounds.y0 - 0.0).abs() < 1e-9);
/// assert!(bounds.contains(Point::new(10.0, 10.0)));
/// ```
#[must_use]
pub fn star_path(center: Point, outer_radius: f64, inner_radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for (i, (dx, dy)) in STAR_DIRECTIONS.iter().enumerate() {
        let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
        let vertex = center + Vec2::new(dx * radius, dy * radius);
        if i == 0 {
            path.move_to(vertex);
        } else {
            path.line_to(vertex);
        }
    }
    path.close_path();
    path
}

/// Returns the square area of item `index` when `count` items share `bounds`.
///
/// The bounds are split into `count` equal columns; each item gets the largest
/// square that fits its column, centered in it. Returns `None` when `index` is
/// out of range.
#[must_use]
pub fn item_slot(bounds: Rect, index: usize, count: usize) -> Option<Rect> {
    if index >= count {
        return None;
    }
    let column = bounds.width() / count as f64;
    let side = column.min(bounds.height()).max(0.0);
    let center = Point::new(
        bounds.x0 + column * (index as f64 + 0.5),
        bounds.y0 + bounds.height() / 2.0,
    );
    Some(Rect::from_center_size(center, (side, side)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn star_has_ten_vertices_and_closes() {
        let star = star_path(Point::ORIGIN, 1.0, STAR_INNER_RATIO);
        let elements = star.elements();
        assert_eq!(elements.len(), 11);
        assert!(matches!(elements[0], PathEl::MoveTo(_)));
        assert!(matches!(elements[10], PathEl::ClosePath));
    }

    #[test]
    fn star_vertices_alternate_radii() {
        let center = Point::new(5.0, 5.0);
        let star = star_path(center, 4.0, 2.0);
        let mut vertices = star.elements().iter().filter_map(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
            _ => None,
        });
        for i in 0..10 {
            let vertex = vertices.next().unwrap();
            let expected = if i % 2 == 0 { 4.0 } else { 2.0 };
            assert!(
                close(vertex.distance(center), expected),
                "vertex {i} at {vertex:?}"
            );
        }
    }

    #[test]
    fn star_is_symmetric_about_vertical_axis() {
        let star = star_path(Point::new(0.0, 0.0), 1.0, STAR_INNER_RATIO);
        let bounds = star.bounding_box();
        assert!(close(bounds.x0, -bounds.x1));
        assert!(close(bounds.y0, -1.0));
    }

    #[test]
    fn slots_split_width_evenly() {
        let bounds = Rect::new(0.0, 0.0, 150.0, 30.0);
        let first = item_slot(bounds, 0, 5).unwrap();
        let last = item_slot(bounds, 4, 5).unwrap();

        assert_eq!(first, Rect::new(0.0, 0.0, 30.0, 30.0));
        assert_eq!(last, Rect::new(120.0, 0.0, 150.0, 30.0));
        assert_eq!(item_slot(bounds, 5, 5), None);
    }

    #[test]
    fn slots_stay_square_in_wide_bounds() {
        let bounds = Rect::new(0.0, 0.0, 300.0, 20.0);
        let slot = item_slot(bounds, 1, 5).unwrap();
        assert!(close(slot.width(), 20.0));
        assert!(close(slot.height(), 20.0));
        assert!(close(slot.center().x, 90.0));
    }
}
