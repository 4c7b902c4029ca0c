// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping touches to item indices.
//!
//! ## Usage
//!
//! 1) The host delivers an [`InteractionStart`] when a pointer or finger first
//!    touches the control, with coordinates local to the control's surface.
//! 2) [`Rating::start_interaction`](crate::Rating::start_interaction) reads the
//!    first touch point and maps its X coordinate with [`selected_index`].
//!
//! Items split the surface width into equal columns; touching anywhere in
//! column `i` (zero-based) selects `i + 1` items.
//!
//! ```
//! use rating::selected_index;
//!
//! // Five items on a 150 wide surface: columns are 30 wide.
//! assert_eq!(selected_index(0.0, 150.0, 5), Ok(1));
//! assert_eq!(selected_index(40.0, 150.0, 5), Ok(2));
//! assert_eq!(selected_index(149.0, 150.0, 5), Ok(5));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use smallvec::SmallVec;

use crate::error::{InvalidConfiguration, RatingError};

/// The start of a pointer or touch interaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionStart {
    /// Touch points in surface coordinates. Only the first one is used.
    pub touches: SmallVec<[Point; 2]>,
}

impl InteractionStart {
    /// Creates an event from any number of touch points.
    pub fn new(touches: impl IntoIterator<Item = Point>) -> Self {
        Self {
            touches: touches.into_iter().collect(),
        }
    }

    /// Creates a single-pointer event.
    #[must_use]
    pub fn at(point: Point) -> Self {
        Self::new([point])
    }

    /// Returns the primary touch point, if any.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.touches.first().copied()
    }
}

/// Computes the value selected by a touch at `touch_x`.
///
/// The result is `floor(touch_x * items_count / width) + 1`, clamped to
/// `0..=items_count`: touches left of the surface select nothing and touches at
/// or past the right edge select every item.
///
/// # Errors
///
/// - [`RatingError::DegenerateLayout`] if `width` is not a positive finite number.
/// - [`RatingError::InvalidConfiguration`] if `items_count` is not positive.
/// - [`RatingError::InvalidTouch`] if `touch_x` is not finite.
pub fn selected_index(touch_x: f64, width: f64, items_count: i32) -> Result<i32, RatingError> {
    if !(width.is_finite() && width > 0.0) {
        return Err(RatingError::DegenerateLayout { width });
    }
    if items_count <= 0 {
        return Err(InvalidConfiguration::ItemsCount(items_count).into());
    }
    if !touch_x.is_finite() {
        return Err(RatingError::InvalidTouch { x: touch_x });
    }

    let count = f64::from(items_count);
    let index = ((touch_x * count / width).floor() + 1.0).clamp(0.0, count);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "clamped to 0..=items_count, which fits in i32"
    )]
    let index = index as i32;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_edge_selects_first_item() {
        assert_eq!(selected_index(0.0, 150.0, 5), Ok(1));
        assert_eq!(selected_index(0.0, 10.0, 1), Ok(1));
    }

    #[test]
    fn just_inside_right_edge_selects_last_item() {
        for count in 1..=10 {
            let width = 97.0;
            assert_eq!(
                selected_index(width - 1e-6, width, count),
                Ok(count),
                "count {count}"
            );
        }
    }

    #[test]
    fn column_boundaries() {
        assert_eq!(selected_index(29.999, 150.0, 5), Ok(1));
        assert_eq!(selected_index(30.0, 150.0, 5), Ok(2));
        assert_eq!(selected_index(40.0, 150.0, 5), Ok(2));
        assert_eq!(selected_index(149.0, 150.0, 5), Ok(5));
    }

    #[test]
    fn out_of_surface_touches_are_clamped() {
        assert_eq!(selected_index(150.0, 150.0, 5), Ok(5));
        assert_eq!(selected_index(900.0, 150.0, 5), Ok(5));
        assert_eq!(selected_index(-1.0, 150.0, 5), Ok(0));
        assert_eq!(selected_index(-500.0, 150.0, 5), Ok(0));
    }

    #[test]
    fn zero_width_is_degenerate() {
        assert_eq!(
            selected_index(10.0, 0.0, 5),
            Err(RatingError::DegenerateLayout { width: 0.0 })
        );
        assert!(matches!(
            selected_index(10.0, f64::NAN, 5),
            Err(RatingError::DegenerateLayout { .. })
        ));
        assert!(matches!(
            selected_index(10.0, -20.0, 5),
            Err(RatingError::DegenerateLayout { .. })
        ));
    }

    #[test]
    fn non_positive_counts_are_rejected() {
        assert_eq!(
            selected_index(10.0, 150.0, 0),
            Err(RatingError::InvalidConfiguration(
                InvalidConfiguration::ItemsCount(0)
            ))
        );
    }

    #[test]
    fn non_finite_touches_are_rejected() {
        assert!(matches!(
            selected_index(f64::INFINITY, 150.0, 5),
            Err(RatingError::InvalidTouch { .. })
        ));
    }

    #[test]
    fn primary_touch_is_the_first() {
        let event = InteractionStart::new([Point::new(3.0, 4.0), Point::new(9.0, 9.0)]);
        assert_eq!(event.primary(), Some(Point::new(3.0, 4.0)));
        assert_eq!(InteractionStart::default().primary(), None);
    }
}
