// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rating_paint::RatingAttribute;
use rating_property::PropertyError;

/// Errors reported by [`Rating`](crate::Rating).
///
/// None of these leave the control in a different state than before the call
/// that returned them.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RatingError {
    /// A setter was given a value outside the attribute's valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),
    /// The surface has no usable width, so touches cannot be mapped to items.
    #[error("surface width {width} cannot be divided into items")]
    DegenerateLayout {
        /// The width reported by the host.
        width: f64,
    },
    /// The touch point's X coordinate is not a finite number.
    #[error("touch x coordinate {x} is not finite")]
    InvalidTouch {
        /// The rejected coordinate.
        x: f64,
    },
    /// A dynamic property write was rejected.
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// The specific configuration value that was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidConfiguration {
    /// Item counts must be at least one.
    #[error("items count must be positive, got {0}")]
    ItemsCount(i32),
    /// Stroke widths must be finite and non-negative.
    #[error("{attribute} must be finite and non-negative, got {width}")]
    StrokeWidth {
        /// Which width was being set.
        attribute: RatingAttribute,
        /// The rejected width.
        width: f64,
    },
}
