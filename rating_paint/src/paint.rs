// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint operations emitted by [`RatingDrawable::draw`](crate::RatingDrawable::draw).

use kurbo::{BezPath, Rect, Stroke};
use peniko::Brush;

/// One drawing step, in local coordinates of the control's surface.
///
/// Operations are meant to be replayed in order; later operations paint over
/// earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Paint to fill with.
        brush: Brush,
    },
    /// Fill a closed path using the non-zero rule.
    FillPath {
        /// Outline to fill.
        path: BezPath,
        /// Paint to fill with.
        brush: Brush,
    },
    /// Stroke a path.
    StrokePath {
        /// Outline to stroke.
        path: BezPath,
        /// Paint to stroke with.
        brush: Brush,
        /// Stroke style, including the width.
        stroke: Stroke,
    },
}
