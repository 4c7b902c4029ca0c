// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating Paint: the drawable side of a star rating control.
//!
//! The control keeps its attributes in a property store; the object that
//! actually renders keeps its own copy of them. This crate defines that copy:
//!
//! - [`RatingAttribute`] names the nine attributes that affect rendering.
//! - [`MirrorUpdate`] carries one new attribute value.
//! - [`RatingMirror`] is implemented by anything that accepts those updates,
//!   one field at a time.
//! - [`RatingDrawable`] is the stock mirror. Its [`RatingDrawable::draw`]
//!   turns the mirrored state into a list of [`PaintOp`]s (background fill,
//!   then a fill and a stroke per star) for a renderer to replay.
//!
//! ```rust
//! use kurbo::Rect;
//! use rating_paint::{MirrorUpdate, PaintOp, RatingDrawable, RatingMirror};
//!
//! let mut drawable = RatingDrawable::default();
//! drawable.apply(MirrorUpdate::ItemsCount(3));
//! drawable.apply(MirrorUpdate::Value(2));
//!
//! let ops = drawable.draw(Rect::new(0.0, 0.0, 90.0, 30.0));
//! let fills = ops.iter().filter(|op| matches!(op, PaintOp::FillPath { .. })).count();
//! // Two selected stars are filled; unselected stars have a transparent fill.
//! assert_eq!(fills, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drawable;
mod geometry;
mod mirror;
mod paint;

pub use drawable::{
    DEFAULT_ITEMS_COUNT, DEFAULT_SELECTED_COLOR, DEFAULT_STROKE_WIDTH, DEFAULT_UNSELECTED_FILL,
    DEFAULT_UNSELECTED_STROKE, RatingDrawable,
};
pub use geometry::{STAR_INNER_RATIO, item_slot, star_path};
pub use mirror::{MirrorUpdate, RatingAttribute, RatingMirror};
pub use paint::PaintOp;
