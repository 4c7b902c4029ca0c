// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute identities and the one-field write interface.

use core::fmt;

use peniko::{Brush, Color};

/// An attribute whose value is mirrored onto the drawable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RatingAttribute {
    /// Optional background brush.
    Background,
    /// Number of items.
    ItemsCount,
    /// Number of selected items.
    Value,
    /// Fill of selected items.
    SelectedFill,
    /// Fill of unselected items.
    UnselectedFill,
    /// Stroke color of selected items.
    SelectedStroke,
    /// Stroke color of unselected items.
    UnselectedStroke,
    /// Stroke width of selected items.
    SelectedStrokeWidth,
    /// Stroke width of unselected items.
    UnselectedStrokeWidth,
}

impl RatingAttribute {
    /// Every attribute, in the order a full sync pushes them.
    pub const ALL: [Self; 9] = [
        Self::Background,
        Self::ItemsCount,
        Self::Value,
        Self::SelectedFill,
        Self::UnselectedFill,
        Self::SelectedStroke,
        Self::UnselectedStroke,
        Self::SelectedStrokeWidth,
        Self::UnselectedStrokeWidth,
    ];

    /// The binding name of the attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::ItemsCount => "ItemsCount",
            Self::Value => "Value",
            Self::SelectedFill => "SelectedFill",
            Self::UnselectedFill => "UnselectedFill",
            Self::SelectedStroke => "SelectedStroke",
            Self::UnselectedStroke => "UnselectedStroke",
            Self::SelectedStrokeWidth => "SelectedStrokeWidth",
            Self::UnselectedStrokeWidth => "UnselectedStrokeWidth",
        }
    }
}

impl fmt::Display for RatingAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A new value for exactly one attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum MirrorUpdate {
    /// See [`RatingAttribute::Background`].
    Background(Option<Brush>),
    /// See [`RatingAttribute::ItemsCount`].
    ItemsCount(i32),
    /// See [`RatingAttribute::Value`].
    Value(i32),
    /// See [`RatingAttribute::SelectedFill`].
    SelectedFill(Color),
    /// See [`RatingAttribute::UnselectedFill`].
    UnselectedFill(Color),
    /// See [`RatingAttribute::SelectedStroke`].
    SelectedStroke(Color),
    /// See [`RatingAttribute::UnselectedStroke`].
    UnselectedStroke(Color),
    /// See [`RatingAttribute::SelectedStrokeWidth`].
    SelectedStrokeWidth(f64),
    /// See [`RatingAttribute::UnselectedStrokeWidth`].
    UnselectedStrokeWidth(f64),
}

impl MirrorUpdate {
    /// The attribute this update writes.
    #[must_use]
    pub fn attribute(&self) -> RatingAttribute {
        match self {
            Self::Background(_) => RatingAttribute::Background,
            Self::ItemsCount(_) => RatingAttribute::ItemsCount,
            Self::Value(_) => RatingAttribute::Value,
            Self::SelectedFill(_) => RatingAttribute::SelectedFill,
            Self::UnselectedFill(_) => RatingAttribute::UnselectedFill,
            Self::SelectedStroke(_) => RatingAttribute::SelectedStroke,
            Self::UnselectedStroke(_) => RatingAttribute::UnselectedStroke,
            Self::SelectedStrokeWidth(_) => RatingAttribute::SelectedStrokeWidth,
            Self::UnselectedStrokeWidth(_) => RatingAttribute::UnselectedStrokeWidth,
        }
    }
}

/// The write side of a drawable: accepts one attribute at a time.
///
/// Implementors store their own copy of each value; nothing is shared with the
/// control that sends the updates.
pub trait RatingMirror {
    /// Stores the new value of one attribute.
    fn apply(&mut self, update: MirrorUpdate);
}

impl<M: RatingMirror + ?Sized> RatingMirror for &mut M {
    fn apply(&mut self, update: MirrorUpdate) {
        (**self).apply(update);
    }
}
