// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stock drawable.

use alloc::vec::Vec;

use kurbo::{Rect, Stroke};
use peniko::{Brush, Color};

use crate::geometry::{STAR_INNER_RATIO, item_slot, star_path};
use crate::mirror::{MirrorUpdate, RatingAttribute, RatingMirror};
use crate::paint::PaintOp;

/// Default number of items.
pub const DEFAULT_ITEMS_COUNT: i32 = 5;

/// Default stroke width for both selected and unselected items.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Default fill and stroke color of selected items (`#F6C602`).
pub const DEFAULT_SELECTED_COLOR: Color = Color::from_rgb8(0xF6, 0xC6, 0x02);

/// Default fill of unselected items.
pub const DEFAULT_UNSELECTED_FILL: Color = Color::TRANSPARENT;

/// Default stroke color of unselected items.
pub const DEFAULT_UNSELECTED_STROKE: Color = Color::BLACK;

/// Mirrored rating state plus the code that paints it.
///
/// Fields are written through [`RatingMirror::apply`] by the owning control and
/// read by [`draw`](Self::draw) when the host repaints.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingDrawable {
    /// Brush painted behind the items, if any.
    pub background: Option<Brush>,
    /// Number of items.
    pub items_count: i32,
    /// Number of selected items, counted from the left.
    pub value: i32,
    /// Fill of selected items.
    pub selected_fill: Color,
    /// Fill of unselected items.
    pub unselected_fill: Color,
    /// Stroke color of selected items.
    pub selected_stroke: Color,
    /// Stroke color of unselected items.
    pub unselected_stroke: Color,
    /// Stroke width of selected items.
    pub selected_stroke_width: f64,
    /// Stroke width of unselected items.
    pub unselected_stroke_width: f64,
}

impl Default for RatingDrawable {
    fn default() -> Self {
        Self {
            background: None,
            items_count: DEFAULT_ITEMS_COUNT,
            value: 0,
            selected_fill: DEFAULT_SELECTED_COLOR,
            unselected_fill: DEFAULT_UNSELECTED_FILL,
            selected_stroke: DEFAULT_SELECTED_COLOR,
            unselected_stroke: DEFAULT_UNSELECTED_STROKE,
            selected_stroke_width: DEFAULT_STROKE_WIDTH,
            unselected_stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl RatingDrawable {
    /// Reads back the mirrored value of one attribute.
    #[must_use]
    pub fn read(&self, attribute: RatingAttribute) -> MirrorUpdate {
        match attribute {
            RatingAttribute::Background => MirrorUpdate::Background(self.background.clone()),
            RatingAttribute::ItemsCount => MirrorUpdate::ItemsCount(self.items_count),
            RatingAttribute::Value => MirrorUpdate::Value(self.value),
            RatingAttribute::SelectedFill => MirrorUpdate::SelectedFill(self.selected_fill),
            RatingAttribute::UnselectedFill => MirrorUpdate::UnselectedFill(self.unselected_fill),
            RatingAttribute::SelectedStroke => MirrorUpdate::SelectedStroke(self.selected_stroke),
            RatingAttribute::UnselectedStroke => {
                MirrorUpdate::UnselectedStroke(self.unselected_stroke)
            }
            RatingAttribute::SelectedStrokeWidth => {
                MirrorUpdate::SelectedStrokeWidth(self.selected_stroke_width)
            }
            RatingAttribute::UnselectedStrokeWidth => {
                MirrorUpdate::UnselectedStrokeWidth(self.unselected_stroke_width)
            }
        }
    }

    /// Paints the mirrored state into `bounds`.
    ///
    /// The background, when present, fills the whole bounds. Items are laid
    /// out with [`item_slot`]; the first `value` items use the selected paints.
    /// Fully transparent fills and zero-width strokes are skipped.
    #[must_use]
    pub fn draw(&self, bounds: Rect) -> Vec<PaintOp> {
        let mut ops = Vec::new();
        if let Some(brush) = &self.background {
            ops.push(PaintOp::FillRect {
                rect: bounds,
                brush: brush.clone(),
            });
        }

        let count = usize::try_from(self.items_count).unwrap_or(0);
        if count == 0 || bounds.is_zero_area() {
            return ops;
        }
        let selected = usize::try_from(self.value).unwrap_or(0).min(count);

        for index in 0..count {
            let Some(slot) = item_slot(bounds, index, count) else {
                continue;
            };
            let (fill, stroke_color, stroke_width) = if index < selected {
                (
                    self.selected_fill,
                    self.selected_stroke,
                    self.selected_stroke_width,
                )
            } else {
                (
                    self.unselected_fill,
                    self.unselected_stroke,
                    self.unselected_stroke_width,
                )
            };
            let stroke_width = if stroke_width.is_finite() {
                stroke_width.max(0.0)
            } else {
                0.0
            };

            // Keep the stroke inside the slot.
            let outer = (slot.width() - stroke_width) / 2.0;
            if outer <= 0.0 {
                continue;
            }
            let path = star_path(slot.center(), outer, outer * STAR_INNER_RATIO);

            if is_visible(fill) {
                ops.push(PaintOp::FillPath {
                    path: path.clone(),
                    brush: Brush::Solid(fill),
                });
            }
            if stroke_width > 0.0 && is_visible(stroke_color) {
                ops.push(PaintOp::StrokePath {
                    path,
                    brush: Brush::Solid(stroke_color),
                    stroke: Stroke::new(stroke_width),
                });
            }
        }
        ops
    }
}

impl RatingMirror for RatingDrawable {
    fn apply(&mut self, update: MirrorUpdate) {
        tracing::trace!(attribute = %update.attribute(), "mirror write");
        match update {
            MirrorUpdate::Background(brush) => self.background = brush,
            MirrorUpdate::ItemsCount(count) => self.items_count = count,
            MirrorUpdate::Value(value) => self.value = value,
            MirrorUpdate::SelectedFill(color) => self.selected_fill = color,
            MirrorUpdate::UnselectedFill(color) => self.unselected_fill = color,
            MirrorUpdate::SelectedStroke(color) => self.selected_stroke = color,
            MirrorUpdate::UnselectedStroke(color) => self.unselected_stroke = color,
            MirrorUpdate::SelectedStrokeWidth(width) => self.selected_stroke_width = width,
            MirrorUpdate::UnselectedStrokeWidth(width) => self.unselected_stroke_width = width,
        }
    }
}

fn is_visible(color: Color) -> bool {
    color.components[3] > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 150.0, 30.0)
    }

    fn count_ops(ops: &[PaintOp]) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for op in ops {
            match op {
                PaintOp::FillRect { .. } => counts.0 += 1,
                PaintOp::FillPath { .. } => counts.1 += 1,
                PaintOp::StrokePath { .. } => counts.2 += 1,
            }
        }
        counts
    }

    #[test]
    fn apply_then_read_round_trips_every_attribute() {
        let updates = [
            MirrorUpdate::Background(Some(Brush::Solid(Color::WHITE))),
            MirrorUpdate::ItemsCount(7),
            MirrorUpdate::Value(3),
            MirrorUpdate::SelectedFill(Color::WHITE),
            MirrorUpdate::UnselectedFill(Color::BLACK),
            MirrorUpdate::SelectedStroke(Color::BLACK),
            MirrorUpdate::UnselectedStroke(Color::WHITE),
            MirrorUpdate::SelectedStrokeWidth(1.5),
            MirrorUpdate::UnselectedStrokeWidth(0.5),
        ];
        let mut drawable = RatingDrawable::default();
        for update in updates.iter().cloned() {
            drawable.apply(update);
        }
        for update in updates {
            assert_eq!(drawable.read(update.attribute()), update);
        }
    }

    #[test]
    fn default_draw_strokes_every_item_and_fills_none() {
        let ops = RatingDrawable::default().draw(bounds());
        assert_eq!(count_ops(&ops), (0, 0, 5));
    }

    #[test]
    fn selected_items_come_first() {
        let mut drawable = RatingDrawable::default();
        drawable.apply(MirrorUpdate::Value(2));
        let ops = drawable.draw(bounds());

        // Two selected stars: fill + stroke each; three unselected: stroke only.
        assert_eq!(count_ops(&ops), (0, 2, 5));
        match &ops[0] {
            PaintOp::FillPath { brush, .. } => {
                assert_eq!(brush, &Brush::Solid(DEFAULT_SELECTED_COLOR));
            }
            other => panic!("expected selected fill first, got {other:?}"),
        }
        match ops.last() {
            Some(PaintOp::StrokePath { brush, stroke, .. }) => {
                assert_eq!(brush, &Brush::Solid(DEFAULT_UNSELECTED_STROKE));
                assert_eq!(stroke.width, DEFAULT_STROKE_WIDTH);
            }
            other => panic!("expected unselected stroke last, got {other:?}"),
        }
    }

    #[test]
    fn value_beyond_count_selects_all() {
        let mut drawable = RatingDrawable::default();
        drawable.apply(MirrorUpdate::Value(12));
        let ops = drawable.draw(bounds());
        assert_eq!(count_ops(&ops), (0, 5, 5));
    }

    #[test]
    fn background_is_painted_first() {
        let mut drawable = RatingDrawable::default();
        drawable.apply(MirrorUpdate::Background(Some(Brush::Solid(Color::WHITE))));
        let ops = drawable.draw(bounds());
        assert_eq!(
            ops.first(),
            Some(&PaintOp::FillRect {
                rect: bounds(),
                brush: Brush::Solid(Color::WHITE),
            })
        );
    }

    #[test]
    fn zero_width_strokes_are_skipped() {
        let mut drawable = RatingDrawable::default();
        drawable.apply(MirrorUpdate::UnselectedStrokeWidth(0.0));
        let ops = drawable.draw(bounds());
        assert!(ops.is_empty(), "nothing visible, got {ops:?}");
    }

    #[test]
    fn degenerate_inputs_draw_only_background() {
        let mut drawable = RatingDrawable::default();
        drawable.apply(MirrorUpdate::Background(Some(Brush::Solid(Color::BLACK))));
        assert_eq!(count_ops(&drawable.draw(Rect::ZERO)), (1, 0, 0));

        drawable.apply(MirrorUpdate::ItemsCount(0));
        assert_eq!(count_ops(&drawable.draw(bounds())), (1, 0, 0));

        drawable.apply(MirrorUpdate::ItemsCount(-3));
        assert_eq!(count_ops(&drawable.draw(bounds())), (1, 0, 0));
    }

    #[test]
    fn stars_fit_inside_their_slots() {
        use kurbo::Shape;

        let ops = RatingDrawable::default().draw(bounds());
        for (index, op) in ops.iter().enumerate() {
            let PaintOp::StrokePath { path, stroke, .. } = op else {
                panic!("unexpected op {op:?}");
            };
            let slot = item_slot(bounds(), index, 5).unwrap();
            let inflated = path.bounding_box().inflate(stroke.width / 2.0, stroke.width / 2.0);
            let slot = slot.inflate(1e-9, 1e-9);
            assert!(
                slot.x0 <= inflated.x0
                    && slot.y0 <= inflated.y0
                    && inflated.x1 <= slot.x1
                    && inflated.y1 <= slot.y1,
                "star {index} spills out of {slot:?}"
            );
        }
    }
}
