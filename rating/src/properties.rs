// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rating's property set.

use peniko::{Brush, Color};
use rating_paint::{
    DEFAULT_ITEMS_COUNT, DEFAULT_SELECTED_COLOR, DEFAULT_STROKE_WIDTH, DEFAULT_UNSELECTED_FILL,
    DEFAULT_UNSELECTED_STROKE, RatingAttribute,
};
use rating_property::{Property, PropertyId, PropertyMetadataBuilder, PropertyRegistry};

/// Name of the read-only flag. It has no drawable counterpart.
pub const IS_READ_ONLY: &str = "IsReadOnly";

/// Registry and typed keys for every attribute of a rating.
///
/// Properties are registered in [`RatingAttribute::ALL`] order, followed by
/// [`IS_READ_ONLY`].
///
/// ```rust
/// use rating::RatingProperties;
/// use rating_paint::RatingAttribute;
///
/// let props = RatingProperties::new();
/// assert_eq!(props.registry().len(), 10);
/// assert_eq!(props.attribute(props.value.id()), Some(RatingAttribute::Value));
/// assert_eq!(props.attribute(props.is_read_only.id()), None);
/// ```
#[derive(Debug)]
pub struct RatingProperties {
    registry: PropertyRegistry,
    /// Optional background brush.
    pub background: Property<Option<Brush>>,
    /// Number of items. Default 5.
    pub items_count: Property<i32>,
    /// Number of selected items. Default 0.
    pub value: Property<i32>,
    /// Fill of selected items. Default `#F6C602`.
    pub selected_fill: Property<Color>,
    /// Fill of unselected items. Default transparent.
    pub unselected_fill: Property<Color>,
    /// Stroke color of selected items. Default `#F6C602`.
    pub selected_stroke: Property<Color>,
    /// Stroke color of unselected items. Default black.
    pub unselected_stroke: Property<Color>,
    /// Stroke width of selected items. Default 2.0.
    pub selected_stroke_width: Property<f64>,
    /// Stroke width of unselected items. Default 2.0.
    pub unselected_stroke_width: Property<f64>,
    /// Whether touches are ignored. Default `false`.
    pub is_read_only: Property<bool>,
}

impl RatingProperties {
    /// Registers the rating's properties with their defaults.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = PropertyRegistry::new();
        let background = registry.register(
            RatingAttribute::Background.name(),
            PropertyMetadataBuilder::<Option<Brush>>::new(None)
                .affects_render(true)
                .build(),
        );
        let items_count = registry.register(
            RatingAttribute::ItemsCount.name(),
            PropertyMetadataBuilder::new(DEFAULT_ITEMS_COUNT)
                .affects_render(true)
                .coerce(|n| n.max(1))
                .build(),
        );
        let value = registry.register(
            RatingAttribute::Value.name(),
            PropertyMetadataBuilder::new(0_i32)
                .affects_render(true)
                .coerce(|v| v.max(0))
                .build(),
        );
        let selected_fill = registry.register(
            RatingAttribute::SelectedFill.name(),
            color_metadata(DEFAULT_SELECTED_COLOR),
        );
        let unselected_fill = registry.register(
            RatingAttribute::UnselectedFill.name(),
            color_metadata(DEFAULT_UNSELECTED_FILL),
        );
        let selected_stroke = registry.register(
            RatingAttribute::SelectedStroke.name(),
            color_metadata(DEFAULT_SELECTED_COLOR),
        );
        let unselected_stroke = registry.register(
            RatingAttribute::UnselectedStroke.name(),
            color_metadata(DEFAULT_UNSELECTED_STROKE),
        );
        let selected_stroke_width = registry.register(
            RatingAttribute::SelectedStrokeWidth.name(),
            width_metadata(),
        );
        let unselected_stroke_width = registry.register(
            RatingAttribute::UnselectedStrokeWidth.name(),
            width_metadata(),
        );
        let is_read_only =
            registry.register(IS_READ_ONLY, PropertyMetadataBuilder::new(false).build());

        Self {
            registry,
            background,
            items_count,
            value,
            selected_fill,
            unselected_fill,
            selected_stroke,
            unselected_stroke,
            selected_stroke_width,
            unselected_stroke_width,
            is_read_only,
        }
    }

    /// Returns the registry holding the metadata.
    #[must_use]
    pub fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    /// Returns the property id backing a drawable attribute.
    #[must_use]
    pub fn id_of(&self, attribute: RatingAttribute) -> PropertyId {
        match attribute {
            RatingAttribute::Background => self.background.id(),
            RatingAttribute::ItemsCount => self.items_count.id(),
            RatingAttribute::Value => self.value.id(),
            RatingAttribute::SelectedFill => self.selected_fill.id(),
            RatingAttribute::UnselectedFill => self.unselected_fill.id(),
            RatingAttribute::SelectedStroke => self.selected_stroke.id(),
            RatingAttribute::UnselectedStroke => self.unselected_stroke.id(),
            RatingAttribute::SelectedStrokeWidth => self.selected_stroke_width.id(),
            RatingAttribute::UnselectedStrokeWidth => self.unselected_stroke_width.id(),
        }
    }

    /// Returns the drawable attribute a property id maps to, if any.
    #[must_use]
    pub fn attribute(&self, id: PropertyId) -> Option<RatingAttribute> {
        RatingAttribute::ALL
            .into_iter()
            .find(|attribute| self.id_of(*attribute) == id)
    }
}

impl Default for RatingProperties {
    fn default() -> Self {
        Self::new()
    }
}

fn color_metadata(default: Color) -> rating_property::PropertyMetadata<Color> {
    PropertyMetadataBuilder::new(default)
        .affects_render(true)
        .build()
}

// Typed setters reject bad widths; this coercion covers dynamic writes that
// bypass them.
fn width_metadata() -> rating_property::PropertyMetadata<f64> {
    PropertyMetadataBuilder::new(DEFAULT_STROKE_WIDTH)
        .affects_render(true)
        .coerce(|w| if w.is_finite() { w.max(0.0) } else { 0.0 })
        .build()
}
