// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rating control.

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use peniko::{Brush, Color};
use rating_paint::{MirrorUpdate, PaintOp, RatingAttribute, RatingDrawable, RatingMirror};
use rating_property::{
    ObserverId, PropertyChange, PropertyError, PropertyId, PropertyStore, PropertyValue,
};

use crate::error::{InvalidConfiguration, RatingError};
use crate::event::{HandlerId, RatingValueChanged, ValueChangedHandlers};
use crate::host::RenderHost;
use crate::interaction::{InteractionStart, selected_index};
use crate::properties::RatingProperties;

/// Size a host should give a rating before any explicit sizing.
pub const PREFERRED_SIZE: Size = Size::new(150.0, 30.0);

/// A row of selectable stars bound to an integer value.
///
/// The control owns its attribute values (in a [`PropertyStore`]), its host
/// `H`, and the drawable mirror `M` that renders. Every effective attribute
/// change is handled the same way:
///
/// 1. the store notifies its observers (see [`observe`](Self::observe));
/// 2. if the control is attached, the new value is written to the mirror and a
///    repaint is requested from the host;
/// 3. for `Value` only, [`RatingValueChanged`] is emitted to the handlers
///    registered with [`on_value_changed`](Self::on_value_changed).
///
/// Writes that do not change the effective value do nothing at all.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use rating::{InteractionStart, Rating, RenderHost};
///
/// #[derive(Default)]
/// struct Surface {
///     repaints: usize,
/// }
///
/// impl RenderHost for Surface {
///     fn request_repaint(&mut self) {
///         self.repaints += 1;
///     }
///     fn surface_size(&self) -> Size {
///         Size::new(150.0, 30.0)
///     }
/// }
///
/// let mut rating = Rating::new(Surface::default());
/// rating.attach();
///
/// let selected = rating.start_interaction(&InteractionStart::at(Point::new(40.0, 12.0)));
/// assert_eq!(selected, Ok(Some(2)));
/// assert_eq!(rating.value(), 2);
/// assert_eq!(rating.mirror().value, 2);
/// ```
pub struct Rating<H: RenderHost, M: RatingMirror = RatingDrawable> {
    props: RatingProperties,
    store: PropertyStore,
    host: H,
    mirror: M,
    attached: bool,
    value_changed: ValueChangedHandlers,
}

impl<H: RenderHost> Rating<H> {
    /// Creates an unattached rating that renders with a [`RatingDrawable`].
    pub fn new(host: H) -> Self {
        Self::with_mirror(host, RatingDrawable::default())
    }

    /// Paints the current mirrored state over the host's whole surface.
    #[must_use]
    pub fn draw(&self) -> Vec<PaintOp> {
        let bounds = Rect::from_origin_size((0.0, 0.0), self.host.surface_size());
        self.mirror.draw(bounds)
    }
}

impl<H: RenderHost, M: RatingMirror> Rating<H, M> {
    /// Creates an unattached rating with default attributes and a custom mirror.
    ///
    /// Nothing is written to `mirror` until [`attach`](Self::attach).
    pub fn with_mirror(host: H, mirror: M) -> Self {
        Self {
            props: RatingProperties::new(),
            store: PropertyStore::new(),
            host,
            mirror,
            attached: false,
            value_changed: ValueChangedHandlers::default(),
        }
    }

    /// Returns the property keys and registry.
    #[must_use]
    pub fn properties(&self) -> &RatingProperties {
        &self.props
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably, for example to update its layout.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the drawable mirror.
    #[must_use]
    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    // Lifecycle

    /// Returns `true` while the control has a visual parent.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Marks the control as attached to a visual parent.
    ///
    /// On the transition from unattached, every attribute is pushed to the
    /// mirror in [`RatingAttribute::ALL`] order, each followed by a repaint
    /// request; the `Value` push also emits [`RatingValueChanged`]. Calling
    /// this while already attached does nothing.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        tracing::debug!("rating attached, pushing full state");
        for attribute in RatingAttribute::ALL {
            self.push(attribute);
        }
    }

    /// Marks the control as removed from its parent.
    ///
    /// Attribute changes are still stored, and value changes still notified,
    /// but nothing reaches the mirror until the next [`attach`](Self::attach).
    pub fn detach(&mut self) {
        if self.attached {
            tracing::debug!("rating detached");
        }
        self.attached = false;
    }

    // Notifications

    /// Registers a handler for value changes, from setters and touches alike.
    pub fn on_value_changed(
        &mut self,
        handler: impl FnMut(&RatingValueChanged) + 'static,
    ) -> HandlerId {
        self.value_changed.add(Box::new(handler))
    }

    /// Removes a value-changed handler. Returns `false` if it was already gone.
    pub fn remove_value_changed(&mut self, id: HandlerId) -> bool {
        self.value_changed.remove(id)
    }

    /// Registers an observer for every attribute change.
    ///
    /// Observers run before the mirror is updated.
    pub fn observe(&mut self, observer: impl FnMut(&PropertyChange) + 'static) -> ObserverId {
        self.store.observe(observer)
    }

    /// Removes an attribute observer.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.store.unobserve(id)
    }

    // Getters

    /// Number of items.
    #[must_use]
    pub fn items_count(&self) -> i32 {
        self.store.get(self.props.items_count, self.props.registry())
    }

    /// Number of selected items.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.store.get(self.props.value, self.props.registry())
    }

    /// Background brush, if any.
    #[must_use]
    pub fn background(&self) -> Option<Brush> {
        self.store.get(self.props.background, self.props.registry())
    }

    /// Fill of selected items.
    #[must_use]
    pub fn selected_fill(&self) -> Color {
        self.store.get(self.props.selected_fill, self.props.registry())
    }

    /// Fill of unselected items.
    #[must_use]
    pub fn unselected_fill(&self) -> Color {
        self.store.get(self.props.unselected_fill, self.props.registry())
    }

    /// Stroke color of selected items.
    #[must_use]
    pub fn selected_stroke(&self) -> Color {
        self.store.get(self.props.selected_stroke, self.props.registry())
    }

    /// Stroke color of unselected items.
    #[must_use]
    pub fn unselected_stroke(&self) -> Color {
        self.store.get(self.props.unselected_stroke, self.props.registry())
    }

    /// Stroke width of selected items.
    #[must_use]
    pub fn selected_stroke_width(&self) -> f64 {
        self.store
            .get(self.props.selected_stroke_width, self.props.registry())
    }

    /// Stroke width of unselected items.
    #[must_use]
    pub fn unselected_stroke_width(&self) -> f64 {
        self.store
            .get(self.props.unselected_stroke_width, self.props.registry())
    }

    /// Whether touches are ignored.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.store.get(self.props.is_read_only, self.props.registry())
    }

    /// Reads any property by its binding name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        let id = self.props.registry().by_name(name)?;
        self.store.get_value(id, self.props.registry())
    }

    // Setters

    /// Sets the number of items.
    ///
    /// If the current value exceeds the new count, the value is lowered to the
    /// count afterwards, which is a value change of its own.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration::ItemsCount`] if `count` is not positive;
    /// the control is left unchanged.
    pub fn set_items_count(&mut self, count: i32) -> Result<(), RatingError> {
        let count = check_items_count(count)?;
        let change = self
            .store
            .set(self.props.items_count, count, self.props.registry());
        self.commit(change);
        Ok(())
    }

    /// Sets the number of selected items, clamped to `0..=items_count`.
    pub fn set_value(&mut self, value: i32) {
        let value = self.clamp_value(value);
        let change = self.store.set(self.props.value, value, self.props.registry());
        self.commit(change);
    }

    /// Sets the background brush.
    pub fn set_background(&mut self, background: Option<Brush>) {
        let change = self
            .store
            .set(self.props.background, background, self.props.registry());
        self.commit(change);
    }

    /// Sets the fill of selected items.
    pub fn set_selected_fill(&mut self, color: Color) {
        let change = self
            .store
            .set(self.props.selected_fill, color, self.props.registry());
        self.commit(change);
    }

    /// Sets the fill of unselected items.
    pub fn set_unselected_fill(&mut self, color: Color) {
        let change = self
            .store
            .set(self.props.unselected_fill, color, self.props.registry());
        self.commit(change);
    }

    /// Sets the stroke color of selected items.
    pub fn set_selected_stroke(&mut self, color: Color) {
        let change = self
            .store
            .set(self.props.selected_stroke, color, self.props.registry());
        self.commit(change);
    }

    /// Sets the stroke color of unselected items.
    pub fn set_unselected_stroke(&mut self, color: Color) {
        let change = self
            .store
            .set(self.props.unselected_stroke, color, self.props.registry());
        self.commit(change);
    }

    /// Sets the stroke width of selected items.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration::StrokeWidth`] for negative or
    /// non-finite widths; the control is left unchanged.
    pub fn set_selected_stroke_width(&mut self, width: f64) -> Result<(), RatingError> {
        let width = check_stroke_width(RatingAttribute::SelectedStrokeWidth, width)?;
        let change = self
            .store
            .set(self.props.selected_stroke_width, width, self.props.registry());
        self.commit(change);
        Ok(())
    }

    /// Sets the stroke width of unselected items.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration::StrokeWidth`] for negative or
    /// non-finite widths; the control is left unchanged.
    pub fn set_unselected_stroke_width(&mut self, width: f64) -> Result<(), RatingError> {
        let width = check_stroke_width(RatingAttribute::UnselectedStrokeWidth, width)?;
        let change = self.store.set(
            self.props.unselected_stroke_width,
            width,
            self.props.registry(),
        );
        self.commit(change);
        Ok(())
    }

    /// Sets whether touches are ignored.
    ///
    /// The flag does not affect rendering, so it never reaches the mirror.
    pub fn set_read_only(&mut self, read_only: bool) {
        let change = self
            .store
            .set(self.props.is_read_only, read_only, self.props.registry());
        self.commit(change);
    }

    /// Sets any property by its binding name, with the same validation as the
    /// typed setters.
    ///
    /// # Errors
    ///
    /// - [`PropertyError::UnknownName`] if no property has that name.
    /// - [`PropertyError::TypeMismatch`] if `value` has the wrong kind.
    /// - [`RatingError::InvalidConfiguration`] for out-of-range counts or widths.
    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), RatingError> {
        let id = self
            .props
            .registry()
            .by_name(name)
            .ok_or_else(|| PropertyError::UnknownName(name.to_string()))?;
        let value = self.validate(id, value)?;
        let change = self.store.set_value(id, value, self.props.registry())?;
        self.commit(change);
        Ok(())
    }

    // Interaction

    /// Handles the start of a pointer or touch interaction.
    ///
    /// Returns `Ok(Some(value))` with the value after the touch, or `Ok(None)`
    /// when the control is read-only or the event carries no touch point. In
    /// both `None` cases nothing changes and nothing is notified.
    ///
    /// # Errors
    ///
    /// Fails with [`RatingError::DegenerateLayout`] while the host reports no
    /// usable width, and with [`RatingError::InvalidTouch`] for non-finite
    /// coordinates. The event is ignored in both cases.
    pub fn start_interaction(
        &mut self,
        event: &InteractionStart,
    ) -> Result<Option<i32>, RatingError> {
        if self.is_read_only() {
            tracing::debug!("read-only rating ignored an interaction");
            return Ok(None);
        }
        let Some(touch) = event.primary() else {
            tracing::debug!("interaction without touch points ignored");
            return Ok(None);
        };
        let width = self.host.surface_size().width;
        let index = selected_index(touch.x, width, self.items_count()).inspect_err(|err| {
            tracing::debug!(%err, "interaction ignored");
        })?;
        self.set_value(index);
        Ok(Some(self.value()))
    }

    // Synchronization

    fn commit(&mut self, change: Option<PropertyChange>) {
        let Some(change) = change else {
            return;
        };
        let Some(attribute) = self.props.attribute(change.property) else {
            return;
        };
        self.push(attribute);

        if attribute == RatingAttribute::ItemsCount {
            let count = self.items_count();
            if self.value() > count {
                tracing::debug!(count, "items count shrank below value, clamping");
                let change = self.store.set(self.props.value, count, self.props.registry());
                self.commit(change);
            }
        }
    }

    /// Mirrors one attribute and requests a repaint if attached, then emits the
    /// value notification for `Value`.
    fn push(&mut self, attribute: RatingAttribute) {
        if self.attached {
            let update = self.current(attribute);
            tracing::trace!(%attribute, "sync");
            self.mirror.apply(update);
            self.host.request_repaint();
        }
        if attribute == RatingAttribute::Value {
            self.value_changed.emit(self.value());
        }
    }

    fn current(&self, attribute: RatingAttribute) -> MirrorUpdate {
        match attribute {
            RatingAttribute::Background => MirrorUpdate::Background(self.background()),
            RatingAttribute::ItemsCount => MirrorUpdate::ItemsCount(self.items_count()),
            RatingAttribute::Value => MirrorUpdate::Value(self.value()),
            RatingAttribute::SelectedFill => MirrorUpdate::SelectedFill(self.selected_fill()),
            RatingAttribute::UnselectedFill => {
                MirrorUpdate::UnselectedFill(self.unselected_fill())
            }
            RatingAttribute::SelectedStroke => {
                MirrorUpdate::SelectedStroke(self.selected_stroke())
            }
            RatingAttribute::UnselectedStroke => {
                MirrorUpdate::UnselectedStroke(self.unselected_stroke())
            }
            RatingAttribute::SelectedStrokeWidth => {
                MirrorUpdate::SelectedStrokeWidth(self.selected_stroke_width())
            }
            RatingAttribute::UnselectedStrokeWidth => {
                MirrorUpdate::UnselectedStrokeWidth(self.unselected_stroke_width())
            }
        }
    }

    fn clamp_value(&self, value: i32) -> i32 {
        let clamped = value.clamp(0, self.items_count());
        if clamped != value {
            tracing::debug!(value, clamped, "value clamped to item range");
        }
        clamped
    }

    /// Applies typed-setter validation to a dynamic write. Kind mismatches pass
    /// through untouched so the store can report them.
    fn validate(&self, id: PropertyId, value: PropertyValue) -> Result<PropertyValue, RatingError> {
        let props = &self.props;
        Ok(match value {
            PropertyValue::Int(count) if id == props.items_count.id() => {
                PropertyValue::Int(check_items_count(count)?)
            }
            PropertyValue::Int(value) if id == props.value.id() => {
                PropertyValue::Int(self.clamp_value(value))
            }
            PropertyValue::Float(width) if id == props.selected_stroke_width.id() => {
                PropertyValue::Float(check_stroke_width(
                    RatingAttribute::SelectedStrokeWidth,
                    width,
                )?)
            }
            PropertyValue::Float(width) if id == props.unselected_stroke_width.id() => {
                PropertyValue::Float(check_stroke_width(
                    RatingAttribute::UnselectedStrokeWidth,
                    width,
                )?)
            }
            other => other,
        })
    }
}

impl<H, M> core::fmt::Debug for Rating<H, M>
where
    H: RenderHost + core::fmt::Debug,
    M: RatingMirror + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rating")
            .field("store", &self.store)
            .field("host", &self.host)
            .field("mirror", &self.mirror)
            .field("attached", &self.attached)
            .field("value_changed", &self.value_changed)
            .finish_non_exhaustive()
    }
}

fn check_items_count(count: i32) -> Result<i32, InvalidConfiguration> {
    if count > 0 {
        Ok(count)
    } else {
        tracing::debug!(count, "rejected items count");
        Err(InvalidConfiguration::ItemsCount(count))
    }
}

fn check_stroke_width(attribute: RatingAttribute, width: f64) -> Result<f64, InvalidConfiguration> {
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        tracing::debug!(%attribute, width, "rejected stroke width");
        Err(InvalidConfiguration::StrokeWidth { attribute, width })
    }
}
