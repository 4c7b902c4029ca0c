// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-property configuration.
//!
//! [`PropertyMetadata`] carries a property's default value, whether changing it
//! affects rendering, and optional coercion / change callbacks.

use alloc::boxed::Box;

use crate::value::PropertyType;

/// Callback invoked after a property's effective value changed.
///
/// Receives the old and the new value.
pub type PropertyChangedCallback<T> = Box<dyn Fn(&T, &T) + Send + Sync>;

/// Callback that adjusts a proposed value before it is stored.
pub type CoerceValueCallback<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Metadata for a registered property.
///
/// ```rust
/// use rating_property::PropertyMetadataBuilder;
///
/// let metadata = PropertyMetadataBuilder::new(2.0_f64)
///     .affects_render(true)
///     .coerce(|w| w.max(0.0))
///     .build();
///
/// assert_eq!(metadata.default_value(), &2.0);
/// assert!(metadata.affects_render());
/// assert_eq!(metadata.coerce(-1.0), 0.0);
/// ```
pub struct PropertyMetadata<T: PropertyType> {
    default_value: T,
    affects_render: bool,
    changed_callback: Option<PropertyChangedCallback<T>>,
    coerce_callback: Option<CoerceValueCallback<T>>,
}

impl<T: PropertyType> PropertyMetadata<T> {
    /// Creates metadata with the given default and no callbacks.
    #[must_use]
    pub fn new(default_value: T) -> Self {
        Self {
            default_value,
            affects_render: false,
            changed_callback: None,
            coerce_callback: None,
        }
    }

    /// Returns the default value.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Returns whether a change to this property must be rendered.
    #[must_use]
    #[inline]
    pub fn affects_render(&self) -> bool {
        self.affects_render
    }

    /// Runs the changed callback, if any.
    #[inline]
    pub fn on_changed(&self, old_value: &T, new_value: &T) {
        if let Some(callback) = &self.changed_callback {
            callback(old_value, new_value);
        }
    }

    /// Runs the coerce callback, if any.
    #[inline]
    pub fn coerce(&self, value: T) -> T {
        match &self.coerce_callback {
            Some(callback) => callback(value),
            None => value,
        }
    }

    /// Returns whether a changed callback is set.
    #[must_use]
    #[inline]
    pub fn has_changed_callback(&self) -> bool {
        self.changed_callback.is_some()
    }
}

impl<T: PropertyType + core::fmt::Debug> core::fmt::Debug for PropertyMetadata<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyMetadata")
            .field("default_value", &self.default_value)
            .field("affects_render", &self.affects_render)
            .field("has_changed_callback", &self.changed_callback.is_some())
            .field("has_coerce_callback", &self.coerce_callback.is_some())
            .finish()
    }
}

/// Builder for [`PropertyMetadata`].
pub struct PropertyMetadataBuilder<T: PropertyType> {
    metadata: PropertyMetadata<T>,
}

impl<T: PropertyType + core::fmt::Debug> core::fmt::Debug for PropertyMetadataBuilder<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("PropertyMetadataBuilder")
            .field(&self.metadata)
            .finish()
    }
}

impl<T: PropertyType> PropertyMetadataBuilder<T> {
    /// Starts a builder with the given default value.
    #[must_use]
    pub fn new(default_value: T) -> Self {
        Self {
            metadata: PropertyMetadata::new(default_value),
        }
    }

    /// Marks the property as affecting rendering.
    #[must_use]
    pub fn affects_render(mut self, affects_render: bool) -> Self {
        self.metadata.affects_render = affects_render;
        self
    }

    /// Sets the changed callback.
    #[must_use]
    pub fn on_changed<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T, &T) + Send + Sync + 'static,
    {
        self.metadata.changed_callback = Some(Box::new(callback));
        self
    }

    /// Sets the coerce callback.
    ///
    /// The callback also runs on values written through dynamic bindings, so
    /// it is the place to enforce ranges that must hold for every writer.
    #[must_use]
    pub fn coerce<F>(mut self, callback: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.metadata.coerce_callback = Some(Box::new(callback));
        self
    }

    /// Finishes the metadata.
    #[must_use]
    pub fn build(self) -> PropertyMetadata<T> {
        self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use core::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn defaults() {
        let metadata = PropertyMetadata::new(5_i32);
        assert_eq!(metadata.default_value(), &5);
        assert!(!metadata.affects_render());
        assert!(!metadata.has_changed_callback());
        assert_eq!(metadata.coerce(-3), -3);
    }

    #[test]
    fn coerce_clamps() {
        let metadata = PropertyMetadataBuilder::new(0_i32)
            .coerce(|v| v.clamp(0, 10))
            .build();
        assert_eq!(metadata.coerce(42), 10);
        assert_eq!(metadata.coerce(-1), 0);
        assert_eq!(metadata.coerce(4), 4);
    }

    #[test]
    fn changed_callback_sees_old_and_new() {
        static LAST_DELTA: AtomicI32 = AtomicI32::new(0);

        let metadata = PropertyMetadataBuilder::new(0_i32)
            .on_changed(|old, new| LAST_DELTA.store(new - old, Ordering::SeqCst))
            .build();

        assert!(metadata.has_changed_callback());
        metadata.on_changed(&2, &5);
        assert_eq!(LAST_DELTA.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn debug_hides_callbacks() {
        let metadata = PropertyMetadataBuilder::new(true)
            .on_changed(|_, _| {})
            .build();
        let debug = format!("{metadata:?}");
        assert!(debug.contains("has_changed_callback: true"), "{debug}");
        assert!(debug.contains("has_coerce_callback: false"), "{debug}");
    }
}
