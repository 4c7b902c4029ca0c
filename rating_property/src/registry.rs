// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property registry.
//!
//! A [`PropertyRegistry`] is built once per control type and shared by every
//! [`PropertyStore`](crate::PropertyStore) of that type. It owns the metadata,
//! so stores stay sparse: they only hold values that differ from a default.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use hashbrown::HashMap;

use crate::id::{Property, PropertyId};
use crate::metadata::PropertyMetadata;
use crate::value::{PropertyKind, PropertyType, PropertyValue};

/// A registered property: its name, value kind and metadata.
pub struct PropertyRegistration {
    name: &'static str,
    kind: PropertyKind,
    metadata: Box<dyn ErasedMetadata>,
}

impl PropertyRegistration {
    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the kind of value the property holds.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns whether a change to this property must be rendered.
    #[must_use]
    #[inline]
    pub fn affects_render(&self) -> bool {
        self.metadata.affects_render()
    }

    /// Returns the default value in dynamic form.
    #[must_use]
    pub fn default_value(&self) -> PropertyValue {
        self.metadata.default_value()
    }

    /// Coerces a dynamic value.
    ///
    /// Returns `None` if `value` is not of this property's kind.
    #[must_use]
    pub fn coerce_value(&self, value: PropertyValue) -> Option<PropertyValue> {
        self.metadata.coerce_value(value)
    }

    pub(crate) fn on_changed_value(&self, old: &PropertyValue, new: &PropertyValue) {
        self.metadata.on_changed_value(old, new);
    }
}

impl core::fmt::Debug for PropertyRegistration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyRegistration")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("affects_render", &self.affects_render())
            .finish_non_exhaustive()
    }
}

/// The set of properties a control exposes.
///
/// ```rust
/// use rating_property::{PropertyKind, PropertyMetadataBuilder, PropertyRegistry};
///
/// let mut registry = PropertyRegistry::new();
/// let value = registry.register("Value", PropertyMetadataBuilder::new(0_i32).build());
/// let read_only = registry.register("IsReadOnly", PropertyMetadataBuilder::new(false).build());
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.by_name("IsReadOnly"), Some(read_only.id()));
/// assert_eq!(registry.get(value.id()).map(|r| r.kind()), Some(PropertyKind::Int));
/// ```
#[derive(Default)]
pub struct PropertyRegistry {
    properties: Vec<PropertyRegistration>,
    by_name: HashMap<&'static str, PropertyId>,
}

impl PropertyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a property and returns its typed key.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered, or if more than `u16::MAX`
    /// properties are registered.
    pub fn register<T: PropertyType>(
        &mut self,
        name: &'static str,
        metadata: PropertyMetadata<T>,
    ) -> Property<T> {
        assert!(
            !self.by_name.contains_key(name),
            "Property '{name}' is already registered"
        );
        assert!(
            self.properties.len() < u16::MAX as usize,
            "Too many properties registered (max {})",
            u16::MAX
        );

        #[expect(clippy::cast_possible_truncation, reason = "checked above")]
        let id = PropertyId::new(self.properties.len() as u16);

        self.properties.push(PropertyRegistration {
            name,
            kind: T::KIND,
            metadata: Box::new(metadata),
        });
        self.by_name.insert(name, id);

        Property::from_id(id)
    }

    /// Returns the number of registered properties.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Looks up a property id by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<PropertyId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name of a property.
    #[must_use]
    pub fn name(&self, id: PropertyId) -> Option<&'static str> {
        self.get(id).map(PropertyRegistration::name)
    }

    /// Returns the registration for a property.
    #[must_use]
    pub fn get(&self, id: PropertyId) -> Option<&PropertyRegistration> {
        self.properties.get(id.index() as usize)
    }

    /// Returns the typed metadata for a property.
    ///
    /// Returns `None` if the property is unknown or registered with another type.
    #[must_use]
    pub fn get_metadata<T: PropertyType>(
        &self,
        property: Property<T>,
    ) -> Option<&PropertyMetadata<T>> {
        self.get(property.id())
            .and_then(|r| r.metadata.as_any().downcast_ref())
    }

    /// Iterates over all properties in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &PropertyRegistration)> {
        self.properties.iter().enumerate().map(|(i, r)| {
            #[expect(clippy::cast_possible_truncation, reason = "index < len < u16::MAX")]
            (PropertyId::new(i as u16), r)
        })
    }
}

impl core::fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field(
                "properties",
                &self.properties.iter().map(|r| r.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Type-erased view of a [`PropertyMetadata<T>`].
trait ErasedMetadata: Any {
    fn as_any(&self) -> &dyn Any;
    fn affects_render(&self) -> bool;
    fn default_value(&self) -> PropertyValue;
    fn coerce_value(&self, value: PropertyValue) -> Option<PropertyValue>;
    fn on_changed_value(&self, old: &PropertyValue, new: &PropertyValue);
}

impl<T: PropertyType> ErasedMetadata for PropertyMetadata<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn affects_render(&self) -> bool {
        Self::affects_render(self)
    }

    fn default_value(&self) -> PropertyValue {
        Self::default_value(self).clone().into_value()
    }

    fn coerce_value(&self, value: PropertyValue) -> Option<PropertyValue> {
        T::from_value(&value).map(|typed| self.coerce(typed).into_value())
    }

    fn on_changed_value(&self, old: &PropertyValue, new: &PropertyValue) {
        if !self.has_changed_callback() {
            return;
        }
        if let (Some(old), Some(new)) = (T::from_value(old), T::from_value(new)) {
            self.on_changed(&old, &new);
        }
    }
}
