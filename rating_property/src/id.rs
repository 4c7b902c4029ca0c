// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property identification types.
//!
//! [`PropertyId`] names a property at runtime (for example when a binding
//! addresses it by name), while [`Property<T>`] is the typed key handed out by
//! [`PropertyRegistry::register`](crate::PropertyRegistry::register).

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A runtime property identifier.
///
/// Ids are dense indices into a [`PropertyRegistry`](crate::PropertyRegistry),
/// assigned in registration order.
///
/// ```rust
/// use rating_property::PropertyId;
///
/// let id = PropertyId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(u16);

impl PropertyId {
    /// Creates a property id from a registry index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the registry index of this id.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyId").field(&self.0).finish()
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A typed property key.
///
/// The phantom `T` ties the key to the value type it was registered with, so a
/// `Property<i32>` cannot be used to store a color:
///
/// ```rust
/// use rating_property::{Property, PropertyMetadataBuilder, PropertyRegistry};
///
/// let mut registry = PropertyRegistry::new();
/// let items_count: Property<i32> =
///     registry.register("ItemsCount", PropertyMetadataBuilder::new(5).build());
///
/// assert_eq!(registry.name(items_count.id()), Some("ItemsCount"));
/// ```
///
/// The key is `Copy` and the same size as [`PropertyId`].
pub struct Property<T> {
    id: PropertyId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Property<T> {
    /// Wraps an id as a typed key.
    ///
    /// The id must have been registered with value type `T`; store reads
    /// through a mismatched key panic.
    #[must_use]
    #[inline]
    pub const fn from_id(id: PropertyId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Returns the untyped id.
    #[must_use]
    #[inline]
    pub const fn id(self) -> PropertyId {
        self.id
    }
}

// Manual impls so that `T` needs no bounds.

impl<T> Copy for Property<T> {}

impl<T> Clone for Property<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Property<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Property<T> {}

impl<T> Hash for Property<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("id", &self.id)
            .field("type", &core::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn ids_compare_by_index() {
        assert_eq!(PropertyId::new(7), PropertyId::new(7));
        assert_ne!(PropertyId::new(7), PropertyId::new(8));
        assert!(PropertyId::new(1) < PropertyId::new(2));
    }

    #[test]
    fn id_formatting() {
        let id = PropertyId::new(4);
        assert_eq!(format!("{id:?}"), "PropertyId(4)");
        assert_eq!(format!("{id}"), "#4");
    }

    #[test]
    fn typed_key_debug_names_value_type() {
        let key: Property<bool> = Property::from_id(PropertyId::new(9));
        let debug = format!("{key:?}");
        assert!(debug.contains("bool"), "debug output was {debug}");
    }

    #[test]
    fn typed_key_is_id_sized() {
        assert_eq!(core::mem::size_of::<Property<f64>>(), 2);
        assert_eq!(core::mem::size_of::<Property<peniko::Color>>(), 2);
    }
}
