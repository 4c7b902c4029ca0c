// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-object property storage with change notification.

use alloc::boxed::Box;
use smallvec::SmallVec;

use crate::error::PropertyError;
use crate::id::{Property, PropertyId};
use crate::observer::{ObserverId, ObserverList, PropertyChange, PropertyObserver};
use crate::registry::{PropertyRegistration, PropertyRegistry};
use crate::value::{PropertyType, PropertyValue};

/// Local property values for one object, plus the observers of that object.
///
/// Reads resolve the local value first and fall back to the registry default.
/// Writes go through the property's coerce callback and are compared against
/// the current effective value; only real changes run the metadata changed
/// callback and the registered observers, in that order, before the write
/// returns.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use rating_property::{PropertyMetadataBuilder, PropertyRegistry, PropertyStore, PropertyValue};
///
/// let mut registry = PropertyRegistry::new();
/// let value = registry.register("Value", PropertyMetadataBuilder::new(0_i32).build());
///
/// let mut store = PropertyStore::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// store.observe(move |change| sink.borrow_mut().push(change.new.clone()));
///
/// assert!(store.set(value, 3, &registry).is_some());
/// // Writing the same value again is not a change.
/// assert!(store.set(value, 3, &registry).is_none());
///
/// assert_eq!(store.get(value, &registry), 3);
/// assert_eq!(*seen.borrow(), vec![PropertyValue::Int(3)]);
/// ```
#[derive(Debug, Default)]
pub struct PropertyStore {
    values: SmallVec<[(PropertyId, PropertyValue); 10]>,
    observers: ObserverList,
}

impl PropertyStore {
    /// Creates an empty store; every property reads as its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of locally set properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no property is locally set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `id` has a local value.
    #[must_use]
    pub fn has_local(&self, id: PropertyId) -> bool {
        self.local(id).is_some()
    }

    /// Returns the effective value of a property.
    ///
    /// # Panics
    ///
    /// Panics if the property is not registered in `registry` with type `T`.
    #[must_use]
    pub fn get<T: PropertyType>(&self, property: Property<T>, registry: &PropertyRegistry) -> T {
        if let Some(value) = self.local(property.id()).and_then(T::from_value) {
            return value;
        }
        match registry.get_metadata(property) {
            Some(metadata) => metadata.default_value().clone(),
            None => panic!("Property {:?} not found in registry", property.id()),
        }
    }

    /// Returns the effective value of a property in dynamic form.
    ///
    /// Returns `None` if `id` is not registered.
    #[must_use]
    pub fn get_value(&self, id: PropertyId, registry: &PropertyRegistry) -> Option<PropertyValue> {
        let registration = registry.get(id)?;
        Some(
            self.local(id)
                .cloned()
                .unwrap_or_else(|| registration.default_value()),
        )
    }

    /// Sets a property, returning the change if the effective value changed.
    ///
    /// # Panics
    ///
    /// Panics if the property is not registered in `registry`.
    pub fn set<T: PropertyType>(
        &mut self,
        property: Property<T>,
        value: T,
        registry: &PropertyRegistry,
    ) -> Option<PropertyChange> {
        let Some(registration) = registry.get(property.id()) else {
            panic!("Property {:?} not found in registry", property.id());
        };
        let coerced = registration.coerce_value(value.into_value())?;
        self.write(property.id(), registration, coerced)
    }

    /// Sets a property from a dynamic value, as a data binding would.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::UnknownProperty`] if `id` is not registered and
    /// [`PropertyError::TypeMismatch`] if `value` has the wrong kind.
    pub fn set_value(
        &mut self,
        id: PropertyId,
        value: PropertyValue,
        registry: &PropertyRegistry,
    ) -> Result<Option<PropertyChange>, PropertyError> {
        let registration = registry
            .get(id)
            .ok_or(PropertyError::UnknownProperty(id))?;
        let found = value.kind();
        let coerced = registration
            .coerce_value(value)
            .ok_or(PropertyError::TypeMismatch {
                name: registration.name(),
                expected: registration.kind(),
                found,
            })?;
        Ok(self.write(id, registration, coerced))
    }

    /// Removes the local value, returning the change if the effective value changed.
    pub fn clear<T: PropertyType>(
        &mut self,
        property: Property<T>,
        registry: &PropertyRegistry,
    ) -> Option<PropertyChange> {
        let registration = registry.get(property.id())?;
        let index = self.values.iter().position(|(id, _)| *id == property.id())?;
        let (_, old) = self.values.remove(index);
        let new = registration.default_value();
        if old == new {
            return None;
        }
        Some(self.notify(property.id(), registration, old, new))
    }

    /// Registers an observer that runs after every effective change.
    pub fn observe(&mut self, observer: impl FnMut(&PropertyChange) + 'static) -> ObserverId {
        let observer: PropertyObserver = Box::new(observer);
        self.observers.add(observer)
    }

    /// Removes an observer. Returns `false` if it was already gone.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn local(&self, id: PropertyId) -> Option<&PropertyValue> {
        self.values
            .iter()
            .find_map(|(key, value)| (*key == id).then_some(value))
    }

    fn write(
        &mut self,
        id: PropertyId,
        registration: &PropertyRegistration,
        new: PropertyValue,
    ) -> Option<PropertyChange> {
        let old = match self.values.iter_mut().find(|(key, _)| *key == id) {
            Some((_, slot)) => {
                if *slot == new {
                    return None;
                }
                core::mem::replace(slot, new.clone())
            }
            None => {
                let old = registration.default_value();
                if old == new {
                    return None;
                }
                self.values.push((id, new.clone()));
                old
            }
        };
        Some(self.notify(id, registration, old, new))
    }

    fn notify(
        &mut self,
        id: PropertyId,
        registration: &PropertyRegistration,
        old: PropertyValue,
        new: PropertyValue,
    ) -> PropertyChange {
        registration.on_changed_value(&old, &new);
        let change = PropertyChange {
            property: id,
            old,
            new,
        };
        self.observers.notify(&change);
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::PropertyMetadataBuilder;
    use crate::value::PropertyKind;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use peniko::{Brush, Color};

    struct Fixture {
        registry: PropertyRegistry,
        count: Property<i32>,
        width: Property<f64>,
        background: Property<Option<Brush>>,
    }

    fn fixture() -> Fixture {
        let mut registry = PropertyRegistry::new();
        let count = registry.register("ItemsCount", PropertyMetadataBuilder::new(5_i32).build());
        let width = registry.register(
            "StrokeWidth",
            PropertyMetadataBuilder::new(2.0_f64)
                .coerce(|w| w.max(0.0))
                .build(),
        );
        let background =
            registry.register("Background", PropertyMetadataBuilder::new(None).build());
        Fixture {
            registry,
            count,
            width,
            background,
        }
    }

    fn recording(store: &mut PropertyStore) -> Rc<RefCell<Vec<PropertyChange>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        store.observe(move |change| sink.borrow_mut().push(change.clone()));
        log
    }

    #[test]
    fn reads_default_until_set() {
        let f = fixture();
        let mut store = PropertyStore::new();
        assert_eq!(store.get(f.count, &f.registry), 5);
        assert!(store.is_empty());

        store.set(f.count, 7, &f.registry);
        assert_eq!(store.get(f.count, &f.registry), 7);
        assert!(store.has_local(f.count.id()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn setting_the_default_is_not_a_change() {
        let f = fixture();
        let mut store = PropertyStore::new();
        let log = recording(&mut store);

        assert!(store.set(f.count, 5, &f.registry).is_none());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn change_carries_old_and_new() {
        let f = fixture();
        let mut store = PropertyStore::new();
        let log = recording(&mut store);

        store.set(f.count, 3, &f.registry);
        store.set(f.count, 4, &f.registry);

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].property, f.count.id());
        assert_eq!(log[1].old, PropertyValue::Int(3));
        assert_eq!(log[1].new, PropertyValue::Int(4));
    }

    #[test]
    fn coercion_runs_before_comparison() {
        let f = fixture();
        let mut store = PropertyStore::new();

        let change = store.set(f.width, -1.0, &f.registry);
        assert_eq!(
            change.map(|c| c.new),
            Some(PropertyValue::Float(0.0)),
            "negative widths coerce to zero"
        );
        assert!(store.set(f.width, -5.0, &f.registry).is_none());
    }

    #[test]
    fn dynamic_writes_check_kind() {
        let f = fixture();
        let mut store = PropertyStore::new();

        let err = store
            .set_value(f.count.id(), PropertyValue::Bool(true), &f.registry)
            .unwrap_err();
        assert_eq!(
            err,
            PropertyError::TypeMismatch {
                name: "ItemsCount",
                expected: PropertyKind::Int,
                found: PropertyKind::Bool,
            }
        );

        let err = store
            .set_value(PropertyId::new(99), PropertyValue::Int(1), &f.registry)
            .unwrap_err();
        assert_eq!(err, PropertyError::UnknownProperty(PropertyId::new(99)));

        let change = store
            .set_value(
                f.background.id(),
                PropertyValue::Brush(Some(Brush::Solid(Color::WHITE))),
                &f.registry,
            )
            .unwrap();
        assert!(change.is_some());
        assert_eq!(
            store.get(f.background, &f.registry),
            Some(Brush::Solid(Color::WHITE))
        );
    }

    #[test]
    fn get_value_resolves_defaults() {
        let f = fixture();
        let store = PropertyStore::new();
        assert_eq!(
            store.get_value(f.width.id(), &f.registry),
            Some(PropertyValue::Float(2.0))
        );
        assert_eq!(store.get_value(PropertyId::new(42), &f.registry), None);
    }

    #[test]
    fn clear_notifies_only_when_effective_value_moves() {
        let f = fixture();
        let mut store = PropertyStore::new();
        let log = recording(&mut store);

        assert!(store.clear(f.count, &f.registry).is_none());

        store.set(f.count, 9, &f.registry);
        let change = store.clear(f.count, &f.registry);
        assert_eq!(change.map(|c| c.new), Some(PropertyValue::Int(5)));
        assert_eq!(store.get(f.count, &f.registry), 5);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn unobserve_stops_notifications() {
        let f = fixture();
        let mut store = PropertyStore::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let id = store.observe(move |change: &PropertyChange| sink.borrow_mut().push(change.property));

        assert_eq!(store.observer_count(), 1);
        store.set(f.count, 1, &f.registry);
        assert!(store.unobserve(id));
        store.set(f.count, 2, &f.registry);

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn changed_callback_runs_before_observers() {
        use core::sync::atomic::{AtomicBool, Ordering};
        static CALLBACK_RAN: AtomicBool = AtomicBool::new(false);

        let mut registry = PropertyRegistry::new();
        let flag = registry.register(
            "IsReadOnly",
            PropertyMetadataBuilder::new(false)
                .on_changed(|_, _| CALLBACK_RAN.store(true, Ordering::SeqCst))
                .build(),
        );

        let mut store = PropertyStore::new();
        let observed_after_callback = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&observed_after_callback);
        store.observe(move |_| *sink.borrow_mut() = CALLBACK_RAN.load(Ordering::SeqCst));

        store.set(flag, true, &registry);
        assert!(*observed_after_callback.borrow());
    }
}
