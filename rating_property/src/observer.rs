// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::id::PropertyId;
use crate::value::PropertyValue;

/// A single effective-value change, delivered after the store was updated.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyChange {
    /// The property that changed.
    pub property: PropertyId,
    /// The effective value before the change.
    pub old: PropertyValue,
    /// The effective value after the change.
    pub new: PropertyValue,
}

/// Handle returned by [`PropertyStore::observe`](crate::PropertyStore::observe).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

/// A change observer.
pub type PropertyObserver = Box<dyn FnMut(&PropertyChange)>;

/// Observers in subscription order.
#[derive(Default)]
pub(crate) struct ObserverList {
    observers: Vec<(ObserverId, PropertyObserver)>,
    next_id: u32,
}

impl ObserverList {
    pub(crate) fn add(&mut self, observer: PropertyObserver) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn notify(&mut self, change: &PropertyChange) {
        for (_, observer) in &mut self.observers {
            observer(change);
        }
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn change() -> PropertyChange {
        PropertyChange {
            property: PropertyId::new(0),
            old: PropertyValue::Int(0),
            new: PropertyValue::Int(1),
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut list = ObserverList::default();
        let a = list.add(Box::new(|_| {}));
        let b = list.add(Box::new(|_| {}));
        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn removed_observers_stop_receiving() {
        let hits = Rc::new(Cell::new(0));
        let mut list = ObserverList::default();
        let id = {
            let hits = Rc::clone(&hits);
            list.add(Box::new(move |_| hits.set(hits.get() + 1)))
        };

        list.notify(&change());
        assert!(list.remove(id));
        assert!(!list.remove(id));
        list.notify(&change());

        assert_eq!(hits.get(), 1);
    }
}
