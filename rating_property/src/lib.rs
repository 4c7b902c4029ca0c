// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating Property: typed, observable property storage for drawn controls.
//!
//! A control declares its externally settable attributes once, in a
//! [`PropertyRegistry`], and keeps the current values of one instance in a
//! [`PropertyStore`]. Every effective change is reported twice:
//!
//! - as the return value of the write, so the owning control can project the
//!   change onto whatever it renders with, and
//! - to the observers registered with [`PropertyStore::observe`], which see a
//!   [`PropertyChange`] carrying the property id and the old and new values.
//!
//! Writes whose coerced value equals the current effective value are not
//! changes and notify nobody.
//!
//! ## Quick Start
//!
//! ```rust
//! use rating_property::{PropertyMetadataBuilder, PropertyRegistry, PropertyStore, PropertyValue};
//!
//! let mut registry = PropertyRegistry::new();
//! let items_count = registry.register(
//!     "ItemsCount",
//!     PropertyMetadataBuilder::new(5_i32)
//!         .affects_render(true)
//!         .coerce(|n| n.max(1))
//!         .build(),
//! );
//!
//! let mut store = PropertyStore::new();
//! assert_eq!(store.get(items_count, &registry), 5);
//!
//! let change = store.set(items_count, 0, &registry).unwrap();
//! assert_eq!(change.old, PropertyValue::Int(5));
//! assert_eq!(change.new, PropertyValue::Int(1));
//!
//! // Bindings address properties by name and dynamic value.
//! let id = registry.by_name("ItemsCount").unwrap();
//! store.set_value(id, PropertyValue::Int(10), &registry).unwrap();
//! assert_eq!(store.get(items_count, &registry), 10);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod id;
mod metadata;
mod observer;
mod registry;
mod store;
mod value;

pub use error::PropertyError;
pub use id::{Property, PropertyId};
pub use metadata::{
    CoerceValueCallback, PropertyChangedCallback, PropertyMetadata, PropertyMetadataBuilder,
};
pub use observer::{ObserverId, PropertyChange, PropertyObserver};
pub use registry::{PropertyRegistration, PropertyRegistry};
pub use store::PropertyStore;
pub use value::{PropertyKind, PropertyType, PropertyValue};
