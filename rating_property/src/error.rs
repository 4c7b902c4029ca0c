// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::id::PropertyId;
use crate::value::PropertyKind;

/// Errors from dynamically addressed property writes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// No property with this id is registered.
    #[error("property {0} is not registered")]
    UnknownProperty(PropertyId),
    /// No property with this name is registered.
    #[error("no property named `{0}`")]
    UnknownName(alloc::string::String),
    /// The value's kind does not match the property's kind.
    #[error("property `{name}` holds {expected} values, got {found}")]
    TypeMismatch {
        /// Name of the property being written.
        name: &'static str,
        /// Kind the property was registered with.
        expected: PropertyKind,
        /// Kind of the rejected value.
        found: PropertyKind,
    },
}
