// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamically typed property values.
//!
//! Stores keep values as [`PropertyValue`] so that one store can hold counts,
//! widths, flags, colors and brushes side by side. The [`PropertyType`] trait
//! converts between the typed and dynamic forms.

use core::fmt;

use peniko::{Brush, Color};

/// The kind of value a property holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// A signed integer.
    Int,
    /// A floating-point number.
    Float,
    /// A boolean flag.
    Bool,
    /// A solid color.
    Color,
    /// An optional brush.
    Brush,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Color => "color",
            Self::Brush => "brush",
        })
    }
}

/// A property value of any supported kind.
///
/// ```rust
/// use rating_property::{PropertyKind, PropertyType, PropertyValue};
///
/// let value = 3_i32.into_value();
/// assert_eq!(value, PropertyValue::Int(3));
/// assert_eq!(value.kind(), PropertyKind::Int);
/// assert_eq!(i32::from_value(&value), Some(3));
/// assert_eq!(f64::from_value(&value), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// See [`PropertyKind::Int`].
    Int(i32),
    /// See [`PropertyKind::Float`].
    Float(f64),
    /// See [`PropertyKind::Bool`].
    Bool(bool),
    /// See [`PropertyKind::Color`].
    Color(Color),
    /// See [`PropertyKind::Brush`]. `None` means "no brush".
    Brush(Option<Brush>),
}

impl PropertyValue {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Int(_) => PropertyKind::Int,
            Self::Float(_) => PropertyKind::Float,
            Self::Bool(_) => PropertyKind::Bool,
            Self::Color(_) => PropertyKind::Color,
            Self::Brush(_) => PropertyKind::Brush,
        }
    }
}

/// Conversion between a concrete value type and [`PropertyValue`].
pub trait PropertyType: Clone + PartialEq + 'static {
    /// The kind every value of this type maps to.
    const KIND: PropertyKind;

    /// Wraps `self` as a dynamic value.
    fn into_value(self) -> PropertyValue;

    /// Extracts a typed value, or `None` if `value` is of another kind.
    fn from_value(value: &PropertyValue) -> Option<Self>;
}

impl PropertyType for i32 {
    const KIND: PropertyKind = PropertyKind::Int;

    fn into_value(self) -> PropertyValue {
        PropertyValue::Int(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for f64 {
    const KIND: PropertyKind = PropertyKind::Float;

    fn into_value(self) -> PropertyValue {
        PropertyValue::Float(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for bool {
    const KIND: PropertyKind = PropertyKind::Bool;

    fn into_value(self) -> PropertyValue {
        PropertyValue::Bool(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for Color {
    const KIND: PropertyKind = PropertyKind::Color;

    fn into_value(self) -> PropertyValue {
        PropertyValue::Color(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Color(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for Option<Brush> {
    const KIND: PropertyKind = PropertyKind::Brush;

    fn into_value(self) -> PropertyValue {
        PropertyValue::Brush(self)
    }

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Brush(v) => Some(v.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(PropertyValue::Float(2.0).kind(), PropertyKind::Float);
        assert_eq!(PropertyValue::Bool(true).kind(), PropertyKind::Bool);
        assert_eq!(
            PropertyValue::Color(Color::BLACK).kind(),
            PropertyKind::Color
        );
        assert_eq!(PropertyValue::Brush(None).kind(), PropertyKind::Brush);
    }

    #[test]
    fn brush_values_keep_absence() {
        let none: Option<Brush> = None;
        let value = none.into_value();
        assert_eq!(<Option<Brush>>::from_value(&value), Some(None));

        let solid = Some(Brush::Solid(Color::WHITE)).into_value();
        assert_eq!(
            <Option<Brush>>::from_value(&solid),
            Some(Some(Brush::Solid(Color::WHITE)))
        );
    }

    #[test]
    fn mismatched_kinds_do_not_convert() {
        assert_eq!(bool::from_value(&PropertyValue::Int(1)), None);
        assert_eq!(Color::from_value(&PropertyValue::Brush(None)), None);
        assert_eq!(i32::from_value(&PropertyValue::Float(1.0)), None);
    }

    #[test]
    fn kind_display() {
        assert_eq!(alloc::format!("{}", PropertyKind::Brush), "brush");
        assert_eq!(<f64 as PropertyType>::KIND, PropertyKind::Float);
    }
}
