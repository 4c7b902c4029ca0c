// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating: a custom-drawn star rating control.
//!
//! A [`Rating`] shows a row of stars, the first `value` of them selected, and
//! lets the user pick a value by touching a star. It is headless: the embedding
//! UI supplies a [`RenderHost`] for repaint requests and layout size, and
//! replays the paint operations produced by the drawable.
//!
//! ## Model
//!
//! - Attributes live in a property store keyed by [`RatingProperties`]. They
//!   can be set through typed setters or by binding name with
//!   [`Rating::set_property`].
//! - The rendering object keeps a mirror of the nine drawable attributes (see
//!   [`rating_paint::RatingAttribute`]). While the control is attached, every
//!   effective change is written to the mirror and followed by a repaint
//!   request; [`Rating::attach`] pushes the whole state at once.
//! - Value changes, from setters or touches, are announced through
//!   [`Rating::on_value_changed`] whether or not the control is attached.
//! - [`Rating::start_interaction`] maps the first touch point to a value with
//!   [`selected_index`]. Read-only controls ignore touches.
//!
//! ## Example
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use peniko::Color;
//! use rating::{InteractionStart, Rating, RenderHost};
//!
//! struct Host;
//!
//! impl RenderHost for Host {
//!     fn request_repaint(&mut self) {}
//!     fn surface_size(&self) -> Size {
//!         Size::new(150.0, 30.0)
//!     }
//! }
//!
//! let mut rating = Rating::new(Host);
//! rating.set_items_count(10).unwrap();
//! rating.set_selected_fill(Color::from_rgb8(0xE0, 0x40, 0x40));
//!
//! let last = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&last);
//! rating.on_value_changed(move |event| seen.set(event.new_value));
//!
//! rating.attach();
//! rating.start_interaction(&InteractionStart::at(Point::new(75.0, 15.0))).unwrap();
//! assert_eq!(rating.value(), 6);
//! assert_eq!(last.get(), 6);
//!
//! // The stock drawable turns the mirrored state into paint operations.
//! assert!(!rating.draw().is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo and Peniko.
//! - `libm`: floating point support for `no_std` targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod event;
mod host;
mod interaction;
mod properties;
mod rating;

pub use error::{InvalidConfiguration, RatingError};
pub use event::{HandlerId, RatingValueChanged};
pub use host::RenderHost;
pub use interaction::{InteractionStart, selected_index};
pub use properties::{IS_READ_ONLY, RatingProperties};
pub use rating::{PREFERRED_SIZE, Rating};
