// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public value-changed notification.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Payload of the value-changed notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RatingValueChanged {
    /// The value after the change.
    pub new_value: i32,
}

/// Handle returned by [`Rating::on_value_changed`](crate::Rating::on_value_changed).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u32);

type Handler = Box<dyn FnMut(&RatingValueChanged)>;

#[derive(Default)]
pub(crate) struct ValueChangedHandlers {
    handlers: Vec<(HandlerId, Handler)>,
    next_id: u32,
}

impl ValueChangedHandlers {
    pub(crate) fn add(&mut self, handler: Handler) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.handlers.push((id, handler));
        id
    }

    pub(crate) fn remove(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    pub(crate) fn emit(&mut self, new_value: i32) {
        let event = RatingValueChanged { new_value };
        for (_, handler) in &mut self.handlers {
            handler(&event);
        }
    }
}

impl fmt::Debug for ValueChangedHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueChangedHandlers")
            .field("len", &self.handlers.len())
            .finish_non_exhaustive()
    }
}
