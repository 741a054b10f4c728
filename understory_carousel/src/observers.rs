// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Move observer registry.
//!
//! Observers are notified with the committed index after every navigation,
//! once when the navigator is built, and once per responsive-mode flip.
//!
//! ## Ordering
//!
//! Callbacks run synchronously, in registration order, before the navigating call returns.
//! There is no removal; a registry lives as long as its navigator.
//!
//! ## Re-entrancy
//!
//! Observers are owned by the navigator, so they cannot call back into it.
//! To navigate in response to a move, record the request (for example in an
//! `Rc<Cell<Option<usize>>>`) and apply it after the outer call has returned.
//!
//! ## Panics
//!
//! A panicking observer unwinds out of [`MoveObservers::notify`]; observers registered
//! after it do not run for that move. The index has already been committed at that point.

use alloc::boxed::Box;
use alloc::vec::Vec;

type Observer = Box<dyn FnMut(usize)>;

/// Ordered list of move callbacks.
#[derive(Default)]
pub struct MoveObservers {
    observers: Vec<Observer>,
}

impl core::fmt::Debug for MoveObservers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MoveObservers")
            .field("len", &self.observers.len())
            .finish()
    }
}

impl MoveObservers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Append `observer`; it runs after every observer already registered.
    pub fn push(&mut self, observer: impl FnMut(usize) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Call every observer with `index`, in registration order.
    pub fn notify(&mut self, index: usize) {
        for observer in &mut self.observers {
            observer(index);
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
