// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`SwipeTarget`] for the carousel navigator.
//!
//! ## Feature
//!
//! Enable with `carousel_adapter`.
//!
//! ## Notes
//!
//! Widths come from the navigator's surface: the track width converts drag distance into
//! track percent, the viewport width scales the commit threshold. Settling re-asserts the
//! current index with an animated move, so move observers see it again.

use understory_carousel::navigator::Navigator;
use understory_carousel::surface::Surface;

use crate::types::SwipeTarget;

impl<T, S: Surface> SwipeTarget for Navigator<T, S> {
    fn base_translate(&self) -> f64 {
        Navigator::base_translate(self)
    }

    fn track_width(&self) -> f64 {
        self.surface().track_width()
    }

    fn viewport_width(&self) -> f64 {
        self.surface().viewport_width()
    }

    fn preview(&mut self, percent: f64) {
        Navigator::preview(self, percent);
    }

    fn set_transitions(&mut self, enabled: bool) {
        Navigator::set_transitions(self, enabled);
    }

    fn next(&mut self) -> Option<usize> {
        Navigator::next(self)
    }

    fn prev(&mut self) -> Option<usize> {
        Navigator::prev(self)
    }

    fn settle(&mut self) {
        let current = self.current() as isize;
        let _ = self.goto_item(current);
    }
}
