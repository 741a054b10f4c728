// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived state for pagination dots and prev/next arrows.
//!
//! Nothing here renders. A presentation layer registers a move observer, and on each
//! move asks the navigator for [`Pagination`] and [`Arrows`] to decide which dot is
//! active and which arrows to show.

use crate::config::WrapMode;

/// Page arithmetic over the original (non-clone) slides.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pagination {
    originals: usize,
    step: usize,
    offset: usize,
}

impl Pagination {
    /// Pages for `originals` slides advanced `step` at a time, with `offset` leading clones.
    ///
    /// `originals` and `step` must be non-zero.
    pub fn new(originals: usize, step: usize, offset: usize) -> Self {
        Self {
            originals,
            step,
            offset,
        }
    }

    /// Number of dots.
    pub fn page_count(&self) -> usize {
        self.originals.div_ceil(self.step)
    }

    /// Active page for a navigator index.
    ///
    /// Indices in a clone region resolve to the page of the original they copy.
    pub fn page_of(&self, index: usize) -> usize {
        let relative = (index as isize - self.offset as isize).rem_euclid(self.originals as isize);
        relative as usize / self.step
    }

    /// Navigator index to go to when `page` is selected, or `None` past the last page.
    pub fn target_of(&self, page: usize) -> Option<usize> {
        (page < self.page_count()).then(|| page * self.step + self.offset)
    }
}

/// Visibility of the prev/next arrows.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Arrows {
    /// Show the "previous" arrow.
    pub prev: bool,
    /// Show the "next" arrow.
    pub next: bool,
}

impl Arrows {
    /// Arrow state for a window of `visible` slides starting at `current` in a track of `len`.
    ///
    /// Looping carousels always show both arrows. Otherwise "previous" hides on the first
    /// slide and "next" hides once the window reaches the last slide.
    pub fn new(mode: WrapMode, current: usize, len: usize, visible: usize) -> Self {
        if mode == WrapMode::Loop {
            return Self {
                prev: true,
                next: true,
            };
        }
        Self {
            prev: current != 0,
            next: current.saturating_add(visible) < len,
        }
    }
}
