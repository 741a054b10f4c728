// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width breakpoint for compact (single-slide) mode.
//!
//! The navigator only reacts to a boolean via
//! [`Navigator::set_compact`](crate::navigator::Navigator::set_compact).
//! [`Breakpoint`] is one way to produce it: feed it viewport widths from resize events and
//! forward the flips it reports.
//!
//! ```
//! use understory_carousel::breakpoint::Breakpoint;
//!
//! let mut bp = Breakpoint::default();
//! assert_eq!(bp.update(1200.0), None);
//! assert_eq!(bp.update(600.0), Some(true));
//! assert_eq!(bp.update(500.0), None);
//! assert_eq!(bp.update(870.0), Some(false));
//! ```

/// Viewport width below which carousels switch to compact mode.
pub const DEFAULT_COMPACT_WIDTH: f64 = 870.0;

/// Tracks whether a viewport is below a width threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Breakpoint {
    threshold: f64,
    compact: bool,
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::new(DEFAULT_COMPACT_WIDTH)
    }
}

impl Breakpoint {
    /// Create a breakpoint that reports compact for widths strictly below `threshold`.
    ///
    /// Starts in the non-compact state.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            compact: false,
        }
    }

    /// The width threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Last reported state.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Record a viewport width. Returns the new state only when it changed.
    pub fn update(&mut self, viewport_width: f64) -> Option<bool> {
        let compact = viewport_width < self.threshold;
        if compact == self.compact {
            return None;
        }
        self.compact = compact;
        Some(compact)
    }
}
