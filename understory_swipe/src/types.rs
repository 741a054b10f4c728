// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for swipe handling: pointer samples, responses, outcomes, and the target seam.

use kurbo::Point;

/// Fraction of the viewport width a drag must exceed to change slides.
pub const DEFAULT_COMMIT_THRESHOLD: f64 = 0.2;

/// Device that produced a pointer sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// Mouse or pen; never scrolls the page while dragging.
    Mouse,
    /// Touch input, with the number of simultaneous contacts.
    Touch {
        /// Active contacts when the sample was taken.
        contacts: usize,
    },
}

impl Source {
    /// Number of simultaneous contacts (`1` for a mouse).
    pub fn contacts(self) -> usize {
        match self {
            Self::Mouse => 1,
            Self::Touch { contacts } => contacts,
        }
    }

    /// True for sources whose vertical motion scrolls the page.
    pub fn scrolls_page(self) -> bool {
        matches!(self, Self::Touch { .. })
    }
}

/// A pointer position in screen space and the device it came from.
///
/// For touch input, `position` is the first contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Screen-space position.
    pub position: Point,
    /// Producing device.
    pub source: Source,
}

impl PointerSample {
    /// A mouse sample at `position`.
    pub fn mouse(position: Point) -> Self {
        Self {
            position,
            source: Source::Mouse,
        }
    }

    /// A touch sample at `position` with `contacts` simultaneous contacts.
    pub fn touch(position: Point, contacts: usize) -> Self {
        Self {
            position,
            source: Source::Touch { contacts },
        }
    }
}

/// Swipe controller options.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// A release commits when `|dx| / viewport_width` is strictly greater than this.
    pub threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_COMMIT_THRESHOLD,
        }
    }
}

/// What the caller should do with a pointer-move event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragResponse {
    /// No drag is active; leave the event alone.
    Ignored,
    /// Vertical motion dominates a touch drag; let the page scroll.
    Scroll,
    /// The drag was tracked and previewed.
    Tracking {
        /// Prevent default handling and stop propagation (touch drags only).
        consume: bool,
    },
}

/// Result of releasing or cancelling a drag.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwipeOutcome {
    /// No drag was active.
    Ignored,
    /// The pointer was released without any tracked movement.
    Released,
    /// Swiped toward later slides; holds the committed index.
    Next(usize),
    /// Swiped toward earlier slides; holds the committed index.
    Prev(usize),
    /// Below the threshold, or the move was rejected at a boundary; returned to the current slide.
    SnapBack,
}

/// Something a swipe can drive.
///
/// Implemented for `understory_carousel::navigator::Navigator` by the `carousel_adapter` feature.
pub trait SwipeTarget {
    /// Position of the current slide, in percent of the track width.
    fn base_translate(&self) -> f64;

    /// Width of the slide track; converts pointer distance into track percent.
    fn track_width(&self) -> f64;

    /// Width of the visible viewport; the commit threshold is relative to it.
    fn viewport_width(&self) -> f64;

    /// Render a live position without committing it.
    fn preview(&mut self, percent: f64);

    /// Enable or disable animated transitions.
    fn set_transitions(&mut self, enabled: bool);

    /// Move one step forward. Returns the committed index, or `None` if rejected.
    fn next(&mut self) -> Option<usize>;

    /// Move one step back. Returns the committed index, or `None` if rejected.
    fn prev(&mut self) -> Option<usize>;

    /// Animate back to the current slide.
    fn settle(&mut self);
}
