// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation seam: where the navigator sends positions, and where widths come from.
//!
//! The carousel never renders. A toolkit implements [`Surface`] for whatever moves the
//! slide track (a DOM node, a retained widget, a GPU layer) and the
//! [`Navigator`](crate::navigator::Navigator) drives it.
//!
//! Positions are percentages of the track's own width: `0.0` puts the first slide flush
//! with the viewport start, and each slide occupies `100 / len` percent.

/// Track and slide sizes as percentages, for the presentation layer to apply.
///
/// `track_percent` is the track width relative to the viewport and `slide_percent` is
/// one slide's width relative to the track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackLayout {
    /// Track width as a percentage of the viewport width.
    pub track_percent: f64,
    /// Slide width as a percentage of the track width.
    pub slide_percent: f64,
}

impl TrackLayout {
    /// Layout for `len` slides showing `visible` at a time.
    ///
    /// Both must be non-zero; the navigator guarantees this.
    pub fn new(len: usize, visible: usize) -> Self {
        let ratio = len as f64 / visible as f64;
        Self {
            track_percent: 100.0 * ratio,
            slide_percent: 100.0 / visible as f64 / ratio,
        }
    }
}

/// Presentation collaborator driven by the navigator.
pub trait Surface {
    /// Move the track so that it is offset by `percent` of its own width.
    fn translate(&mut self, percent: f64);

    /// Enable or disable animated transitions for subsequent moves.
    fn set_transitions(&mut self, enabled: bool);

    /// Force pending position changes to take effect before transitions are restored.
    ///
    /// Called between an instant move and re-enabling transitions so that the jump is
    /// not animated.
    fn flush(&mut self) {}

    /// Apply new track and slide widths. Called on construction and on responsive flips.
    fn apply_layout(&mut self, _layout: TrackLayout) {}

    /// Current width of the slide track, in any consistent unit.
    fn track_width(&self) -> f64;

    /// Current width of the visible viewport, in the same unit as [`track_width`](Self::track_width).
    fn viewport_width(&self) -> f64;
}

/// A surface that renders nothing and reports zero widths.
///
/// Used when navigation state is needed without any presentation attached.
#[derive(Copy, Clone, Debug, Default)]
pub struct Headless;

impl Surface for Headless {
    #[inline]
    fn translate(&mut self, _percent: f64) {}

    #[inline]
    fn set_transitions(&mut self, _enabled: bool) {}

    #[inline]
    fn track_width(&self) -> f64 {
        0.0
    }

    #[inline]
    fn viewport_width(&self) -> f64 {
        0.0
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn translate(&mut self, percent: f64) {
        (**self).translate(percent);
    }

    fn set_transitions(&mut self, enabled: bool) {
        (**self).set_transitions(enabled);
    }

    fn flush(&mut self) {
        (**self).flush();
    }

    fn apply_layout(&mut self, layout: TrackLayout) {
        (**self).apply_layout(layout);
    }

    fn track_width(&self) -> f64 {
        (**self).track_width()
    }

    fn viewport_width(&self) -> f64 {
        (**self).viewport_width()
    }
}
