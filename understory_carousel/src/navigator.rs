// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation engine: current index, boundary policy, and positions.
//!
//! ## Overview
//!
//! [`Navigator`] owns the [`SlideSet`], the current index and the move observers, and is the
//! only thing that changes the index. Every move goes through [`Navigator::goto_item_with`],
//! which
//!
//! 1. applies the lower-bound rule (negative targets wrap in loop mode, otherwise reject),
//! 2. applies the upper-bound rule (targets past the end, or forward moves once the window
//!    already shows the last slide, wrap to `0` in loop mode, otherwise reject),
//! 3. asks the [`Surface`] to translate to `index * -100 / len` percent, optionally without
//!    animation,
//! 4. commits the index and notifies observers in registration order.
//!
//! Rejected moves change nothing and notify nobody.
//!
//! ## Infinite mode
//!
//! The slide set is padded with clones, the navigator starts parked on the first original,
//! and after each finished transition the toolkit calls [`Navigator::reset_infinite`].
//! If the window has drifted into a clone region, the index jumps by the original slide count
//! without animation, so the same content stays on screen.
//!
//! ## Compact mode
//!
//! [`Navigator::set_compact`] switches the effective window and step down to one slide,
//! for narrow viewports. The configured values are kept and restored when it is cleared.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_carousel::config::Config;
//! use understory_carousel::navigator::NavigatorBuilder;
//! use understory_carousel::surface::Headless;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let log = Rc::clone(&seen);
//! let config = Config::default().with_slides_visible(2).with_loop(true);
//! let mut nav = NavigatorBuilder::new(config)
//!     .on_move(move |i| log.borrow_mut().push(i))
//!     .build(vec!["a", "b", "c", "d"], Headless)
//!     .unwrap();
//!
//! nav.next();
//! nav.next();
//! nav.next(); // window already shows "d": wraps to the start
//! nav.prev(); // wraps to the last full page
//! assert_eq!(*seen.borrow(), vec![0, 1, 2, 0, 2]);
//! ```

use alloc::vec::Vec;

use crate::config::{Config, WrapMode};
use crate::error::CarouselError;
use crate::observers::MoveObservers;
use crate::pagination::{Arrows, Pagination};
use crate::slides::SlideSet;
use crate::surface::{Headless, Surface, TrackLayout};

/// Whether a move is animated.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Animation {
    /// Let the surface animate to the new position.
    #[default]
    Animated,
    /// Suspend transitions, move, flush, then restore transitions.
    Instant,
}

/// Collects observers and options before any navigator state exists.
///
/// Observers registered here receive the initial index exactly once, when
/// [`build`](Self::build) succeeds.
#[derive(Debug)]
pub struct NavigatorBuilder {
    config: Config,
    observers: MoveObservers,
    compact: bool,
}

impl NavigatorBuilder {
    /// Start building a navigator for `config`.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            observers: MoveObservers::new(),
            compact: false,
        }
    }

    /// Register a move observer before construction.
    #[must_use]
    pub fn on_move(mut self, observer: impl FnMut(usize) + 'static) -> Self {
        self.observers.push(observer);
        self
    }

    /// Start in compact mode.
    #[must_use]
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Validate the configuration, build the slide set, park on the first original slide
    /// and notify observers once.
    ///
    /// Nothing is called on `surface` and no observer runs when this returns an error.
    pub fn build<T: Clone, S: Surface>(
        self,
        items: Vec<T>,
        surface: S,
    ) -> Result<Navigator<T, S>, CarouselError> {
        let mode = self.config.validate()?;
        let slides = SlideSet::build(items, &self.config)?;
        let mut nav = Navigator {
            config: self.config,
            mode,
            slides,
            current: 0,
            compact: self.compact,
            surface,
            observers: self.observers,
        };

        if mode == WrapMode::Infinite {
            // Unconditional: the first original always exists.
            nav.place(nav.slides.offset(), Animation::Instant);
        }
        let layout = nav.track_layout();
        nav.surface.apply_layout(layout);
        log::debug!(
            "carousel ready: mode={mode:?} slides={} offset={} index={}",
            nav.slides.len(),
            nav.slides.offset(),
            nav.current
        );
        nav.observers.notify(nav.current);
        Ok(nav)
    }
}

/// Carousel navigation engine.
#[derive(Debug)]
pub struct Navigator<T, S: Surface = Headless> {
    config: Config,
    mode: WrapMode,
    slides: SlideSet<T>,
    current: usize,
    compact: bool,
    surface: S,
    observers: MoveObservers,
}

impl<T: Clone, S: Surface> Navigator<T, S> {
    /// Build a navigator without pre-registered observers.
    ///
    /// Shorthand for [`NavigatorBuilder::new`] followed by [`NavigatorBuilder::build`].
    pub fn new(items: Vec<T>, config: Config, surface: S) -> Result<Self, CarouselError> {
        NavigatorBuilder::new(config).build(items, surface)
    }
}

impl<T, S: Surface> Navigator<T, S> {
    /// Register a move observer. It only sees moves committed from now on.
    pub fn on_move(&mut self, observer: impl FnMut(usize) + 'static) {
        self.observers.push(observer);
    }

    /// Animated move to `target`. See [`goto_item_with`](Self::goto_item_with).
    pub fn goto_item(&mut self, target: isize) -> Option<usize> {
        self.goto_item_with(target, Animation::Animated)
    }

    /// Move to `target`, applying the boundary policy.
    ///
    /// Returns the committed index, which differs from `target` when loop mode wrapped it,
    /// or `None` when the move was rejected.
    pub fn goto_item_with(&mut self, target: isize, animation: Animation) -> Option<usize> {
        let len = self.slides.len();
        let visible = self.slides_visible();
        let looping = self.mode == WrapMode::Loop;

        let index = if target < 0 {
            if !looping {
                log::debug!("rejected move to {target}: before the first slide");
                return None;
            }
            len.saturating_sub(visible)
        } else {
            let target = target.unsigned_abs();
            let window_at_end = self
                .current
                .checked_add(visible)
                .and_then(|i| self.slides.get(i))
                .is_none();
            if target >= len || (window_at_end && target > self.current) {
                if !looping {
                    log::debug!("rejected move to {target}: past the last page");
                    return None;
                }
                0
            } else {
                target
            }
        };

        self.place(index, animation);
        log::debug!("moved to {index} ({animation:?})");
        self.observers.notify(index);
        Some(index)
    }

    /// Advance by the effective scroll step.
    pub fn next(&mut self) -> Option<usize> {
        let current = self.current as isize;
        self.goto_item(current.saturating_add(self.step()))
    }

    /// Go back by the effective scroll step.
    pub fn prev(&mut self) -> Option<usize> {
        let current = self.current as isize;
        self.goto_item(current.saturating_sub(self.step()))
    }

    /// Move out of a clone region into the equivalent original position, without animation.
    ///
    /// Call when the surface reports that a transition finished. Does nothing outside
    /// infinite mode or when the index is already in the originals.
    pub fn reset_infinite(&mut self) -> Option<usize> {
        if self.mode != WrapMode::Infinite {
            return None;
        }
        let period = self.slides.original_len() as isize;
        let current = self.current as isize;
        let target = if self.current < self.config.slides_to_scroll {
            current + period
        } else if self.current >= self.slides.len() - self.slides.offset() {
            current - period
        } else {
            return None;
        };
        log::debug!("seamless reset from {current} to {target}");
        self.goto_item_with(target, Animation::Instant)
    }

    /// Transition-finished hook for the presentation layer.
    ///
    /// Runs [`reset_infinite`](Self::reset_infinite) and is a no-op for other modes.
    pub fn transition_end(&mut self) {
        let _ = self.reset_infinite();
    }

    /// Enter or leave compact mode.
    ///
    /// On a change, re-applies the layout and notifies observers with the current index.
    pub fn set_compact(&mut self, compact: bool) {
        if compact == self.compact {
            return;
        }
        self.compact = compact;
        log::debug!("compact mode {}", if compact { "on" } else { "off" });
        let layout = self.track_layout();
        self.surface.apply_layout(layout);
        self.observers.notify(self.current);
    }

    /// Render `percent` immediately without changing the index, e.g. while dragging.
    pub fn preview(&mut self, percent: f64) {
        self.surface.translate(percent);
    }

    /// Enable or disable animated transitions on the surface.
    pub fn set_transitions(&mut self, enabled: bool) {
        self.surface.set_transitions(enabled);
    }

    /// Current index into the slide set (clones included).
    pub fn current(&self) -> usize {
        self.current
    }

    /// Total slides including clones.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; a navigator has at least one slide.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Clones on each side of the originals.
    pub fn offset(&self) -> usize {
        self.slides.offset()
    }

    /// The working slide sequence.
    pub fn slides(&self) -> &SlideSet<T> {
        &self.slides
    }

    /// The options this navigator was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The boundary policy.
    pub fn mode(&self) -> WrapMode {
        self.mode
    }

    /// Whether compact mode is active.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Effective window size: `1` in compact mode.
    pub fn slides_visible(&self) -> usize {
        if self.compact {
            1
        } else {
            self.config.slides_visible
        }
    }

    /// Effective scroll step: `1` in compact mode.
    pub fn slides_to_scroll(&self) -> usize {
        if self.compact {
            1
        } else {
            self.config.slides_to_scroll
        }
    }

    /// Track position of the current index, in percent of the track width.
    pub fn base_translate(&self) -> f64 {
        self.percent_for(self.current)
    }

    /// Track and slide widths for the effective window size.
    pub fn track_layout(&self) -> TrackLayout {
        TrackLayout::new(self.slides.len(), self.slides_visible())
    }

    /// Page arithmetic for pagination dots.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            self.slides.original_len(),
            self.config.slides_to_scroll,
            self.slides.offset(),
        )
    }

    /// Arrow visibility for the current index.
    pub fn arrows(&self) -> Arrows {
        Arrows::new(
            self.mode,
            self.current,
            self.slides.len(),
            self.slides_visible(),
        )
    }

    /// The presentation surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The presentation surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // Steps beyond `isize::MAX` clamp; they leave the track either way.
    fn step(&self) -> isize {
        isize::try_from(self.slides_to_scroll()).unwrap_or(isize::MAX)
    }

    fn percent_for(&self, index: usize) -> f64 {
        index as f64 * -100.0 / self.slides.len() as f64
    }

    fn place(&mut self, index: usize, animation: Animation) {
        let percent = self.percent_for(index);
        match animation {
            Animation::Animated => self.surface.translate(percent),
            Animation::Instant => {
                self.surface.set_transitions(false);
                self.surface.translate(percent);
                self.surface.flush();
                self.surface.set_transitions(true);
            }
        }
        self.current = index;
    }
}
