// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel options and the wrap policy derived from them.
//!
//! ## Overview
//!
//! [`Config`] is fixed for the lifetime of a [`Navigator`](crate::navigator::Navigator).
//! Build one with [`Config::default`] and the `with_*` setters, then hand it to the navigator,
//! which calls [`Config::validate`] before creating any state.
//!
//! ```
//! use understory_carousel::config::{Config, WrapMode};
//!
//! let config = Config::default().with_slides_visible(3).with_infinite(true);
//! assert_eq!(config.validate(), Ok(WrapMode::Infinite));
//! assert_eq!(config.clone_offset(), 3);
//!
//! let bad = config.with_loop(true);
//! assert!(bad.validate().is_err());
//! ```
//!
//! With the `serde` feature, options use the camel-case names of the DOM plugin they
//! replace (`slidesToScroll`, `slidesVisible`, `loop`, `infinite`, `pagination`, `navigation`)
//! and missing fields take their defaults.

use crate::error::CarouselError;

/// Boundary policy for a carousel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum WrapMode {
    /// Navigation stops at the first slide and at the last full page.
    Bounded,
    /// Moving past either end jumps to the opposite end.
    Loop,
    /// Seamless wrap: the slide set is padded with clones on both sides and
    /// the index is silently moved back into the originals after each transition.
    Infinite,
}

/// Per-instance carousel options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Config {
    /// Slides moved by one [`next`](crate::navigator::Navigator::next) or
    /// [`prev`](crate::navigator::Navigator::prev).
    pub slides_to_scroll: usize,
    /// Slides shown at once.
    pub slides_visible: usize,
    /// Wrap to the opposite end at the boundaries.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Seamless wrap using cloned padding slides. Mutually exclusive with `looping`.
    pub infinite: bool,
    /// Passed through for the presentation layer (pagination dots requested).
    pub pagination: bool,
    /// Passed through for the presentation layer (prev/next arrows requested).
    pub navigation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1,
            slides_visible: 1,
            looping: false,
            infinite: false,
            pagination: false,
            navigation: true,
        }
    }
}

impl Config {
    /// Set the scroll step.
    #[must_use]
    pub fn with_slides_to_scroll(mut self, n: usize) -> Self {
        self.slides_to_scroll = n;
        self
    }

    /// Set the window size.
    #[must_use]
    pub fn with_slides_visible(mut self, n: usize) -> Self {
        self.slides_visible = n;
        self
    }

    /// Enable or disable looping.
    #[must_use]
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Enable or disable seamless infinite mode.
    #[must_use]
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    /// Request pagination dots from the presentation layer.
    #[must_use]
    pub fn with_pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    /// Request prev/next arrows from the presentation layer.
    #[must_use]
    pub fn with_navigation(mut self, navigation: bool) -> Self {
        self.navigation = navigation;
        self
    }

    /// Check the options and return the wrap policy they select.
    pub fn validate(&self) -> Result<WrapMode, CarouselError> {
        if self.looping && self.infinite {
            return Err(CarouselError::LoopAndInfinite);
        }
        if self.slides_visible == 0 {
            return Err(CarouselError::ZeroSlidesVisible);
        }
        if self.slides_to_scroll == 0 {
            return Err(CarouselError::ZeroSlidesToScroll);
        }
        Ok(if self.infinite {
            WrapMode::Infinite
        } else if self.looping {
            WrapMode::Loop
        } else {
            WrapMode::Bounded
        })
    }

    /// Number of clones placed on each side of the originals in infinite mode.
    ///
    /// This is `slides_visible + slides_to_scroll - 1` when `infinite` is set and `0`
    /// otherwise. It is the requested count; a short item list may receive fewer clones
    /// (see [`SlideSet::build`](crate::slides::SlideSet::build)).
    pub fn clone_offset(&self) -> usize {
        if self.infinite {
            self.slides_visible
                .saturating_add(self.slides_to_scroll)
                .saturating_sub(1)
        } else {
            0
        }
    }
}
