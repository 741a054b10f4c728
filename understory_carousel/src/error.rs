// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

/// Reasons a carousel cannot be built.
///
/// Returned by [`Config::validate`](crate::config::Config::validate) and by
/// [`Navigator::new`](crate::navigator::Navigator::new). When one of these is
/// returned no navigator state exists and no observer has been called.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CarouselError {
    /// `loop` and `infinite` were both requested.
    #[error("a carousel cannot be both looping and infinite")]
    LoopAndInfinite,
    /// `slides_visible` was zero.
    #[error("slides_visible must be at least 1")]
    ZeroSlidesVisible,
    /// `slides_to_scroll` was zero.
    #[error("slides_to_scroll must be at least 1")]
    ZeroSlidesToScroll,
    /// The item list was empty.
    #[error("a carousel needs at least one slide")]
    NoSlides,
}
