// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless, deterministic carousel navigation.
//!
//! ## Overview
//!
//! This crate keeps the index of a slide carousel and decides where the slide track should be.
//! It does not render, lay out, or listen to input devices.
//! A toolkit implements [`Surface`](crate::surface::Surface) to move the track, forwards
//! "transition finished" and breakpoint changes, and registers move observers to update arrows
//! and pagination dots.
//!
//! ## Wrap policies
//!
//! Chosen by [`Config`](crate::config::Config) and reported as [`WrapMode`](crate::config::WrapMode):
//!
//! - `Bounded`: moves before the first slide or past the last full page are rejected.
//! - `Loop`: those moves wrap to the opposite end.
//! - `Infinite`: the slide set is padded with clones on both sides
//!   ([`SlideSet`](crate::slides::SlideSet)), and
//!   [`Navigator::reset_infinite`](crate::navigator::Navigator::reset_infinite) silently moves the
//!   index out of a clone region after each transition so scrolling appears endless.
//!
//! `loop` and `infinite` together are rejected with
//! [`CarouselError::LoopAndInfinite`](crate::error::CarouselError::LoopAndInfinite) before any state is created.
//!
//! ## Positions
//!
//! Positions are percentages of the track width: index `i` of `len` slides sits at
//! `i * -100 / len`. Instant moves suspend transitions, translate, flush, and restore
//! transitions so a clone-to-original swap is invisible.
//!
//! ## Observers
//!
//! Move observers run synchronously in registration order on every committed move, once at
//! construction, and once per compact-mode flip. See [`observers`] for re-entrancy and panics.
//!
//! ## Gestures
//!
//! Drag and swipe handling lives in `understory_swipe`, which drives a
//! [`Navigator`](crate::navigator::Navigator) through the same operations as direct calls.
//!
//! ## Minimal usage
//!
//! ```
//! use understory_carousel::config::Config;
//! use understory_carousel::navigator::Navigator;
//! use understory_carousel::surface::Headless;
//!
//! let config = Config::default().with_slides_visible(3).with_infinite(true);
//! let mut nav = Navigator::new((0..10).collect(), config, Headless).unwrap();
//! assert_eq!(nav.current(), 3); // parked on the first original slide
//!
//! for _ in 0..10 {
//!     nav.next();
//! }
//! assert_eq!(nav.current(), 13); // the window shows clones of slides 0..3
//! nav.transition_end();
//! assert_eq!(nav.current(), 3); // same content, original slides
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod breakpoint;
pub mod config;
pub mod error;
pub mod navigator;
pub mod observers;
pub mod pagination;
pub mod slides;
pub mod surface;
