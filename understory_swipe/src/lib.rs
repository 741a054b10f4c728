// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: a headless, `no_std` swipe controller for paged UIs.
//!
//! ## Overview
//!
//! [`SwipeController`](crate::controller::SwipeController) turns pointer down/move/up/cancel samples into
//! live previews and committed page moves on a [`SwipeTarget`](crate::types::SwipeTarget).
//! It does not listen to devices; the toolkit forwards samples as [`PointerSample`](crate::types::PointerSample)
//! values and acts on the returned [`DragResponse`](crate::types::DragResponse) (for example, preventing
//! page scroll for horizontal touch drags).
//!
//! ## Commit rule
//!
//! On release, the last tracked horizontal displacement is compared with the viewport width.
//! Strictly more than [`SwipeConfig::threshold`](crate::types::SwipeConfig::threshold) (20% by default) moves one
//! step against the drag direction: dragging left goes to the next slide, dragging right to the previous one.
//! Anything else, including a move rejected at a boundary, settles back on the current slide.
//! Cancel follows the same rule as release.
//!
//! ## Carousel integration
//!
//! With the `carousel_adapter` feature (on by default), `understory_carousel::navigator::Navigator`
//! implements [`SwipeTarget`](crate::types::SwipeTarget):
//!
//! ```
//! # #[cfg(feature = "carousel_adapter")]
//! # {
//! use kurbo::Point;
//! use understory_carousel::config::Config;
//! use understory_carousel::navigator::Navigator;
//! use understory_carousel::surface::Surface;
//! use understory_swipe::controller::SwipeController;
//! use understory_swipe::types::{PointerSample, SwipeOutcome};
//!
//! struct Track;
//! impl Surface for Track {
//!     fn translate(&mut self, _percent: f64) {}
//!     fn set_transitions(&mut self, _enabled: bool) {}
//!     fn track_width(&self) -> f64 { 1200.0 }
//!     fn viewport_width(&self) -> f64 { 400.0 }
//! }
//!
//! let config = Config::default().with_slides_visible(1);
//! let mut nav = Navigator::new(vec!["a", "b", "c"], config, Track).unwrap();
//! let mut swipe = SwipeController::new();
//!
//! swipe.start(&mut nav, PointerSample::mouse(Point::new(300.0, 10.0)));
//! swipe.drag(&mut nav, PointerSample::mouse(Point::new(150.0, 12.0)));
//! assert_eq!(swipe.end(&mut nav), SwipeOutcome::Next(1));
//! # }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod adapters;
pub mod controller;
pub mod types;
