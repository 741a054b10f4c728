// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The working slide sequence, including clone padding for infinite mode.
//!
//! ## Layout
//!
//! For bounded and looping carousels the sequence is the input list unchanged.
//! For infinite carousels it is
//!
//! ```text
//! [clones of the last `offset` items] ++ [items] ++ [clones of the first `offset` items]
//! ```
//!
//! so that the window can slide past either end and still show real content.
//! The navigator then teleports the index from a clone region back into the originals
//! (see [`Navigator::reset_infinite`](crate::navigator::Navigator::reset_infinite)).
//!
//! ```
//! use understory_carousel::config::Config;
//! use understory_carousel::slides::SlideSet;
//!
//! let config = Config::default().with_slides_visible(2).with_infinite(true);
//! let set = SlideSet::build(vec!['a', 'b', 'c', 'd'], &config).unwrap();
//! assert_eq!(set.offset(), 2);
//! assert_eq!(set.as_slice(), &['c', 'd', 'a', 'b', 'c', 'd', 'a', 'b']);
//! assert_eq!(set.original_index(0), 2);
//! ```

use alloc::vec::Vec;

use crate::config::Config;
use crate::error::CarouselError;

/// Ordered slide handles plus clone bookkeeping.
///
/// `T` is opaque to the carousel: it is only cloned and counted, never inspected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideSet<T> {
    slides: Vec<T>,
    offset: usize,
    originals: usize,
}

impl<T: Clone> SlideSet<T> {
    /// Build the working sequence for `config`.
    ///
    /// Returns [`CarouselError::NoSlides`] for an empty `items`. When infinite mode asks for
    /// more clones than there are items, every item is cloned once per side and a warning is
    /// logged; [`offset`](Self::offset) then reports the clones actually placed.
    pub fn build(items: Vec<T>, config: &Config) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        let originals = items.len();
        let requested = config.clone_offset();
        if requested == 0 {
            return Ok(Self {
                slides: items,
                offset: 0,
                originals,
            });
        }

        if requested > originals {
            log::warn!(
                "not enough slides for a seamless carousel: need {requested}, have {originals}"
            );
        }
        let offset = requested.min(originals);

        let mut slides = Vec::with_capacity(originals + 2 * offset);
        slides.extend_from_slice(&items[originals - offset..]);
        slides.extend(items.iter().cloned());
        slides.extend_from_slice(&items[..offset]);
        Ok(Self {
            slides,
            offset,
            originals,
        })
    }
}

impl<T> SlideSet<T> {
    /// Total slides including clones.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; empty sets are rejected by [`build`](Self::build).
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Clones on each side of the originals (`0` outside infinite mode).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of original (non-clone) slides.
    pub fn original_len(&self) -> usize {
        self.originals
    }

    /// Slide at `index`, clone or original.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slides.get(index)
    }

    /// All slides in track order.
    pub fn as_slice(&self) -> &[T] {
        &self.slides
    }

    /// Iterate slides in track order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.slides.iter()
    }

    /// Whether `index` falls in a clone region.
    pub fn is_clone(&self, index: usize) -> bool {
        index < self.offset || (index >= self.offset + self.originals && index < self.len())
    }

    /// Position in the original item list that the slide at `index` shows.
    ///
    /// Out-of-range indices wrap like clones do.
    pub fn original_index(&self, index: usize) -> usize {
        // `offset <= originals`, so the sum never underflows.
        (index + self.originals - self.offset) % self.originals
    }
}

impl<'a, T> IntoIterator for &'a SlideSet<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
