// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe controller: Idle → Dragging → Idle.
//!
//! ## Transitions
//!
//! - [`start`](SwipeController::start): ignored for multi-contact samples. Otherwise records
//!   the origin, captures the track width, and suspends transitions so the track follows the
//!   pointer directly.
//! - [`drag`](SwipeController::drag): measures the displacement from the origin and previews
//!   `base + 100 * dx / track_width`. For touch input the first sample where vertical motion
//!   dominates is left to scroll the page and is not tracked.
//! - [`end`](SwipeController::end) / [`cancel`](SwipeController::cancel): restores transitions
//!   and compares the last tracked horizontal displacement against the commit threshold.
//!
//! Move and end events while idle are ignored, so a controller can be fed a window-wide
//! pointer stream shared with other controllers.

use kurbo::{Point, Vec2};

use crate::types::{DragResponse, PointerSample, SwipeConfig, SwipeOutcome, SwipeTarget};

#[derive(Copy, Clone, Debug)]
struct Drag {
    origin: Point,
    track_width: f64,
    last_translate: Option<Vec2>,
}

/// Turns pointer samples into previews and slide changes on a [`SwipeTarget`].
///
/// The controller owns only the drag state; the target is passed to each call.
#[derive(Clone, Debug, Default)]
pub struct SwipeController {
    config: SwipeConfig,
    drag: Option<Drag>,
}

impl SwipeController {
    /// Create an idle controller with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle controller with `config`.
    pub fn with_config(config: SwipeConfig) -> Self {
        Self { config, drag: None }
    }

    /// The options in use.
    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    /// True between an accepted start and the next end or cancel.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Where the active drag started.
    pub fn origin(&self) -> Option<Point> {
        self.drag.map(|d| d.origin)
    }

    /// Last tracked displacement of the active drag.
    pub fn last_translate(&self) -> Option<Vec2> {
        self.drag.and_then(|d| d.last_translate)
    }

    /// Pointer down. Returns whether a drag started.
    pub fn start(&mut self, target: &mut impl SwipeTarget, sample: PointerSample) -> bool {
        if sample.source.contacts() > 1 {
            log::trace!("swipe start ignored: {} contacts", sample.source.contacts());
            return false;
        }
        self.drag = Some(Drag {
            origin: sample.position,
            track_width: target.track_width(),
            last_translate: None,
        });
        target.set_transitions(false);
        log::trace!("swipe started at {:?}", sample.position);
        true
    }

    /// Pointer move.
    pub fn drag(&mut self, target: &mut impl SwipeTarget, sample: PointerSample) -> DragResponse {
        let Some(drag) = self.drag.as_mut() else {
            return DragResponse::Ignored;
        };
        let translate = sample.position - drag.origin;

        let consume = sample.source.scrolls_page();
        if consume && translate.x.abs() <= translate.y.abs() {
            return DragResponse::Scroll;
        }

        drag.last_translate = Some(translate);
        if drag.track_width > 0.0 {
            let percent = target.base_translate() + 100.0 * translate.x / drag.track_width;
            target.preview(percent);
        }
        DragResponse::Tracking { consume }
    }

    /// Pointer up.
    pub fn end(&mut self, target: &mut impl SwipeTarget) -> SwipeOutcome {
        let Some(drag) = self.drag.take() else {
            return SwipeOutcome::Ignored;
        };
        target.set_transitions(true);
        let Some(translate) = drag.last_translate else {
            log::trace!("swipe released without movement");
            return SwipeOutcome::Released;
        };

        let width = target.viewport_width();
        let outcome = if width > 0.0 && (translate.x / width).abs() > self.config.threshold {
            let committed = if translate.x < 0.0 {
                target.next().map(SwipeOutcome::Next)
            } else {
                target.prev().map(SwipeOutcome::Prev)
            };
            committed.unwrap_or_else(|| {
                target.settle();
                SwipeOutcome::SnapBack
            })
        } else {
            target.settle();
            SwipeOutcome::SnapBack
        };
        log::trace!("swipe ended: dx={} -> {outcome:?}", translate.x);
        outcome
    }

    /// Pointer cancel. Evaluates the last tracked displacement exactly like [`end`](Self::end).
    pub fn cancel(&mut self, target: &mut impl SwipeTarget) -> SwipeOutcome {
        self.end(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Preview(f64),
        Transitions(bool),
        Next,
        Prev,
        Settle,
    }

    struct Target {
        index: usize,
        last: usize,
        track: f64,
        viewport: f64,
        calls: Vec<Call>,
    }

    impl Target {
        fn new(track: f64, viewport: f64) -> Self {
            Self {
                index: 1,
                last: 4,
                track,
                viewport,
                calls: Vec::new(),
            }
        }
    }

    impl SwipeTarget for Target {
        fn base_translate(&self) -> f64 {
            self.index as f64 * -20.0
        }
        fn track_width(&self) -> f64 {
            self.track
        }
        fn viewport_width(&self) -> f64 {
            self.viewport
        }
        fn preview(&mut self, percent: f64) {
            self.calls.push(Call::Preview(percent));
        }
        fn set_transitions(&mut self, enabled: bool) {
            self.calls.push(Call::Transitions(enabled));
        }
        fn next(&mut self) -> Option<usize> {
            self.calls.push(Call::Next);
            (self.index < self.last).then(|| {
                self.index += 1;
                self.index
            })
        }
        fn prev(&mut self) -> Option<usize> {
            self.calls.push(Call::Prev);
            (self.index > 0).then(|| {
                self.index -= 1;
                self.index
            })
        }
        fn settle(&mut self) {
            self.calls.push(Call::Settle);
        }
    }

    fn mouse(x: f64, y: f64) -> PointerSample {
        PointerSample::mouse(Point::new(x, y))
    }

    fn touch(x: f64, y: f64) -> PointerSample {
        PointerSample::touch(Point::new(x, y), 1)
    }

    #[test]
    fn drag_previews_relative_to_track_width() {
        let mut target = Target::new(500.0, 100.0);
        let mut swipe = SwipeController::new();
        assert!(swipe.start(&mut target, mouse(300.0, 50.0)));
        assert_eq!(
            swipe.drag(&mut target, mouse(250.0, 80.0)),
            DragResponse::Tracking { consume: false }
        );
        assert_eq!(swipe.last_translate(), Some(Vec2::new(-50.0, 30.0)));
        assert_eq!(
            target.calls,
            vec![Call::Transitions(false), Call::Preview(-30.0)]
        );
    }

    #[test]
    fn release_past_threshold_moves_against_the_drag() {
        let mut target = Target::new(500.0, 100.0);
        let mut swipe = SwipeController::new();
        swipe.start(&mut target, mouse(100.0, 0.0));
        swipe.drag(&mut target, mouse(70.0, 0.0));
        assert_eq!(swipe.end(&mut target), SwipeOutcome::Next(2));
        assert!(!swipe.is_dragging());
        assert_eq!(
            &target.calls[2..],
            &[Call::Transitions(true), Call::Next]
        );

        swipe.start(&mut target, mouse(100.0, 0.0));
        swipe.drag(&mut target, mouse(130.0, 0.0));
        assert_eq!(swipe.end(&mut target), SwipeOutcome::Prev(1));
    }

    #[test]
    fn threshold_is_strict() {
        let mut target = Target::new(1000.0, 1000.0);
        let mut swipe = SwipeController::new();
        swipe.start(&mut target, mouse(500.0, 0.0));
        swipe.drag(&mut target, mouse(300.0, 0.0));
        assert_eq!(swipe.end(&mut target), SwipeOutcome::SnapBack);
        assert_eq!(target.calls.last(), Some(&Call::Settle));

        swipe.start(&mut target, mouse(500.0, 0.0));
        swipe.drag(&mut target, mouse(299.99, 0.0));
        assert_eq!(swipe.end(&mut target), SwipeOutcome::Next(2));
    }

    #[test]
    fn rejected_commit_snaps_back() {
        let mut target = Target::new(500.0, 100.0);
        target.index = 0;
        let mut swipe = SwipeController::new();
        swipe.start(&mut target, mouse(0.0, 0.0));
        swipe.drag(&mut target, mouse(90.0, 0.0));
        assert_eq!(swipe.end(&mut target), SwipeOutcome::SnapBack);
        assert_eq!(&target.calls[3..], &[Call::Prev, Call::Settle]);
    }

    #[test]
    fn multi_touch_never_starts() {
        let mut target = Target::new(500.0, 100.0);
        let mut swipe = SwipeController::new();
        assert!(!swipe.start(&mut target, PointerSample::touch(Point::ZERO, 2)));
        assert!(!swipe.is_dragging());
        assert_eq!(swipe.drag(&mut target, touch(-80.0, 0.0)), DragResponse::Ignored);
        assert_eq!(swipe.end(&mut target), SwipeOutcome::Ignored);
        assert!(target.calls.is_empty());
    }

    #[test]
    fn vertical_touch_motion_scrolls_instead_of_tracking() {
        let mut target = Target::new(500.0, 100.0);
        let mut swipe = SwipeController::new();
        swipe.start(&mut target, touch(0.0, 0.0));
        assert_eq!(swipe.drag(&mut target, touch(-10.0, 40.0)), DragResponse::Scroll);
        assert!(swipe.is_dragging());
        assert_eq!(swipe.last_translate(), None);
        assert_eq!(
            swipe.drag(&mut target, touch(-60.0, 40.0)),
            DragResponse::Tracking { consume: true }
        );
        assert_eq!(swipe.cancel(&mut target), SwipeOutcome::Next(2));
    }

    #[test]
    fn release_without_movement_only_restores_transitions() {
        let mut target = Target::new(500.0, 100.0);
        let mut swipe = SwipeController::new();
        swipe.start(&mut target, mouse(10.0, 10.0));
        assert_eq!(swipe.end(&mut target), SwipeOutcome::Released);
        assert_eq!(
            target.calls,
            vec![Call::Transitions(false), Call::Transitions(true)]
        );
        assert_eq!(swipe.origin(), None);
    }

    #[test]
    fn zero_widths_never_preview_or_commit() {
        let mut target = Target::new(0.0, 0.0);
        let mut swipe = SwipeController::new();
        swipe.start(&mut target, mouse(0.0, 0.0));
        swipe.drag(&mut target, mouse(-400.0, 0.0));
        assert_eq!(swipe.end(&mut target), SwipeOutcome::SnapBack);
        assert!(!target.calls.iter().any(|c| matches!(c, Call::Preview(_))));
    }

    #[test]
    fn idle_controllers_ignore_a_shared_stream() {
        let mut a_target = Target::new(500.0, 100.0);
        let mut b_target = Target::new(500.0, 100.0);
        let mut a = SwipeController::new();
        let mut b = SwipeController::new();

        a.start(&mut a_target, mouse(100.0, 0.0));
        for x in [80.0, 60.0] {
            a.drag(&mut a_target, mouse(x, 0.0));
            assert_eq!(b.drag(&mut b_target, mouse(x, 0.0)), DragResponse::Ignored);
        }
        assert_eq!(a.end(&mut a_target), SwipeOutcome::Next(2));
        assert_eq!(b.end(&mut b_target), SwipeOutcome::Ignored);
        assert!(b_target.calls.is_empty());
    }

    #[test]
    fn custom_threshold() {
        let mut target = Target::new(500.0, 100.0);
        let mut swipe = SwipeController::with_config(SwipeConfig { threshold: 0.5 });
        swipe.start(&mut target, mouse(100.0, 0.0));
        swipe.drag(&mut target, mouse(60.0, 0.0));
        assert_eq!(swipe.end(&mut target), SwipeOutcome::SnapBack);
        assert_eq!(swipe.config().threshold, 0.5);
    }
}
