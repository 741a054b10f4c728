// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe gestures feeding a carousel navigator.
//!
//! Replays a scripted pointer stream: a short mouse drag that snaps back, a long one that
//! commits, a vertical touch scroll, and an ignored two-finger touch.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example carousel_swipe`

use kurbo::Point;
use understory_carousel::config::Config;
use understory_carousel::navigator::Navigator;
use understory_carousel::surface::Surface;
use understory_swipe::controller::SwipeController;
use understory_swipe::types::{PointerSample, SwipeOutcome};

struct Track {
    position: f64,
}

impl Surface for Track {
    fn translate(&mut self, percent: f64) {
        self.position = percent;
    }
    fn set_transitions(&mut self, _enabled: bool) {}
    fn track_width(&self) -> f64 {
        2000.0
    }
    fn viewport_width(&self) -> f64 {
        400.0
    }
}

enum Step {
    Down(PointerSample),
    Move(PointerSample),
    Up,
}

fn gesture(points: &[(f64, f64)], touch: bool) -> Vec<Step> {
    let sample = |&(x, y): &(f64, f64)| {
        if touch {
            PointerSample::touch(Point::new(x, y), 1)
        } else {
            PointerSample::mouse(Point::new(x, y))
        }
    };
    let mut steps = vec![Step::Down(sample(&points[0]))];
    steps.extend(points[1..].iter().map(|p| Step::Move(sample(p))));
    steps.push(Step::Up);
    steps
}

fn main() {
    env_logger::init();

    let mut nav = Navigator::new(
        vec!["a", "b", "c", "d", "e"],
        Config::default(),
        Track { position: 0.0 },
    )
    .expect("valid carousel");
    let mut swipe = SwipeController::new();

    let mut script = Vec::new();
    script.extend(gesture(&[(200.0, 100.0), (170.0, 101.0), (150.0, 102.0)], false));
    script.extend(gesture(&[(300.0, 100.0), (250.0, 100.0), (180.0, 98.0)], false));
    script.extend(gesture(&[(200.0, 100.0), (195.0, 160.0), (190.0, 240.0)], true));
    script.push(Step::Down(PointerSample::touch(Point::new(10.0, 10.0), 2)));
    script.push(Step::Up);

    let mut outcomes = Vec::new();
    for step in script {
        match step {
            Step::Down(sample) => {
                let started = swipe.start(&mut nav, sample);
                println!("down {:?} -> dragging={started}", sample.position);
            }
            Step::Move(sample) => {
                let response = swipe.drag(&mut nav, sample);
                println!(
                    "move {:?} -> {response:?}, track at {:.2}%",
                    sample.position,
                    nav.surface().position
                );
            }
            Step::Up => {
                let outcome = swipe.end(&mut nav);
                println!("up -> {outcome:?}, index {}", nav.current());
                outcomes.push(outcome);
            }
        }
    }

    assert_eq!(
        outcomes,
        vec![
            SwipeOutcome::SnapBack,
            SwipeOutcome::Next(1),
            SwipeOutcome::Released,
            SwipeOutcome::Ignored,
        ]
    );
}
