// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Looping carousel driven by direct next/prev calls.
//!
//! Options are parsed from JSON, a move observer prints the active pagination dot and
//! arrow visibility, and a printing surface shows the track positions.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example carousel_basics`

use std::cell::RefCell;
use std::rc::Rc;

use understory_carousel::config::Config;
use understory_carousel::navigator::NavigatorBuilder;
use understory_carousel::surface::{Surface, TrackLayout};

struct PrintSurface;

impl Surface for PrintSurface {
    fn translate(&mut self, percent: f64) {
        println!("  track -> translate3d({percent:.2}%, 0, 0)");
    }
    fn set_transitions(&mut self, enabled: bool) {
        println!("  track -> transitions {}", if enabled { "on" } else { "off" });
    }
    fn apply_layout(&mut self, layout: TrackLayout) {
        println!(
            "  track -> width {:.1}%, slide width {:.2}%",
            layout.track_percent, layout.slide_percent
        );
    }
    fn track_width(&self) -> f64 {
        1800.0
    }
    fn viewport_width(&self) -> f64 {
        1200.0
    }
}

fn main() {
    env_logger::init();

    let config: Config = serde_json::from_str(
        r#"{ "slidesToScroll": 1, "slidesVisible": 4, "pagination": true, "loop": true }"#,
    )
    .expect("valid options");
    let slides: Vec<String> = (1..=6).map(|i| format!("slide {i}")).collect();

    // Dots and arrows are derived on every move from the index alone.
    let moves = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&moves);
    let mut nav = NavigatorBuilder::new(config)
        .on_move(move |i| log.borrow_mut().push(i))
        .build(slides, PrintSurface)
        .expect("valid carousel");

    println!("== next x3, then prev ==");
    nav.next();
    nav.next();
    nav.next();
    nav.prev();

    let pages = nav.pagination();
    for &index in moves.borrow().iter() {
        println!(
            "  moved to {index}: dot {}/{} active",
            pages.page_of(index) + 1,
            pages.page_count()
        );
    }
    println!("  arrows: {:?}", nav.arrows());

    assert_eq!(*moves.borrow(), vec![0, 1, 2, 0, 2]);
}
