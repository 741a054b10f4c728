// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seamless carousel: walking into the clone padding and resetting after each transition.
//!
//! Also flips compact mode from simulated viewport widths.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example carousel_infinite`

use understory_carousel::breakpoint::Breakpoint;
use understory_carousel::config::Config;
use understory_carousel::navigator::Navigator;
use understory_carousel::surface::Headless;

fn main() {
    env_logger::init();

    let config = Config::default()
        .with_slides_visible(3)
        .with_infinite(true)
        .with_pagination(true);
    let mut nav = Navigator::new((0..10).collect::<Vec<u32>>(), config, Headless)
        .expect("valid carousel");
    println!(
        "== {} slides ({} clones per side), parked on {} ==",
        nav.len(),
        nav.offset(),
        nav.current()
    );

    for _ in 0..12 {
        nav.next();
        let before = nav.current();
        // The toolkit calls this when its transition finishes.
        nav.transition_end();
        let window: Vec<u32> = (0..nav.slides_visible())
            .filter_map(|i| nav.slides().get(nav.current() + i).copied())
            .collect();
        println!(
            "  next -> {before:>2} -> {:>2}  showing {window:?}",
            nav.current()
        );
    }

    println!("== viewport resizes ==");
    let mut breakpoint = Breakpoint::default();
    for width in [1280.0, 800.0, 640.0, 1024.0] {
        if let Some(compact) = breakpoint.update(width) {
            nav.set_compact(compact);
        }
        println!(
            "  width {width:>6}: compact={} visible={} step={}",
            nav.is_compact(),
            nav.slides_visible(),
            nav.slides_to_scroll()
        );
    }
}
