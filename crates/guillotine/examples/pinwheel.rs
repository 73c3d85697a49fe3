//! Check a few hand-made arrangements and print their verdicts and cuts.
//!
//! Usage:
//!   cargo run -p guillotine --example pinwheel

use guillotine::api::{pinwheel, PartitionTester, Point, Rect, SplitStrategy};

fn main() {
    let grid = vec![
        Rect::from_corners(0, 0, 1, 1),
        Rect::from_corners(1, 0, 2, 1),
        Rect::from_corners(0, 1, 1, 2),
        Rect::from_corners(1, 1, 2, 2),
    ];
    let wheel = pinwheel(Point::new(0, 0), 1);
    let mut framed = pinwheel(Point::new(0, 0), 1);
    framed.push(Rect::from_corners(3, 0, 4, 3));

    for (name, rects) in [("grid", &grid), ("pinwheel", &wheel), ("framed pinwheel", &framed)] {
        for strategy in SplitStrategy::ALL {
            let tester = PartitionTester::with_strategy(strategy);
            match tester.run(rects) {
                Ok(out) => {
                    println!("{name} [{strategy:?}]: {}", out.verdict);
                    for cut in &out.cuts {
                        println!("  {cut}");
                    }
                }
                Err(overlap) => eprintln!("{name}: {overlap}"),
            }
        }
    }
}
