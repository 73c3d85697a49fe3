//! Optional non-overlap check for input rectangle sets.
//!
//! The partition test assumes pairwise disjoint interiors and does not check
//! it. This pass is a debugging aid: a sweep over x that only compares
//! rectangles whose x-ranges intersect. Worst case is quadratic (many tall,
//! thin, x-overlapping rectangles), typical inputs are close to `n log n`.

use crate::geom::{Axis, Rect};
use std::fmt;

/// Two input rectangles whose interiors intersect. Indices refer to the input
/// order, `first < second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    pub first: usize,
    pub second: usize,
    pub a: Rect,
    pub b: Rect,
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rectangles #{} {} and #{} {} overlap",
            self.first, self.a, self.second, self.b
        )
    }
}

impl std::error::Error for Overlap {}

/// First overlapping pair in sweep order, if any.
pub fn find_overlap(rects: &[Rect]) -> Option<Overlap> {
    let mut order: Vec<usize> = (0..rects.len()).collect();
    order.sort_by_key(|&i| rects[i].sort_key(Axis::X));
    for (k, &i) in order.iter().enumerate() {
        let a = rects[i];
        for &j in &order[k + 1..] {
            let b = rects[j];
            if b.lo(Axis::X) >= a.hi(Axis::X) {
                break;
            }
            if a.overlaps(&b) {
                let (first, second) = (i.min(j), i.max(j));
                return Some(Overlap {
                    first,
                    second,
                    a: rects[first],
                    b: rects[second],
                });
            }
        }
    }
    None
}

/// `Ok(())` when no two interiors intersect.
pub fn check_disjoint(rects: &[Rect]) -> Result<(), Overlap> {
    match find_overlap(rects) {
        Some(o) => Err(o),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn brute_force_has_overlap(rects: &[Rect]) -> bool {
        (0..rects.len()).any(|i| (i + 1..rects.len()).any(|j| rects[i].overlaps(&rects[j])))
    }

    #[test]
    fn tiling_is_disjoint() {
        let mut rects = Vec::new();
        for x in 0..4 {
            for y in 0..4 {
                rects.push(Rect::from_corners(x, y, x + 1, y + 1));
            }
        }
        assert_eq!(check_disjoint(&rects), Ok(()));
    }

    #[test]
    fn reports_pair_in_input_order() {
        let rects = [
            Rect::from_corners(5, 5, 6, 6),
            Rect::from_corners(1, 1, 3, 3),
            Rect::from_corners(0, 0, 2, 2),
        ];
        let o = find_overlap(&rects).expect("overlap");
        assert_eq!((o.first, o.second), (1, 2));
        assert_eq!(o.a, rects[1]);
        assert!(o.to_string().contains("#1"));
    }

    #[test]
    fn sweep_does_not_stop_early_on_wide_rect() {
        // The wide rect starts first; the overlapping pair is further right.
        let rects = [
            Rect::from_corners(0, 10, 100, 11),
            Rect::from_corners(1, 0, 2, 1),
            Rect::from_corners(50, 0, 60, 5),
            Rect::from_corners(55, 2, 58, 12),
        ];
        assert!(find_overlap(&rects).is_some());
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..300 {
            let n = rng.gen_range(0..10);
            let rects: Vec<Rect> = (0..n)
                .map(|_| {
                    let x = rng.gen_range(0..40);
                    let y = rng.gen_range(0..40);
                    Rect::from_corners(x, y, x + rng.gen_range(0..8), y + rng.gen_range(0..8))
                })
                .collect();
            assert_eq!(find_overlap(&rects).is_some(), brute_force_has_overlap(&rects));
        }
    }
}
