//! Guillotine split search on one sorted projection.
//!
//! A valid split at index `i` (`0 <= i < n - 1`) of rectangles sorted by lower
//! bound on `axis` means `rects[i + 1].lo(axis) >= max(rects[..=i].hi(axis))`:
//! a full-length line perpendicular to `axis` separates `rects[..=i]` from
//! `rects[i + 1..]` without crossing any rectangle.
//!
//! Both strategies report a split on exactly the same inputs; they only differ
//! in which valid index they return.

use crate::aggregate::BoundAggregate;
use crate::geom::{Axis, Rect};

/// How `find_split` picks among valid split indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitStrategy {
    /// Linear scan with a running prefix maximum; returns the smallest valid index.
    LeftmostScan,
    /// Probe outward from the middle index using `BoundAggregate` range queries;
    /// returns the valid index closest to the middle (left probe first).
    #[default]
    MiddleOut,
}

impl SplitStrategy {
    pub const ALL: [SplitStrategy; 2] = [SplitStrategy::LeftmostScan, SplitStrategy::MiddleOut];
}

/// Find a valid split of `rects`, which must be sorted ascending by `lo(axis)`.
///
/// Returns `None` when fewer than two rectangles are given or no line
/// perpendicular to `axis` separates them.
pub fn find_split(rects: &[Rect], axis: Axis, strategy: SplitStrategy) -> Option<usize> {
    if rects.len() < 2 {
        return None;
    }
    debug_assert!(
        rects.windows(2).all(|w| w[0].lo(axis) <= w[1].lo(axis)),
        "find_split expects rects sorted by lower bound on {axis}"
    );
    match strategy {
        SplitStrategy::LeftmostScan => leftmost_scan(rects, axis),
        SplitStrategy::MiddleOut => middle_out(rects, axis),
    }
}

fn leftmost_scan(rects: &[Rect], axis: Axis) -> Option<usize> {
    let mut rightmost = i64::MIN;
    for (i, pair) in rects.windows(2).enumerate() {
        rightmost = rightmost.max(pair[0].hi(axis));
        if pair[1].lo(axis) >= rightmost {
            return Some(i);
        }
    }
    None
}

fn middle_out(rects: &[Rect], axis: Axis) -> Option<usize> {
    let agg = BoundAggregate::build(rects);
    let last = rects.len() - 2;
    let mid = last / 2;
    for k in 0..=mid.max(last - mid) {
        if let Some(i) = mid.checked_sub(k) {
            if is_valid_split(&agg, axis, i) {
                return Some(i);
            }
        }
        let j = mid + 1 + k;
        if j <= last && is_valid_split(&agg, axis, j) {
            return Some(j);
        }
    }
    None
}

/// Split validity from range queries: the suffix starts no earlier than the
/// prefix ends.
#[inline]
fn is_valid_split(agg: &BoundAggregate, axis: Axis, i: usize) -> bool {
    let left = agg.query(0, i).hi(axis);
    let right = agg.query(i + 1, agg.len() - 1).lo(axis);
    matches!((left, right), (Some(l), Some(r)) if r >= l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn row(n: i64) -> Vec<Rect> {
        (0..n).map(|i| Rect::from_corners(i, 0, i + 1, 1)).collect()
    }

    fn sorted(mut rects: Vec<Rect>, axis: Axis) -> Vec<Rect> {
        rects.sort_by_key(|r| r.sort_key(axis));
        rects
    }

    #[test]
    fn fewer_than_two_never_split() {
        for s in SplitStrategy::ALL {
            assert_eq!(find_split(&[], Axis::X, s), None);
            assert_eq!(find_split(&row(1), Axis::X, s), None);
        }
    }

    #[test]
    fn row_splits_on_x_only() {
        let rects = row(7);
        assert_eq!(find_split(&rects, Axis::X, SplitStrategy::LeftmostScan), Some(0));
        assert_eq!(find_split(&rects, Axis::X, SplitStrategy::MiddleOut), Some(2));
        let by_y = sorted(rects, Axis::Y);
        for s in SplitStrategy::ALL {
            assert_eq!(find_split(&by_y, Axis::Y, s), None);
        }
    }

    #[test]
    fn middle_out_probes_left_then_right() {
        // Valid splits only at indices 0 and 4 (n = 6, middle = 2).
        let rects = vec![
            Rect::from_corners(0, 0, 1, 1),
            Rect::from_corners(1, 0, 3, 1),
            Rect::from_corners(2, 1, 4, 2),
            Rect::from_corners(3, 0, 5, 1),
            Rect::from_corners(4, 1, 6, 2),
            Rect::from_corners(6, 0, 7, 1),
        ];
        assert_eq!(find_split(&rects, Axis::X, SplitStrategy::LeftmostScan), Some(0));
        // Probe order is 2, 3, 1, 4, 0.
        assert_eq!(find_split(&rects, Axis::X, SplitStrategy::MiddleOut), Some(4));
    }

    #[test]
    fn touching_edges_allow_a_cut() {
        let rects = vec![Rect::from_corners(0, 0, 2, 1), Rect::from_corners(2, 0, 3, 1)];
        for s in SplitStrategy::ALL {
            assert_eq!(find_split(&rects, Axis::X, s), Some(0));
        }
    }

    #[test]
    fn long_rect_blocks_every_cut() {
        let rects = vec![
            Rect::from_corners(0, 0, 10, 1),
            Rect::from_corners(1, 1, 2, 2),
            Rect::from_corners(3, 1, 4, 2),
        ];
        for s in SplitStrategy::ALL {
            assert_eq!(find_split(&rects, Axis::X, s), None);
        }
    }

    #[test]
    fn strategies_agree_on_existence() {
        let mut rng = StdRng::seed_from_u64(2024);
        for round in 0..500 {
            let n = rng.gen_range(2..12);
            let rects: Vec<Rect> = (0..n)
                .map(|_| {
                    let x = rng.gen_range(0..30);
                    let y = rng.gen_range(0..30);
                    Rect::from_corners(x, y, x + rng.gen_range(0..6), y + rng.gen_range(0..6))
                })
                .collect();
            for axis in Axis::BOTH {
                let rects = sorted(rects.clone(), axis);
                let a = find_split(&rects, axis, SplitStrategy::LeftmostScan);
                let b = find_split(&rects, axis, SplitStrategy::MiddleOut);
                assert_eq!(a.is_some(), b.is_some(), "round {round} axis {axis}");
                if let (Some(a), Some(b)) = (a, b) {
                    assert!(a <= b, "leftmost scan must return the smallest index");
                }
            }
        }
    }
}
