//! Range bounding-box queries over a fixed rectangle order.
//!
//! Model
//! - `BoundAggregate` is a complete binary tree stored in one array: root at 1,
//!   children of node `k` at `2k` and `2k + 1`, leaves at `width..width + len`.
//! - Padding leaves hold `Bounds::EMPTY`, so every internal node is the exact
//!   bounding box of the real leaves below it.
//! - The structure is immutable. A different order needs a fresh `build`.

use crate::geom::{Bounds, Rect};

/// Bounding boxes of every dyadic index range of one rectangle order.
#[derive(Clone, Debug)]
pub struct BoundAggregate {
    len: usize,
    width: usize,
    nodes: Vec<Bounds>,
}

impl BoundAggregate {
    /// Bottom-up build in O(N).
    pub fn build(rects: &[Rect]) -> Self {
        let len = rects.len();
        let width = len.next_power_of_two();
        let mut nodes = vec![Bounds::EMPTY; 2 * width];
        for (slot, r) in nodes[width..].iter_mut().zip(rects) {
            *slot = Bounds::of(*r);
        }
        for k in (1..width).rev() {
            nodes[k] = nodes[2 * k].merge(nodes[2 * k + 1]);
        }
        Self { len, width, nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bounding box of the whole order.
    #[inline]
    pub fn total(&self) -> Bounds {
        self.nodes[1]
    }

    /// Bounding box of indices `l..=r`.
    ///
    /// Returns `Bounds::EMPTY` when `l > r` or `l` is past the end; `r` is
    /// clamped to the last index.
    pub fn query(&self, l: usize, r: usize) -> Bounds {
        if l > r || l >= self.len {
            return Bounds::EMPTY;
        }
        let r = r.min(self.len - 1);
        self.query_node(1, 0, self.width - 1, l, r)
    }

    fn query_node(&self, k: usize, lo: usize, hi: usize, l: usize, r: usize) -> Bounds {
        if r < lo || hi < l {
            return Bounds::EMPTY;
        }
        if l <= lo && hi <= r {
            return self.nodes[k];
        }
        let mid = lo + (hi - lo) / 2;
        self.query_node(2 * k, lo, mid, l, r)
            .merge(self.query_node(2 * k + 1, mid + 1, hi, l, r))
    }
}
