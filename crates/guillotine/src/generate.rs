//! Seeded instance generators.
//!
//! Purpose
//! - Produce reproducible rectangle sets for tests, benchmarks and the `gen`
//!   command of the CLI. The same params and seed always give the same list.
//!
//! Families
//! - `staircase`: a shuffled diagonal chain of rectangles, each starting at the
//!   previous one's top-right corner. Always partitionable.
//! - `nested_strips`: interleaved vertical and horizontal strips, each peeled off
//!   by one cut. Deterministic; gives maximally unbalanced cut sequences.
//! - `grid`: a full tiling by equal cells. Always partitionable.
//! - `scattered`: random rectangles inside a grid of square tiles, rejecting
//!   collisions with bounded retries (or accepting them, for overlap tests).
//! - `pinwheel`: the smallest arrangement that has no guillotine cut.

use crate::geom::{Point, Rect};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type shared by all generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Parameters for `staircase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaircaseParams {
    pub count: usize,
    /// Each corner advances by `1..=max_step + 1` on both axes.
    pub max_step: i64,
}

impl Default for StaircaseParams {
    fn default() -> Self {
        Self {
            count: 1000,
            max_step: 10,
        }
    }
}

impl StaircaseParams {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.max_step < 0 {
            return Err(GeneratorError::invalid("max_step must be >= 0"));
        }
        Ok(())
    }
}

/// Diagonal chain `(x_k, y_k)-(x_{k+1}, y_{k+1})` with random strictly
/// increasing corners, returned in shuffled order.
pub fn staircase(params: StaircaseParams, seed: u64) -> Result<Vec<Rect>, GeneratorError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut x, mut y) = (0i64, 0i64);
    let mut rects = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let from = Point::new(x, y);
        x = 1 + rng.gen_range(x..=x + params.max_step);
        y = 1 + rng.gen_range(y..=y + params.max_step);
        rects.push(Rect::new(from, Point::new(x, y)));
    }
    rects.shuffle(&mut rng);
    Ok(rects)
}

/// `2 * count` strips inside `[0, width]²`: for `k` in `0..count` with
/// `s = width / count`, a vertical strip `(ks, ks)-((k+1)s, width)` and a
/// horizontal strip `((k+1)s, ks)-(width, (k+1)s)`.
pub fn nested_strips(count: usize, width: i64) -> Result<Vec<Rect>, GeneratorError> {
    if count == 0 {
        return Err(GeneratorError::invalid("count must be > 0"));
    }
    let count_i = i64::try_from(count).map_err(|_| GeneratorError::invalid("count too large"))?;
    let size = width / count_i;
    if size < 1 {
        return Err(GeneratorError::invalid("width must be >= count"));
    }
    let mut rects = Vec::with_capacity(2 * count);
    for k in 0..count_i {
        let off = k * size;
        rects.push(Rect::from_corners(off, off, off + size, width));
        rects.push(Rect::from_corners(off + size, off, width, off + size));
    }
    Ok(rects)
}

/// Full tiling of `cols × rows` cells of size `cell_w × cell_h`, row-major.
pub fn grid(cols: usize, rows: usize, cell_w: i64, cell_h: i64) -> Result<Vec<Rect>, GeneratorError> {
    if cell_w < 1 || cell_h < 1 {
        return Err(GeneratorError::invalid("cell sizes must be >= 1"));
    }
    let cols = i64::try_from(cols).map_err(|_| GeneratorError::invalid("cols too large"))?;
    let rows = i64::try_from(rows).map_err(|_| GeneratorError::invalid("rows too large"))?;
    let mut rects = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            rects.push(Rect::from_corners(
                c * cell_w,
                r * cell_h,
                (c + 1) * cell_w,
                (r + 1) * cell_h,
            ));
        }
    }
    Ok(rects)
}

/// Parameters for `scattered`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScatteredParams {
    /// The area is `tiles × tiles` square tiles.
    pub tiles: usize,
    pub tile_size: i64,
    /// Rectangles attempted per tile.
    pub per_tile: usize,
    /// Maximum side length of a rectangle (minimum is 1).
    pub max_size: i64,
    /// A tile is abandoned after this many consecutive rejected draws.
    pub max_retries: u32,
    /// Keep colliding draws instead of rejecting them.
    pub allow_overlap: bool,
}

impl Default for ScatteredParams {
    fn default() -> Self {
        Self {
            tiles: 3,
            tile_size: 1000,
            per_tile: 50,
            max_size: 100,
            max_retries: 10,
            allow_overlap: false,
        }
    }
}

impl ScatteredParams {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.max_size < 1 {
            return Err(GeneratorError::invalid("max_size must be >= 1"));
        }
        if self.tile_size < self.max_size {
            return Err(GeneratorError::invalid("tile_size must be >= max_size"));
        }
        if i64::try_from(self.tiles).is_err() {
            return Err(GeneratorError::invalid("tiles too large"));
        }
        Ok(())
    }
}

/// Random rectangles per tile. Without `allow_overlap` the result has pairwise
/// disjoint interiors; tiles may hold fewer than `per_tile` rectangles.
pub fn scattered(params: ScatteredParams, seed: u64) -> Result<Vec<Rect>, GeneratorError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let tiles = params.tiles as i64;
    let mut rects = Vec::new();
    for tx in 0..tiles {
        for ty in 0..tiles {
            let origin = Point::new(tx * params.tile_size, ty * params.tile_size);
            let mut chunk: Vec<Rect> = Vec::with_capacity(params.per_tile);
            let mut retries = 0u32;
            for _ in 0..params.per_tile {
                let w = rng.gen_range(1..=params.max_size);
                let h = rng.gen_range(1..=params.max_size);
                let x = rng.gen_range(0..=params.tile_size - w);
                let y = rng.gen_range(0..=params.tile_size - h);
                let cand = Rect::from_corners(x, y, x + w, y + h).translate(origin);
                if params.allow_overlap || chunk.iter().all(|r| !r.overlaps(&cand)) {
                    retries = 0;
                    chunk.push(cand);
                } else {
                    retries += 1;
                    if retries >= params.max_retries {
                        break;
                    }
                }
            }
            rects.extend(chunk);
        }
    }
    Ok(rects)
}

/// Four rectangles wound around an empty unit square, scaled by `unit` and
/// placed at `origin`. No guillotine cut exists on either axis.
pub fn pinwheel(origin: Point, unit: i64) -> Vec<Rect> {
    [(0, 0, 2, 1), (2, 0, 3, 2), (1, 2, 3, 3), (0, 1, 1, 3)]
        .into_iter()
        .map(|(x1, y1, x2, y2)| {
            Rect::from_corners(x1 * unit, y1 * unit, x2 * unit, y2 * unit).translate(origin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::find_overlap;

    #[test]
    fn reproducible_by_seed() {
        let p = StaircaseParams {
            count: 200,
            max_step: 5,
        };
        assert_eq!(staircase(p, 42).unwrap(), staircase(p, 42).unwrap());
        assert_ne!(staircase(p, 42).unwrap(), staircase(p, 43).unwrap());
        let s = ScatteredParams::default();
        assert_eq!(scattered(s, 9).unwrap(), scattered(s, 9).unwrap());
    }

    #[test]
    fn staircase_is_a_disjoint_chain() {
        let rects = staircase(StaircaseParams::default(), 1).unwrap();
        assert_eq!(rects.len(), 1000);
        assert!(find_overlap(&rects).is_none());
        assert!(rects.iter().all(|r| r.bottom_left() != r.top_right()));
    }

    #[test]
    fn nested_strips_shape() {
        let rects = nested_strips(10, 100).unwrap();
        assert_eq!(rects.len(), 20);
        assert!(find_overlap(&rects).is_none());
        assert_eq!(rects[0], Rect::from_corners(0, 0, 10, 100));
        assert_eq!(rects[1], Rect::from_corners(10, 0, 100, 10));
        assert!(nested_strips(0, 10).is_err());
        assert!(nested_strips(11, 10).is_err());
    }

    #[test]
    fn grid_tiles_the_area() {
        let rects = grid(3, 2, 4, 5).unwrap();
        assert_eq!(rects.len(), 6);
        assert!(find_overlap(&rects).is_none());
        let area: i64 = rects
            .iter()
            .map(|r| (r.top_right() - r.bottom_left()).iter().product::<i64>())
            .sum();
        assert_eq!(area, 12 * 10);
        assert!(grid(1, 1, 0, 1).is_err());
    }

    #[test]
    fn scattered_respects_overlap_flag() {
        let mut params = ScatteredParams {
            tiles: 2,
            tile_size: 50,
            per_tile: 40,
            max_size: 20,
            max_retries: 10,
            allow_overlap: false,
        };
        let disjoint = scattered(params, 5).unwrap();
        assert!(!disjoint.is_empty());
        assert!(find_overlap(&disjoint).is_none());
        params.allow_overlap = true;
        let dense = scattered(params, 5).unwrap();
        assert_eq!(dense.len(), 4 * 40);
        assert!(find_overlap(&dense).is_some());
    }

    #[test]
    fn invalid_params_are_rejected() {
        let bad = ScatteredParams {
            max_size: 0,
            ..ScatteredParams::default()
        };
        let err = scattered(bad, 0).unwrap_err();
        assert!(err.to_string().contains("max_size"));
        let bad = StaircaseParams {
            count: 1,
            max_step: -1,
        };
        assert!(staircase(bad, 0).is_err());
    }

    #[test]
    fn pinwheel_leaves_center_empty() {
        let rects = pinwheel(Point::new(10, 20), 2);
        assert_eq!(rects.len(), 4);
        assert!(find_overlap(&rects).is_none());
        let center = Rect::from_corners(12, 22, 14, 24);
        assert!(rects.iter().all(|r| !r.overlaps(&center)));
    }
}
