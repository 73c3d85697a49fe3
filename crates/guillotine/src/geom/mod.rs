//! Integer rectangle geometry.
//!
//! Purpose
//! - Provide the value types every other module works on: `Point`, `Axis`,
//!   normalized `Rect`, and the bounding-box accumulator `Bounds`.
//! - Keep the API minimal; coordinates are exact `i64`, so there is no
//!   tolerance handling anywhere in the crate.
//!
//! Conventions
//! - Rectangles are closed and axis-aligned. Construction always normalizes the
//!   corners, so callers may pass opposite corners in any order.
//! - `Bounds::EMPTY` is the identity of `Bounds::merge`. It is a separate state,
//!   not a zero-sized rectangle at the origin.
//!
//! Code cross-refs: `aggregate::BoundAggregate`, `split::find_split`.

mod types;

pub use types::{Axis, Bounds, Point, Rect};
