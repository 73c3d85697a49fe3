//! Guillotine partition test for axis-aligned rectangles.
//!
//! Given pairwise disjoint rectangles, decide whether full-length axis-parallel
//! cuts can split the set, recursively, down to single rectangles (slicing
//! floorplan recognition).
//!
//! Layout
//! - `geom`: integer `Rect`, `Axis`, and the tagged `Bounds` accumulator.
//! - `aggregate`: `BoundAggregate`, range bounding boxes over one sorted order.
//! - `split`: split search on one axis (leftmost scan or middle-out probe).
//! - `partition`: the work-stack tester producing a `Verdict` and its cuts.
//! - `validate`, `io`, `generate`: overlap check, text format, seeded instances.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api` is the
//!   curated surface for the CLI, benches and examples.

pub mod aggregate;
pub mod api;
pub mod generate;
pub mod geom;
pub mod io;
pub mod partition;
pub mod split;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Axis, Bounds, Point, Rect};
pub use partition::{is_partitionable, PartitionTester, TesterCfg, Verdict};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::aggregate::BoundAggregate;
    pub use crate::geom::{Axis, Bounds, Point, Rect};
    pub use crate::io::{format_instance, parse_instance};
    pub use crate::partition::{is_partitionable, Cut, Outcome, PartitionTester, TesterCfg, Verdict};
    pub use crate::split::{find_split, SplitStrategy};
}
