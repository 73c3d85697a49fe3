//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI, benches
//!   and examples. Breaking changes are allowed and expected.

// Geometry and range queries
pub use crate::aggregate::BoundAggregate;
pub use crate::geom::{Axis, Bounds, Point, Rect};
// Partition test
pub use crate::partition::{is_partitionable, Cut, Outcome, PartitionTester, TesterCfg, Verdict};
pub use crate::split::{find_split, SplitStrategy};
pub use crate::validate::{check_disjoint, find_overlap, Overlap};
// Text format
pub use crate::io::{format_instance, parse_instance, write_instance, ParseError};
// Instance generators
pub use crate::generate::{
    grid as grid_instance, nested_strips, pinwheel, scattered, staircase, GeneratorError,
    ScatteredParams, StaircaseParams,
};

/// Parse `input` and run the default tester on it.
///
/// Pre: `input` is in the format of `io::parse_instance`.
/// Post: the verdict for the parsed set; overlap is not checked.
pub fn check_text(input: &str) -> Result<Verdict, ParseError> {
    let rects = parse_instance(input)?;
    Ok(PartitionTester::default().verdict(&rects))
}
