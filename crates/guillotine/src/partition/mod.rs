//! Guillotine partition test (slicing floorplan recognition).
//!
//! Purpose
//! - Decide whether a set of pairwise disjoint rectangles can be split by
//!   full-length axis-parallel cuts, recursively, until every piece holds one
//!   rectangle.
//!
//! Algorithm
//! - A pending task is a sub-range of one working buffer plus the axis to try.
//!   The range is sorted in place by that axis and handed to `find_split`.
//! - A split turns the range into two contiguous halves; both are pushed as new
//!   tasks that start again at `Axis::X`. No split on X retries the same range on
//!   Y; no split on Y ends the test with `Verdict::No`.
//! - Tasks live on an explicit stack, so adversarial inputs that peel one
//!   rectangle per cut only grow a heap vector, never the call stack.
//!
//! Verdict independence
//! - Any subset of a partitionable set is partitionable (the same cuts work), so
//!   which valid split is taken never changes the verdict. Strategies only
//!   change the cut sequence and the amount of work.
//!
//! Code cross-refs: `split::{find_split, SplitStrategy}`, `aggregate::BoundAggregate`,
//! `validate::check_disjoint`.

mod tester;
mod types;

pub use tester::{is_partitionable, PartitionTester};
pub use types::{Cut, Outcome, TesterCfg, Verdict};
