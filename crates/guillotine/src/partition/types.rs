//! Data types for the partition test.

use std::fmt;
use std::ops::Range;

use crate::geom::Axis;
use crate::split::SplitStrategy;

/// Answer of the partition test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    #[inline]
    pub fn is_yes(self) -> bool {
        self == Verdict::Yes
    }
}

impl From<bool> for Verdict {
    #[inline]
    fn from(ok: bool) -> Self {
        if ok {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => f.write_str("YES"),
            Verdict::No => f.write_str("NO"),
        }
    }
}

/// One guillotine cut: a line perpendicular to `axis` at `position`, with
/// `left` rectangles below it and `right` above it.
///
/// `position` is the largest upper bound of the lower group; the line can be
/// moved up to the smallest lower bound of the upper group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cut {
    pub axis: Axis,
    pub position: i64,
    pub left: usize,
    pub right: usize,
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cut {}={} ({} | {})",
            self.axis, self.position, self.left, self.right
        )
    }
}

/// Result of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    /// Cuts in the order they were taken. Complete only for `Verdict::Yes`.
    pub cuts: Vec<Cut>,
    /// Largest number of tasks pending at once.
    pub peak_pending: usize,
}

/// Tester configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TesterCfg {
    pub strategy: SplitStrategy,
    /// Check pairwise disjointness before testing (`PartitionTester::run`).
    pub validate: bool,
}

/// Pending work: sort `range` of the buffer by `axis` and look for a cut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Task {
    pub range: Range<usize>,
    pub axis: Axis,
}
