//! Work-stack driver for the partition test.

use crate::geom::{Axis, Rect};
use crate::split::{find_split, SplitStrategy};
use crate::validate::{check_disjoint, Overlap};

use super::types::{Cut, Outcome, Task, TesterCfg, Verdict};

/// Convenience: test with the default strategy and no validation.
pub fn is_partitionable(rects: &[Rect]) -> bool {
    PartitionTester::default().verdict(rects).is_yes()
}

/// Guillotine partition tester. Holds only configuration; every call works on
/// its own copy of the input.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartitionTester {
    cfg: TesterCfg,
}

impl PartitionTester {
    pub fn new(cfg: TesterCfg) -> Self {
        Self { cfg }
    }

    pub fn with_strategy(strategy: SplitStrategy) -> Self {
        Self::new(TesterCfg {
            strategy,
            ..TesterCfg::default()
        })
    }

    #[inline]
    pub fn cfg(&self) -> TesterCfg {
        self.cfg
    }

    /// Verdict only. Never validates: overlapping input gives an unspecified verdict.
    pub fn verdict(&self, rects: &[Rect]) -> Verdict {
        self.search(rects).verdict
    }

    /// Full run with cut list. Checks disjointness first when `cfg.validate` is set.
    pub fn run(&self, rects: &[Rect]) -> Result<Outcome, Overlap> {
        if self.cfg.validate {
            check_disjoint(rects)?;
        }
        Ok(self.search(rects))
    }

    fn search(&self, rects: &[Rect]) -> Outcome {
        tracing::debug!(
            n = rects.len(),
            strategy = ?self.cfg.strategy,
            "partition test"
        );
        let outcome = StackRunner::new(rects, self.cfg.strategy).solve();
        tracing::debug!(
            verdict = %outcome.verdict,
            cuts = outcome.cuts.len(),
            peak_pending = outcome.peak_pending,
            "partition test done"
        );
        outcome
    }
}

/// Owns the working buffer and the pending tasks of one run.
struct StackRunner {
    buf: Vec<Rect>,
    strategy: SplitStrategy,
    stack: Vec<Task>,
    cuts: Vec<Cut>,
    peak_pending: usize,
}

impl StackRunner {
    fn new(rects: &[Rect], strategy: SplitStrategy) -> Self {
        Self {
            buf: rects.to_vec(),
            strategy,
            stack: Vec::new(),
            cuts: Vec::new(),
            peak_pending: 0,
        }
    }

    fn solve(mut self) -> Outcome {
        self.stack.push(Task {
            range: 0..self.buf.len(),
            axis: Axis::X,
        });
        let mut verdict = Verdict::Yes;
        while let Some(task) = self.stack.pop() {
            self.peak_pending = self.peak_pending.max(self.stack.len() + 1);
            if task.range.len() < 2 {
                continue;
            }
            if !self.step(task) {
                verdict = Verdict::No;
                break;
            }
        }
        Outcome {
            verdict,
            cuts: self.cuts,
            peak_pending: self.peak_pending,
        }
    }

    /// Process one task; `false` means neither axis admits a cut.
    fn step(&mut self, task: Task) -> bool {
        let Task { range, axis } = task;
        let part = &mut self.buf[range.clone()];
        part.sort_unstable_by_key(|r| r.sort_key(axis));
        match find_split(part, axis, self.strategy) {
            Some(i) => {
                let position = part[..=i]
                    .iter()
                    .map(|r| r.hi(axis))
                    .fold(i64::MIN, i64::max);
                let cut = Cut {
                    axis,
                    position,
                    left: i + 1,
                    right: range.len() - i - 1,
                };
                tracing::trace!(%cut, start = range.start, "split");
                self.cuts.push(cut);
                let mid = range.start + i + 1;
                self.stack.push(Task {
                    range: mid..range.end,
                    axis: Axis::X,
                });
                self.stack.push(Task {
                    range: range.start..mid,
                    axis: Axis::X,
                });
                true
            }
            None if axis == Axis::X => {
                self.stack.push(Task {
                    range,
                    axis: Axis::Y,
                });
                true
            }
            None => {
                tracing::trace!(start = range.start, len = range.len(), "no cut on either axis");
                false
            }
        }
    }
}
