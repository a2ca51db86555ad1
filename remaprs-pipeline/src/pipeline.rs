use rayon::prelude::*;

use remaprs_core::errors::IntervalSetError;
use remaprs_core::models::{Interval, IntervalSet};

use crate::table::RemapTable;

/// An ordered chain of remapping tables.
///
/// Stage order is part of the problem definition: each table translates
/// from the space the previous one produced, so stages are never skipped or
/// reordered. The pipeline itself is stateless beyond the stage list.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<RemapTable>,
}

impl Pipeline {
    pub fn new(stages: Vec<RemapTable>) -> Self {
        Pipeline { stages }
    }

    /// Fold a set through every stage, left to right.
    pub fn run(&self, initial: &IntervalSet) -> IntervalSet {
        self.stages
            .iter()
            .fold(initial.clone(), |set, stage| stage.map_set(&set))
    }

    /// Translate a single value through every stage, left to right.
    ///
    /// This is the brute-force path: correct, but it touches one value at a
    /// time. [`run`] is the range-at-a-time equivalent.
    ///
    /// [`run`]: Pipeline::run
    pub fn map_value(&self, value: i64) -> i64 {
        self.stages
            .iter()
            .fold(value, |v, stage| stage.map_value(v))
    }

    /// The smallest value in the fully remapped set.
    ///
    /// Errors with [`IntervalSetError::EmptySet`] when `initial` is empty.
    pub fn minimum_output(&self, initial: &IntervalSet) -> Result<i64, IntervalSetError> {
        self.run(initial).min()
    }

    /// The smallest remapped value across several independent initial
    /// ranges.
    ///
    /// Stages are read-only and the ranges are independent, so each range
    /// runs through the pipeline on its own rayon worker; the per-range
    /// minima are then reduced with `min`. Equivalent to calling
    /// [`minimum_output`] on the union of the ranges.
    ///
    /// [`minimum_output`]: Pipeline::minimum_output
    pub fn minimum_output_per_range(&self, ranges: &[Interval]) -> Result<i64, IntervalSetError> {
        ranges
            .par_iter()
            .map(|range| self.minimum_output(&IntervalSet::from(*range)))
            .try_reduce_with(|a, b| Ok(a.min(b)))
            .unwrap_or(Err(IntervalSetError::EmptySet))
    }

    /// Number of stages in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stages(&self) -> &[RemapTable] {
        &self.stages
    }
}
