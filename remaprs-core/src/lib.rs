//! Core data structures for remaprs: intervals and disjoint interval sets.
//!
//! An [`Interval`] is an immutable closed range of integers stored as a start
//! and a positive length. An [`IntervalSet`] is a canonical, minimal union of
//! disjoint, non-adjacent intervals: the representation is kept sorted and
//! maximally merged across every mutation, so a subset of the integers has
//! exactly one representation.
//!
//! These types are the foundation for range remapping in the `remaprs-pipeline`
//! crate, where whole ranges are translated through piecewise lookup tables
//! without ever enumerating individual values.
//!
//! # Example
//!
//! ```rust
//! use remaprs_core::models::{Interval, IntervalSet};
//!
//! let mut set = IntervalSet::from(Interval::from_bounds(0, 9));
//! set.add(Interval::from_bounds(10, 19)); // touching, merges
//! assert_eq!(set.len(), 1);
//!
//! set.remove(Interval::from_bounds(5, 9)); // carves a hole, splitting the run
//! assert_eq!(set.min().unwrap(), 0);
//! assert_eq!(set.coverage(), 15);
//! ```

pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use self::errors::IntervalSetError;
pub use self::models::{Interval, IntervalSet};
