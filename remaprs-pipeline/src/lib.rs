//! Chained piecewise range remapping over disjoint interval sets.
//!
//! A [`RemapTable`] is a piecewise translation function over the integers:
//! an ordered list of disjoint source ranges, each mapped by a constant
//! offset to a destination range, with unmapped values passing through
//! unchanged. A [`Pipeline`] chains tables in a fixed order and folds an
//! [`IntervalSet`] through every stage, so whole ranges are translated at
//! once instead of value by value, which keeps billion-value inputs
//! tractable.
//!
//! [`ChainFile`] parses the line-oriented input document: a header line of
//! integers (paired into query ranges) followed by blank-separated mapping
//! blocks, one table per block.
//!
//! # Example
//!
//! ```rust
//! use remaprs_core::models::{Interval, IntervalSet};
//! use remaprs_pipeline::{Pipeline, RemapEntry, RemapTable};
//!
//! let table = RemapTable::new(vec![
//!     RemapEntry { dest_start: 52, source_start: 50, length: 48 },
//!     RemapEntry { dest_start: 50, source_start: 98, length: 2 },
//! ]).unwrap();
//! let pipeline = Pipeline::new(vec![table]);
//!
//! let initial = IntervalSet::from(Interval::new(79, 14));
//! assert_eq!(pipeline.minimum_output(&initial).unwrap(), 81);
//! ```
//!
//! [`IntervalSet`]: remaprs_core::models::IntervalSet

pub mod chain;
pub mod errors;
pub mod pipeline;
pub mod table;

// re-exports
pub use self::chain::ChainFile;
pub use self::errors::{ChainParseError, TableBuildError};
pub use self::pipeline::Pipeline;
pub use self::table::{RemapEntry, RemapTable};
