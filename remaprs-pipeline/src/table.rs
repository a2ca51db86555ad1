use remaprs_core::models::{Interval, IntervalSet};

use crate::errors::TableBuildError;

/// One segment of a piecewise translation: values in
/// `[source_start, source_start + length)` map to
/// `dest_start + (value - source_start)`.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct RemapEntry {
    pub dest_start: i64,
    pub source_start: i64,
    pub length: i64,
}

impl RemapEntry {
    /// The source range as a closed interval.
    pub fn source_span(&self) -> Interval {
        Interval::new(self.source_start, self.length)
    }

    /// Offset applied to values matched by this entry.
    #[inline]
    pub fn offset(&self) -> i64 {
        self.dest_start - self.source_start
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.source_start <= value && value < self.source_start + self.length
    }

    #[inline]
    pub fn map(&self, value: i64) -> i64 {
        self.dest_start + (value - self.source_start)
    }
}

/// A piecewise translation function over the integers.
///
/// Entries are sorted by source start at construction and their source
/// ranges are validated to be pairwise disjoint: an overlap would let a
/// value match two entries and be silently double-mapped, so it is rejected
/// up front as a configuration error. Values covered by no entry translate
/// to themselves.
#[derive(Debug, Clone, Default)]
pub struct RemapTable {
    entries: Vec<RemapEntry>,
}

impl RemapTable {
    /// Build a table from entries in any order.
    ///
    /// Fails if any entry has a non-positive length or if two entries
    /// overlap in source space.
    pub fn new(mut entries: Vec<RemapEntry>) -> Result<Self, TableBuildError> {
        for entry in &entries {
            if entry.length <= 0 {
                return Err(TableBuildError::NonPositiveLength {
                    length: entry.length,
                });
            }
        }
        entries.sort_by_key(|e| e.source_start);
        for pair in entries.windows(2) {
            if pair[1].source_start < pair[0].source_start + pair[0].length {
                return Err(TableBuildError::OverlappingSources {
                    source_start: pair[1].source_start,
                });
            }
        }
        Ok(RemapTable { entries })
    }

    /// Translate a single value. Unmapped values pass through unchanged.
    pub fn map_value(&self, value: i64) -> i64 {
        for entry in &self.entries {
            if entry.contains(value) {
                return entry.map(value);
            }
        }
        value
    }

    /// Translate a whole set of ranges at once.
    ///
    /// The result is the disjoint union of two contributions: the part of
    /// `set` covered by no entry, passed through unchanged, and for each
    /// entry the part of the original `set` inside its source range, shifted
    /// by the entry's offset. Entries are disjoint, so every input value
    /// lands in exactly one contribution and total coverage is preserved.
    pub fn map_set(&self, set: &IntervalSet) -> IntervalSet {
        let mut unmapped = set.clone();
        let mut result = IntervalSet::new();
        for entry in &self.entries {
            let span = entry.source_span();
            unmapped.remove(span);
            let mut matched = set.intersection(&span);
            matched.shift(entry.offset());
            result.add_set(&matched);
        }
        result.add_set(&unmapped);
        result
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted ascending by source start.
    pub fn entries(&self) -> &[RemapEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn iv(min_val: i64, max_val: i64) -> Interval {
        Interval::from_bounds(min_val, max_val)
    }

    fn entry(dest_start: i64, source_start: i64, length: i64) -> RemapEntry {
        RemapEntry {
            dest_start,
            source_start,
            length,
        }
    }

    /// The first stage of the worked reference input.
    fn reference_table() -> RemapTable {
        RemapTable::new(vec![entry(50, 98, 2), entry(52, 50, 48)]).unwrap()
    }

    // ── construction tests ──────────────────────────────────────────────

    #[rstest]
    fn test_new_sorts_by_source_start() {
        let table = reference_table();
        assert_eq!(table.entries()[0].source_start, 50);
        assert_eq!(table.entries()[1].source_start, 98);
    }

    #[rstest]
    fn test_new_rejects_overlapping_sources() {
        let result = RemapTable::new(vec![entry(0, 10, 10), entry(100, 15, 10)]);
        assert!(matches!(
            result,
            Err(TableBuildError::OverlappingSources { source_start: 15 })
        ));
    }

    #[rstest]
    fn test_new_accepts_touching_sources() {
        // [10,19] and [20,29] touch but do not overlap
        let result = RemapTable::new(vec![entry(0, 10, 10), entry(100, 20, 10)]);
        assert!(result.is_ok());
    }

    #[rstest]
    fn test_new_rejects_zero_length() {
        let result = RemapTable::new(vec![entry(0, 10, 0)]);
        assert!(matches!(
            result,
            Err(TableBuildError::NonPositiveLength { length: 0 })
        ));
    }

    // ── map_value tests ─────────────────────────────────────────────────

    #[rstest]
    #[case(98, 50)]
    #[case(99, 51)]
    #[case(50, 52)]
    #[case(97, 99)]
    #[case(79, 81)]
    #[case(14, 14)] // below every source range: identity
    #[case(100, 100)] // above every source range: identity
    fn test_map_value(#[case] value: i64, #[case] expected: i64) {
        assert_eq!(reference_table().map_value(value), expected);
    }

    #[rstest]
    fn test_map_value_boundaries_half_open() {
        // source range [98, 100) includes 98 and 99 but not 100
        let table = RemapTable::new(vec![entry(50, 98, 2)]).unwrap();
        assert_eq!(table.map_value(97), 97);
        assert_eq!(table.map_value(98), 50);
        assert_eq!(table.map_value(99), 51);
        assert_eq!(table.map_value(100), 100);
    }

    // ── map_set tests ───────────────────────────────────────────────────

    #[rstest]
    fn test_map_set_fully_covered_range() {
        let table = reference_table();
        let set = IntervalSet::from(iv(79, 92));
        let mapped = table.map_set(&set);
        assert_eq!(mapped.as_slice(), &[iv(81, 94)]);
    }

    #[rstest]
    fn test_map_set_straddling_range_partitions() {
        // [96, 99] straddles the gap at 97/98: [96,97] shifts by +2,
        // [98,99] shifts by -48
        let table = reference_table();
        let mapped = table.map_set(&IntervalSet::from(iv(96, 99)));
        assert_eq!(mapped.as_slice(), &[iv(50, 51), iv(98, 99)]);
    }

    #[rstest]
    fn test_map_set_unmapped_passes_through() {
        let table = reference_table();
        let mapped = table.map_set(&IntervalSet::from(iv(0, 20)));
        assert_eq!(mapped.as_slice(), &[iv(0, 20)]);
    }

    #[rstest]
    fn test_map_set_empty_table_is_identity() {
        let table = RemapTable::default();
        let set: IntervalSet = [iv(5, 9), iv(100, 200)].into_iter().collect();
        assert_eq!(table.map_set(&set), set);
    }

    #[rstest]
    fn test_map_set_preserves_coverage() {
        let table = reference_table();
        let set: IntervalSet = [iv(0, 60), iv(90, 110)].into_iter().collect();
        let mapped = table.map_set(&set);
        assert_eq!(mapped.coverage(), set.coverage());
    }

    #[rstest]
    fn test_map_set_agrees_with_map_value() {
        // every value of the input must appear exactly once in the output,
        // at the position the scalar path sends it to
        let table = reference_table();
        let set: IntervalSet = [iv(40, 60), iv(95, 105)].into_iter().collect();
        let mapped = table.map_set(&set);
        for interval in set.iter() {
            for value in interval.min_val()..=interval.max_val() {
                let target = table.map_value(value);
                assert!(
                    mapped.iter().any(|m| m.contains_value(target)),
                    "value {} mapped to {} which is missing from {}",
                    value,
                    target,
                    mapped
                );
            }
        }
        assert_eq!(mapped.coverage(), set.coverage());
    }
}
