use std::fmt::{self, Display};

use crate::errors::IntervalSetError;
use crate::models::Interval;

/// A subset of the integers stored as a union of disjoint ranges.
///
/// The representation is canonical and minimal: intervals are kept sorted
/// ascending by start, and no two stored intervals overlap or touch
/// end-to-end. Every mutation restores this invariant before returning, so
/// two sets covering the same values always compare equal.
///
/// The backing vector is private; intervals can only enter through [`add`]
/// and leave through [`remove`], which is what keeps the invariant
/// unbypassable.
///
/// [`add`]: IntervalSet::add
/// [`remove`]: IntervalSet::remove
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Create an empty set.
    pub fn new() -> Self {
        IntervalSet::default()
    }

    /// Add every value of `interval` to the set.
    ///
    /// The new interval is coalesced with any stored interval it overlaps or
    /// touches, repeatedly, until no neighbor can absorb it. The loop is a
    /// fixed point rather than a recursion: each pass removes one stored
    /// interval and widens the pending one, so it terminates after at most
    /// `len()` passes.
    ///
    /// Adding values already in the set is a no-op on the covered range,
    /// which makes `add` idempotent.
    pub fn add(&mut self, interval: Interval) {
        let mut pending = interval;
        loop {
            let pos = self
                .intervals
                .partition_point(|e| e.min_val() <= pending.min_val());
            if pos > 0 {
                let prev = self.intervals[pos - 1];
                if prev.overlaps(&pending) || prev.adjacent(&pending) {
                    self.intervals.remove(pos - 1);
                    pending = coalesce(&prev, &pending);
                    continue;
                }
            }
            if pos < self.intervals.len() {
                let next = self.intervals[pos];
                if next.overlaps(&pending) || next.adjacent(&pending) {
                    self.intervals.remove(pos);
                    pending = coalesce(&next, &pending);
                    continue;
                }
            }
            self.intervals.insert(pos, pending);
            return;
        }
    }

    /// Union of this set with another, interval by interval.
    ///
    /// The sets involved stay small, so repeated [`add`] beats the
    /// bookkeeping of a merge-join.
    ///
    /// [`add`]: IntervalSet::add
    pub fn add_set(&mut self, other: &IntervalSet) {
        for interval in &other.intervals {
            self.add(*interval);
        }
    }

    /// Remove every value of `interval` from the set.
    ///
    /// Repeatedly finds a stored interval overlapping the removal range and
    /// resolves it: fully covered elements are dropped, elements strictly
    /// containing the removal range are split into left and right remainders,
    /// and partial overlaps are shrunk to the surviving side. The scan
    /// restarts after every structural change; each pass removes at least one
    /// overlapping element, so the loop terminates.
    pub fn remove(&mut self, interval: Interval) {
        loop {
            let Some(idx) = self.intervals.iter().position(|e| e.overlaps(&interval)) else {
                return;
            };
            let elem = self.intervals[idx];
            if interval.contains(&elem) {
                self.intervals.remove(idx);
            } else if elem.contains(&interval) {
                // Strict containment: equality was handled by the branch above.
                self.intervals.remove(idx);
                if elem.min_val() < interval.min_val() {
                    self.add(Interval::from_bounds(elem.min_val(), interval.min_val() - 1));
                }
                if interval.max_val() < elem.max_val() {
                    self.add(Interval::from_bounds(interval.max_val() + 1, elem.max_val()));
                }
            } else if interval.min_val() <= elem.min_val() {
                // Removal range clips the left end of the element.
                self.intervals[idx] = Interval::from_bounds(interval.max_val() + 1, elem.max_val());
            } else {
                // Removal range clips the right end of the element.
                self.intervals[idx] = Interval::from_bounds(elem.min_val(), interval.min_val() - 1);
            }
        }
    }

    /// The part of this set that lies inside `interval`, as a new set.
    pub fn intersection(&self, interval: &Interval) -> IntervalSet {
        let mut result = IntervalSet::new();
        for elem in &self.intervals {
            if let Some(overlap) = elem.intersection(interval) {
                result.add(overlap);
            }
        }
        result
    }

    /// Translate every stored interval by `delta`.
    ///
    /// A uniform shift preserves order and gaps, so the invariant holds
    /// without re-normalizing.
    pub fn shift(&mut self, delta: i64) {
        for elem in &mut self.intervals {
            *elem = elem.shifted(delta);
        }
    }

    /// The smallest value contained in the set.
    ///
    /// Errors with [`IntervalSetError::EmptySet`] on the empty set; callers
    /// must treat that as a logic error, not a zero.
    pub fn min(&self) -> Result<i64, IntervalSetError> {
        self.intervals
            .first()
            .map(|iv| iv.min_val())
            .ok_or(IntervalSetError::EmptySet)
    }

    /// Total number of values covered by the set.
    pub fn coverage(&self) -> i64 {
        self.intervals.iter().map(|iv| iv.width()).sum()
    }

    /// Number of stored intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The stored intervals, sorted ascending and pairwise non-adjacent.
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }
}

/// Smallest interval covering both inputs. Only the union of overlapping or
/// touching intervals, which is exactly how [`IntervalSet::add`] calls it.
fn coalesce(a: &Interval, b: &Interval) -> Interval {
    if a.adjacent(b) {
        a.merge(b)
    } else {
        Interval::from_bounds(
            a.min_val().min(b.min_val()),
            a.max_val().max(b.max_val()),
        )
    }
}

impl From<Interval> for IntervalSet {
    fn from(interval: Interval) -> Self {
        IntervalSet {
            intervals: vec![interval],
        }
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        let mut set = IntervalSet::new();
        for interval in iter {
            set.add(interval);
        }
        set
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", iv)?;
        }
        write!(f, "]")
    }
}
