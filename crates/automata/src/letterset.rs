//! Sets of 16-bit code units represented as sorted disjoint inclusive ranges.
//!
//! The representation and algorithms follow the `CharClass`/`Disjoin` style
//! used by character-class implementations elsewhere in the regex-engine
//! space: sorted `Vec<(lo, hi)>`, union by merge, intersection by a
//! two-pointer sweep, complement by walking the gaps.

use std::ops::{BitAnd, BitOr, Not};

/// An immutable set of 16-bit code units, canonicalized as a sorted sequence
/// of disjoint, non-adjacent inclusive ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterSet(Vec<(u16, u16)>);

impl LetterSet {
    pub fn empty() -> Self {
        LetterSet(Vec::new())
    }

    /// The universal set: every 16-bit code unit, including those used by
    /// the `.` wildcard (no code unit is excluded, per the convention that
    /// `.` matches any character).
    pub fn full() -> Self {
        LetterSet(vec![(u16::MIN, u16::MAX)])
    }

    /// Alias for [`LetterSet::full`], used by the `.` regex atom.
    pub fn dot() -> Self {
        Self::full()
    }

    pub fn single(c: u16) -> Self {
        LetterSet(vec![(c, c)])
    }

    pub fn range(lo: u16, hi: u16) -> Self {
        if lo <= hi {
            LetterSet(vec![(lo, hi)])
        } else {
            LetterSet::empty()
        }
    }

    /// Builds a canonical set from arbitrary (possibly overlapping,
    /// possibly unordered) inclusive ranges.
    pub fn from_ranges(ranges: impl IntoIterator<Item = (u16, u16)>) -> Self {
        let mut rs: Vec<(u16, u16)> = ranges.into_iter().filter(|&(lo, hi)| lo <= hi).collect();
        rs.sort_unstable_by_key(|&(lo, _)| lo);

        let mut merged: Vec<(u16, u16)> = Vec::with_capacity(rs.len());
        for (lo, hi) in rs {
            match merged.last_mut() {
                Some(last) if lo as u32 <= last.1 as u32 + 1 => {
                    if hi > last.1 {
                        last.1 = hi;
                    }
                }
                _ => merged.push((lo, hi)),
            }
        }
        LetterSet(merged)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: u16) -> bool {
        self.0
            .binary_search_by(|&(lo, hi)| {
                if c < lo {
                    std::cmp::Ordering::Greater
                } else if c > hi {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Iterates the disjoint ranges in ascending order.
    pub fn ranges(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.0.iter().copied()
    }

    pub fn union(&self, other: &LetterSet) -> LetterSet {
        LetterSet::from_ranges(self.0.iter().chain(other.0.iter()).copied())
    }

    pub fn intersection(&self, other: &LetterSet) -> LetterSet {
        let mut out = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.0.len() && j < other.0.len() {
            let (alo, ahi) = self.0[i];
            let (blo, bhi) = other.0[j];
            let lo = alo.max(blo);
            let hi = ahi.min(bhi);
            if lo <= hi {
                out.push((lo, hi));
            }
            if ahi < bhi {
                i += 1;
            } else {
                j += 1;
            }
        }
        LetterSet(out)
    }

    /// Complement relative to the full 16-bit code unit space.
    pub fn complement(&self) -> LetterSet {
        let mut out = Vec::new();
        let mut next: u32 = 0;
        for &(lo, hi) in &self.0 {
            if lo as u32 > next {
                out.push((next as u16, (lo as u32 - 1) as u16));
            }
            next = hi as u32 + 1;
        }
        if next <= u16::MAX as u32 {
            out.push((next as u16, u16::MAX));
        }
        LetterSet(out)
    }
}

impl BitOr for &LetterSet {
    type Output = LetterSet;
    fn bitor(self, rhs: Self) -> LetterSet {
        self.union(rhs)
    }
}

impl BitAnd for &LetterSet {
    type Output = LetterSet;
    fn bitand(self, rhs: Self) -> LetterSet {
        self.intersection(rhs)
    }
}

impl Not for &LetterSet {
    type Output = LetterSet;
    fn not(self) -> LetterSet {
        self.complement()
    }
}

impl FromIterator<(u16, u16)> for LetterSet {
    fn from_iter<T: IntoIterator<Item = (u16, u16)>>(iter: T) -> Self {
        LetterSet::from_ranges(iter)
    }
}
