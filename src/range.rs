//! Inclusive code ranges used as scan bounds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` interval of full-resolution codes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    pub min: u64,
    pub max: u64,
}

impl Range {
    /// All full-resolution codes inside the cell `code` names at `precision`.
    ///
    /// `precision` 0 yields the whole code space.
    pub fn of_cell(code: u64, precision: u8) -> Self {
        let low_bits = u64::MAX.checked_shr(precision as u32).unwrap_or(0);
        Range {
            min: code & !low_bits,
            max: code | low_bits,
        }
    }

    pub fn contains(&self, code: u64) -> bool {
        (self.min..=self.max).contains(&code)
    }

    /// Number of codes in the range. Saturates for the full code space.
    pub fn span(&self) -> u64 {
        (self.max - self.min).saturating_add(1)
    }

    /// Whether the two ranges overlap or sit back to back.
    fn touches(&self, other: &Range) -> bool {
        self.min <= other.max.saturating_add(1) && other.min <= self.max.saturating_add(1)
    }

    fn union(self, other: Range) -> Range {
        Range {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Coalesces ranges until no two of the result overlap or are adjacent.
///
/// Each incoming range is folded into the first range it touches, and the
/// grown range then absorbs any other range it has come to touch. The result
/// is in no particular order.
pub fn merge_ranges(ranges: impl IntoIterator<Item = Range>) -> Vec<Range> {
    let mut merged: Vec<Range> = Vec::new();
    for range in ranges {
        let Some(i) = merged.iter().position(|r| r.touches(&range)) else {
            merged.push(range);
            continue;
        };
        let mut grown = merged.swap_remove(i).union(range);
        while let Some(j) = merged.iter().position(|r| r.touches(&grown)) {
            grown = grown.union(merged.swap_remove(j));
        }
        merged.push(grown);
    }
    merged
}
