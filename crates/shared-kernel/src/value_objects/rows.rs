// crates/shared-kernel/src/value_objects/rows.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// 0-based index of a triangle row (`n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowIndex(u64);

impl RowIndex {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn first() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Number of entries in this row (`n + 1`).
    #[inline]
    pub const fn width(self) -> u64 {
        self.0 + 1
    }

    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for RowIndex {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<RowIndex> for u64 {
    fn from(value: RowIndex) -> Self {
        value.0
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many rows of the triangle to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowCount(u64);

impl RowCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Row indices `0..count` in increasing order.
    pub fn indices(self) -> impl Iterator<Item = RowIndex> {
        (0..self.0).map(RowIndex::new)
    }

    /// Leading spaces emitted before row `index`: `count - n`.
    #[inline]
    pub const fn indent_for(self, index: RowIndex) -> u64 {
        self.0.saturating_sub(index.0)
    }
}

impl Default for RowCount {
    fn default() -> Self {
        Self(5)
    }
}

impl From<u64> for RowCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<RowCount> for u64 {
    fn from(value: RowCount) -> Self {
        value.0
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
