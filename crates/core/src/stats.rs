use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::language::LineKind;

/// Per-file (or aggregated) line counters.
///
/// `significant` never exceeds `total` as long as values are only built
/// through [`LineTally::record`] and addition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineTally {
    /// Lines that are neither blank nor `//` comments.
    pub significant: usize,
    /// Every newline-delimited record, including a final unterminated one.
    pub total: usize,
}

impl LineTally {
    #[inline]
    #[must_use]
    pub const fn new(significant: usize, total: usize) -> Self {
        Self { significant, total }
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    #[inline]
    pub fn record(&mut self, kind: LineKind) {
        self.total += 1;
        if kind.is_significant() {
            self.significant += 1;
        }
    }
}

impl Add for LineTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.significant + rhs.significant, self.total + rhs.total)
    }
}

impl AddAssign for LineTally {
    fn add_assign(&mut self, rhs: Self) {
        self.significant += rhs.significant;
        self.total += rhs.total;
    }
}

impl Sum for LineTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a LineTally> for LineTally {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Extend<LineKind> for LineTally {
    fn extend<T: IntoIterator<Item = LineKind>>(&mut self, iter: T) {
        for kind in iter {
            self.record(kind);
        }
    }
}

impl fmt::Display for LineTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.significant, self.total)
    }
}
