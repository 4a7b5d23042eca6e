//! Original-index intervals
//!
//! Interval = [left, right] over the original pile positions, inclusive.
//! Children are produced by an explicit split point k:
//!   Left part: [left, k]
//!   Right part: [k+1, right]

use std::fmt;

/// Contiguous range of original pile indices (inclusive on both ends)
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    /// Leftmost original index (inclusive)
    pub left: usize,

    /// Rightmost original index (inclusive)
    pub right: usize,
}

impl Interval {
    /// Create interval spanning [left, right]
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert!(left <= right, "interval bounds reversed");
        Self { left, right }
    }

    /// Interval covering a single original pile
    pub fn single(index: usize) -> Self {
        Self {
            left: index,
            right: index,
        }
    }

    /// Check if the interval covers exactly one pile
    #[inline]
    pub fn is_single(&self) -> bool {
        self.left == self.right
    }

    /// Number of original piles covered
    #[inline]
    pub fn length(&self) -> usize {
        self.right - self.left + 1
    }

    /// Split into ([left, k], [k+1, right])
    ///
    /// Valid split points satisfy left <= k < right.
    pub fn split(&self, k: usize) -> (Interval, Interval) {
        debug_assert!(
            self.left <= k && k < self.right,
            "split point {} outside {}",
            k,
            self
        );
        (
            Interval {
                left: self.left,
                right: k,
            },
            Interval {
                left: k + 1,
                right: self.right,
            },
        )
    }

    /// Whether `other` starts right after this interval ends
    #[inline]
    pub fn is_followed_by(&self, other: &Interval) -> bool {
        self.right + 1 == other.left
    }

    /// Smallest interval covering both (only meaningful when adjacent)
    pub fn join(&self, other: &Interval) -> Interval {
        Interval {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "[{}]", self.left)
        } else {
            write!(f, "[{}, {}]", self.left, self.right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bounds() {
        let interval = Interval::new(2, 7);
        let (left, right) = interval.split(4);

        assert_eq!(left, Interval::new(2, 4));
        assert_eq!(right, Interval::new(5, 7));
        assert!(left.is_followed_by(&right));
        assert_eq!(left.join(&right), interval);
        assert_eq!(left.length() + right.length(), interval.length());
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::single(3).to_string(), "[3]");
        assert_eq!(Interval::new(0, 5).to_string(), "[0, 5]");
    }

    #[test]
    fn test_adjacency_is_directional() {
        let a = Interval::new(0, 1);
        let b = Interval::new(2, 2);
        assert!(a.is_followed_by(&b));
        assert!(!b.is_followed_by(&a));
        assert!(!a.is_followed_by(&Interval::single(3)));
    }
}
