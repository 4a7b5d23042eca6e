//! Prefix-sum index over pile weights
//!
//! prefix[0] = 0, prefix[k] = prefix[k-1] + pile[k-1]
//! range_sum(i, j) = prefix[j+1] - prefix[i] in O(1)

/// Cumulative sums over a pile sequence (length n + 1)
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSums {
    sums: Vec<u64>,
}

impl PrefixSums {
    /// Build prefix sums for `piles` (any length, including zero)
    pub fn build(piles: &[u64]) -> Self {
        let mut sums = Vec::with_capacity(piles.len() + 1);
        sums.push(0);
        let mut running = 0u64;
        for &weight in piles {
            running += weight;
            sums.push(running);
        }
        Self { sums }
    }

    /// Sum of piles i..=j (requires i <= j < n)
    #[inline]
    pub fn range_sum(&self, i: usize, j: usize) -> u64 {
        debug_assert!(i <= j && j + 1 < self.sums.len());
        self.sums[j + 1] - self.sums[i]
    }

    /// Sum of every pile
    pub fn total(&self) -> u64 {
        self.sums.last().copied().unwrap_or(0)
    }

    /// Number of piles the index was built over
    pub fn pile_count(&self) -> usize {
        self.sums.len() - 1
    }

    /// Raw table, length n + 1
    pub fn as_slice(&self) -> &[u64] {
        &self.sums
    }
}
