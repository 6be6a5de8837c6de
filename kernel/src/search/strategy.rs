//! Strategy selector for running either needle search uniformly.

use super::bisect::search_bisect;
use super::stride::search_stride;

/// Which needle-search procedure to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// Closed-interval midpoint probing ([`search_bisect`]).
    Bisect,
    /// Halving-stride rightward walk ([`search_stride`]).
    Stride,
}

impl Strategy {
    /// All strategies in declaration order.
    pub const ALL: &'static [Strategy] = &[Self::Bisect, Self::Stride];

    /// Stable lowercase name, used as a report key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bisect => "bisect",
            Self::Stride => "stride",
        }
    }

    /// Run this strategy against `sequence`.
    #[must_use]
    pub fn search(&self, sequence: &[i64], needle: i64) -> Option<usize> {
        match self {
            Self::Bisect => search_bisect(sequence, needle),
            Self::Stride => search_stride(sequence, needle),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether two needle-search results are equivalent for `sequence`.
///
/// Equivalent means both are `None`, or both are indices holding `needle`.
/// The indices themselves may differ when `sequence` has duplicates.
#[must_use]
pub fn results_agree(
    sequence: &[i64],
    needle: i64,
    left: Option<usize>,
    right: Option<usize>,
) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(i), Some(j)) => {
            sequence.get(i) == Some(&needle) && sequence.get(j) == Some(&needle)
        }
        _ => false,
    }
}
