//! Crossover search: the last index where a monotonic predicate is `<= 0`.
//!
//! The predicate is passed in by the caller rather than named globally, so the
//! operation depends on nothing but its arguments.
//!
//! # Corrected behavior
//!
//! The stride walk checks `pos + stride < len` before evaluating the predicate.
//! Without that guard the walk reads past the end whenever the predicate stays
//! non-positive up to the last element (for example, every element below the
//! crossover). The guard is part of [`super::stride::stride_by`], which this
//! module shares with the striding search.

use super::stride::stride_by;

/// Precondition failure reported by [`try_search_crossover`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossoverError {
    /// The sequence has no elements, so no index can satisfy the predicate.
    EmptySequence,
    /// The predicate is already positive at index 0.
    PositiveAtStart { value: i64 },
}

impl std::fmt::Display for CrossoverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "crossover search over an empty sequence"),
            Self::PositiveAtStart { value } => {
                write!(f, "predicate is positive at index 0 (value {value})")
            }
        }
    }
}

impl std::error::Error for CrossoverError {}

/// Find the greatest index `pos` with `predicate(sequence[pos]) <= 0`.
///
/// # Contract
///
/// - `sequence` is non-empty.
/// - `predicate(sequence[0]) <= 0`.
/// - `predicate` is monotonic over `sequence`: non-positive on some prefix
///   and positive on the rest.
///
/// Index 0 is never evaluated. If `predicate` is positive there, or is not
/// monotonic, the returned index is unspecified, though it is still in range
/// and identical for identical inputs. No element outside the sequence is
/// ever read.
///
/// Use [`try_search_crossover`] when the first two conditions are not already
/// known to hold.
///
/// # Panics
///
/// Panics in debug builds if `sequence` is empty. Release builds return 0.
#[must_use]
pub fn search_crossover<P>(sequence: &[i64], mut predicate: P) -> usize
where
    P: FnMut(i64) -> i64,
{
    debug_assert!(
        !sequence.is_empty(),
        "search_crossover requires a non-empty sequence"
    );
    stride_by(sequence.len(), |i| predicate(sequence[i]) <= 0)
}

/// [`search_crossover`] with the cheap preconditions checked up front.
///
/// Monotonicity is not checked; that would cost a full scan.
///
/// # Errors
///
/// Returns [`CrossoverError::EmptySequence`] for an empty sequence and
/// [`CrossoverError::PositiveAtStart`] when `predicate(sequence[0]) > 0`.
pub fn try_search_crossover<P>(
    sequence: &[i64],
    mut predicate: P,
) -> Result<usize, CrossoverError>
where
    P: FnMut(i64) -> i64,
{
    let Some(&first) = sequence.first() else {
        return Err(CrossoverError::EmptySequence);
    };
    let value = predicate(first);
    if value > 0 {
        return Err(CrossoverError::PositiveAtStart { value });
    }
    Ok(search_crossover(sequence, predicate))
}
