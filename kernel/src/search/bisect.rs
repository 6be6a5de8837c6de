//! Bisecting search: closed-interval midpoint probing.
//!
//! The loop keeps `[lo, hi]` such that, if the needle is present, one of its
//! indices lies inside the interval. Each probe either returns or shrinks the
//! interval by at least one element.
//!
//! # Midpoint arithmetic
//!
//! The midpoint is `lo + (hi - lo) / 2`. Since `lo <= hi` inside the loop,
//! `hi - lo` cannot underflow and the sum is bounded by `hi`, so no
//! intermediate value exceeds the largest index. The historical `(lo + hi) / 2`
//! form overflows once `lo + hi` passes the integer range and is not used.
//!
//! Moving the right bound to `mid - 1` at `mid == 0` would wrap an unsigned
//! index. That case means the needle is smaller than every remaining element,
//! so the search ends with not-found instead.

use std::cmp::Ordering;

/// Bisect an abstract random-access range of `len` elements.
///
/// `probe(i)` compares element `i` against the needle: `Less` if the element
/// is smaller, `Equal` on a match, `Greater` if it is larger. `probe` is only
/// ever called with `i < len`.
///
/// Returns the first matching index in probing order, or `None`.
#[must_use]
pub fn bisect_by<F>(len: usize, mut probe: F) -> Option<usize>
where
    F: FnMut(usize) -> Ordering,
{
    if len == 0 {
        return None;
    }
    let mut lo = 0usize;
    let mut hi = len - 1;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match probe(mid) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid.checked_sub(1)?,
        }
    }
    None
}

/// Locate `needle` in an ascending `sequence` by bisection.
///
/// Returns the index of an element equal to `needle`, or `None` when no such
/// element exists. With duplicates, which matching index is returned depends
/// only on the input and is stable across calls.
///
/// An empty sequence returns `None` without touching any element.
#[must_use]
pub fn search_bisect(sequence: &[i64], needle: i64) -> Option<usize> {
    bisect_by(sequence.len(), |i| sequence[i].cmp(&needle))
}
