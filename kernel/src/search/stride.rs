//! Striding search: rightward jumps with a halving stride.
//!
//! Starting at `pos = 0` with `stride = len / 2`, each round advances `pos` by
//! `stride` for as long as the landing element is still accepted, then halves
//! the stride. `pos` never decreases, and once the stride reaches zero `pos`
//! is the last accepted index reachable from 0.
//!
//! The landing index `pos + stride` is formed with `checked_add` and compared
//! against `len` before the element is read. With an odd `len` near the top
//! of the index range, `pos` can already sit at `len - 1` when the next jump is
//! tried, so the plain sum is not always representable.

/// Run the stride-halving walk over `len` elements.
///
/// `accept(i)` reports whether element `i` is still on the left side of the
/// boundary. It is only ever called with `0 < i < len`; index 0 is assumed
/// accepted and never probed.
///
/// Returns the final position. For `len == 0` this is 0, which is not a
/// valid index; callers must handle the empty case themselves.
#[must_use]
pub fn stride_by<F>(len: usize, mut accept: F) -> usize
where
    F: FnMut(usize) -> bool,
{
    let mut pos = 0usize;
    let mut stride = len / 2;
    while stride >= 1 {
        while let Some(next) = pos.checked_add(stride).filter(|&next| next < len) {
            if !accept(next) {
                break;
            }
            pos = next;
        }
        stride /= 2;
    }
    pos
}

/// Locate `needle` in an ascending `sequence` by striding.
///
/// Returns the same answers as [`super::bisect::search_bisect`] for every
/// ascending input: `None` in exactly the same cases, and otherwise an index
/// holding `needle`. With duplicates, the returned index is the last one that
/// the stride walk lands on, which may differ from the bisecting result.
///
/// An empty sequence returns `None` before any element is read.
#[must_use]
pub fn search_stride(sequence: &[i64], needle: i64) -> Option<usize> {
    if sequence.is_empty() {
        return None;
    }
    let pos = stride_by(sequence.len(), |i| sequence[i] <= needle);
    (sequence[pos] == needle).then_some(pos)
}
