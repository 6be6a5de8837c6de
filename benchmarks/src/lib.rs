//! Shared helpers for stride benchmark suites.

use stride_harness::samples::SampleV1;

/// Ascending sequence of `len` values with every value repeated `dup` times.
///
/// # Panics
///
/// Panics if `dup` is zero or a value does not fit `i64`. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn ascending_with_duplicates(len: usize, dup: usize) -> Vec<i64> {
    assert!(dup > 0, "dup must be non-zero");
    (0..len)
        .map(|i| i64::try_from(i / dup).expect("value fits i64") * 2)
        .collect()
}

/// Needles that hit, miss between elements, and miss past both ends.
#[must_use]
pub fn probe_needles(sequence: &[i64]) -> Vec<i64> {
    let Some((&first, &last)) = sequence.first().zip(sequence.last()) else {
        return vec![0];
    };
    let mid = sequence[sequence.len() / 2];
    vec![first - 1, first, mid, mid + 1, last, last + 1]
}

/// Benchmark-sized samples, named by length.
#[must_use]
pub fn bench_samples() -> Vec<SampleV1> {
    [16usize, 1024, 65_536]
        .iter()
        .map(|&len| SampleV1::new(&format!("n{len}"), &ascending_with_duplicates(len, 1)))
        .collect()
}
