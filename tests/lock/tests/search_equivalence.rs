//! Bisect/stride equivalence: both strategies are not-found together, or
//! both return indices holding the needle.

use lock_tests::sequences::{all_ascending, random_ascending, Lcg};
use stride_kernel::search::{results_agree, search_bisect, search_stride};

fn assert_equivalent(seq: &[i64], needle: i64) {
    let b = search_bisect(seq, needle);
    let s = search_stride(seq, needle);
    assert!(
        results_agree(seq, needle, b, s),
        "seq={seq:?} needle={needle} bisect={b:?} stride={s:?}"
    );
    let present = seq.contains(&needle);
    assert_eq!(b.is_some(), present, "bisect seq={seq:?} needle={needle}");
    assert_eq!(s.is_some(), present, "stride seq={seq:?} needle={needle}");
}

// ---------------------------------------------------------------------------
// Exhaustive small inputs
// ---------------------------------------------------------------------------

#[test]
fn equivalence_exhaustive_up_to_len_8() {
    for seq in all_ascending(8, 4) {
        for needle in -1..=5 {
            assert_equivalent(&seq, needle);
        }
    }
}

#[test]
fn stride_returns_last_duplicate() {
    for seq in all_ascending(7, 3) {
        for needle in 0..=3 {
            if let Some(i) = search_stride(&seq, needle) {
                let last = seq.iter().rposition(|&v| v == needle);
                assert_eq!(Some(i), last, "seq={seq:?} needle={needle}");
            }
        }
    }
}

#[test]
fn results_are_deterministic() {
    let seq = [1, 2, 2, 2, 2, 2, 3, 3, 9];
    let b = search_bisect(&seq, 2);
    let s = search_stride(&seq, 3);
    for _ in 0..10 {
        assert_eq!(search_bisect(&seq, 2), b);
        assert_eq!(search_stride(&seq, 3), s);
    }
}

// ---------------------------------------------------------------------------
// Generated larger inputs
// ---------------------------------------------------------------------------

#[test]
fn equivalence_generated_lengths_to_2000() {
    let mut rng = Lcg::new(0x5EED);
    for round in 0..200u64 {
        let len = usize::try_from(rng.below(2000)).unwrap();
        let max_gap = 1 + round % 4;
        let seq = random_ascending(&mut rng, len, -1000, max_gap);
        let lo = seq.first().copied().unwrap_or(0) - 2;
        let hi = seq.last().copied().unwrap_or(0) + 2;
        let span = u64::try_from(hi - lo + 1).unwrap();
        for _ in 0..25 {
            let needle = lo + i64::try_from(rng.below(span)).unwrap();
            assert_equivalent(&seq, needle);
        }
    }
}

#[test]
fn equivalence_at_extreme_values() {
    let seq = [i64::MIN, i64::MIN, -1, 0, 0, 1, i64::MAX, i64::MAX];
    for needle in [i64::MIN, i64::MIN + 1, -1, 0, 1, 2, i64::MAX - 1, i64::MAX] {
        assert_equivalent(&seq, needle);
    }
}

#[test]
fn equivalence_all_equal() {
    for len in 0..50 {
        let seq = vec![7i64; len];
        for needle in [6, 7, 8] {
            assert_equivalent(&seq, needle);
        }
    }
}
