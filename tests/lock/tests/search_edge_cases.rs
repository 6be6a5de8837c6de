//! Fixed edge cases for the needle searches.

use stride_kernel::search::{bisect_by, search_bisect, search_stride, stride_by, Strategy};

const NINE: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

#[test]
fn empty_sequence_is_not_found_for_both() {
    for strategy in Strategy::ALL {
        for needle in [i64::MIN, 0, 4, i64::MAX] {
            assert_eq!(strategy.search(&[], needle), None, "{strategy}");
        }
    }
}

#[test]
fn empty_length_cores_never_probe() {
    let mut probed = false;
    assert_eq!(
        bisect_by(0, |_| {
            probed = true;
            std::cmp::Ordering::Equal
        }),
        None
    );
    assert_eq!(
        stride_by(0, |_| {
            probed = true;
            true
        }),
        0
    );
    assert!(!probed);
}

#[test]
fn single_element() {
    assert_eq!(search_stride(&[4], 4), Some(0));
    assert_eq!(search_stride(&[4], 9), None);
    assert_eq!(search_bisect(&[4], 4), Some(0));
    assert_eq!(search_bisect(&[4], 9), None);
}

#[test]
fn boundary_positions() {
    assert_eq!(search_stride(&[1, 4, 9], 4), Some(1));
    assert_eq!(search_stride(&[1, 4], 4), Some(1));
    assert_eq!(search_stride(&[4, 9], 4), Some(0));
    assert_eq!(search_bisect(&[1, 4, 9], 4), Some(1));
    assert_eq!(search_bisect(&[1, 4], 4), Some(1));
    assert_eq!(search_bisect(&[4, 9], 4), Some(0));
}

#[test]
fn needle_below_all_elements() {
    assert_eq!(search_stride(&NINE, 0), None);
    assert_eq!(search_bisect(&NINE, 0), None);
}

#[test]
fn needle_above_all_elements() {
    assert_eq!(search_stride(&NINE, 14), None);
    assert_eq!(search_bisect(&NINE, 14), None);
}

#[test]
fn found_index_holds_needle() {
    for strategy in Strategy::ALL {
        for needle in NINE {
            let i = strategy.search(&NINE, needle).unwrap();
            assert_eq!(NINE[i], needle, "{strategy}");
        }
    }
}

#[test]
fn gaps_between_elements_are_not_found() {
    let seq = [-10, -5, 0, 5, 10];
    for needle in [-11, -7, -1, 1, 7, 11] {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.search(&seq, needle), None, "{strategy} {needle}");
        }
    }
}
