//! Property tests for the vector-add operation.
//!
//! These check the observable contract on every dispatch level the host
//! supports: wrapping sums, commutativity, repeatability, the untouched tail
//! of the output buffer, and both remainder policies.

use proptest::prelude::*;
use simd_practice::{
    vector_add, AddConfig, PracticeError, RemainderPolicy, SimdConfig, SimdDispatcher, LANE_WIDTH,
};

/// Dispatchers covering the detected level and the scalar fallback.
fn dispatchers(policy: RemainderPolicy) -> Vec<SimdDispatcher> {
    let config = AddConfig::default().with_remainder_policy(policy);
    vec![
        SimdDispatcher::with_config(config.clone()),
        SimdDispatcher::with_config(config.with_simd_config(SimdConfig::disabled())),
    ]
}

/// Two equal-length inputs whose length is a multiple of the lane width.
fn lane_aligned_inputs() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    (0usize..64).prop_flat_map(|groups| {
        let len = groups * LANE_WIDTH;
        (
            prop::collection::vec(any::<i32>(), len),
            prop::collection::vec(any::<i32>(), len),
        )
    })
}

proptest! {
    #[test]
    fn prop_sums_wrap((a, b) in lane_aligned_inputs()) {
        for dispatcher in dispatchers(RemainderPolicy::Reject) {
            let mut out = vec![0; a.len()];
            let written = dispatcher.vector_add(&a, &b, &mut out, a.len() as i32).unwrap();
            prop_assert_eq!(written, a.len());
            for i in 0..a.len() {
                prop_assert_eq!(out[i], a[i].wrapping_add(b[i]), "level {}", dispatcher.level());
            }
        }
    }

    #[test]
    fn prop_commutative((a, b) in lane_aligned_inputs()) {
        let n = a.len() as i32;
        let mut ab = vec![0; a.len()];
        let mut ba = vec![0; a.len()];
        vector_add(&a, &b, &mut ab, n).unwrap();
        vector_add(&b, &a, &mut ba, n).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_repeatable((a, b) in lane_aligned_inputs(), seed in any::<i32>()) {
        let n = a.len() as i32;
        let mut first = vec![seed; a.len()];
        let mut second = vec![seed.wrapping_neg(); a.len()];
        vector_add(&a, &b, &mut first, n).unwrap();
        vector_add(&a, &b, &mut second, n).unwrap();
        vector_add(&a, &b, &mut second, n).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_tail_untouched(
        (a, b) in lane_aligned_inputs(),
        extra in 1usize..32,
        fill in any::<i32>(),
    ) {
        let n = a.len();
        let mut out = vec![fill; n + extra];
        vector_add(&a, &b, &mut out, n as i32).unwrap();
        prop_assert!(out[n..].iter().all(|&v| v == fill));
    }

    #[test]
    fn prop_remainder_policies(
        a in prop::collection::vec(any::<i32>(), 1..200),
        fill in any::<i32>(),
    ) {
        let count = a.len();
        let b: Vec<i32> = a.iter().map(|x| x.wrapping_mul(3)).collect();
        let expected_len = count - count % LANE_WIDTH;

        for dispatcher in dispatchers(RemainderPolicy::Reject) {
            let mut out = vec![fill; count];
            let result = dispatcher.vector_add(&a, &b, &mut out, count as i32);
            if count % LANE_WIDTH == 0 {
                prop_assert_eq!(result.unwrap(), count);
            } else {
                let is_invalid_length = matches!(result, Err(PracticeError::InvalidLength { .. }));
                prop_assert!(is_invalid_length);
                prop_assert!(out.iter().all(|&v| v == fill));
            }
        }

        for dispatcher in dispatchers(RemainderPolicy::Truncate) {
            let mut out = vec![fill; count];
            let written = dispatcher.vector_add(&a, &b, &mut out, count as i32).unwrap();
            prop_assert_eq!(written, expected_len);
            for i in 0..expected_len {
                prop_assert_eq!(out[i], a[i].wrapping_add(b[i]));
            }
            prop_assert!(out[expected_len..].iter().all(|&v| v == fill));
        }
    }

    #[test]
    fn prop_negative_count_rejected(count in i32::MIN..0) {
        let a = [1; 8];
        let mut out = [0; 8];
        let result = vector_add(&a, &a, &mut out, count);
        let is_invalid_length = matches!(result, Err(PracticeError::InvalidLength { .. }));
        prop_assert!(is_invalid_length);
        prop_assert_eq!(out, [0; 8]);
    }
}

#[test]
fn test_concrete_scenario() {
    let a = [1, 2, 3, 4, 5, 6, 7, 8];
    let b = [10, 20, 30, 40, 50, 60, 70, 80];
    let mut out = [0; 8];
    vector_add(&a, &b, &mut out, 8).unwrap();
    assert_eq!(out, [11, 22, 33, 44, 55, 66, 77, 88]);
}

#[test]
fn test_overflow_padded_to_lane_width() {
    let a = [i32::MAX, 0, 0, 0];
    let b = [1, 0, 0, 0];
    let mut out = [0; 4];
    vector_add(&a, &b, &mut out, 4).unwrap();
    assert_eq!(out[0], i32::MIN);
}

#[test]
fn test_count_five_on_ten_element_buffers() {
    // Mirrors the legacy driver's buffers: ten slots, eight initialized
    let a = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0];
    let b = [10, 20, 30, 40, 50, 60, 70, 80, 0, 0];

    let mut out = [0; 10];
    let result = vector_add(&a, &b, &mut out, 5);
    assert!(matches!(result, Err(PracticeError::InvalidLength { count: 5, .. })));
    assert_eq!(out, [0; 10]);

    let truncating =
        SimdDispatcher::with_config(AddConfig::default().with_remainder_policy(RemainderPolicy::Truncate));
    assert_eq!(truncating.vector_add(&a, &b, &mut out, 5).unwrap(), 4);
    assert_eq!(out, [11, 22, 33, 44, 0, 0, 0, 0, 0, 0]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_large_input() {
    use simd_practice::par_vector_add;

    let n = 1 << 18;
    let a: Vec<i32> = (0..n).map(|x: i32| x.wrapping_mul(-7)).collect();
    let b: Vec<i32> = (0..n).map(|x: i32| i32::MAX - x).collect();
    let mut out = vec![0; n as usize];

    assert_eq!(par_vector_add(&a, &b, &mut out, n).unwrap(), n as usize);
    for i in 0..n as usize {
        assert_eq!(out[i], a[i].wrapping_add(b[i]));
    }
}
