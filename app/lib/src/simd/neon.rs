//! NEON implementation of the vector-add kernel for ARM64.
//!
//! NEON provides 128-bit vectors: one `int32x4_t` holds exactly one
//! lane-width group.
//!
//! # Safety
//!
//! All functions in this module are unsafe. NEON is mandatory on ARM64, but
//! the functions work through raw pointers into the caller's slices.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Add two slices element-wise into `out` using NEON.
///
/// Each iteration is `vld1q_s32` / `vld1q_s32` / `vaddq_s32` / `vst1q_s32`
/// over one group of four lanes.
///
/// # Safety
///
/// The caller must ensure this is called on an ARM64 platform and that `a`
/// and `b` are at least as long as `out`.
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn add_i32_neon(a: &[i32], b: &[i32], out: &mut [i32]) {
    debug_assert!(a.len() >= out.len() && b.len() >= out.len());

    let len = out.len();
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();
    let out_ptr = out.as_mut_ptr();

    let mut i = 0;
    while i + 4 <= len {
        let av = vld1q_s32(a_ptr.add(i));
        let bv = vld1q_s32(b_ptr.add(i));
        vst1q_s32(out_ptr.add(i), vaddq_s32(av, bv));
        i += 4;
    }

    if i < len {
        super::scalar::add_i32_scalar(&a[i..len], &b[i..len], &mut out[i..]);
    }
}

#[cfg(all(test, target_arch = "aarch64"))]
mod tests {
    use super::*;

    #[test]
    fn test_add_neon() {
        let a = [1, 2, 3, 4, 5, 6, 7, 8];
        let b = [10, 20, 30, 40, 50, 60, 70, 80];
        let mut out = [0; 8];
        unsafe { add_i32_neon(&a, &b, &mut out) };
        assert_eq!(out, [11, 22, 33, 44, 55, 66, 77, 88]);
    }

    #[test]
    fn test_neon_matches_scalar() {
        for size in [0, 4, 12, 64, 1000] {
            let a: Vec<i32> = (0..size as i32).map(|x| x.wrapping_mul(7919)).collect();
            let b: Vec<i32> = (0..size as i32).map(|x| i32::MAX - x).collect();
            let mut scalar = vec![0; size];
            let mut neon = vec![0; size];
            super::super::scalar::add_i32_scalar(&a, &b, &mut scalar);
            unsafe { add_i32_neon(&a, &b, &mut neon) };
            assert_eq!(scalar, neon, "Mismatch for size {}", size);
        }
    }
}
