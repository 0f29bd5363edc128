//! SSE2 implementation of the vector-add kernel for x86_64.
//!
//! SSE2 provides 128-bit vectors, exactly one lane-width group of four
//! `i32` values per instruction. It is part of the x86_64 baseline.
//!
//! # Safety
//!
//! All functions in this module are unsafe and require SSE2 support.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Add two slices element-wise into `out` using SSE2.
///
/// Each iteration loads four lanes from `a` and `b` with unaligned loads,
/// adds them with `paddd` (wrapping), and stores four lanes into `out`.
///
/// # Safety
///
/// The caller must ensure that SSE2 is available on the current CPU and
/// that `a` and `b` are at least as long as `out`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
pub unsafe fn add_i32_sse2(a: &[i32], b: &[i32], out: &mut [i32]) {
    debug_assert!(a.len() >= out.len() && b.len() >= out.len());

    let len = out.len();
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();
    let out_ptr = out.as_mut_ptr();

    let mut i = 0;
    while i + 4 <= len {
        let av = _mm_loadu_si128(a_ptr.add(i) as *const __m128i);
        let bv = _mm_loadu_si128(b_ptr.add(i) as *const __m128i);
        _mm_storeu_si128(out_ptr.add(i) as *mut __m128i, _mm_add_epi32(av, bv));
        i += 4;
    }

    if i < len {
        super::scalar::add_i32_scalar(&a[i..len], &b[i..len], &mut out[i..]);
    }
}
