//! AVX2 implementation of the vector-add kernel for x86_64.
//!
//! AVX2 provides 256-bit vectors, i.e. two lane-width groups (eight `i32`
//! values) per instruction. A trailing single group is finished with SSE2.
//!
//! # Safety
//!
//! All functions in this module are unsafe and require AVX2 support.
//! The caller must verify that AVX2 is available before calling them.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Add two slices element-wise into `out` using AVX2.
///
/// # Safety
///
/// The caller must ensure that AVX2 is available on the current CPU and
/// that `a` and `b` are at least as long as `out`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn add_i32_avx2(a: &[i32], b: &[i32], out: &mut [i32]) {
    debug_assert!(a.len() >= out.len() && b.len() >= out.len());

    let len = out.len();
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();
    let out_ptr = out.as_mut_ptr();

    let mut i = 0;
    while i + 8 <= len {
        let av = _mm256_loadu_si256(a_ptr.add(i) as *const __m256i);
        let bv = _mm256_loadu_si256(b_ptr.add(i) as *const __m256i);
        _mm256_storeu_si256(out_ptr.add(i) as *mut __m256i, _mm256_add_epi32(av, bv));
        i += 8;
    }

    // AVX2 implies SSE2
    if i < len {
        super::sse2::add_i32_sse2(&a[i..len], &b[i..len], &mut out[i..]);
    }
}
