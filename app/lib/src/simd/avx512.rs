//! AVX-512 implementation of the vector-add kernel for x86_64.
//!
//! AVX-512F provides 512-bit vectors, four lane-width groups (sixteen `i32`
//! values) per instruction. Leftover groups fall through to the AVX2 and
//! SSE2 paths.
//!
//! # Safety
//!
//! All functions in this module are unsafe and require AVX-512F support.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Add two slices element-wise into `out` using AVX-512F.
///
/// # Safety
///
/// The caller must ensure that AVX-512F and AVX2 are available on the
/// current CPU and that `a` and `b` are at least as long as `out`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f,avx2")]
pub unsafe fn add_i32_avx512(a: &[i32], b: &[i32], out: &mut [i32]) {
    debug_assert!(a.len() >= out.len() && b.len() >= out.len());

    let len = out.len();
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();
    let out_ptr = out.as_mut_ptr();

    let mut i = 0;
    while i + 16 <= len {
        let av = _mm512_loadu_epi32(a_ptr.add(i));
        let bv = _mm512_loadu_epi32(b_ptr.add(i));
        _mm512_storeu_epi32(out_ptr.add(i), _mm512_add_epi32(av, bv));
        i += 16;
    }

    if i < len {
        super::avx2::add_i32_avx2(&a[i..len], &b[i..len], &mut out[i..]);
    }
}
