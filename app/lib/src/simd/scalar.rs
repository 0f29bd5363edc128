//! Scalar (non-SIMD) implementation of the vector-add kernel.
//!
//! This is the portable baseline and the fallback when no SIMD instruction
//! set is available or enabled. It mirrors the vector backends by walking the
//! input in lane-width groups, so every backend sees the same data layout.

use super::LANE_WIDTH;

/// Add two slices element-wise into `out` (scalar implementation).
///
/// Processes `out.len()` elements in groups of [`LANE_WIDTH`], with wrapping
/// two's-complement arithmetic. Any trailing elements that do not fill a
/// whole group are added one at a time.
///
/// `a` and `b` must be at least as long as `out`.
pub fn add_i32_scalar(a: &[i32], b: &[i32], out: &mut [i32]) {
    debug_assert!(a.len() >= out.len() && b.len() >= out.len());

    let len = out.len();
    let grouped = len - len % LANE_WIDTH;
    let (head, tail) = out.split_at_mut(grouped);

    for ((dst, x), y) in head
        .chunks_exact_mut(LANE_WIDTH)
        .zip(a[..grouped].chunks_exact(LANE_WIDTH))
        .zip(b[..grouped].chunks_exact(LANE_WIDTH))
    {
        add_lanes(dst, x, y);
    }

    for ((dst, x), y) in tail.iter_mut().zip(&a[grouped..len]).zip(&b[grouped..len]) {
        *dst = x.wrapping_add(*y);
    }
}

/// One lane-width group: the scalar stand-in for a 128-bit load/add/store.
#[inline(always)]
fn add_lanes(dst: &mut [i32], x: &[i32], y: &[i32]) {
    for lane in 0..LANE_WIDTH {
        dst[lane] = x[lane].wrapping_add(y[lane]);
    }
}
