//! SIMD-accelerated element-wise addition of `i32` slices.
//!
//! The contract works in groups of [`LANE_WIDTH`] elements, one 128-bit
//! register of four `i32` lanes. The module detects available CPU features
//! at runtime and selects the best available kernel:
//!
//! - **AVX-512**: 512-bit vectors on supported x86_64 CPUs
//! - **AVX2**: 256-bit vectors on modern x86_64 CPUs
//! - **SSE2**: 128-bit vectors, x86_64 baseline
//! - **NEON**: 128-bit vectors on ARM64 CPUs
//! - **Scalar**: Fallback for all platforms
//!
//! Every kernel produces the same result: wrapping two's-complement sums.
//!
//! # Example
//!
//! ```rust
//! use simd_practice::simd::SimdDispatcher;
//!
//! let dispatcher = SimdDispatcher::detect();
//! let a = [1, 2, 3, 4];
//! let b = [4, 3, 2, 1];
//! let mut out = [0; 4];
//! dispatcher.vector_add(&a, &b, &mut out, 4).unwrap();
//! assert_eq!(out, [5, 5, 5, 5]);
//! ```

mod dispatcher;
mod scalar;

#[cfg(target_arch = "x86_64")]
mod avx2;

#[cfg(target_arch = "x86_64")]
mod avx512;

#[cfg(target_arch = "x86_64")]
mod sse2;

#[cfg(target_arch = "aarch64")]
mod neon;

/// Number of `i32` elements in one lane-width group (a 128-bit register).
pub const LANE_WIDTH: usize = 4;

#[cfg(feature = "parallel")]
pub use dispatcher::par_vector_add;
pub use dispatcher::{vector_add, CpuFeatures, SimdDispatcher, SimdLevel};
