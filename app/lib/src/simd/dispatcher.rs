//! SIMD dispatcher with runtime CPU feature detection.
//!
//! This module provides the main entry point for the vector-add operation,
//! validating arguments and then selecting the best available kernel based
//! on CPU features and configuration.

use std::sync::OnceLock;

use log::{debug, trace};

use super::LANE_WIDTH;
use crate::config::{AddConfig, RemainderPolicy};
use crate::error::{BufferRole, PracticeError, Result};

/// Detected CPU features for SIMD acceleration.
///
/// This struct holds the results of runtime CPU feature detection,
/// indicating which SIMD instruction sets are available on the current CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatures {
    /// AVX-512F (Foundation) is available (x86_64 only).
    pub avx512: bool,
    /// AVX2 is available (x86_64 only).
    pub avx2: bool,
    /// SSE2 is available (x86_64 only).
    pub sse2: bool,
    /// NEON is available (ARM64 only).
    pub neon: bool,
}

impl CpuFeatures {
    /// Detect CPU features at runtime.
    ///
    /// Reports no features when the crate is built without the `simd`
    /// feature.
    #[cfg(target_arch = "x86_64")]
    pub fn detect() -> Self {
        if !cfg!(feature = "simd") {
            return Self::none();
        }
        Self {
            avx512: std::arch::is_x86_feature_detected!("avx512f")
                && std::arch::is_x86_feature_detected!("avx2"),
            avx2: std::arch::is_x86_feature_detected!("avx2"),
            sse2: std::arch::is_x86_feature_detected!("sse2"),
            neon: false,
        }
    }

    /// Detect CPU features at runtime (ARM64 version).
    #[cfg(target_arch = "aarch64")]
    pub fn detect() -> Self {
        if !cfg!(feature = "simd") {
            return Self::none();
        }
        // NEON is mandatory on ARM64
        Self {
            avx512: false,
            avx2: false,
            sse2: false,
            neon: true,
        }
    }

    /// Detect CPU features at runtime (fallback for other architectures).
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    pub fn detect() -> Self {
        Self::none()
    }

    /// Create a CpuFeatures with no SIMD support.
    pub fn none() -> Self {
        Self {
            avx512: false,
            avx2: false,
            sse2: false,
            neon: false,
        }
    }

    /// Check if any SIMD instruction set is available.
    pub fn has_any(&self) -> bool {
        self.avx512 || self.avx2 || self.sse2 || self.neon
    }
}

impl Default for CpuFeatures {
    fn default() -> Self {
        Self::detect()
    }
}

/// The SIMD implementation level being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    /// AVX-512 (512-bit vectors, x86_64).
    Avx512,
    /// AVX2 (256-bit vectors, x86_64).
    Avx2,
    /// SSE2 (128-bit vectors, x86_64).
    Sse2,
    /// NEON (128-bit vectors, ARM64).
    Neon,
    /// Scalar fallback (no SIMD).
    Scalar,
}

impl SimdLevel {
    /// Number of `i32` lanes one instruction of this level operates on.
    ///
    /// The scalar fallback still walks the data in groups of
    /// [`LANE_WIDTH`], so it reports the contract lane width.
    pub fn vector_width(&self) -> usize {
        match self {
            SimdLevel::Avx512 => 16,
            SimdLevel::Avx2 => 8,
            SimdLevel::Sse2 | SimdLevel::Neon | SimdLevel::Scalar => LANE_WIDTH,
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimdLevel::Avx512 => write!(f, "AVX-512"),
            SimdLevel::Avx2 => write!(f, "AVX2"),
            SimdLevel::Sse2 => write!(f, "SSE2"),
            SimdLevel::Neon => write!(f, "NEON"),
            SimdLevel::Scalar => write!(f, "Scalar"),
        }
    }
}

/// SIMD dispatcher for the vector-add operation.
///
/// The dispatcher validates every call against its [`AddConfig`] and runs
/// the best kernel allowed by runtime CPU detection and configuration.
///
/// # Example
///
/// ```rust
/// use simd_practice::simd::SimdDispatcher;
///
/// let dispatcher = SimdDispatcher::detect();
/// println!("Using SIMD level: {}", dispatcher.level());
///
/// let a = [1, 2, 3, 4, 5, 6, 7, 8];
/// let b = [10, 20, 30, 40, 50, 60, 70, 80];
/// let mut out = [0; 8];
/// let written = dispatcher.vector_add(&a, &b, &mut out, 8).unwrap();
/// assert_eq!(written, 8);
/// assert_eq!(out, [11, 22, 33, 44, 55, 66, 77, 88]);
/// ```
#[derive(Debug, Clone)]
pub struct SimdDispatcher {
    /// Detected CPU features.
    features: CpuFeatures,
    /// User configuration.
    config: AddConfig,
    /// The selected SIMD level.
    level: SimdLevel,
}

impl SimdDispatcher {
    /// Create a new dispatcher with automatic CPU detection and default
    /// configuration.
    pub fn detect() -> Self {
        Self::with_config(AddConfig::default())
    }

    /// Create a new dispatcher with the given configuration.
    pub fn with_config(config: AddConfig) -> Self {
        Self::with_features(CpuFeatures::detect(), config)
    }

    /// Create a dispatcher that only uses the scalar kernel.
    pub fn scalar_only() -> Self {
        Self::with_features(CpuFeatures::none(), AddConfig::default())
    }

    /// Create a dispatcher for an explicit feature set.
    ///
    /// Claiming features the CPU lacks is not allowed, hence crate-private.
    pub(crate) fn with_features(features: CpuFeatures, config: AddConfig) -> Self {
        let level = Self::select_level(&features, &config);
        debug!(
            "Selected SIMD level {} (features: {:?}, remainder: {})",
            level, features, config.remainder
        );
        Self {
            features,
            config,
            level,
        }
    }

    /// Select the best SIMD level based on features and configuration.
    fn select_level(features: &CpuFeatures, config: &AddConfig) -> SimdLevel {
        let simd = &config.simd;
        // Priority: AVX-512 > AVX2 > SSE2 > NEON > Scalar
        if features.avx512 && simd.enable_avx512 {
            SimdLevel::Avx512
        } else if features.avx2 && simd.enable_avx2 {
            SimdLevel::Avx2
        } else if features.sse2 && simd.enable_sse2 {
            SimdLevel::Sse2
        } else if features.neon && simd.enable_neon {
            SimdLevel::Neon
        } else {
            SimdLevel::Scalar
        }
    }

    /// Get the detected CPU features.
    pub fn features(&self) -> CpuFeatures {
        self.features
    }

    /// Get the current configuration.
    pub fn config(&self) -> &AddConfig {
        &self.config
    }

    /// Get the selected SIMD level.
    pub fn level(&self) -> SimdLevel {
        self.level
    }

    /// Check if SIMD acceleration is being used.
    pub fn is_accelerated(&self) -> bool {
        self.level != SimdLevel::Scalar
    }

    /// Add `a` and `b` element-wise into `out` for the first `count` elements.
    ///
    /// For every `i` in `[0, processed)`, `out[i] = a[i].wrapping_add(b[i])`.
    /// Elements of `out` at or beyond `processed` are never written.
    ///
    /// # Arguments
    ///
    /// * `a` - Left input, at least `count` elements
    /// * `b` - Right input, at least `count` elements
    /// * `out` - Output buffer, at least `count` elements
    /// * `count` - Number of leading elements to add
    ///
    /// # Returns
    ///
    /// The number of elements written. This is `count` unless the remainder
    /// policy is `Truncate`, in which case it is `count` rounded down to a
    /// multiple of [`LANE_WIDTH`].
    ///
    /// # Errors
    ///
    /// * [`PracticeError::InvalidLength`] if `count` is negative, or not a
    ///   multiple of [`LANE_WIDTH`] under `RemainderPolicy::Reject`
    /// * [`PracticeError::BufferTooSmall`] if any buffer is shorter than `count`
    ///
    /// Nothing is written when an error is returned.
    pub fn vector_add(&self, a: &[i32], b: &[i32], out: &mut [i32], count: i32) -> Result<usize> {
        let n = validate(a.len(), b.len(), out.len(), count, self.config.remainder)?;
        trace!("vector_add: {} of {} elements via {}", n, count, self.level);
        self.add_validated(&a[..n], &b[..n], &mut out[..n]);
        Ok(n)
    }

    /// Parallel variant of [`vector_add`](Self::vector_add).
    ///
    /// Validation and results are identical. When the processed length
    /// reaches [`AddConfig::parallel_threshold`] the range is split into
    /// lane-aligned chunks that run on the rayon thread pool; below the
    /// threshold this is the sequential path.
    #[cfg(feature = "parallel")]
    pub fn par_vector_add(
        &self,
        a: &[i32],
        b: &[i32],
        out: &mut [i32],
        count: i32,
    ) -> Result<usize> {
        use rayon::prelude::*;

        let n = validate(a.len(), b.len(), out.len(), count, self.config.remainder)?;
        if n < self.config.parallel_threshold.max(1) {
            self.add_validated(&a[..n], &b[..n], &mut out[..n]);
            return Ok(n);
        }

        let threads = rayon::current_num_threads().max(1);
        let chunk = n.div_ceil(threads).next_multiple_of(LANE_WIDTH);
        trace!(
            "par_vector_add: {} elements in chunks of {} via {}",
            n,
            chunk,
            self.level
        );

        out[..n]
            .par_chunks_mut(chunk)
            .zip(a[..n].par_chunks(chunk))
            .zip(b[..n].par_chunks(chunk))
            .for_each(|((dst, x), y)| self.add_validated(x, y, dst));
        Ok(n)
    }

    /// Run the selected kernel over equal-length, already validated slices.
    fn add_validated(&self, a: &[i32], b: &[i32], out: &mut [i32]) {
        match self.level {
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx512 => {
                // Safety: We've verified AVX-512F and AVX2 are available
                unsafe { super::avx512::add_i32_avx512(a, b, out) }
            }
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx2 => {
                // Safety: We've verified AVX2 is available
                unsafe { super::avx2::add_i32_avx2(a, b, out) }
            }
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Sse2 => {
                // Safety: We've verified SSE2 is available
                unsafe { super::sse2::add_i32_sse2(a, b, out) }
            }
            #[cfg(target_arch = "aarch64")]
            SimdLevel::Neon => {
                // Safety: NEON is always available on ARM64
                unsafe { super::neon::add_i32_neon(a, b, out) }
            }
            _ => super::scalar::add_i32_scalar(a, b, out),
        }
    }
}

impl Default for SimdDispatcher {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check a vector-add request and return how many elements to process.
///
/// Order: sign of `count`, then buffer lengths (`a`, `b`, `out`), then the
/// lane-width multiple. Buffers are checked against the full `count` even
/// when the remainder would be truncated.
fn validate(
    a_len: usize,
    b_len: usize,
    out_len: usize,
    count: i32,
    policy: RemainderPolicy,
) -> Result<usize> {
    let invalid = || PracticeError::InvalidLength {
        count: i64::from(count),
        lane_width: LANE_WIDTH,
    };
    let requested = usize::try_from(count).map_err(|_| invalid())?;

    for (buffer, len) in [
        (BufferRole::Left, a_len),
        (BufferRole::Right, b_len),
        (BufferRole::Output, out_len),
    ] {
        if len < requested {
            return Err(PracticeError::BufferTooSmall {
                buffer,
                len,
                count: requested,
            });
        }
    }

    let remainder = requested % LANE_WIDTH;
    match policy {
        RemainderPolicy::Reject if remainder != 0 => Err(invalid()),
        _ => Ok(requested - remainder),
    }
}

/// Process-wide dispatcher with detected features and default configuration.
fn default_dispatcher() -> &'static SimdDispatcher {
    static DISPATCHER: OnceLock<SimdDispatcher> = OnceLock::new();
    DISPATCHER.get_or_init(SimdDispatcher::detect)
}

/// Add `a` and `b` element-wise into `out` for the first `count` elements.
///
/// Uses a lazily created, process-wide [`SimdDispatcher`] with the default
/// configuration, so `count` must be a multiple of [`LANE_WIDTH`]. See
/// [`SimdDispatcher::vector_add`] for the full contract.
///
/// # Example
///
/// ```rust
/// use simd_practice::vector_add;
///
/// let a = [i32::MAX, 0, 0, 0];
/// let b = [1, 0, 0, 0];
/// let mut out = [0; 4];
/// vector_add(&a, &b, &mut out, 4).unwrap();
/// assert_eq!(out[0], i32::MIN);
/// ```
pub fn vector_add(a: &[i32], b: &[i32], out: &mut [i32], count: i32) -> Result<usize> {
    default_dispatcher().vector_add(a, b, out, count)
}

/// Parallel counterpart of [`vector_add`] using the process-wide dispatcher.
#[cfg(feature = "parallel")]
pub fn par_vector_add(a: &[i32], b: &[i32], out: &mut [i32], count: i32) -> Result<usize> {
    default_dispatcher().par_vector_add(a, b, out, count)
}
