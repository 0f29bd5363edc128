//! # SIMD Practice Library
//!
//! Element-wise addition of `i32` slices in lane-width groups, accelerated
//! with SIMD instructions where the CPU provides them, plus the small sort and
//! search helpers the practice driver exercises.
//!
//! ## Features
//!
//! - **Checked vector add**: buffer lengths and counts are validated before
//!   anything is written; misuse becomes an error instead of a memory hazard
//! - **Runtime dispatch**: AVX-512, AVX2, SSE2, or NEON when available, with a
//!   scalar fallback that gives identical results
//! - **Wrapping arithmetic**: two's-complement overflow, never saturation
//! - **Parallel path**: large additions can be split across the rayon pool
//!   (`parallel` feature)
//! - **Thread-safe**: All public types implement `Send + Sync`
//!
//! ## Quick Start
//!
//! ```rust
//! use simd_practice::vector_add;
//!
//! let a = [1, 2, 3, 4, 5, 6, 7, 8];
//! let b = [10, 20, 30, 40, 50, 60, 70, 80];
//! let mut out = [0; 8];
//!
//! let written = vector_add(&a, &b, &mut out, 8)?;
//! assert_eq!(written, 8);
//! assert_eq!(out, [11, 22, 33, 44, 55, 66, 77, 88]);
//! # Ok::<(), simd_practice::PracticeError>(())
//! ```
//!
//! ### Configuration
//!
//! The default configuration rejects counts that are not a multiple of
//! [`LANE_WIDTH`]. The legacy truncating behavior is available explicitly:
//!
//! ```rust
//! use simd_practice::{AddConfig, RemainderPolicy, SimdDispatcher};
//!
//! let config = AddConfig::default().with_remainder_policy(RemainderPolicy::Truncate);
//! let dispatcher = SimdDispatcher::with_config(config);
//!
//! let a = [1, 1, 1, 1, 1];
//! let b = [2, 2, 2, 2, 2];
//! let mut out = [0; 5];
//! assert_eq!(dispatcher.vector_add(&a, &b, &mut out, 5)?, 4);
//! assert_eq!(out, [3, 3, 3, 3, 0]);
//! # Ok::<(), simd_practice::PracticeError>(())
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use simd_practice::{vector_add, BufferRole, PracticeError};
//!
//! let a = [1, 2, 3, 4];
//! let b = [1, 2, 3, 4];
//! let mut out = [0; 4];
//!
//! match vector_add(&a, &b, &mut out, 8) {
//!     Err(PracticeError::BufferTooSmall { buffer, len, count }) => {
//!         assert_eq!(buffer, BufferRole::Left);
//!         assert_eq!((len, count), (4, 8));
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! ### Sorting and Searching
//!
//! ```rust
//! use simd_practice::dsa::{binary_search, SortAlgorithm};
//!
//! let mut values = vec![42u16, 7, 19, 3];
//! SortAlgorithm::Merge.sort(&mut values);
//! assert_eq!(binary_search(&values, &19), Some(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod config;
pub mod dsa;
pub mod error;
pub mod simd;

// Re-exports for convenience
pub use config::{AddConfig, RemainderPolicy, SimdConfig};
pub use dsa::{binary_search, merge_sort, quick_sort, SortAlgorithm};
pub use error::{BufferRole, PracticeError, Result};
#[cfg(feature = "parallel")]
pub use simd::par_vector_add;
pub use simd::{vector_add, CpuFeatures, SimdDispatcher, SimdLevel, LANE_WIDTH};
