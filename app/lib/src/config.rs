//! Configuration types for the simd-practice library.
//!
//! This module provides configuration structs for controlling how vector
//! additions are validated, which SIMD instruction sets may be used, and when
//! the parallel path kicks in. All types deserialize from JSON; missing fields
//! take their default values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What to do when the requested count is not a multiple of the lane width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemainderPolicy {
    /// Fail with `InvalidLength` before touching the output.
    #[default]
    Reject,
    /// Process only the full lane-width groups and ignore the remainder.
    ///
    /// Output elements past the last full group are left untouched.
    Truncate,
}

impl std::fmt::Display for RemainderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemainderPolicy::Reject => write!(f, "reject"),
            RemainderPolicy::Truncate => write!(f, "truncate"),
        }
    }
}

/// Configuration for vector-add operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddConfig {
    /// Handling of counts that are not a multiple of the lane width.
    ///
    /// Default: `Reject`
    pub remainder: RemainderPolicy,

    /// SIMD instruction set configuration.
    pub simd: SimdConfig,

    /// Minimum number of processed elements before `par_vector_add`
    /// splits the work across threads.
    ///
    /// Default: 65,536 elements
    pub parallel_threshold: usize,
}

impl Default for AddConfig {
    fn default() -> Self {
        Self {
            remainder: RemainderPolicy::Reject,
            simd: SimdConfig::default(),
            parallel_threshold: 65_536,
        }
    }
}

impl AddConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the remainder policy.
    pub fn with_remainder_policy(mut self, policy: RemainderPolicy) -> Self {
        self.remainder = policy;
        self
    }

    /// Set the SIMD configuration.
    pub fn with_simd_config(mut self, config: SimdConfig) -> Self {
        self.simd = config;
        self
    }

    /// Set the parallel threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Parse a configuration from a JSON document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simd_practice::config::{AddConfig, RemainderPolicy};
    ///
    /// let config = AddConfig::from_json(r#"{"remainder": "truncate"}"#).unwrap();
    /// assert_eq!(config.remainder, RemainderPolicy::Truncate);
    /// assert!(config.simd.enable_avx2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// SIMD instruction set configuration.
///
/// Controls which SIMD instruction sets are enabled for hardware acceleration.
/// The library detects available CPU features at runtime and uses the best
/// instruction set that is both present and enabled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimdConfig {
    /// Enable AVX-512 instructions (x86_64 only).
    ///
    /// Default: true
    pub enable_avx512: bool,

    /// Enable AVX2 instructions (x86_64 only).
    ///
    /// Default: true
    pub enable_avx2: bool,

    /// Enable SSE2 instructions (x86_64 only).
    ///
    /// SSE2 is part of the x86_64 baseline, so this is the 128-bit path
    /// every x86_64 CPU can take.
    ///
    /// Default: true
    pub enable_sse2: bool,

    /// Enable NEON instructions (ARM64 only).
    ///
    /// Default: true
    pub enable_neon: bool,
}

impl Default for SimdConfig {
    fn default() -> Self {
        Self {
            enable_avx512: true,
            enable_avx2: true,
            enable_sse2: true,
            enable_neon: true,
        }
    }
}

impl SimdConfig {
    /// Create a new SIMD configuration with all instruction sets enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with all SIMD instruction sets disabled.
    ///
    /// This forces the scalar implementation.
    pub fn disabled() -> Self {
        Self {
            enable_avx512: false,
            enable_avx2: false,
            enable_sse2: false,
            enable_neon: false,
        }
    }

    /// Enable or disable AVX-512 instructions.
    pub fn with_avx512(mut self, enable: bool) -> Self {
        self.enable_avx512 = enable;
        self
    }

    /// Enable or disable AVX2 instructions.
    pub fn with_avx2(mut self, enable: bool) -> Self {
        self.enable_avx2 = enable;
        self
    }

    /// Enable or disable SSE2 instructions.
    pub fn with_sse2(mut self, enable: bool) -> Self {
        self.enable_sse2 = enable;
        self
    }

    /// Enable or disable NEON instructions.
    pub fn with_neon(mut self, enable: bool) -> Self {
        self.enable_neon = enable;
        self
    }

    /// Check if any SIMD instruction set is enabled.
    pub fn is_any_enabled(&self) -> bool {
        self.enable_avx512 || self.enable_avx2 || self.enable_sse2 || self.enable_neon
    }
}
