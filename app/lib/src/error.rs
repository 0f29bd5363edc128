//! Error types for the simd-practice library.
//!
//! Every fallible operation validates its arguments up front and reports
//! problems through [`PracticeError`]. No output buffer is written when
//! validation fails.

use thiserror::Error;

/// Identifies which buffer of a vector-add call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferRole {
    /// The left-hand input (`a`).
    Left,
    /// The right-hand input (`b`).
    Right,
    /// The caller-provided output buffer (`out`).
    Output,
}

impl std::fmt::Display for BufferRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferRole::Left => write!(f, "a"),
            BufferRole::Right => write!(f, "b"),
            BufferRole::Output => write!(f, "out"),
        }
    }
}

/// Main error type for the simd-practice library.
///
/// All operations that can fail return `Result<T, PracticeError>`.
#[derive(Debug, Error)]
pub enum PracticeError {
    /// The requested element count is unusable.
    ///
    /// Raised for a negative count, or for a count that is not a multiple
    /// of the lane width when the remainder policy is `Reject`.
    #[error("Invalid length: count {count} must be non-negative and a multiple of the lane width {lane_width}")]
    InvalidLength {
        /// The count that was requested
        count: i64,
        /// Lane width the count must be a multiple of
        lane_width: usize,
    },

    /// One of the buffers holds fewer elements than the requested count.
    #[error("Buffer too small: `{buffer}` has {len} elements but {count} were requested")]
    BufferTooSmall {
        /// Which buffer is too short
        buffer: BufferRole,
        /// Actual length of that buffer
        len: usize,
        /// Number of elements requested
        count: usize,
    },

    /// An operation that needs at least one element was given none.
    #[error("Input is empty")]
    EmptyInput,

    /// Error parsing a JSON configuration.
    ///
    /// Wraps errors from the `serde_json` crate.
    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// I/O error.
    ///
    /// Wraps errors from standard I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using `PracticeError`.
pub type Result<T> = std::result::Result<T, PracticeError>;
