//! Error types for gridvid operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridvid operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer, grid, or encode target.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A 1-D frame's length differs from the first frame's length.
    #[error("Frame {frame} has length {actual}, expected {expected}")]
    FrameLengthMismatch {
        /// Index of the offending frame.
        frame: usize,
        /// Length established by the first frame.
        expected: usize,
        /// Actual length of the offending frame.
        actual: usize,
    },

    /// A 2-D frame's shape differs from the first frame's shape.
    #[error(
        "Frame {frame} has shape {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}"
    )]
    FrameShapeMismatch {
        /// Index of the offending frame.
        frame: usize,
        /// Row count established by the first frame.
        expected_rows: usize,
        /// Column count established by the first frame.
        expected_cols: usize,
        /// Actual row count of the offending frame.
        actual_rows: usize,
        /// Actual column count of the offending frame.
        actual_cols: usize,
    },

    /// Flat buffer length disagrees with the declared grid shape.
    #[error("Data length mismatch: expected {expected} values, got {actual}")]
    DataLengthMismatch {
        /// Length implied by the declared shape.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Frame index beyond the end of the grid.
    #[error("Frame index {frame} out of range (grid has {frames} frames)")]
    FrameOutOfRange {
        /// Requested frame index.
        frame: usize,
        /// Number of frames in the grid.
        frames: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Scale domain error (e.g., zero-width axis range).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Encoder failure (missing ffmpeg binary, nonzero exit, closed sink).
    #[error("Encoder error: {0}")]
    Encoder(String),
}
