//! # Gridvid
//!
//! Render sequences of numeric grids into video files.
//!
//! Gridvid takes an in-memory time series of frames — either 1-D slices of
//! scalar values or 2-D scalar fields — draws one animation frame per
//! time-step into a pure-Rust pixel buffer, and streams the frames in order
//! to an encoder (the system `ffmpeg` binary for video output, or a numbered
//! PNG sequence).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gridvid::prelude::*;
//!
//! // A time series of 1-D signal snapshots, rendered as an animated line plot.
//! let frames: Vec<Vec<f32>> = simulate();
//! let stats = create_line_video(&frames, "wave.mp4", None)?;
//! assert_eq!(stats.frames, frames.len());
//! ```
//!
//! The line renderer fixes the vertical axis to the global min/max of the
//! whole input so the scale does not jitter between frames. The
//! filled-contour renderer recomputes its color levels from each frame's own
//! min/max, matching the conventions of interactive contour plotting.
//!
//! Video encoding is delegated to `ffmpeg` over a rawvideo pipe; no codec is
//! reimplemented here.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types used by the renderers.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Validated frame-sequence containers (1-D and 2-D grids).
pub mod grid;

/// Scale functions for data-to-visual mappings.
pub mod scale;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives.
pub mod render;

/// Per-frame animation renderers (line plots, filled contours).
pub mod anim;

/// Frame sinks (ffmpeg pipe, PNG sequence).
pub mod encode;

/// One-shot grid-to-video entry points.
pub mod video;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for gridvid operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use gridvid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::anim::{
        encode_animation, Animation, ContourAnimation, ContourPalette, LineAnimation,
    };
    pub use crate::color::Rgba;
    pub use crate::encode::{EncodeConfig, FfmpegEncoder, FrameSink, PngSequence};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::grid::{FieldGrid, LineGrid};
    pub use crate::scale::{ColorScale, LinearScale, Scale};
    pub use crate::video::{create_field_video, create_line_video, VideoStats};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
