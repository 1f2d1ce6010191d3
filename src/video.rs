//! One-shot grid-to-video entry points.
//!
//! These functions cover the common case end to end: validate the input
//! grid, build the default animation, spawn the ffmpeg sink, drive the frame
//! loop, and finalize the file. For non-default sizing, palettes, or sinks,
//! compose [`crate::anim`] and [`crate::encode`] directly.

use std::path::Path;

use tracing::debug;

use crate::anim::{encode_animation, Animation, ContourAnimation, LineAnimation};
use crate::encode::{EncodeConfig, FfmpegEncoder, FrameSink};
use crate::error::Result;
use crate::grid::{FieldGrid, LineGrid};

/// Summary of a completed encoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoStats {
    /// Number of frames in the output video.
    pub frames: usize,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

fn encode_to_file<A: Animation, P: AsRef<Path>>(anim: &A, path: P) -> Result<VideoStats> {
    let cfg = EncodeConfig::new(path.as_ref(), anim.width(), anim.height(), anim.fps());
    let mut sink = FfmpegEncoder::new(cfg)?;
    let frames = encode_animation(anim, &mut sink)?;
    sink.finish()?;

    debug!(out = %path.as_ref().display(), frames, "video written");

    Ok(VideoStats {
        frames,
        width: anim.width(),
        height: anim.height(),
    })
}

/// Render a sequence of 1-D frames into a video file of animated line plots.
///
/// Frame `i` of the video is a line plot of `frames[i]` against a linearly
/// spaced horizontal axis spanning `x_lim` (default `(-50, 50)`). The
/// vertical axis is fixed across the whole video to the global min/max of
/// the input.
///
/// # Errors
///
/// Fails fast when the frames have inconsistent lengths, ffmpeg is missing,
/// or the output path is not writable. No partial output is cleaned up.
pub fn create_line_video<P: AsRef<Path>>(
    frames: &[Vec<f32>],
    path: P,
    x_lim: Option<(f32, f32)>,
) -> Result<VideoStats> {
    let grid = LineGrid::from_frames(frames)?;
    let mut anim = LineAnimation::new(grid);
    if let Some(x_lim) = x_lim {
        anim = anim.x_limits(x_lim);
    }
    encode_to_file(&anim.build()?, path)
}

/// Render a sequence of 2-D fields into a video file of filled-contour plots.
///
/// Frame `i` of the video is a filled contour of `frames[i]` with 20 levels
/// and the viridis palette; levels are recomputed from each frame's own
/// min/max.
///
/// # Errors
///
/// Fails fast when the fields have inconsistent shapes, ffmpeg is missing,
/// or the output path is not writable. No partial output is cleaned up.
pub fn create_field_video<P: AsRef<Path>>(frames: &[Vec<Vec<f32>>], path: P) -> Result<VideoStats> {
    let grid = FieldGrid::from_frames(frames)?;
    let anim = ContourAnimation::new(grid).build()?;
    encode_to_file(&anim, path)
}
