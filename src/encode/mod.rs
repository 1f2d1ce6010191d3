//! Frame sinks.
//!
//! A [`FrameSink`] receives finished frames strictly in order and turns them
//! into an artifact: an MP4 through the system `ffmpeg` binary, or a numbered
//! PNG sequence for environments without ffmpeg.

mod ffmpeg;
mod png_sequence;

pub use ffmpeg::{is_ffmpeg_available, EncodeConfig, FfmpegEncoder};
pub use png_sequence::{write_png, PngSequence};

use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// An ordered consumer of rendered frames.
pub trait FrameSink {
    /// Append one frame. Frames arrive in playback order.
    ///
    /// # Errors
    ///
    /// Returns an error when the sink cannot accept the frame.
    fn write_frame(&mut self, fb: &Framebuffer) -> Result<()>;

    /// Finalize the artifact. Must be called exactly once, after the last
    /// frame.
    ///
    /// # Errors
    ///
    /// Returns an error when finalization fails; the artifact must not be
    /// treated as complete in that case.
    fn finish(self) -> Result<()>
    where
        Self: Sized;
}
