//! Per-frame animation renderers.
//!
//! An [`Animation`] knows how many frames it has and how to draw any one of
//! them into a [`Framebuffer`]. [`encode_animation`] is the whole control
//! structure of this crate: loop over frame indices in order, draw, hand the
//! finished buffer to a [`FrameSink`].

mod contour;
mod line;

pub use contour::{ContourAnimation, ContourPalette};
pub use line::LineAnimation;

use crate::encode::FrameSink;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use tracing::{debug, trace};

/// A renderable sequence of frames.
pub trait Animation {
    /// Number of frames in the animation.
    fn frame_count(&self) -> usize;

    /// Output width in pixels.
    fn width(&self) -> u32;

    /// Output height in pixels.
    fn height(&self) -> u32;

    /// Playback rate in frames per second.
    fn fps(&self) -> u32;

    /// Draw frame `index` into `fb`, fully replacing its previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error when `index` is out of range or drawing fails.
    fn render_frame(&self, index: usize, fb: &mut Framebuffer) -> Result<()>;
}

/// Render every frame of `anim` in order into `sink`.
///
/// One framebuffer is reused across frames; each `render_frame` call fully
/// replaces the previous frame's pixels. Returns the number of frames
/// written. The caller finishes the sink.
///
/// # Errors
///
/// Propagates the first rendering or sink error; no cleanup of partially
/// written output is attempted.
pub fn encode_animation<A, S>(anim: &A, sink: &mut S) -> Result<usize>
where
    A: Animation,
    S: FrameSink,
{
    let mut fb = Framebuffer::new(anim.width(), anim.height())?;

    debug!(
        frames = anim.frame_count(),
        width = anim.width(),
        height = anim.height(),
        fps = anim.fps(),
        "encoding animation"
    );

    for index in 0..anim.frame_count() {
        anim.render_frame(index, &mut fb)?;
        sink.write_frame(&fb)?;
        trace!(frame = index, "frame written");
    }

    Ok(anim.frame_count())
}
