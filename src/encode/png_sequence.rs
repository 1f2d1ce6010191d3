//! Numbered PNG sequence output.
//!
//! Pure Rust PNG encoding using the `png` crate. Useful as an
//! encoder-independent sink: the frame loop is identical to the ffmpeg path,
//! only the artifact differs.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::encode::FrameSink;
use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// Write a single framebuffer to a PNG file.
///
/// # Errors
///
/// Returns an error if file creation or PNG encoding fails.
pub fn write_png<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    // Compact pixels: the encoder expects rows without stride padding.
    writer.write_image_data(&fb.to_compact_pixels())?;

    Ok(())
}

/// Frame sink that writes `frame_00000.png`, `frame_00001.png`, ... into a
/// directory.
pub struct PngSequence {
    dir: PathBuf,
    next_index: usize,
}

impl PngSequence {
    /// Create the output directory and an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, next_index: 0 })
    }

    /// Path of the frame that `write_frame` will produce next.
    #[must_use]
    pub fn next_frame_path(&self) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", self.next_index))
    }

    /// Number of frames written so far.
    #[must_use]
    pub const fn frames_written(&self) -> usize {
        self.next_index
    }
}

impl FrameSink for PngSequence {
    fn write_frame(&mut self, fb: &Framebuffer) -> Result<()> {
        write_png(fb, self.next_frame_path())?;
        self.next_index += 1;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        debug!(dir = %self.dir.display(), frames = self.next_index, "png sequence finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_write_png_magic_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);
        write_png(&fb, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_sequence_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let mut seq = PngSequence::new(dir.path().join("frames")).unwrap();

        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.clear(Rgba::BLUE);

        for _ in 0..3 {
            seq.write_frame(&fb).unwrap();
        }

        assert_eq!(seq.frames_written(), 3);
        for i in 0..3 {
            assert!(dir
                .path()
                .join("frames")
                .join(format!("frame_{i:05}.png"))
                .exists());
        }
        seq.finish().unwrap();
    }
}
