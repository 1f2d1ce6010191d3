//! MP4 encoding through the system `ffmpeg` binary.
//!
//! Raw RGBA frames are piped to a spawned `ffmpeg` process over stdin and
//! encoded as libx264/yuv420p. Using the system binary avoids native FFmpeg
//! dev header/lib requirements; the cost is a hard runtime dependency on
//! `ffmpeg` being on PATH, surfaced as an error before any frame is rendered.

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use tracing::debug;

use crate::encode::FrameSink;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;

/// Configuration for one encoding run.
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    /// Frame width in pixels. Must be even for yuv420p output.
    pub width: u32,
    /// Frame height in pixels. Must be even for yuv420p output.
    pub height: u32,
    /// Playback rate in frames per second.
    pub fps: u32,
    /// Output file path; the container format follows its extension.
    pub out_path: PathBuf,
    /// Overwrite an existing file at `out_path`.
    pub overwrite: bool,
}

impl EncodeConfig {
    /// Config for an output file with overwrite enabled.
    #[must_use]
    pub fn new(out_path: impl Into<PathBuf>, width: u32, height: u32, fps: u32) -> Self {
        Self {
            width,
            height,
            fps,
            out_path: out_path.into(),
            overwrite: true,
        }
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for zero or odd dimensions or a zero frame rate.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.width % 2 != 0 || self.height % 2 != 0 {
            // yuv420p subsampling requires even dimensions.
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.fps == 0 {
            return Err(Error::Encoder("fps must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// Whether an `ffmpeg` binary responds on PATH.
#[must_use]
pub fn is_ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Frame sink that pipes raw RGBA frames to a spawned `ffmpeg`.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    child: Child,
    stdin: Option<ChildStdin>,
    frames_written: usize,
}

impl FfmpegEncoder {
    /// Spawn ffmpeg and prepare to receive frames.
    ///
    /// # Errors
    ///
    /// Fails fast when the config is invalid, the output path is occupied and
    /// `overwrite` is off, or ffmpeg is missing from PATH.
    pub fn new(cfg: EncodeConfig) -> Result<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(Error::Encoder(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        if !is_ffmpeg_available() {
            return Err(Error::Encoder(
                "ffmpeg is required for video encoding, but was not found on PATH".to_string(),
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        cmd.arg(if cfg.overwrite { "-y" } else { "-n" });

        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &cfg.fps.to_string(),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ])
        .arg(&cfg.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            Error::Encoder(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Encoder("failed to open ffmpeg stdin".to_string()))?;

        debug!(
            out = %cfg.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            fps = cfg.fps,
            "ffmpeg spawned"
        );

        Ok(Self {
            cfg,
            child,
            stdin: Some(stdin),
            frames_written: 0,
        })
    }

    /// Number of frames written so far.
    #[must_use]
    pub const fn frames_written(&self) -> usize {
        self.frames_written
    }
}

impl FrameSink for FfmpegEncoder {
    fn write_frame(&mut self, fb: &Framebuffer) -> Result<()> {
        if fb.width() != self.cfg.width || fb.height() != self.cfg.height {
            return Err(Error::InvalidDimensions {
                width: fb.width(),
                height: fb.height(),
            });
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(Error::Encoder("encoder is already finalized".to_string()));
        };

        stdin
            .write_all(&fb.to_compact_pixels())
            .map_err(|e| Error::Encoder(format!("failed to write frame to ffmpeg stdin: {e}")))?;

        self.frames_written += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        drop(self.stdin.take());

        let output = self
            .child
            .wait_with_output()
            .map_err(|e| Error::Encoder(format!("failed to wait for ffmpeg: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Encoder(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        debug!(
            out = %self.cfg.out_path.display(),
            frames = self.frames_written,
            "ffmpeg finished"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_zero_dimensions() {
        assert!(EncodeConfig::new("out.mp4", 0, 10, 30).validate().is_err());
        assert!(EncodeConfig::new("out.mp4", 10, 0, 30).validate().is_err());
    }

    #[test]
    fn test_config_rejects_odd_dimensions() {
        assert!(EncodeConfig::new("out.mp4", 11, 10, 30).validate().is_err());
        assert!(EncodeConfig::new("out.mp4", 10, 11, 30).validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_fps() {
        assert!(EncodeConfig::new("out.mp4", 10, 10, 0).validate().is_err());
    }

    #[test]
    fn test_config_accepts_even_dimensions() {
        assert!(EncodeConfig::new("out.mp4", 1000, 600, 20).validate().is_ok());
    }
}
