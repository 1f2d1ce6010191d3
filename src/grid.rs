//! Validated frame-sequence containers.
//!
//! A grid is the full ordered sequence of frames forming the input to a
//! rendering call. Shape consistency is checked once at construction, so the
//! renderers never see a malformed frame and no partial output file can be
//! produced from bad input.

use crate::error::{Error, Result};
use trueno::Vector;

/// Min/max of a slice using trueno's SIMD reductions.
fn value_extent_of(values: &[f32]) -> (f32, f32) {
    let v = Vector::from_vec(values.to_vec());
    let min = v.min().unwrap_or(f32::INFINITY);
    let max = v.max().unwrap_or(f32::NEG_INFINITY);
    (min, max)
}

// ============================================================================
// 1-D grid: frames x length
// ============================================================================

/// An ordered sequence of equal-length 1-D frames (a time series of signal
/// snapshots).
#[derive(Debug, Clone)]
pub struct LineGrid {
    /// All frames concatenated, frame-major.
    data: Vec<f32>,
    frames: usize,
    frame_len: usize,
}

impl LineGrid {
    /// Build a grid from per-frame value vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for an empty sequence or empty frames and
    /// [`Error::FrameLengthMismatch`] when any frame's length differs from
    /// the first frame's.
    pub fn from_frames(frames: &[Vec<f32>]) -> Result<Self> {
        let first_len = frames.first().map_or(0, Vec::len);
        if first_len == 0 {
            return Err(Error::EmptyData);
        }

        for (i, frame) in frames.iter().enumerate() {
            if frame.len() != first_len {
                return Err(Error::FrameLengthMismatch {
                    frame: i,
                    expected: first_len,
                    actual: frame.len(),
                });
            }
        }

        Ok(Self {
            data: frames.iter().flatten().copied().collect(),
            frames: frames.len(),
            frame_len: first_len,
        })
    }

    /// Build a grid from a flat frame-major buffer.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty shape or when the buffer length does not
    /// equal `frames * frame_len`.
    pub fn from_flat(data: Vec<f32>, frames: usize, frame_len: usize) -> Result<Self> {
        if frames == 0 || frame_len == 0 {
            return Err(Error::EmptyData);
        }

        let expected = frames * frame_len;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            frames,
            frame_len,
        })
    }

    /// Number of frames.
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.frames
    }

    /// Length of every frame.
    #[must_use]
    pub const fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Values of frame `i`, or `None` when out of range.
    #[must_use]
    pub fn frame(&self, i: usize) -> Option<&[f32]> {
        if i >= self.frames {
            return None;
        }
        let start = i * self.frame_len;
        Some(&self.data[start..start + self.frame_len])
    }

    /// Global (min, max) over every value in every frame.
    ///
    /// This is the fixed vertical extent of a line animation: computed once,
    /// shared by all frames.
    #[must_use]
    pub fn value_extent(&self) -> (f32, f32) {
        value_extent_of(&self.data)
    }
}

// ============================================================================
// 2-D grid: frames x rows x cols
// ============================================================================

/// An ordered sequence of identically shaped 2-D scalar fields.
#[derive(Debug, Clone)]
pub struct FieldGrid {
    /// All frames concatenated, frame-major with row-major frames.
    data: Vec<f32>,
    frames: usize,
    rows: usize,
    cols: usize,
}

impl FieldGrid {
    /// Build a grid from per-frame row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for an empty sequence or empty fields and
    /// [`Error::FrameShapeMismatch`] when any frame's shape (including a
    /// ragged row) differs from the first frame's.
    pub fn from_frames(frames: &[Vec<Vec<f32>>]) -> Result<Self> {
        let rows = frames.first().map_or(0, Vec::len);
        let cols = frames
            .first()
            .and_then(|f| f.first())
            .map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyData);
        }

        for (i, field) in frames.iter().enumerate() {
            if field.len() != rows {
                return Err(Error::FrameShapeMismatch {
                    frame: i,
                    expected_rows: rows,
                    expected_cols: cols,
                    actual_rows: field.len(),
                    actual_cols: field.first().map_or(0, Vec::len),
                });
            }
            for row in field {
                if row.len() != cols {
                    return Err(Error::FrameShapeMismatch {
                        frame: i,
                        expected_rows: rows,
                        expected_cols: cols,
                        actual_rows: field.len(),
                        actual_cols: row.len(),
                    });
                }
            }
        }

        Ok(Self {
            data: frames.iter().flatten().flatten().copied().collect(),
            frames: frames.len(),
            rows,
            cols,
        })
    }

    /// Build a grid from a flat frame-major, row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty shape or when the buffer length does not
    /// equal `frames * rows * cols`.
    pub fn from_flat(data: Vec<f32>, frames: usize, rows: usize, cols: usize) -> Result<Self> {
        if frames == 0 || rows == 0 || cols == 0 {
            return Err(Error::EmptyData);
        }

        let expected = frames * rows * cols;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            frames,
            rows,
            cols,
        })
    }

    /// Number of frames.
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.frames
    }

    /// Rows per frame.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Columns per frame.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major values of frame `i`, or `None` when out of range.
    #[must_use]
    pub fn frame(&self, i: usize) -> Option<&[f32]> {
        if i >= self.frames {
            return None;
        }
        let frame_len = self.rows * self.cols;
        let start = i * frame_len;
        Some(&self.data[start..start + frame_len])
    }

    /// (min, max) of frame `i` alone, or `None` when out of range.
    ///
    /// Contour levels are derived from this per-frame extent, not from the
    /// whole grid.
    #[must_use]
    pub fn frame_extent(&self, i: usize) -> Option<(f32, f32)> {
        self.frame(i).map(value_extent_of)
    }
}
