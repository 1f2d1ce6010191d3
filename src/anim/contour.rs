//! Animated filled-contour plot over a 2-D grid.
//!
//! Frame `i` of the animation renders frame `i` of the grid as filled
//! contour bands: the field is bilinearly interpolated across the plot area
//! and quantized into a fixed number of equal-width value levels, each painted
//! with one palette color. Levels are recomputed from each frame's own
//! min/max, so the color mapping is consistent within a frame but not across
//! frames — the same convention interactive contour plotting uses when the
//! color scale is not pinned.

use crate::anim::Animation;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::grid::FieldGrid;
use crate::render::draw_rect_outline;
use crate::scale::ColorScale;

/// Default number of contour levels.
pub(crate) const DEFAULT_LEVELS: usize = 20;

/// Color palette for contour animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContourPalette {
    /// Viridis (perceptually uniform, colorblind-safe).
    #[default]
    Viridis,
    /// Magma (perceptually uniform).
    Magma,
    /// Greyscale.
    Greyscale,
    /// Heat (black-red-yellow-white).
    Heat,
}

impl ContourPalette {
    /// Build the palette's color scale over a domain.
    fn color_scale(self, domain: (f32, f32)) -> Option<ColorScale> {
        match self {
            Self::Viridis => ColorScale::viridis(domain),
            Self::Magma => ColorScale::magma(domain),
            Self::Greyscale => ColorScale::greyscale(domain),
            Self::Heat => ColorScale::heat(domain),
        }
    }
}

/// Builder for animated filled-contour plots.
#[derive(Debug, Clone)]
pub struct ContourAnimation {
    grid: FieldGrid,
    width: u32,
    height: u32,
    margin: u32,
    fps: u32,
    levels: usize,
    palette: ContourPalette,
    axes_color: Rgba,
}

impl ContourAnimation {
    /// Create a contour animation with default settings over a grid.
    #[must_use]
    pub fn new(grid: FieldGrid) -> Self {
        Self {
            grid,
            width: 1000,
            height: 600,
            margin: 50,
            fps: 20,
            levels: DEFAULT_LEVELS,
            palette: ContourPalette::default(),
            axes_color: Rgba::rgb(70, 70, 70),
        }
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margin around the plot area.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the playback rate in frames per second.
    #[must_use]
    pub fn frame_rate(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Set the number of contour levels.
    #[must_use]
    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels.max(1);
        self
    }

    /// Set the color palette.
    #[must_use]
    pub fn palette(mut self, palette: ContourPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the dimensions leave no plot area.
    pub fn build(self) -> Result<Self> {
        if self.width <= 2 * self.margin + 1 || self.height <= 2 * self.margin + 1 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Number of contour levels per frame.
    #[must_use]
    pub const fn level_count(&self) -> usize {
        self.levels
    }

    /// The extent used for frame `i`'s levels: that frame's own min/max,
    /// widened when the frame is flat.
    #[must_use]
    pub fn frame_level_extent(&self, index: usize) -> Option<(f32, f32)> {
        let (min, max) = self.grid.frame_extent(index)?;
        Some(if (max - min).abs() < f32::EPSILON {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        })
    }

    fn plot_area(&self) -> Rect {
        Rect::new(
            self.margin as f32,
            self.margin as f32,
            (self.width - 2 * self.margin) as f32,
            (self.height - 2 * self.margin) as f32,
        )
    }
}

/// Bilinearly sample a row-major field at fractional coordinates.
fn sample_bilinear(field: &[f32], rows: usize, cols: usize, r: f32, c: f32) -> f32 {
    let r = r.clamp(0.0, (rows - 1) as f32);
    let c = c.clamp(0.0, (cols - 1) as f32);

    let r0 = r.floor() as usize;
    let c0 = c.floor() as usize;
    let r1 = (r0 + 1).min(rows - 1);
    let c1 = (c0 + 1).min(cols - 1);
    let tr = r - r0 as f32;
    let tc = c - c0 as f32;

    let top = field[r0 * cols + c0] * (1.0 - tc) + field[r0 * cols + c1] * tc;
    let bottom = field[r1 * cols + c0] * (1.0 - tc) + field[r1 * cols + c1] * tc;
    top * (1.0 - tr) + bottom * tr
}

impl Animation for ContourAnimation {
    fn frame_count(&self) -> usize {
        self.grid.frame_count()
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fps(&self) -> u32 {
        self.fps
    }

    fn render_frame(&self, index: usize, fb: &mut Framebuffer) -> Result<()> {
        let field = self.grid.frame(index).ok_or(Error::FrameOutOfRange {
            frame: index,
            frames: self.grid.frame_count(),
        })?;
        let extent = self
            .frame_level_extent(index)
            .ok_or(Error::FrameOutOfRange {
                frame: index,
                frames: self.grid.frame_count(),
            })?;

        let scale = self
            .palette
            .color_scale(extent)
            .ok_or_else(|| Error::ScaleDomain("degenerate contour extent".to_string()))?;

        fb.clear(Rgba::WHITE);

        let area = self.plot_area();
        let rows = self.grid.rows();
        let cols = self.grid.cols();

        let x0 = area.x as u32;
        let y0 = area.y as u32;
        let w = area.width as u32;
        let h = area.height as u32;

        for py in y0..y0 + h {
            // Row 0 of the field sits at the bottom of the plot area.
            let v = if h > 1 {
                (y0 + h - 1 - py) as f32 / (h - 1) as f32
            } else {
                0.0
            };
            let r = v * (rows - 1) as f32;

            for px in x0..x0 + w {
                let u = if w > 1 {
                    (px - x0) as f32 / (w - 1) as f32
                } else {
                    0.0
                };
                let c = u * (cols - 1) as f32;

                let value = sample_bilinear(field, rows, cols, r, c);
                fb.set_pixel(px, py, scale.banded(value, self.levels));
            }
        }

        draw_rect_outline(
            fb,
            x0 as i32 - 1,
            y0 as i32 - 1,
            w + 2,
            h + 2,
            self.axes_color,
            1,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_grid(frames: usize, rows: usize, cols: usize) -> FieldGrid {
        let data: Vec<f32> = (0..frames * rows * cols).map(|i| i as f32).collect();
        FieldGrid::from_flat(data, frames, rows, cols).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let anim = ContourAnimation::new(ramp_grid(5, 20, 20)).build().unwrap();
        assert_eq!(anim.frame_count(), 5);
        assert_eq!(anim.level_count(), DEFAULT_LEVELS);
        assert_eq!(anim.fps(), 20);
    }

    #[test]
    fn test_levels_are_per_frame() {
        let anim = ContourAnimation::new(ramp_grid(2, 2, 2)).build().unwrap();

        // Each frame's levels span that frame's own values.
        assert_eq!(anim.frame_level_extent(0), Some((0.0, 3.0)));
        assert_eq!(anim.frame_level_extent(1), Some((4.0, 7.0)));
    }

    #[test]
    fn test_flat_frame_extent_widens() {
        let grid = FieldGrid::from_flat(vec![1.0; 4], 1, 2, 2).unwrap();
        let anim = ContourAnimation::new(grid).build().unwrap();
        assert_eq!(anim.frame_level_extent(0), Some((0.5, 1.5)));
    }

    #[test]
    fn test_sample_bilinear() {
        // 2x2 field: 0 1 / 2 3
        let field = [0.0, 1.0, 2.0, 3.0];
        assert!((sample_bilinear(&field, 2, 2, 0.0, 0.0) - 0.0).abs() < 0.001);
        assert!((sample_bilinear(&field, 2, 2, 1.0, 1.0) - 3.0).abs() < 0.001);
        assert!((sample_bilinear(&field, 2, 2, 0.5, 0.5) - 1.5).abs() < 0.001);
        // Out-of-range coordinates clamp to the edges.
        assert!((sample_bilinear(&field, 2, 2, -1.0, 5.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_render_frame_fills_plot_area() {
        let anim = ContourAnimation::new(ramp_grid(1, 20, 20))
            .dimensions(120, 100)
            .margin(10)
            .build()
            .unwrap();
        let mut fb = Framebuffer::new(120, 100).unwrap();

        anim.render_frame(0, &mut fb).unwrap();

        // Every pixel inside the area carries a palette color, not background.
        for &(x, y) in &[(15, 15), (60, 50), (105, 85)] {
            assert_ne!(fb.get_pixel(x, y), Some(Rgba::WHITE));
        }
        // Outside the area stays background.
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn test_render_uses_per_frame_extent() {
        // Two frames with identical relative structure but rescaled values
        // must render identically: levels renormalize per frame. Scaling by a
        // power of two keeps the float arithmetic bit-identical.
        let f0: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let f1: Vec<f32> = (0..16).map(|i| i as f32 * 4.0).collect();
        let mut data = f0;
        data.extend(f1);
        let grid = FieldGrid::from_flat(data, 2, 4, 4).unwrap();

        let anim = ContourAnimation::new(grid)
            .dimensions(60, 60)
            .margin(4)
            .build()
            .unwrap();
        let mut fb = Framebuffer::new(60, 60).unwrap();

        anim.render_frame(0, &mut fb).unwrap();
        let first = fb.to_compact_pixels();
        anim.render_frame(1, &mut fb).unwrap();
        let second = fb.to_compact_pixels();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_frame_out_of_range() {
        let anim = ContourAnimation::new(ramp_grid(1, 4, 4)).build().unwrap();
        let mut fb = Framebuffer::new(1000, 600).unwrap();
        assert!(anim.render_frame(1, &mut fb).is_err());
    }
}
