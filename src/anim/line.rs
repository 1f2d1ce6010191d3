//! Animated line plot over a 1-D grid.
//!
//! Frame `i` of the animation is a line plot of frame `i` of the grid: the
//! values are drawn against a linearly spaced horizontal axis spanning the
//! configured x limits. The vertical axis is fixed for the whole animation to
//! the global min/max across all frames, computed once at build time, so the
//! scale does not jitter between frames.

use crate::anim::Animation;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};
use crate::grid::LineGrid;
use crate::render::{draw_line, draw_line_aa, draw_rect_outline};
use crate::scale::{LinearScale, Scale};

/// Default horizontal display range.
pub(crate) const DEFAULT_X_LIM: (f32, f32) = (-50.0, 50.0);

/// Builder for animated line plots.
#[derive(Debug, Clone)]
pub struct LineAnimation {
    grid: LineGrid,
    width: u32,
    height: u32,
    margin: u32,
    fps: u32,
    x_lim: (f32, f32),
    color: Rgba,
    axes_color: Rgba,
    antialiased: bool,
    /// Fixed vertical extent, computed from the whole grid at build time.
    y_extent: (f32, f32),
}

impl LineAnimation {
    /// Create a line animation with default settings over a grid.
    #[must_use]
    pub fn new(grid: LineGrid) -> Self {
        Self {
            grid,
            width: 1000,
            height: 600,
            margin: 50,
            fps: 20,
            x_lim: DEFAULT_X_LIM,
            // matplotlib's C0 line blue
            color: Rgba::rgb(31, 119, 180),
            axes_color: Rgba::rgb(70, 70, 70),
            antialiased: true,
            y_extent: (0.0, 0.0),
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

    /// Set the horizontal display range.
    #[must_use]
    pub fn x_limits(mut self, x_lim: (f32, f32)) -> Self {
        self.x_lim = x_lim;
        self
    }

    /// Set the line color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable anti-aliased line drawing.
    #[must_use]
    pub fn antialiased(mut self, enabled: bool) -> Self {
        self.antialiased = enabled;
        self
    }

    /// Validate the configuration and fix the vertical extent.
    ///
    /// # Errors
    ///
    /// Returns an error when the dimensions leave no plot area or the x
    /// limits are degenerate.
    pub fn build(mut self) -> Result<Self> {
        if self.width <= 2 * self.margin + 1 || self.height <= 2 * self.margin + 1 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if (self.x_lim.0 - self.x_lim.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain(
                "x limits cannot be equal".to_string(),
            ));
        }

        let (min, max) = self.grid.value_extent();
        // Flat data still needs a non-degenerate axis.
        self.y_extent = if (max - min).abs() < f32::EPSILON {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        Ok(self)
    }

    /// The fixed vertical extent shared by every frame.
    #[must_use]
    pub const fn y_extent(&self) -> (f32, f32) {
        self.y_extent
    }

    /// The horizontal display range.
    #[must_use]
    pub const fn x_range(&self) -> (f32, f32) {
        self.x_lim
    }

    /// The pixel region the data is drawn into.
    fn plot_area(&self) -> Rect {
        Rect::new(
            self.margin as f32,
            self.margin as f32,
            (self.width - 2 * self.margin) as f32,
            (self.height - 2 * self.margin) as f32,
        )
    }
}

impl Animation for LineAnimation {
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
        let values = self.grid.frame(index).ok_or(Error::FrameOutOfRange {
            frame: index,
            frames: self.grid.frame_count(),
        })?;

        fb.clear(Rgba::WHITE);

        let area = self.plot_area();
        draw_rect_outline(
            fb,
            area.x as i32 - 1,
            area.y as i32 - 1,
            area.width as u32 + 2,
            area.height as u32 + 2,
            self.axes_color,
            1,
        );

        let x_scale = LinearScale::new(self.x_lim, (area.x, area.right()))?;
        let y_scale = LinearScale::new(self.y_extent, (area.bottom(), area.y))?;

        // Sample positions are linearly spaced across the x limits.
        let len = values.len();
        let points: Vec<Point> = values
            .iter()
            .enumerate()
            .map(|(j, &v)| {
                let t = if len > 1 {
                    j as f32 / (len - 1) as f32
                } else {
                    0.5
                };
                let x = self.x_lim.0 + t * (self.x_lim.1 - self.x_lim.0);
                Point::new(x_scale.scale(x), y_scale.scale(v))
            })
            .collect();

        if points.len() == 1 {
            fb.set_pixel(points[0].x as u32, points[0].y as u32, self.color);
            return Ok(());
        }

        for pair in points.windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            if self.antialiased {
                draw_line_aa(fb, p1.x, p1.y, p2.x, p2.y, self.color);
            } else {
                draw_line(
                    fb,
                    p1.x as i32,
                    p1.y as i32,
                    p2.x as i32,
                    p2.y as i32,
                    self.color,
                );
            }
        }

        Ok(())
    }
}
