use embassy_time::Duration;

use crate::color::Rgb;
use crate::layout::{Layout, Orientation, Point};
use crate::pixel::Pixel;

/// Resolve a position or counter to a palette index
///
/// Counts past the end of the palette wrap around, so a grid wider than the
/// palette repeats its colors. Returns `None` for an empty palette.
#[inline]
pub const fn color_index(count: usize, num_colors: usize) -> Option<usize> {
    if num_colors == 0 {
        return None;
    }
    Some(count % num_colors)
}

/// How pixel writes fade towards their new color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTiming {
    pub enabled: bool,
    /// Time a fade should take
    pub duration: Duration,
    /// Time between pixel refreshes
    pub tick: Duration,
}

/// Write access to a section's pixels for one animation step
///
/// Every write goes through [`Pixel::set_next_color`] with the section's
/// fade timing. Writes outside the grid are ignored.
pub struct Frame<'a> {
    layout: Layout,
    pixels: &'a mut [Pixel],
    palette: &'a [Rgb],
    fade: FadeTiming,
}

impl<'a> Frame<'a> {
    pub fn new(layout: Layout, pixels: &'a mut [Pixel], palette: &'a [Rgb], fade: FadeTiming) -> Self {
        Self {
            layout,
            pixels,
            palette,
            fade,
        }
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub const fn palette(&self) -> &[Rgb] {
        self.palette
    }

    pub const fn num_colors(&self) -> usize {
        self.palette.len()
    }

    /// Number of pixels that can be written
    pub fn size(&self) -> usize {
        self.layout.size().min(self.pixels.len())
    }

    /// Palette color for `count`, wrapping past the end of the palette
    pub fn color_at(&self, count: usize) -> Option<Rgb> {
        color_index(count, self.palette.len()).and_then(|index| self.palette.get(index).copied())
    }

    /// Set the pixel at `index` to fade towards `color`
    pub fn set_one(&mut self, index: usize, color: Rgb) {
        let fade = self.fade;
        if let Some(pixel) = self.pixels.get_mut(index) {
            pixel.set_next_color(color, fade.enabled, fade.duration, fade.tick);
        }
    }

    pub fn set_point(&mut self, point: Point, color: Rgb) {
        if let Some(index) = self.layout.index_of(point.x, point.y) {
            self.set_one(index, color);
        }
    }

    /// Set the pixel at `index` to the palette color for `count`
    ///
    /// Does nothing when the palette is empty.
    pub fn set_indexed(&mut self, index: usize, count: usize) {
        if let Some(color) = self.color_at(count) {
            self.set_one(index, color);
        }
    }

    pub fn set_all(&mut self, color: Rgb) {
        for index in 0..self.size() {
            self.set_one(index, color);
        }
    }

    /// Color every pixel by its position along `orientation`, shifted by `shift`
    pub fn paint_positional(&mut self, orientation: Orientation, shift: usize) {
        for index in 0..self.size() {
            if let Some(point) = self.layout.point_of(index) {
                let count = usize::from(point.along(orientation)) + shift;
                self.set_indexed(index, count);
            }
        }
    }
}
