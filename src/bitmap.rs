//! Multi-frame on/off masks
//!
//! Backing storage for [`Canvas`](crate::canvas::Canvas) and for the
//! pattern drawn by the pattern animation. Memory is allocated only when the
//! bitmap is created or reshaped.

use alloc::vec;
use alloc::vec::Vec;

use crate::layout::{Layout, Point};

/// Error returned by fallible bitmap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
    /// The requested frame does not exist
    FrameOutOfRange,
    /// The supplied mask is not `rows * columns` long
    SizeMismatch,
}

/// A stack of equally sized on/off frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    layout: Layout,
    frame_count: u16,
    bits: Vec<bool>,
}

impl Bitmap {
    /// Create a blank bitmap with at least one frame
    pub fn new(layout: Layout, frame_count: u16) -> Self {
        let frame_count = frame_count.max(1);
        Self {
            layout,
            frame_count,
            bits: vec![false; layout.size() * usize::from(frame_count)],
        }
    }

    /// Create a bitmap from row-major frames
    ///
    /// Every frame must hold exactly `rows * columns` entries.
    pub fn from_frames(layout: Layout, frames: &[&[bool]]) -> Result<Self, BitmapError> {
        let count = u16::try_from(frames.len()).map_err(|_| BitmapError::FrameOutOfRange)?;
        let mut bitmap = Self::new(layout, count);
        for (index, frame) in (0..count).zip(frames) {
            bitmap.load_frame(index, frame)?;
        }
        Ok(bitmap)
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub const fn frame_count(&self) -> u16 {
        self.frame_count
    }

    /// Reshape to `layout`, discarding every frame's contents
    pub fn resize(&mut self, layout: Layout) {
        *self = Self::new(layout, self.frame_count);
    }

    /// Change the number of frames, discarding every frame's contents
    pub fn set_frame_count(&mut self, frame_count: u16) {
        *self = Self::new(self.layout, frame_count);
    }

    fn offset(&self, frame: u16, point: Point) -> Option<usize> {
        if frame >= self.frame_count {
            return None;
        }
        let index = self.layout.index_of(point.x, point.y)?;
        Some(usize::from(frame) * self.layout.size() + index)
    }

    /// Read one bit; anything off the grid reads as unset
    pub fn get(&self, frame: u16, point: Point) -> bool {
        self.offset(frame, point)
            .and_then(|offset| self.bits.get(offset).copied())
            .unwrap_or(false)
    }

    /// Write one bit; anything off the grid is ignored
    pub fn set(&mut self, frame: u16, point: Point, on: bool) {
        if let Some(bit) = self
            .offset(frame, point)
            .and_then(|offset| self.bits.get_mut(offset))
        {
            *bit = on;
        }
    }

    fn frame_mut(&mut self, frame: u16) -> Option<&mut [bool]> {
        if frame >= self.frame_count {
            return None;
        }
        let size = self.layout.size();
        let start = usize::from(frame) * size;
        self.bits.get_mut(start..start + size)
    }

    /// Set or clear every bit of a frame
    pub fn fill(&mut self, frame: u16, on: bool) {
        if let Some(bits) = self.frame_mut(frame) {
            bits.fill(on);
        }
    }

    /// Replace a frame with a row-major mask
    pub fn load_frame(&mut self, frame: u16, mask: &[bool]) -> Result<(), BitmapError> {
        let size = self.layout.size();
        let bits = self.frame_mut(frame).ok_or(BitmapError::FrameOutOfRange)?;
        if mask.len() != size {
            return Err(BitmapError::SizeMismatch);
        }
        bits.copy_from_slice(mask);
        Ok(())
    }

    /// Draw a rectangle with its top-left corner at `origin`
    ///
    /// Without `fill` only the outline is set. Parts that fall off the grid
    /// are clipped.
    pub fn draw_rect(&mut self, frame: u16, origin: Point, size: Point, fill: bool) {
        if size.x == 0 || size.y == 0 {
            return;
        }
        let right = origin.x.saturating_add(size.x - 1);
        let bottom = origin.y.saturating_add(size.y - 1);
        for y in origin.y..=bottom {
            for x in origin.x..=right {
                let edge = x == origin.x || x == right || y == origin.y || y == bottom;
                if fill || edge {
                    self.set(frame, Point::new(x, y), true);
                }
            }
        }
    }

    /// Draw a straight line between two points (Bresenham)
    pub fn draw_line(&mut self, frame: u16, from: Point, to: Point) {
        let (mut x, mut y) = (i32::from(from.x), i32::from(from.y));
        let (x1, y1) = (i32::from(to.x), i32::from(to.y));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if let (Ok(px), Ok(py)) = (u16::try_from(x), u16::try_from(y)) {
                self.set(frame, Point::new(px, py), true);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
