//! Canvas - a bitmap mask bound to a section
//!
//! Pixels whose bit is unset in the current frame are forced to black when
//! the section is read. The canvas has its own clocks for scrolling and for
//! stepping through frames, independent of the section's animation.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bitmap::{Bitmap, BitmapError};
use crate::interval::is_due;
use crate::layout::{Layout, Offset, Point, wrap_axis};

/// Default time between scroll steps
pub const DEFAULT_SCROLL_INTERVAL: Duration = Duration::from_millis(100);

/// On/off mask layered over a section
#[derive(Debug, Clone)]
pub struct Canvas {
    bitmap: Bitmap,
    current_frame: u16,
    offset: Offset,
    scroll_rate: Offset,
    repeat: bool,
    scroll_interval: Duration,
    /// Time between frames; `None` keeps the current frame
    frame_interval: Option<Duration>,
    last_scroll: Option<Instant>,
    last_frame: Option<Instant>,
}

impl Canvas {
    /// Create a blank single-frame canvas
    pub fn new(layout: Layout) -> Self {
        Self {
            bitmap: Bitmap::new(layout, 1),
            current_frame: 0,
            offset: Offset::default(),
            scroll_rate: Offset::default(),
            repeat: true,
            scroll_interval: DEFAULT_SCROLL_INTERVAL,
            frame_interval: None,
            last_scroll: None,
            last_frame: None,
        }
    }

    /// Set the number of frames (clears the canvas)
    #[must_use]
    pub fn with_frames(mut self, frame_count: u16) -> Self {
        self.set_frame_count(frame_count);
        self
    }

    /// Set the scroll rate and how often it is applied
    #[must_use]
    pub fn with_scroll(mut self, rate: Offset, interval: Duration) -> Self {
        self.set_scroll(rate, interval);
        self
    }

    /// Step to the next frame every `interval`
    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = Some(interval);
        self
    }

    /// Set whether content scrolled off one edge reappears on the other
    #[must_use]
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Grid dimensions
    pub const fn layout(&self) -> Layout {
        self.bitmap.layout()
    }

    /// Number of frames in the bitmap
    pub const fn frame_count(&self) -> u16 {
        self.bitmap.frame_count()
    }

    /// Frame used for masking and drawing
    pub const fn current_frame(&self) -> u16 {
        self.current_frame
    }

    /// Shift applied to the drawing
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// Offset added per scroll step
    pub const fn scroll_rate(&self) -> Offset {
        self.scroll_rate
    }

    /// Whether the drawing wraps around the grid edges
    pub const fn repeat(&self) -> bool {
        self.repeat
    }

    /// Underlying frames
    pub const fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Jump to a frame; out-of-range frames wrap
    pub fn set_current_frame(&mut self, frame: u16) {
        self.current_frame = frame % self.frame_count();
    }

    /// Advance to the next frame, wrapping after the last one
    pub fn next_frame(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.frame_count();
    }

    /// Set the number of frames (clears the canvas)
    pub fn set_frame_count(&mut self, frame_count: u16) {
        self.bitmap.set_frame_count(frame_count);
        self.current_frame = 0;
    }

    /// Shift the drawing; the offset wraps to the grid size
    pub fn set_offset(&mut self, offset: Offset) {
        let layout = self.layout();
        self.offset = Offset::new(
            wrap_axis(offset.x, layout.columns),
            wrap_axis(offset.y, layout.rows),
        );
    }

    /// Scroll by `rate` every `interval`; a zero rate stops scrolling
    pub fn set_scroll(&mut self, rate: Offset, interval: Duration) {
        self.scroll_rate = rate;
        self.scroll_interval = interval;
    }

    /// Step frames every `interval`; `None` stops on the current frame
    pub fn set_frame_interval(&mut self, interval: Option<Duration>) {
        self.frame_interval = interval;
    }

    /// Set whether the drawing wraps around the grid edges
    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }

    /// Reshape to a new grid size
    ///
    /// Frame contents are discarded; the offset is reset.
    pub fn resize(&mut self, layout: Layout) {
        #[cfg(feature = "esp32-log")]
        println!("[Canvas.resize] {:?}, frames cleared", layout);
        self.bitmap.resize(layout);
        self.current_frame = 0;
        self.offset = Offset::default();
    }

    /// Check whether the section pixel at `index` shows through
    ///
    /// The offset shifts the drawing: the bit drawn at `(x, y)` is shown at
    /// `(x + offset.x, y + offset.y)`. With `repeat` the drawing wraps around
    /// the grid, otherwise whatever is shifted off the grid is lost.
    pub fn is_lit(&self, index: usize) -> bool {
        let layout = self.layout();
        let Some(point) = layout.point_of(index) else {
            return false;
        };

        let x = i32::from(point.x) - self.offset.x;
        let y = i32::from(point.y) - self.offset.y;
        let (x, y) = if self.repeat {
            (wrap_axis(x, layout.columns), wrap_axis(y, layout.rows))
        } else {
            (x, y)
        };

        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => self.bitmap.get(self.current_frame, Point::new(x, y)),
            _ => false,
        }
    }

    /// Load a row-major mask into a frame
    pub fn load_frame(&mut self, frame: u16, mask: &[bool]) -> Result<(), BitmapError> {
        self.bitmap.load_frame(frame, mask)
    }

    /// Light one point of the current frame
    pub fn draw_point(&mut self, point: Point) {
        self.bitmap.set(self.current_frame, point, true);
    }

    /// Unset one point of the current frame
    pub fn erase_point(&mut self, point: Point) {
        self.bitmap.set(self.current_frame, point, false);
    }

    /// Draw a rectangle outline, or a filled one with `fill`
    pub fn draw_rect(&mut self, origin: Point, size: Point, fill: bool) {
        self.bitmap.draw_rect(self.current_frame, origin, size, fill);
    }

    /// Draw a line between two points, both ends included
    pub fn draw_line(&mut self, from: Point, to: Point) {
        self.bitmap.draw_line(self.current_frame, from, to);
    }

    /// Unset every bit of the current frame
    pub fn clear(&mut self) {
        self.bitmap.fill(self.current_frame, false);
    }

    /// Advance the scroll and frame clocks
    pub fn update(&mut self, now: Instant) {
        if !self.scroll_rate.is_zero() && is_due(self.last_scroll, now, self.scroll_interval) {
            if self.last_scroll.is_some() {
                let layout = self.layout();
                self.offset.scroll(self.scroll_rate, layout);
            }
            self.last_scroll = Some(now);
        }

        if let Some(interval) = self.frame_interval {
            if self.frame_count() > 1 && is_due(self.last_frame, now, interval) {
                if self.last_frame.is_some() {
                    self.next_frame();
                }
                self.last_frame = Some(now);
            }
        }
    }
}
