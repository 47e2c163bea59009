//! Pattern animation
//!
//! Draws the frames of an animation-owned bitmap one cycle at a time.
//! Unlike a [`Canvas`](crate::canvas::Canvas), which masks a section's
//! output, a pattern is the section's output: set bits light up with the
//! palette color of their column.

use super::{Animate, Cycle, Frame};
use crate::bitmap::Bitmap;
use crate::color::BLACK;
use crate::layout::{Layout, Offset, Point, wrap_axis};

/// Frames to display plus their placement on the section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bitmap: Bitmap,
    offset: Offset,
    scroll_rate: Offset,
    /// Wrap content that falls off the grid to the opposite side
    repeat: bool,
}

impl Pattern {
    pub fn new(bitmap: Bitmap) -> Self {
        Self {
            bitmap,
            offset: Offset::new(0, 0),
            scroll_rate: Offset::new(0, 0),
            repeat: false,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    /// Scroll by `rate` after every drawn frame
    #[must_use]
    pub fn with_scroll_rate(mut self, rate: Offset) -> Self {
        self.scroll_rate = rate;
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub const fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn bitmap_mut(&mut self) -> &mut Bitmap {
        &mut self.bitmap
    }

    pub const fn offset(&self) -> Offset {
        self.offset
    }

    pub const fn scroll_rate(&self) -> Offset {
        self.scroll_rate
    }

    pub const fn repeat(&self) -> bool {
        self.repeat
    }

    pub const fn frame_count(&self) -> u16 {
        self.bitmap.frame_count()
    }

    /// Where the bit at `point` lands on a grid of `target` size
    fn place(&self, point: Point, target: Layout) -> Option<Point> {
        let x = i32::from(point.x) + self.offset.x;
        let y = i32::from(point.y) + self.offset.y;
        let inside = (0..i32::from(target.columns)).contains(&x) && (0..i32::from(target.rows)).contains(&y);

        let (x, y) = if inside {
            (x, y)
        } else if self.repeat {
            (wrap_axis(x, target.columns), wrap_axis(y, target.rows))
        } else {
            return None;
        };

        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => Some(Point::new(x, y)),
            _ => None,
        }
    }
}

/// Steps through a [`Pattern`]'s frames
///
/// Without a pattern the section is drawn black.
#[derive(Debug, Clone, Default)]
pub struct PatternAnimation {
    pattern: Option<Pattern>,
}

impl PatternAnimation {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
        }
    }

    pub const fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    pub fn set_pattern(&mut self, pattern: Option<Pattern>) {
        self.pattern = pattern;
    }
}

impl Animate for PatternAnimation {
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        frame.set_all(BLACK);
        let Some(pattern) = self.pattern.as_mut() else {
            return;
        };

        let target = frame.layout();
        let source = pattern.bitmap.layout();
        let frames = usize::from(pattern.frame_count());
        #[allow(clippy::cast_possible_truncation)]
        let current = (cycle.index % frames) as u16;

        for y in 0..source.rows {
            for x in 0..source.columns {
                let point = Point::new(x, y);
                if !pattern.bitmap.get(current, point) {
                    continue;
                }
                if let Some(placed) = pattern.place(point, target) {
                    frame.set_indexed(
                        usize::from(placed.y) * usize::from(target.columns) + usize::from(placed.x),
                        usize::from(placed.x),
                    );
                }
            }
        }

        if !pattern.scroll_rate.is_zero() {
            let rate = pattern.scroll_rate;
            pattern.offset.scroll(rate, target);
        }

        cycle.advance(0, frames);
    }

    fn cycle_len(&self, _num_colors: usize) -> usize {
        self.pattern
            .as_ref()
            .map_or(1, |pattern| usize::from(pattern.frame_count()))
    }
}
