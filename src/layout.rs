/// Dimensions of a pixel grid
///
/// The number of pixels is `rows * columns`. Pixels are stored row by row,
/// so the pixel at column `x` and row `y` lives at `y * columns + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub rows: u16,
    pub columns: u16,
}

impl Layout {
    pub const fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }

    /// Get the number of pixels in the grid
    pub const fn size(self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Returns the index of the pixel at `(x, y)`, if it is on the grid
    pub const fn index_of(self, x: u16, y: u16) -> Option<usize> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(y as usize * self.columns as usize + x as usize)
    }

    /// Returns the `(x, y)` coordinates of a pixel index
    #[allow(clippy::cast_possible_truncation)]
    pub const fn point_of(self, index: usize) -> Option<Point> {
        if self.columns == 0 || index >= self.size() {
            return None;
        }
        let columns = self.columns as usize;
        Some(Point {
            x: (index % columns) as u16,
            y: (index / columns) as u16,
        })
    }

    /// Length of the grid along `orientation`
    pub const fn axis_len(self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Horizontal => self.columns,
            Orientation::Vertical => self.rows,
        }
    }
}

/// Unsigned grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Position of the point along `orientation`
    pub const fn along(self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }
}

/// Signed 2D offset, also used as a per-tick scroll rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Advance by `rate`, wrapping each axis into `0..layout` size
    pub fn scroll(&mut self, rate: Offset, layout: Layout) {
        self.x = wrap_axis(self.x + rate.x, layout.columns);
        self.y = wrap_axis(self.y + rate.y, layout.rows);
    }
}

/// Axis along which directional animations run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Wrap a signed coordinate into `0..len`
pub(crate) fn wrap_axis(value: i32, len: u16) -> i32 {
    if len == 0 {
        return 0;
    }
    value.rem_euclid(i32::from(len))
}
