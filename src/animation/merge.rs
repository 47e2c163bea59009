use super::{Animate, Cycle, Frame};
use crate::layout::{Orientation, Point};

/// Converges the palette from both edges into the center
///
/// Pixels at the same distance from the center share a color, so the two
/// halves mirror each other. On axes with an odd length the center pixel is
/// held at the first palette color.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeAnimation;

#[allow(clippy::cast_possible_truncation)]
fn point_on(orientation: Orientation, along: usize, lane: u16) -> Point {
    let along = along as u16;
    match orientation {
        Orientation::Horizontal => Point::new(along, lane),
        Orientation::Vertical => Point::new(lane, along),
    }
}

impl Animate for MergeAnimation {
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        let layout = frame.layout();
        let orientation = cycle.orientation;
        let len = usize::from(layout.axis_len(orientation));
        let lanes = match orientation {
            Orientation::Horizontal => layout.rows,
            Orientation::Vertical => layout.columns,
        };
        let half = len / 2;

        for lane in 0..lanes {
            for distance in 0..half {
                let Some(color) = frame.color_at(distance + cycle.index) else {
                    return;
                };
                frame.set_point(point_on(orientation, half - 1 - distance, lane), color);
                frame.set_point(point_on(orientation, len - half + distance, lane), color);
            }

            if len % 2 != 0 {
                if let Some(color) = frame.color_at(0) {
                    frame.set_point(point_on(orientation, half, lane), color);
                }
            }
        }

        cycle.advance(0, frame.num_colors());
    }
}
