mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_light_maestro::animation::{Animation, AnimationType};
    use myrtio_light_maestro::color::{BLACK, RED, Rgb, WHITE};
    use myrtio_light_maestro::{BitmapError, Canvas, Layout, MixMode, Offset, Point, Section};

    fn white_section(rows: u16, columns: u16) -> Section {
        Section::new(Layout::new(rows, columns))
            .with_colors(&[WHITE])
            .with_animation(Animation::new(AnimationType::Solid).with_fade(false))
    }

    fn colors(section: &Section) -> Vec<Rgb> {
        (0..section.size()).map(|index| section.get_pixel_color(index)).collect()
    }

    #[test]
    fn test_canvas_masks_section() {
        let mut section = white_section(2, 2);
        let canvas = section.add_canvas();
        assert_eq!(canvas.load_frame(0, &[true, false, false, true]), Ok(()));

        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![WHITE, BLACK, BLACK, WHITE]);
    }

    #[test]
    fn test_canvas_takes_precedence_over_overlay() {
        let mut section = white_section(1, 2);
        let overlay = section.add_overlay(MixMode::Replace, 255);
        overlay.section_mut().set_colors(&[RED]);
        overlay
            .section_mut()
            .set_animation(Animation::new(AnimationType::Solid).with_fade(false), false);
        section.add_canvas().draw_point(Point::new(1, 0));

        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![BLACK, RED]);
    }

    #[test]
    fn test_load_frame_errors() {
        let mut canvas = Canvas::new(Layout::new(2, 2));
        assert_eq!(canvas.load_frame(0, &[true; 3]), Err(BitmapError::SizeMismatch));
        assert_eq!(canvas.load_frame(1, &[true; 4]), Err(BitmapError::FrameOutOfRange));
    }

    #[test]
    fn test_offset_with_repeat_wraps() {
        let mut canvas = Canvas::new(Layout::new(1, 4));
        canvas.draw_point(Point::new(3, 0));
        canvas.set_offset(Offset::new(1, 0));
        assert!(canvas.is_lit(0));
        assert!(!canvas.is_lit(3));
    }

    #[test]
    fn test_offset_without_repeat_clips() {
        let mut canvas = Canvas::new(Layout::new(1, 4)).with_repeat(false);
        canvas.draw_point(Point::new(3, 0));
        canvas.set_offset(Offset::new(1, 0));
        assert!(!canvas.is_lit(0));
        assert!(!canvas.is_lit(3));

        canvas.set_offset(Offset::new(-1, 0));
        assert!(!canvas.is_lit(2));
    }

    #[test]
    fn test_scroll_waits_for_interval() {
        let mut canvas = Canvas::new(Layout::new(1, 4))
            .with_scroll(Offset::new(1, 0), Duration::from_millis(100));

        canvas.update(Instant::from_millis(0));
        assert_eq!(canvas.offset(), Offset::new(0, 0));
        canvas.update(Instant::from_millis(50));
        assert_eq!(canvas.offset(), Offset::new(0, 0));
        canvas.update(Instant::from_millis(100));
        assert_eq!(canvas.offset(), Offset::new(1, 0));
    }

    #[test]
    fn test_frames_advance_and_wrap() {
        let mut canvas = Canvas::new(Layout::new(1, 2))
            .with_frames(2)
            .with_frame_interval(Duration::from_millis(100));

        canvas.update(Instant::from_millis(0));
        assert_eq!(canvas.current_frame(), 0);
        canvas.update(Instant::from_millis(100));
        assert_eq!(canvas.current_frame(), 1);
        canvas.update(Instant::from_millis(200));
        assert_eq!(canvas.current_frame(), 0);
    }

    #[test]
    fn test_drawing_targets_current_frame() {
        let mut canvas = Canvas::new(Layout::new(1, 2)).with_frames(2);
        canvas.set_current_frame(1);
        canvas.draw_point(Point::new(0, 0));
        assert!(canvas.bitmap().get(1, Point::new(0, 0)));
        assert!(!canvas.bitmap().get(0, Point::new(0, 0)));

        canvas.erase_point(Point::new(0, 0));
        assert!(!canvas.is_lit(0));
    }

    #[test]
    fn test_draw_rect_outline_and_fill() {
        let mut canvas = Canvas::new(Layout::new(3, 3));
        canvas.draw_rect(Point::new(0, 0), Point::new(3, 3), false);
        assert!(canvas.is_lit(0));
        assert!(canvas.is_lit(8));
        assert!(!canvas.is_lit(4));

        canvas.draw_rect(Point::new(0, 0), Point::new(3, 3), true);
        assert!(canvas.is_lit(4));

        canvas.clear();
        assert!((0..9).all(|index| !canvas.is_lit(index)));
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut canvas = Canvas::new(Layout::new(3, 3));
        canvas.draw_line(Point::new(0, 0), Point::new(2, 2));
        assert!(canvas.is_lit(0));
        assert!(canvas.is_lit(4));
        assert!(canvas.is_lit(8));
        assert!(!canvas.is_lit(1));
    }

    #[test]
    fn test_resize_clears_frames() {
        let mut canvas = Canvas::new(Layout::new(2, 2));
        canvas.draw_point(Point::new(0, 0));
        canvas.resize(Layout::new(3, 3));
        assert_eq!(canvas.layout(), Layout::new(3, 3));
        assert!(!canvas.is_lit(0));
    }
}
