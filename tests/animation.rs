mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_light_maestro::animation::{
        Animate, Animation, AnimationSlot, AnimationType, Cycle, FadeTiming, Frame,
        PatternAnimation, PongAnimation, SparkleAnimation, color_index,
    };
    use myrtio_light_maestro::color::{BLACK, BLUE, GREEN, RED, Rgb, WHITE};
    use myrtio_light_maestro::{Bitmap, Layout, Offset, Orientation, Pattern, Pixel, Section};

    const RGB3: [Rgb; 3] = [RED, GREEN, BLUE];

    const NO_FADE: FadeTiming = FadeTiming {
        enabled: false,
        duration: Duration::from_millis(0),
        tick: Duration::from_millis(20),
    };

    fn section(rows: u16, columns: u16, colors: &[Rgb], animation: Animation) -> Section {
        Section::new(Layout::new(rows, columns))
            .with_colors(colors)
            .with_animation(animation.with_fade(false))
    }

    fn colors(section: &Section) -> Vec<Rgb> {
        (0..section.size()).map(|index| section.get_pixel_color(index)).collect()
    }

    #[test]
    fn test_color_index_aliasing() {
        assert_eq!(color_index(0, 3), Some(0));
        assert_eq!(color_index(3, 3), Some(0));
        assert_eq!(color_index(7, 3), Some(1));
        assert_eq!(color_index(5, 0), None);
    }

    #[test]
    fn test_solid_repeats_palette_across_wide_grid() {
        let mut section = section(1, 5, &RGB3, Animation::new(AnimationType::Solid));
        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![RED, GREEN, BLUE, RED, GREEN]);
    }

    #[test]
    fn test_solid_vertical_uses_rows() {
        let animation = Animation::new(AnimationType::Solid).with_orientation(Orientation::Vertical);
        let mut section = section(2, 2, &[RED, GREEN], animation);
        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![RED, RED, GREEN, GREEN]);
    }

    #[test]
    fn test_cycle_forward_wraps() {
        let mut cycle = Cycle {
            index: 2,
            ..Cycle::default()
        };
        cycle.advance(0, 3);
        assert_eq!(cycle.index, 0);
        cycle.advance(0, 3);
        assert_eq!(cycle.index, 1);
    }

    #[test]
    fn test_cycle_reverse_wraps() {
        let mut cycle = Cycle {
            index: 1,
            reverse: true,
            ..Cycle::default()
        };
        cycle.advance(0, 3);
        assert_eq!(cycle.index, 0);
        cycle.advance(0, 3);
        assert_eq!(cycle.index, 2);
    }

    #[test]
    fn test_cycle_empty_range_is_noop() {
        let mut cycle = Cycle::default();
        cycle.advance(0, 0);
        assert_eq!(cycle.index, 0);
    }

    #[test]
    fn test_animation_type_next_skips_none() {
        assert_eq!(AnimationType::Solid.next(), AnimationType::Blink);
        assert_eq!(AnimationType::Merge.next(), AnimationType::Pattern);
        assert_eq!(AnimationType::Plasma.next(), AnimationType::Solid);
        assert_eq!(AnimationType::None.next(), AnimationType::Solid);
    }

    #[test]
    fn test_animation_type_ids() {
        assert_eq!(AnimationType::from_raw(0), Some(AnimationType::Solid));
        assert_eq!(AnimationType::from_raw(8), Some(AnimationType::RandomIndex));
        assert_eq!(AnimationType::from_raw(12), None);
        assert_eq!(AnimationType::parse_from_str("pong"), Some(AnimationType::Pong));
        assert_eq!(AnimationType::parse_from_str("lava"), None);
        assert_eq!(AnimationType::Plasma.as_str(), "plasma");
    }

    #[test]
    fn test_pong_bounces() {
        let mut pixels = vec![Pixel::default(); 1];
        let mut frame = Frame::new(Layout::new(1, 1), &mut pixels, &RGB3, NO_FADE);
        let mut cycle = Cycle::default();
        let mut pong = PongAnimation;

        let mut seen = Vec::new();
        for _ in 0..6 {
            pong.step(&mut cycle, &mut frame);
            seen.push(cycle.index);
        }
        assert_eq!(seen, vec![1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_pong_clamps_index_past_end() {
        let mut pixels = vec![Pixel::default(); 1];
        let mut frame = Frame::new(Layout::new(1, 1), &mut pixels, &RGB3, NO_FADE);
        let mut cycle = Cycle {
            index: 7,
            ..Cycle::default()
        };
        PongAnimation.step(&mut cycle, &mut frame);
        assert!(cycle.reverse);
        assert_eq!(cycle.index, 2);
    }

    #[test]
    fn test_wave_shifts_each_cycle() {
        let animation = Animation::new(AnimationType::Wave);
        let mut section = section(1, 3, &RGB3, animation);
        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![RED, GREEN, BLUE]);

        section.update(Instant::from_millis(100));
        assert_eq!(colors(&section), vec![GREEN, BLUE, RED]);
    }

    #[test]
    fn test_merge_odd_center_pinned() {
        let mut section = section(1, 5, &RGB3, Animation::new(AnimationType::Merge));
        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![GREEN, RED, RED, RED, GREEN]);

        section.update(Instant::from_millis(100));
        assert_eq!(colors(&section), vec![BLUE, GREEN, RED, GREEN, BLUE]);
    }

    #[test]
    fn test_merge_even_mirrors() {
        let mut section = section(1, 4, &RGB3, Animation::new(AnimationType::Merge));
        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![GREEN, RED, RED, GREEN]);
    }

    #[test]
    fn test_blink_alternates_with_black() {
        let mut section = section(1, 2, &[RED, GREEN], Animation::new(AnimationType::Blink));
        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![RED, GREEN]);

        section.update(Instant::from_millis(100));
        assert_eq!(colors(&section), vec![BLACK, BLACK]);

        section.update(Instant::from_millis(200));
        assert_eq!(colors(&section), vec![RED, GREEN]);
    }

    #[test]
    fn test_sparkle_full_threshold_stays_dark() {
        let mut pixels = vec![Pixel::new(WHITE); 8];
        let mut frame = Frame::new(Layout::new(2, 4), &mut pixels, &RGB3, NO_FADE);
        let mut cycle = Cycle::default();
        let mut sparkle = SparkleAnimation::new(100).with_seed(7);
        sparkle.step(&mut cycle, &mut frame);

        assert!(pixels.iter().all(|pixel| pixel.next_color() == BLACK));
    }

    #[test]
    fn test_random_index_uses_palette() {
        let mut section = section(3, 3, &RGB3, Animation::new(AnimationType::RandomIndex));
        section.update(Instant::from_millis(0));
        assert!(colors(&section).iter().all(|color| RGB3.contains(color)));
    }

    #[test]
    fn test_static_is_gray_and_deterministic() {
        let mut first = section(2, 4, &RGB3, Animation::new(AnimationType::Static));
        let mut second = section(2, 4, &RGB3, Animation::new(AnimationType::Static));
        first.update(Instant::from_millis(0));
        second.update(Instant::from_millis(0));

        let colors_first = colors(&first);
        assert!(colors_first.iter().all(|color| color.r == color.g && color.g == color.b));
        assert_eq!(colors_first, colors(&second));
    }

    #[test]
    fn test_plasma_changes_with_cycle() {
        let mut section = section(4, 4, &RGB3, Animation::new(AnimationType::Plasma));
        section.update(Instant::from_millis(0));
        let before = colors(&section);
        section.update(Instant::from_millis(100));
        assert_ne!(before, colors(&section));
    }

    #[test]
    fn test_none_turns_pixels_off() {
        let mut section = section(1, 3, &RGB3, Animation::new(AnimationType::Solid));
        section.update(Instant::from_millis(0));
        section.change_animation(Some(AnimationType::None), false);
        section.update(Instant::from_millis(20));
        assert_eq!(colors(&section), vec![BLACK; 3]);
    }

    #[test]
    fn test_empty_palette_does_nothing() {
        let mut pixels = vec![Pixel::new(WHITE); 2];
        let mut frame = Frame::new(Layout::new(1, 2), &mut pixels, &[], NO_FADE);
        let mut animation = Animation::new(AnimationType::None);
        assert!(!animation.update(Instant::from_millis(0), &mut frame));
        assert!(pixels.iter().all(|pixel| pixel.next_color() == WHITE));
    }

    #[test]
    fn test_set_kind_preserves_cycle_index_on_request() {
        let mut animation = Animation::new(AnimationType::Wave)
            .with_speed(Duration::from_millis(250), Duration::from_millis(50))
            .with_reverse(true);
        animation.set_cycle_index(5, 3);
        assert_eq!(animation.cycle_index(), 2);

        animation.set_kind(AnimationType::Cycle, true, 3);
        assert_eq!(animation.kind(), AnimationType::Cycle);
        assert_eq!(animation.cycle_index(), 2);
        assert_eq!(animation.speed(), Duration::from_millis(250));
        assert!(animation.reverse());

        animation.set_kind(AnimationType::Solid, false, 3);
        assert_eq!(animation.cycle_index(), 0);
    }

    #[test]
    fn test_pause_is_capped_and_shortens_fade() {
        let mut animation = Animation::default();
        animation.set_speed(Duration::from_millis(100), Duration::from_millis(30));
        assert_eq!(animation.fade_duration(), Duration::from_millis(70));

        animation.set_speed(Duration::from_millis(100), Duration::from_millis(300));
        assert_eq!(animation.pause(), Duration::from_millis(100));
        assert_eq!(animation.fade_duration(), Duration::from_millis(0));
    }

    #[test]
    fn test_pattern_draws_frames_with_column_colors() {
        let layout = Layout::new(2, 2);
        let frames: [&[bool]; 2] = [&[true, false, false, true], &[false, true, true, false]];
        let Ok(bitmap) = Bitmap::from_frames(layout, &frames) else {
            panic!("frames should fit the layout");
        };
        let slot = AnimationSlot::Pattern(PatternAnimation::new(Pattern::new(bitmap)));
        let mut section = section(2, 2, &[RED, GREEN], Animation::from_slot(slot));

        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![RED, BLACK, BLACK, GREEN]);

        section.update(Instant::from_millis(100));
        assert_eq!(colors(&section), vec![BLACK, GREEN, RED, BLACK]);

        section.update(Instant::from_millis(200));
        assert_eq!(colors(&section), vec![RED, BLACK, BLACK, GREEN]);
    }

    #[test]
    fn test_pattern_offset_clips_or_wraps() {
        let layout = Layout::new(2, 2);
        let frames: [&[bool]; 1] = [&[true, false, false, true]];
        let Ok(bitmap) = Bitmap::from_frames(layout, &frames) else {
            panic!("frames should fit the layout");
        };

        let clipped = Pattern::new(bitmap.clone()).with_offset(Offset::new(1, 0));
        let slot = AnimationSlot::Pattern(PatternAnimation::new(clipped));
        let mut section_clipped = section(2, 2, &[RED, GREEN], Animation::from_slot(slot));
        section_clipped.update(Instant::from_millis(0));
        assert_eq!(colors(&section_clipped), vec![BLACK, GREEN, BLACK, BLACK]);

        let wrapped = Pattern::new(bitmap)
            .with_offset(Offset::new(1, 0))
            .with_repeat(true);
        let slot = AnimationSlot::Pattern(PatternAnimation::new(wrapped));
        let mut section_wrapped = section(2, 2, &[RED, GREEN], Animation::from_slot(slot));
        section_wrapped.update(Instant::from_millis(0));
        assert_eq!(colors(&section_wrapped), vec![BLACK, GREEN, RED, BLACK]);
    }

    #[test]
    fn test_pattern_without_bitmap_is_black() {
        let mut section = section(1, 2, &[RED], Animation::new(AnimationType::Pattern));
        section.update(Instant::from_millis(0));
        assert_eq!(colors(&section), vec![BLACK, BLACK]);
    }
}
