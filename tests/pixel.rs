mod tests {
    use embassy_time::Duration;
    use myrtio_light_maestro::Pixel;
    use myrtio_light_maestro::color::{BLACK, RED, WHITE};

    #[test]
    fn test_pixel_starts_black() {
        let pixel = Pixel::default();
        assert_eq!(pixel.color(), BLACK);
        assert!(!pixel.is_fading());
    }

    #[test]
    fn test_fade_converges_after_ceil_steps() {
        let mut pixel = Pixel::default();
        pixel.set_next_color(WHITE, true, Duration::from_millis(110), Duration::from_millis(20));
        assert_eq!(pixel.next_color(), WHITE);

        let mut previous = pixel.color();
        for _ in 0..5 {
            pixel.update();
            let color = pixel.color();
            assert!(color.r >= previous.r);
            assert_ne!(color, WHITE);
            previous = color;
        }

        pixel.update();
        assert_eq!(pixel.color(), WHITE);
        assert!(!pixel.is_fading());

        pixel.update();
        assert_eq!(pixel.color(), WHITE);
    }

    #[test]
    fn test_fade_down_is_monotone() {
        let mut pixel = Pixel::new(WHITE);
        pixel.set_next_color(BLACK, true, Duration::from_millis(100), Duration::from_millis(10));

        let mut previous = pixel.color();
        for _ in 0..10 {
            pixel.update();
            assert!(pixel.color().g <= previous.g);
            previous = pixel.color();
        }
        assert_eq!(pixel.color(), BLACK);
    }

    #[test]
    fn test_no_fade_snaps_on_next_update() {
        let mut pixel = Pixel::default();
        pixel.set_next_color(RED, false, Duration::from_millis(100), Duration::from_millis(20));
        assert_eq!(pixel.color(), BLACK);

        pixel.update();
        assert_eq!(pixel.color(), RED);
    }

    #[test]
    fn test_zero_interval_snaps() {
        let mut pixel = Pixel::default();
        pixel.set_next_color(RED, true, Duration::from_millis(100), Duration::from_millis(0));
        pixel.update();
        assert_eq!(pixel.color(), RED);
    }

    #[test]
    fn test_retarget_continues_from_intermediate_color() {
        let mut pixel = Pixel::default();
        pixel.set_next_color(WHITE, true, Duration::from_millis(40), Duration::from_millis(10));
        pixel.update();
        pixel.update();
        let midway = pixel.color();
        assert!(midway.r > 0 && midway.r < 255);

        pixel.set_next_color(BLACK, true, Duration::from_millis(20), Duration::from_millis(10));
        pixel.update();
        assert!(pixel.color().r < midway.r);
        assert!(pixel.color().r > 0);
        pixel.update();
        assert_eq!(pixel.color(), BLACK);
    }

    #[test]
    fn test_set_color_is_immediate() {
        let mut pixel = Pixel::default();
        pixel.set_next_color(WHITE, true, Duration::from_millis(100), Duration::from_millis(10));
        pixel.update();
        pixel.set_color(RED);
        assert_eq!(pixel.color(), RED);
        assert!(!pixel.is_fading());
    }
}
