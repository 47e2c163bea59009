mod tests {
    use myrtio_light_maestro::math8::{blend8, progress8, scale8, scale8_floor, steps_for};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_floor() {
        assert_eq!(scale8_floor(200, 128), 100);
        assert_eq!(scale8_floor(100, 128), 50);
        assert_eq!(scale8_floor(50, 128), 25);
        assert_eq!(scale8_floor(77, 255), 77);
        assert_eq!(scale8_floor(77, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
        assert_eq!(blend8(255, 0, 255), 0);
    }

    #[test]
    fn test_progress8() {
        assert_eq!(progress8(0, 100), 0);
        assert_eq!(progress8(50, 100), 127);
        assert_eq!(progress8(100, 100), 255);
        assert_eq!(progress8(150, 100), 255);
        assert_eq!(progress8(3, 0), 0);
    }

    #[test]
    fn test_steps_for_rounds_up() {
        assert_eq!(steps_for(100, 20), 5);
        assert_eq!(steps_for(110, 20), 6);
        assert_eq!(steps_for(10, 20), 1);
    }

    #[test]
    fn test_steps_for_zero_snaps() {
        assert_eq!(steps_for(0, 20), 1);
        assert_eq!(steps_for(100, 0), 1);
    }
}
