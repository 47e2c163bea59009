mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_light_maestro::animation::{Animation, AnimationType};
    use myrtio_light_maestro::color::{BLACK, BLUE, GREEN, RED, Rgb};
    use myrtio_light_maestro::{
        Action, Event, Layout, Maestro, MaestroConfig, MixMode, SectionId, Section, Show, TimingMode,
    };

    fn solid(colors: &[Rgb]) -> Section {
        Section::new(Layout::new(1, 1))
            .with_colors(colors)
            .with_animation(Animation::new(AnimationType::Solid).with_fade(false))
    }

    fn cycling(colors: &[Rgb], speed_ms: u64) -> Section {
        Section::new(Layout::new(1, 1)).with_colors(colors).with_animation(
            Animation::new(AnimationType::Cycle)
                .with_speed(Duration::from_millis(speed_ms), Duration::from_millis(0))
                .with_fade(false),
        )
    }

    #[test]
    fn test_brightness_scales_output() {
        let mut maestro: Maestro = Maestro::default().with_sections(vec![solid(&[Rgb::new(200, 100, 50)])]);
        maestro.set_brightness(128);
        maestro.update(Instant::from_millis(0));
        assert_eq!(maestro.get_pixel_color(0, 0), Rgb::new(100, 50, 25));

        maestro.set_brightness(0);
        assert_eq!(maestro.get_pixel_color(0, 0), BLACK);

        maestro.set_brightness(255);
        assert_eq!(maestro.get_pixel_color(0, 0), Rgb::new(200, 100, 50));
    }

    #[test]
    fn test_stopped_maestro_does_nothing() {
        let config = MaestroConfig {
            running: false,
            ..MaestroConfig::default()
        };
        let mut maestro: Maestro = Maestro::new(&config).with_sections(vec![solid(&[RED])]);
        maestro.update(Instant::from_millis(0));
        assert_eq!(maestro.get_pixel_color(0, 0), BLACK);

        maestro.toggle_running();
        assert!(maestro.is_running());
        maestro.update(Instant::from_millis(10));
        assert_eq!(maestro.get_pixel_color(0, 0), RED);
    }

    #[test]
    fn test_refresh_interval_gates_sections() {
        let mut maestro: Maestro = Maestro::default().with_sections(vec![cycling(&[RED, GREEN], 10)]);
        maestro.update(Instant::from_millis(0));
        assert_eq!(maestro.get_pixel_color(0, 0), RED);

        maestro.update(Instant::from_millis(10));
        assert_eq!(maestro.get_pixel_color(0, 0), RED);

        maestro.update(Instant::from_millis(20));
        assert_eq!(maestro.get_pixel_color(0, 0), GREEN);
    }

    #[test]
    fn test_refresh_interval_is_shared() {
        let mut overridden = solid(&[RED]);
        overridden.set_refresh_interval(Duration::from_millis(5));
        let mut followed = solid(&[RED]);
        followed.add_overlay(MixMode::Alpha, 255);

        let mut maestro: Maestro = Maestro::default().with_sections(vec![followed, overridden]);
        maestro.set_refresh_interval(Duration::from_millis(50));

        assert_eq!(maestro.refresh_interval(), Duration::from_millis(50));
        let followed = maestro.section(0).map(Section::refresh_interval);
        assert_eq!(followed, Some(Duration::from_millis(50)));
        let overlay = maestro
            .section(0)
            .and_then(Section::overlay)
            .map(|overlay| overlay.section().refresh_interval());
        assert_eq!(overlay, Some(Duration::from_millis(50)));
        let overridden = maestro.section(1).map(Section::refresh_interval);
        assert_eq!(overridden, Some(Duration::from_millis(5)));

        let index = maestro.add_section(solid(&[BLUE]));
        assert_eq!(index, 2);
        assert_eq!(maestro.num_sections(), 3);
        let added = maestro.section(2).map(Section::refresh_interval);
        assert_eq!(added, Some(Duration::from_millis(50)));
    }

    fn overlay_interval(maestro: &Maestro, index: usize) -> Option<Duration> {
        maestro
            .section(index)
            .and_then(Section::overlay)
            .map(|overlay| overlay.section().refresh_interval())
    }

    #[test]
    fn test_overlay_refresh_override_survives_binding() {
        let mut parent = solid(&[RED]);
        parent
            .add_overlay(MixMode::Alpha, 255)
            .section_mut()
            .set_refresh_interval(Duration::from_millis(500));

        let mut maestro: Maestro = Maestro::default();
        let index = maestro.add_section(parent);
        assert_eq!(
            maestro.section(index).map(Section::refresh_interval),
            Some(Duration::from_millis(20))
        );
        assert_eq!(overlay_interval(&maestro, index), Some(Duration::from_millis(500)));

        maestro.set_refresh_interval(Duration::from_millis(50));
        assert_eq!(
            maestro.section(index).map(Section::refresh_interval),
            Some(Duration::from_millis(50))
        );
        assert_eq!(overlay_interval(&maestro, index), Some(Duration::from_millis(500)));

        // Without its override the overlay follows the Maestro again
        if let Some(overlay) = maestro.section_mut(index).and_then(Section::overlay_mut) {
            overlay.section_mut().clear_refresh_interval();
        }
        assert_eq!(overlay_interval(&maestro, index), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_parent_override_reaches_overlay_across_rebinding() {
        let mut parent = solid(&[RED]);
        parent.add_overlay(MixMode::Alpha, 255);
        parent.set_refresh_interval(Duration::from_millis(100));
        parent.set_refresh_interval(Duration::from_millis(200));
        assert_eq!(
            parent.overlay().map(|overlay| overlay.section().refresh_interval()),
            Some(Duration::from_millis(200))
        );
        assert!(parent.overlay().is_some_and(|overlay| !overlay.section().has_refresh_override()));

        let mut maestro: Maestro = Maestro::default().with_sections(vec![parent]);
        maestro.set_refresh_interval(Duration::from_millis(50));
        assert_eq!(overlay_interval(&maestro, 0), Some(Duration::from_millis(200)));

        if let Some(parent) = maestro.section_mut(0) {
            parent.clear_refresh_interval();
        }
        assert_eq!(
            maestro.section(0).map(Section::refresh_interval),
            Some(Duration::from_millis(50))
        );
        assert_eq!(overlay_interval(&maestro, 0), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_show_fires_before_sections_update() {
        let mut maestro: Maestro = Maestro::default().with_sections(vec![solid(&[RED])]);
        let events = [Event::new(
            100,
            Action::SetColors {
                section: SectionId::new(0),
                colors: vec![BLUE],
            },
        )];
        let Ok(show) = <Show>::from_events(TimingMode::Absolute, events) else {
            panic!("show should fit");
        };
        maestro.set_show(show);

        maestro.update(Instant::from_millis(0));
        assert_eq!(maestro.get_pixel_color(0, 0), RED);

        maestro.update(Instant::from_millis(100));
        assert_eq!(maestro.get_pixel_color(0, 0), BLUE);
        assert_eq!(maestro.show().map(Show::is_finished), Some(true));

        assert!(maestro.remove_show().is_some());
        assert!(maestro.show().is_none());
    }

    #[test]
    fn test_show_can_stop_the_maestro() {
        let mut maestro: Maestro = Maestro::default().with_sections(vec![cycling(&[RED, GREEN], 20)]);
        let events = [Event::new(40, Action::ToggleRunning)];
        let Ok(show) = <Show>::from_events(TimingMode::Absolute, events) else {
            panic!("show should fit");
        };
        maestro.set_show(show);

        maestro.update(Instant::from_millis(0));
        maestro.update(Instant::from_millis(20));
        assert_eq!(maestro.get_pixel_color(0, 0), GREEN);

        maestro.update(Instant::from_millis(40));
        assert!(!maestro.is_running());

        maestro.update(Instant::from_millis(60));
        assert!(!maestro.is_running());
    }

    #[test]
    fn test_apply_global_actions() {
        let mut maestro: Maestro = Maestro::default();
        maestro.apply(&Action::SetBrightness(42));
        assert_eq!(maestro.brightness(), 42);

        maestro.apply(&Action::SetRunning(false));
        assert!(!maestro.is_running());

        maestro.apply(&Action::SetRefreshInterval(Duration::from_millis(33)));
        assert_eq!(maestro.refresh_interval(), Duration::from_millis(33));
    }

    #[test]
    fn test_missing_targets_are_ignored() {
        let mut maestro: Maestro = Maestro::default().with_sections(vec![solid(&[RED])]);
        maestro.apply(&Action::SetCycleIndex {
            section: SectionId::new(7),
            index: 1,
        });
        maestro.apply(&Action::SetOverlayAlpha {
            section: SectionId::new(0),
            alpha: 10,
        });
        maestro.apply(&Action::CanvasClear {
            section: SectionId::new(0).overlay(2),
        });
        assert_eq!(maestro.get_pixel_color(3, 0), BLACK);
        assert_eq!(maestro.get_pixel_color(0, 9), BLACK);
    }

    #[test]
    fn test_render_into_concatenates_sections() {
        let mut maestro: Maestro = Maestro::default().with_sections(vec![solid(&[RED]), solid(&[GREEN])]);
        maestro.update(Instant::from_millis(0));
        assert_eq!(maestro.total_pixels(), 2);

        let mut frame = [BLACK; 3];
        assert_eq!(maestro.render_into(&mut frame), 2);
        assert_eq!(frame, [RED, GREEN, BLACK]);
    }
}
