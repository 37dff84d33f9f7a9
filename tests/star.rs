mod tests {
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_time::{Duration, Timer};
    use starfield::color::Rgb;
    use starfield::{FadeMode, SaturationPolicy, Shutdown, Star, TwinkleConfig};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn test_config(fade: FadeMode) -> TwinkleConfig {
        TwinkleConfig {
            fade,
            saturation: SaturationPolicy::Vivid,
            lifetime_min: Duration::from_millis(10),
            lifetime_max: Duration::from_millis(20),
            ignition_jitter: Duration::from_millis(1),
        }
    }

    fn brightness(color: Rgb) -> u8 {
        color.r.max(color.g).max(color.b)
    }

    #[test]
    fn test_starts_dark() {
        let star = Star::new(test_config(FadeMode::Smooth), 1);
        assert_eq!(star.color(), BLACK);
    }

    #[test]
    fn test_ignite_reaches_full_value() {
        let star = Star::new(test_config(FadeMode::Smooth), 2);
        star.ignite();
        // value 1.0 means the strongest channel saturates
        assert_eq!(brightness(star.color()), 255);
    }

    #[test]
    fn test_first_tick_ignites_immediately() {
        let config = test_config(FadeMode::Smooth);
        let star = Star::new(config, 3);
        let sleep = star.tick();
        assert_ne!(star.color(), BLACK);
        // smooth mode paces at lifetime / 100
        assert!(sleep >= Duration::from_micros(100), "sleep {sleep:?}");
        assert!(sleep <= Duration::from_micros(200), "sleep {sleep:?}");
    }

    #[test]
    fn test_binary_tick_sleeps_full_lifetime() {
        let config = test_config(FadeMode::Binary);
        let star = Star::new(config, 4);
        for _ in 0..10 {
            let sleep = star.tick();
            assert!(sleep >= config.lifetime_min, "sleep {sleep:?}");
            assert!(sleep <= config.lifetime_max, "sleep {sleep:?}");
            // binary stars hold full brightness across their whole lifetime
            assert_eq!(brightness(star.color()), 255);
        }
    }

    #[test]
    fn test_smooth_fade_decays_and_reignites() {
        let star = Star::new(test_config(FadeMode::Smooth), 5);
        star.tick();
        assert_eq!(brightness(star.color()), 255);

        let mut dimmed = false;
        let mut reignited = false;
        for _ in 0..150 {
            star.tick();
            let level = brightness(star.color());
            if level < 130 {
                dimmed = true;
            }
            if dimmed && level == 255 {
                reignited = true;
                break;
            }
        }
        assert!(dimmed, "star never faded below half brightness");
        assert!(reignited, "star never re-ignited after fading out");
    }

    #[test]
    fn test_equal_seeds_produce_equal_sequences() {
        let a = Star::new(test_config(FadeMode::Smooth), 42);
        let b = Star::new(test_config(FadeMode::Smooth), 42);
        for _ in 0..50 {
            assert_eq!(a.tick(), b.tick());
            assert_eq!(a.color(), b.color());
        }
    }

    #[test]
    fn test_run_ignites_and_darkens_on_shutdown() {
        let star = Star::new(test_config(FadeMode::Smooth), 7);
        let shutdown = Shutdown::new();

        block_on(join(star.run(&shutdown), async {
            let mut lit = false;
            for _ in 0..500 {
                Timer::after(Duration::from_millis(1)).await;
                if star.color() != BLACK {
                    lit = true;
                    break;
                }
            }
            assert!(lit, "star never ignited while running");
            shutdown.request();
        }));

        assert_eq!(star.color(), BLACK);
        block_on(shutdown.wait_idle());
    }
}
