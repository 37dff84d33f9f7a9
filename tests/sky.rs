mod tests {
    use embassy_time::Duration;
    use starfield::color::Rgb;
    use starfield::{FadeMode, SaturationPolicy, Sky, SplitMix64, TwinkleConfig};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn test_config() -> TwinkleConfig {
        TwinkleConfig {
            fade: FadeMode::Smooth,
            saturation: SaturationPolicy::Vivid,
            lifetime_min: Duration::from_millis(10),
            lifetime_max: Duration::from_millis(20),
            ignition_jitter: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_empty_sky() {
        let sky = Sky::<0>::new(test_config(), SplitMix64::new(1));
        assert_eq!(sky.len(), 0);
        assert!(sky.is_empty());

        let mut frame: [Rgb; 0] = [];
        sky.compose(&mut frame);
    }

    #[test]
    fn test_single_star_sky() {
        let sky = Sky::<1>::new(test_config(), SplitMix64::new(2));
        let mut frame = [BLACK; 1];
        sky.compose(&mut frame);
        assert_eq!(frame, [BLACK]);

        sky.star(0).ignite();
        sky.compose(&mut frame);
        assert_ne!(frame[0], BLACK);
    }

    #[test]
    fn test_compose_is_stable_without_star_progress() {
        let sky = Sky::<4>::new(test_config(), SplitMix64::new(3));
        sky.star(0).ignite();
        sky.star(2).ignite();

        let mut first = [BLACK; 4];
        let mut second = [BLACK; 4];
        sky.compose(&mut first);
        sky.compose(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_preserves_index_order() {
        let sky = Sky::<3>::new(test_config(), SplitMix64::new(4));
        sky.star(1).ignite();

        let mut frame = [BLACK; 3];
        sky.compose(&mut frame);
        assert_eq!(frame[0], BLACK);
        assert_ne!(frame[1], BLACK);
        assert_eq!(frame[2], BLACK);
    }

    #[test]
    fn test_stars_get_independent_streams() {
        let sky = Sky::<2>::new(test_config(), SplitMix64::new(5));
        sky.star(0).ignite();
        sky.star(1).ignite();
        assert_ne!(sky.star(0).color(), sky.star(1).color());
    }
}
