mod tests {
    use status_ring_engine::bounds::BoundedInt;
    use status_ring_engine::color::Argb;
    use status_ring_engine::effect::{PulseEffect, RotateEffect, step_delta};

    fn numbered_template(len: usize) -> Vec<Argb> {
        (0..len)
            .map(|i| Argb::new(0xFF, i as u8, (i * 2) as u8, 0))
            .collect()
    }

    #[test]
    fn test_rotate_full_cycle_returns_to_start() {
        let template = numbered_template(36);
        let mut rotate = RotateEffect::new(36, 12);
        let mut frame = [Argb::BLACK; 12];

        assert_eq!(rotate.delta(), 3);
        for _ in 0..12 {
            rotate.step(&template, &mut frame);
        }
        assert_eq!(rotate.cursor(), 0);
    }

    #[test]
    fn test_rotate_reset_reproduces_first_frame() {
        let template = numbered_template(36);
        let mut rotate = RotateEffect::new(36, 12);
        let mut first = [Argb::BLACK; 12];
        rotate.step(&template, &mut first);

        let mut frame = [Argb::BLACK; 12];
        for _ in 0..5 {
            rotate.step(&template, &mut frame);
        }
        rotate.reset();
        rotate.step(&template, &mut frame);
        assert_eq!(frame, first);
    }

    #[test]
    fn test_rotate_samples_delta_apart() {
        let template = numbered_template(36);
        let mut rotate = RotateEffect::new(36, 12);
        let mut frame = [Argb::BLACK; 12];
        rotate.step(&template, &mut frame);

        for (i, pixel) in frame.iter().enumerate() {
            assert_eq!(*pixel, template[i * 3]);
        }
    }

    #[test]
    fn test_pulse_fills_uniformly_and_walks_template() {
        let template = numbered_template(72);
        let mut pulse = PulseEffect::new(72, 12);
        let mut frame = [Argb::BLACK; 12];

        pulse.step(&template, &mut frame);
        assert!(frame.iter().all(|&p| p == template[0]));

        pulse.step(&template, &mut frame);
        assert!(frame.iter().all(|&p| p == template[6]));
    }

    #[test]
    fn test_pulse_full_cycle_returns_to_start() {
        let template = numbered_template(72);
        let mut pulse = PulseEffect::new(72, 12);
        let mut frame = [Argb::BLACK; 12];

        for _ in 0..12 {
            pulse.step(&template, &mut frame);
        }
        assert_eq!(pulse.cursor(), 0);
    }

    #[test]
    fn test_step_delta_truncates() {
        assert_eq!(step_delta(36, 12), 3);
        assert_eq!(step_delta(37, 12), 3);
        assert_eq!(step_delta(72, 12), 6);
    }

    #[test]
    fn test_bounded_int_wraps_into_range() {
        let mut fixpoint = BoundedInt::new(0, 36);
        assert_eq!(fixpoint.value(), 0);

        assert_eq!(fixpoint.add(40), 4);
        assert_eq!(fixpoint.add(-10), 30);
        assert_eq!(fixpoint.relative_to(7), 1);
        assert_eq!(fixpoint.relative_to(-31), 35);

        fixpoint.set(-1);
        assert_eq!(fixpoint.value(), 35);
    }

    #[test]
    fn test_bounded_int_add_matches_relative_to() {
        let mut fixpoint = BoundedInt::new(0, 36);
        for delta in [-100, -36, -1, 0, 1, 17, 36, 99] {
            let expected = fixpoint.relative_to(delta);
            assert_eq!(fixpoint.add(delta), expected);
        }
    }
}
