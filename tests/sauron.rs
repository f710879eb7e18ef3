mod tests {
    use status_ring_engine::color::Argb;
    use status_ring_engine::effect::{MAX_INTENSITY, SauronEffect, SauronMode};

    const RING: usize = 36;
    const PIXELS: usize = 12;

    // All-zero blaze and fire envelopes silence the random jitter, so the
    // spot arithmetic is exact: channel = base * intensity / 100.
    fn envelopes() -> (Vec<Argb>, Vec<Argb>, Vec<Argb>) {
        let iris = vec![Argb::new(255, 200, 12, 0); RING];
        let blaze = vec![Argb::new(255, 0, 0, 0); RING];
        let fire = vec![Argb::new(255, 0, 0, 0); RING];
        (iris, blaze, fire)
    }

    fn full_eye() -> (SauronEffect, Vec<Argb>, Vec<Argb>, Vec<Argb>) {
        let (iris, blaze, fire) = envelopes();
        let mut eye = SauronEffect::new(RING, PIXELS, 99);
        let mut frame = [Argb::BLACK; PIXELS];
        for _ in 0..20 {
            eye.step(&iris, &blaze, &fire, &mut frame);
        }
        assert_eq!(eye.intensity(), MAX_INTENSITY);
        (eye, iris, blaze, fire)
    }

    #[test]
    fn test_appear_ramps_up_then_idle_holds() {
        let (iris, blaze, fire) = envelopes();
        let mut eye = SauronEffect::new(RING, PIXELS, 99);
        let mut frame = [Argb::BLACK; PIXELS];

        assert_eq!(eye.mode(), SauronMode::Appear);
        let mut last = 0;
        for _ in 0..20 {
            eye.step(&iris, &blaze, &fire, &mut frame);
            let lit = i32::from(frame[0].r);
            assert!(lit >= last, "appear ramp dipped from {last} to {lit}");
            last = lit;
        }
        assert_eq!(eye.mode(), SauronMode::Idle);
        assert_eq!(eye.intensity(), MAX_INTENSITY);
        assert_eq!(frame[0].r, 200);

        // Idle holds the ramped brightness.
        for _ in 0..5 {
            eye.step(&iris, &blaze, &fire, &mut frame);
            assert_eq!(frame[0].r, 200);
        }
    }

    #[test]
    fn test_disappear_fades_to_dark() {
        let (mut eye, iris, blaze, fire) = full_eye();
        let mut frame = [Argb::BLACK; PIXELS];

        eye.set_mode(SauronMode::Disappear);
        for _ in 0..20 {
            eye.step(&iris, &blaze, &fire, &mut frame);
        }
        assert_eq!(eye.intensity(), 0);
        assert!(
            frame.iter().all(|p| p.r == 0 && p.g == 0 && p.b == 0),
            "eye still lit after the disappear ramp"
        );
    }

    #[test]
    fn test_mad_flame_ramps_holds_then_decays() {
        let (mut eye, iris, blaze, fire) = full_eye();
        let mut frame = [Argb::BLACK; PIXELS];
        eye.set_mode(SauronMode::Mad);

        // Ramp: strictly increasing until the cap.
        let mut level = 0;
        let mut ramp_frames = 0;
        while level < 255 {
            eye.step(&iris, &blaze, &fire, &mut frame);
            assert!(eye.flame_level() > level);
            level = eye.flame_level();
            ramp_frames += 1;
            assert!(ramp_frames < 64, "flame never reached the cap");
        }

        // Hold: the cap is kept for a fixed stretch of frames.
        let mut hold_frames = 0;
        while eye.flame_level() == 255 {
            eye.step(&iris, &blaze, &fire, &mut frame);
            hold_frames += 1;
            assert!(hold_frames < 128, "flame never started decaying");
        }
        assert!(hold_frames >= 50, "flame held for only {hold_frames} frames");

        // Decay: monotone back to zero.
        let mut level = eye.flame_level();
        while level > 0 {
            eye.step(&iris, &blaze, &fire, &mut frame);
            assert!(eye.flame_level() < level);
            level = eye.flame_level();
        }
    }

    #[test]
    fn test_reentering_mad_restarts_the_flame_cycle() {
        let (mut eye, iris, blaze, fire) = full_eye();
        let mut frame = [Argb::BLACK; PIXELS];

        eye.set_mode(SauronMode::Mad);
        for _ in 0..15 {
            eye.step(&iris, &blaze, &fire, &mut frame);
        }
        assert_eq!(eye.flame_level(), 255);

        eye.set_mode(SauronMode::Idle);
        eye.set_mode(SauronMode::Mad);
        assert_eq!(eye.flame_level(), 0);
    }
}
