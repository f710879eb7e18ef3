mod tests {
    use status_ring_engine::waveform::fill_gaussian_pulse;

    #[test]
    fn test_pulse_peaks_at_midpoint() {
        let mut samples = [0u8; 10];
        fill_gaussian_pulse(&mut samples, 3, 63);

        assert_eq!(samples[5], 255);
        assert_eq!(*samples.iter().max().unwrap(), 255);
    }

    #[test]
    fn test_pulse_bounded_below_by_offset() {
        for offset in [0u8, 10, 63, 200] {
            let mut samples = [0u8; 24];
            fill_gaussian_pulse(&mut samples, 10, offset);
            assert!(samples.iter().all(|&v| v >= offset));
        }
    }

    #[test]
    fn test_pulse_symmetric_for_even_length() {
        let mut samples = [0u8; 10];
        fill_gaussian_pulse(&mut samples, 3, 0);

        let half = samples.len() / 2;
        for i in 1..half {
            assert_eq!(samples[half - i], samples[half + i]);
        }
    }

    #[test]
    fn test_pulse_deterministic() {
        let mut first = [0u8; 36];
        let mut second = [0u8; 36];
        fill_gaussian_pulse(&mut first, 4, 20);
        fill_gaussian_pulse(&mut second, 4, 20);
        assert_eq!(first, second);
    }
}
