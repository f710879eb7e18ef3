mod tests {
    use status_ring_engine::{
        CommandQueue, EngineState, FrameScheduler, IndicatorCommand, IndicatorConfig, Instant,
        OutputDriver, Rgb, StatusIndicator,
    };

    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for &mut RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn indicator() -> StatusIndicator<16, 128> {
        StatusIndicator::new(&IndicatorConfig::default()).unwrap()
    }

    #[test]
    fn test_tick_writes_one_frame_and_paces() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let mut driver = RecordingDriver { frames: Vec::new() };
        let mut scheduler = FrameScheduler::new(indicator(), &queue, &mut driver);

        let result = scheduler.tick(Instant::from_millis(0));
        assert!(result.sleep_duration.as_millis() <= 40);

        assert_eq!(driver.frames.len(), 1);
        assert_eq!(driver.frames[0].len(), 12);
    }

    #[test]
    fn test_tick_applies_pending_commands_before_rendering() {
        let queue: CommandQueue<4> = CommandQueue::new();
        queue
            .try_send(IndicatorCommand::SetState(EngineState::Progress))
            .unwrap();

        let mut driver = RecordingDriver { frames: Vec::new() };
        let mut scheduler = FrameScheduler::new(indicator(), &queue, &mut driver);
        scheduler.tick(Instant::from_millis(0));

        assert_eq!(scheduler.indicator().state(), EngineState::Progress);
    }

    #[test]
    fn test_scheduler_resets_after_long_stall() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let mut driver = RecordingDriver { frames: Vec::new() };
        let mut scheduler = FrameScheduler::new(indicator(), &queue, &mut driver);

        scheduler.tick(Instant::from_millis(0));
        // A stall far past the drift window must not cause a catch-up burst.
        let result = scheduler.tick(Instant::from_millis(10_000));
        assert_eq!(
            result.next_deadline.as_millis(),
            10_000 + 40,
            "deadline should restart from the stalled instant"
        );
    }
}
