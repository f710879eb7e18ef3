mod tests {
    use status_ring_engine::{
        CommandQueue, EngineState, IndicatorCommand, IndicatorConfig, StatusIndicator,
    };

    #[test]
    fn test_queue_drains_in_arrival_order() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let sender = queue.sender();

        sender
            .try_send(IndicatorCommand::SetState(EngineState::Progress))
            .unwrap();
        sender.try_send(IndicatorCommand::Nudge(1)).unwrap();
        sender
            .try_send(IndicatorCommand::SetMaxBrightness(128))
            .unwrap();

        let mut drained = Vec::new();
        queue.drain_into(|command| drained.push(command));
        assert_eq!(drained.len(), 3);
        assert!(matches!(
            drained[0],
            IndicatorCommand::SetState(EngineState::Progress)
        ));
        assert!(matches!(drained[1], IndicatorCommand::Nudge(1)));
        assert!(matches!(drained[2], IndicatorCommand::SetMaxBrightness(128)));

        assert!(queue.try_receive().is_none());
    }

    #[test]
    fn test_queue_rejects_when_full() {
        let queue: CommandQueue<2> = CommandQueue::new();
        queue.try_send(IndicatorCommand::ClearProfile).unwrap();
        queue.try_send(IndicatorCommand::ClearProfile).unwrap();

        assert!(queue.try_send(IndicatorCommand::Nudge(3)).is_err());
    }

    #[test]
    fn test_commands_collapse_to_last_state_within_a_tick() {
        let queue: CommandQueue<8> = CommandQueue::new();
        queue
            .try_send(IndicatorCommand::SetState(EngineState::Bad))
            .unwrap();
        queue
            .try_send(IndicatorCommand::SetState(EngineState::Stable))
            .unwrap();

        let mut indicator =
            StatusIndicator::<16, 128>::new(&IndicatorConfig::default()).unwrap();
        queue.drain_into(|command| {
            indicator.apply(command).unwrap();
        });
        indicator.advance_frame();
        assert_eq!(indicator.state(), EngineState::Stable);
    }
}
